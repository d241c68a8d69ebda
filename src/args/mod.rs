//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "note-rewriter", version)]
#[command(about = "Rewrite technician work-order notes with an LLM", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: ~/.config/note-rewriter/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the provider model identifier
    #[arg(long, global = true, value_name = "ID")]
    pub model: Option<String>,

    /// Override the provider base URL
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Rewrite notes once and print the result (no TUI)
    Rewrite {
        /// File with the notes; `-` or omitted reads stdin
        input: Option<PathBuf>,

        /// Also copy the result to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Print the system prompt that will be sent to the provider
    Prompt,
}

impl Cli {
    /// Load the config file, then apply command-line overrides and validate.
    pub fn load_config(&self) -> Result<Config, crate::config::ConfigError> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        let config = self.apply_overrides(config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(model) = &self.model {
            config.provider.model = model.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.provider.base_url = base_url.clone();
        }
        config
    }
}
