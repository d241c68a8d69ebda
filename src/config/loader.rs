use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },

    #[error("Failed to read system prompt '{path}': {source}")]
    PromptReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/note-rewriter/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("note-rewriter").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::info!(
            path = %path.display(),
            model = %config.provider.model,
            "Loaded config"
        );
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The model identifier is not empty
    /// - The base URL is an http(s) URL
    /// - Header values contain no line breaks
    pub fn validate(&self) -> Result<(), ConfigError> {
        let provider = &self.provider;

        if provider.model.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "provider.model must not be empty".to_string(),
            });
        }

        let base_url = provider.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "provider.base_url '{}' must start with http:// or https://",
                    provider.base_url
                ),
            });
        }

        for (field, value) in [("referer", &provider.referer), ("title", &provider.title)] {
            if value.contains(['\r', '\n']) {
                return Err(ConfigError::ValidationError {
                    message: format!("provider.{} must be a single line", field),
                });
            }
        }

        Ok(())
    }

    /// The system prompt in effect: the configured file, or the built-in prompt.
    pub fn system_prompt(&self) -> Result<String, ConfigError> {
        match &self.rewriter.system_prompt_file {
            Some(path) => {
                let prompt = fs::read_to_string(path).map_err(|e| ConfigError::PromptReadError {
                    path: path.clone(),
                    source: e,
                })?;
                if prompt.trim().is_empty() {
                    return Err(ConfigError::ValidationError {
                        message: format!("system prompt file '{}' is empty", path.display()),
                    });
                }
                Ok(prompt)
            }
            None => Ok(crate::provider::DEFAULT_SYSTEM_PROMPT.to_string()),
        }
    }
}
