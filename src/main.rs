use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use note_rewriter::args::{Cli, Commands};
use note_rewriter::clipboard::{ClipboardWriter, SystemClipboard};
use note_rewriter::config::CredentialStatus;
use note_rewriter::headless;
use note_rewriter::logging::init_tracing;
use note_rewriter::provider::{ChatCompletionsClient, RewriteProvider};
use note_rewriter::rewriter::RewriterTimings;
use note_rewriter::ui;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.load_config().context("Failed to load configuration")?;
    let system_prompt = config
        .system_prompt()
        .context("Failed to load system prompt")?;

    if cli.command == Some(Commands::Prompt) {
        println!("{}", system_prompt);
        return Ok(());
    }

    let credential = config.provider.resolve_credential();
    if let CredentialStatus::Unconfigured { reason } = &credential {
        tracing::warn!(reason = %reason, "Provider credentials not configured");
    }
    let api_key = credential.into_key();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let client = ChatCompletionsClient::new(config.provider.clone(), api_key, system_prompt)
        .context("Failed to build HTTP client")?;
    tracing::info!(
        model = %client.model(),
        configured = client.is_configured(),
        "Provider ready"
    );
    let provider: Arc<dyn RewriteProvider> = Arc::new(client);

    match cli.command {
        Some(Commands::Rewrite { input, copy }) => {
            let notes = headless::read_notes(input.as_deref())?;
            let mut clipboard = SystemClipboard::new();
            let clipboard: Option<&mut dyn ClipboardWriter> =
                if copy { Some(&mut clipboard) } else { None };
            let output = runtime.block_on(headless::run(provider.as_ref(), &notes, clipboard))?;
            println!("{}", output);
        }
        Some(Commands::Prompt) => {}
        None => {
            let timings = RewriterTimings::from(&config.rewriter);
            ui::runtime::run(provider, timings, runtime.handle().clone())
                .context("Terminal UI failed")?;
        }
    }

    Ok(())
}
