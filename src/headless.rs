//! One-shot rewrite for scripts and pipelines.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::clipboard::{ClipboardError, ClipboardWriter};
use crate::provider::{RewriteError, RewriteProvider};

#[derive(Debug, Error)]
pub enum HeadlessError {
    #[error("Please enter some technician notes first.")]
    NotesRequired,

    #[error("Failed to read notes from '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Rewrite(#[from] RewriteError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Read notes from `input`, or stdin when it is `None` or `-`.
pub fn read_notes(input: Option<&Path>) -> Result<String, HeadlessError> {
    match input {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|source| HeadlessError::Io {
                path: path.display().to_string(),
                source,
            })
        }
        _ => {
            let mut notes = String::new();
            std::io::stdin()
                .read_to_string(&mut notes)
                .map_err(|source| HeadlessError::Io {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(notes)
        }
    }
}

/// Validate and rewrite `notes` with a single provider call.
///
/// Whitespace-only notes are rejected without contacting the provider.
pub async fn rewrite_once(
    provider: &dyn RewriteProvider,
    notes: &str,
) -> Result<String, HeadlessError> {
    if notes.trim().is_empty() {
        return Err(HeadlessError::NotesRequired);
    }
    Ok(provider.rewrite(notes).await?)
}

/// Rewrite, then optionally put the result on `clipboard`.
pub async fn run(
    provider: &dyn RewriteProvider,
    notes: &str,
    clipboard: Option<&mut dyn ClipboardWriter>,
) -> Result<String, HeadlessError> {
    let output = rewrite_once(provider, notes).await?;
    if let Some(clipboard) = clipboard {
        clipboard.write_text(&output)?;
    }
    Ok(output)
}
