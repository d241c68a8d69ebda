//! Error types for provider calls.

use thiserror::Error;

/// Shown for any failed exchange with the provider.
pub const PROCESSING_FAILED: &str = "Failed to process notes. Please try again.";

/// Shown when the request could not be attempted or its task died.
pub const UNEXPECTED_FAILURE: &str = "An unexpected error occurred.";

/// Errors that can occur while rewriting notes through a provider.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// No API key was resolved at startup.
    #[error("API key is not configured")]
    NotConfigured,

    /// The provider answered with a non-success status.
    #[error("Provider returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// A success response did not have the expected shape.
    #[error("Failed to parse provider response: {0}")]
    Parse(String),

    /// Connection, TLS, timeout or body read failure.
    #[error("Request to provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The task running the request panicked or was cancelled.
    #[error("Rewrite task ended unexpectedly: {0}")]
    Aborted(String),
}

impl RewriteError {
    /// The message placed in the form's error slot.
    ///
    /// Details stay in the log; the form only distinguishes "the provider
    /// exchange failed" from "something unexpected happened".
    pub fn user_message(&self) -> &'static str {
        match self {
            RewriteError::Status { .. } | RewriteError::Parse(_) | RewriteError::Transport(_) => {
                PROCESSING_FAILED
            }
            RewriteError::NotConfigured | RewriteError::Aborted(_) => UNEXPECTED_FAILURE,
        }
    }
}
