//! Text-transformation provider.
//!
//! The rest of the crate talks to the provider through [`RewriteProvider`].
//! [`ChatCompletionsClient`] is the production implementation for
//! OpenAI-compatible chat-completion endpoints (OpenRouter by default).

mod client;
mod error;
mod prompt;
mod traits;

pub use client::ChatCompletionsClient;
pub use error::{RewriteError, PROCESSING_FAILED, UNEXPECTED_FAILURE};
pub use prompt::DEFAULT_SYSTEM_PROMPT;
pub use traits::RewriteProvider;
