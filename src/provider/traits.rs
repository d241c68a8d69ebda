//! Core trait for note rewriting providers.

use async_trait::async_trait;

use super::error::RewriteError;

/// A service that rewrites raw technician notes.
///
/// Implementations make exactly one attempt per call. Retrying, rate
/// limiting and stale-response handling belong to the caller.
#[async_trait]
pub trait RewriteProvider: Send + Sync {
    /// Returns a short label for logging and the header bar.
    fn name(&self) -> &str;

    /// Rewrite `notes`, returning the provider's text verbatim.
    async fn rewrite(&self, notes: &str) -> Result<String, RewriteError>;
}
