use thiserror::Error;

/// The single user-visible error slot of the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriterError {
    /// Submit with empty or whitespace-only notes.
    #[error("Please enter some technician notes first.")]
    NotesRequired,

    /// Submit while the post-success cooldown is active.
    #[error("Please wait a moment before submitting another request.")]
    CoolingDown,

    /// The provider call failed; carries the generic message to show.
    #[error("{0}")]
    RequestFailed(String),

    /// Writing to the system clipboard failed.
    #[error("Failed to copy to clipboard")]
    Clipboard,
}
