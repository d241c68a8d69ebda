//! Intents for the Note Rewriter.

use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the Note Rewriter.
#[derive(Debug, Clone, PartialEq)]
pub enum RewriterIntent {
    /// Insert a character at the cursor.
    InsertChar(char),

    /// Insert pasted text at the cursor.
    InsertText(String),

    /// Delete the character before the cursor.
    Backspace,

    /// Delete the character under the cursor.
    Delete,

    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    /// Scroll the output panel by `lines` (negative scrolls up).
    ScrollOutput(i16),

    /// User triggered a rewrite.
    Submit,

    /// The provider call for `token` finished.
    RewriteFinished {
        /// Token issued by the `Submit` that started the call.
        token: u64,
        /// Provider text, or the message to show in the error slot.
        result: Result<String, String>,
    },

    /// The cooldown timer started at `epoch` fired.
    CooldownElapsed { epoch: u64 },

    /// Output was written to the clipboard.
    CopySucceeded,

    /// Writing to the clipboard failed.
    CopyFailed,

    /// The "Copied" timer started at `epoch` fired.
    CopiedElapsed { epoch: u64 },

    /// Clear the form.
    Reset,
}

impl Intent for RewriterIntent {}
