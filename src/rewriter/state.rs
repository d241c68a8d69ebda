//! State for the Note Rewriter form.

use crate::ui::mvi::UiState;

use super::error::RewriterError;

/// Everything the form renders, plus the bookkeeping that keeps async
/// completions and timers from acting on a form that has moved on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RewriterState {
    pub(super) input: String,
    /// Cursor position in chars, `0..=input.chars().count()`.
    pub(super) cursor: usize,
    pub(super) output: String,
    pub(super) output_scroll: u16,
    pub(super) error: Option<RewriterError>,
    /// Token of the request currently in flight.
    pub(super) in_flight: Option<u64>,
    /// Latest issued request token. Bumped by submit and reset.
    pub(super) generation: u64,
    /// Epoch of the active cooldown.
    pub(super) cooldown: Option<u64>,
    /// Epoch of the active "Copied" badge.
    pub(super) copied: Option<u64>,
    pub(super) last_epoch: u64,
}

impl UiState for RewriterState {}

impl RewriterState {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn output_scroll(&self) -> u16 {
        self.output_scroll
    }

    pub fn error(&self) -> Option<&RewriterError> {
        self.error.as_ref()
    }

    /// True while a provider call is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight_token(&self) -> Option<u64> {
        self.in_flight
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_cooling_down(&self) -> bool {
        self.cooldown.is_some()
    }

    pub fn cooldown_epoch(&self) -> Option<u64> {
        self.cooldown
    }

    pub fn is_copied(&self) -> bool {
        self.copied.is_some()
    }

    pub fn copied_epoch(&self) -> Option<u64> {
        self.copied
    }

    /// Whether the rewrite trigger should be shown as enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.is_cooling_down()
    }

    /// Cursor as (line, column) in chars, for placing the terminal cursor.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for ch in self.input.chars().take(self.cursor) {
            if ch == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    /// Byte offset of the cursor within `input`.
    pub(super) fn cursor_byte(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor)
            .map(|(idx, _)| idx)
            .unwrap_or(self.input.len())
    }

    pub(super) fn input_len_chars(&self) -> usize {
        self.input.chars().count()
    }

    pub(super) fn next_epoch(&mut self) -> u64 {
        self.last_epoch = self.last_epoch.wrapping_add(1);
        self.last_epoch
    }
}
