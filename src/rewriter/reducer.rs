//! Reducer for the Note Rewriter.

use crate::ui::mvi::Reducer;

use super::error::RewriterError;
use super::intent::RewriterIntent;
use super::state::RewriterState;

/// Reducer for Note Rewriter state transitions.
pub struct RewriterReducer;

impl Reducer for RewriterReducer {
    type State = RewriterState;
    type Intent = RewriterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RewriterIntent::InsertChar(ch) => edit(state, |s| insert(s, &ch.to_string())),
            RewriterIntent::InsertText(text) => {
                let text = text.replace("\r\n", "\n").replace('\r', "\n");
                edit(state, |s| insert(s, &text))
            }
            RewriterIntent::Backspace => edit(state, |s| {
                if s.cursor > 0 {
                    s.cursor -= 1;
                    let at = s.cursor_byte();
                    s.input.remove(at);
                }
            }),
            RewriterIntent::Delete => edit(state, |s| {
                if s.cursor < s.input_len_chars() {
                    let at = s.cursor_byte();
                    s.input.remove(at);
                }
            }),
            RewriterIntent::CursorLeft => edit(state, |s| s.cursor = s.cursor.saturating_sub(1)),
            RewriterIntent::CursorRight => edit(state, |s| {
                s.cursor = (s.cursor + 1).min(s.input_len_chars());
            }),
            RewriterIntent::CursorHome => edit(state, |s| {
                let before = &s.input[..s.cursor_byte()];
                let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
                s.cursor -= before[line_start..].chars().count();
            }),
            RewriterIntent::CursorEnd => edit(state, |s| {
                let after = &s.input[s.cursor_byte()..];
                let line_end = after.find('\n').unwrap_or(after.len());
                s.cursor += after[..line_end].chars().count();
            }),

            RewriterIntent::ScrollOutput(lines) => {
                let mut state = state;
                // The last output line stays on screen.
                let last_line = state.output.lines().count().saturating_sub(1);
                let max = u16::try_from(last_line).unwrap_or(u16::MAX);
                state.output_scroll = state.output_scroll.saturating_add_signed(lines).min(max);
                state
            }

            RewriterIntent::Submit => submit(state),

            RewriterIntent::RewriteFinished { token, result } => finish(state, token, result),

            RewriterIntent::CooldownElapsed { epoch } => {
                let mut state = state;
                if state.cooldown == Some(epoch) {
                    state.cooldown = None;
                }
                state
            }

            RewriterIntent::CopySucceeded => {
                let mut state = state;
                state.copied = Some(state.next_epoch());
                state
            }

            RewriterIntent::CopyFailed => {
                let mut state = state;
                state.error = Some(RewriterError::Clipboard);
                state
            }

            RewriterIntent::CopiedElapsed { epoch } => {
                let mut state = state;
                if state.copied == Some(epoch) {
                    state.copied = None;
                }
                state
            }

            RewriterIntent::Reset => RewriterState {
                input: String::new(),
                cursor: 0,
                output: String::new(),
                output_scroll: 0,
                error: None,
                copied: None,
                // Any response still in flight is now stale.
                generation: state.generation.wrapping_add(1),
                ..state
            },
        }
    }
}

/// Apply an input edit unless a request is in flight (the field is read-only then).
fn edit(mut state: RewriterState, apply: impl FnOnce(&mut RewriterState)) -> RewriterState {
    if !state.is_loading() {
        apply(&mut state);
    }
    state
}

fn insert(state: &mut RewriterState, text: &str) {
    let at = state.cursor_byte();
    state.input.insert_str(at, text);
    state.cursor += text.chars().count();
}

/// Validate and start a request: empty notes first, then the cooldown.
fn submit(mut state: RewriterState) -> RewriterState {
    if state.is_loading() {
        return state;
    }

    if state.input.trim().is_empty() {
        state.error = Some(RewriterError::NotesRequired);
        return state;
    }

    if state.is_cooling_down() {
        state.error = Some(RewriterError::CoolingDown);
        return state;
    }

    state.error = None;
    state.copied = None;
    state.generation = state.generation.wrapping_add(1);
    state.in_flight = Some(state.generation);
    state
}

fn finish(mut state: RewriterState, token: u64, result: Result<String, String>) -> RewriterState {
    if state.in_flight == Some(token) {
        state.in_flight = None;
    }

    if token != state.generation {
        tracing::debug!(
            token,
            generation = state.generation,
            "Discarding stale rewrite response"
        );
        return state;
    }

    match result {
        Ok(text) => {
            state.output = text;
            state.output_scroll = 0;
            state.cooldown = Some(state.next_epoch());
        }
        Err(message) => {
            state.error = Some(RewriterError::RequestFailed(message));
        }
    }
    state
}
