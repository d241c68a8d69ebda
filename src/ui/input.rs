use crate::rewriter::RewriterIntent;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Lines scrolled per PageUp/PageDown in the output panel.
const PAGE_SCROLL: i16 = 5;

/// What a key press asks the app to do.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    Quit,
    Submit,
    Copy,
    Reset,
    Rewriter(RewriterIntent),
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    let Some(action) = key_action(key) else {
        return;
    };

    match action {
        KeyAction::Quit => app.request_quit(),
        KeyAction::Submit => app.submit(),
        KeyAction::Copy => app.copy_output(),
        KeyAction::Reset => app.reset(),
        KeyAction::Rewriter(intent) => app.dispatch(intent),
    }
}

pub fn key_action(key: KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        return Some(KeyAction::Quit);
    }
    if is_ctrl_char(key, 'r') {
        return Some(KeyAction::Submit);
    }
    if is_ctrl_char(key, 'y') {
        return Some(KeyAction::Copy);
    }
    if is_ctrl_char(key, 'l') {
        return Some(KeyAction::Reset);
    }

    let intent = match key.code {
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            RewriterIntent::InsertChar(ch)
        }
        KeyCode::Enter => RewriterIntent::InsertChar('\n'),
        KeyCode::Backspace => RewriterIntent::Backspace,
        KeyCode::Delete => RewriterIntent::Delete,
        KeyCode::Left => RewriterIntent::CursorLeft,
        KeyCode::Right => RewriterIntent::CursorRight,
        KeyCode::Home => RewriterIntent::CursorHome,
        KeyCode::End => RewriterIntent::CursorEnd,
        KeyCode::PageUp => RewriterIntent::ScrollOutput(-PAGE_SCROLL),
        KeyCode::PageDown => RewriterIntent::ScrollOutput(PAGE_SCROLL),
        _ => return None,
    };
    Some(KeyAction::Rewriter(intent))
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
