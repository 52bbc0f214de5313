//! Maps terminal key events onto chat actions.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Send,
    Clear,
    Newline,
    /// Plain editing key for the composer.
    Edit(KeyEvent),
    Ignore,
}

pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Ignore;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => KeyAction::Quit,
        KeyCode::Char('l') if ctrl => KeyAction::Clear,
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Enter
            if key
                .modifiers
                .intersects(KeyModifiers::ALT | KeyModifiers::SHIFT) =>
        {
            KeyAction::Newline
        }
        KeyCode::Char('j') if ctrl => KeyAction::Newline,
        KeyCode::Enter => KeyAction::Send,
        _ => KeyAction::Edit(key),
    }
}
