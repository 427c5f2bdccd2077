//! Keyboard mapping for calculator input.
//!
//! Translates terminal key events into [`InputEvent`]s. Application keys
//! (help, copy, quit) are handled by the app layer, not here.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::editor::InputEvent;

/// Map a key press to calculator input.
///
/// Digits, `+ - * /` and `.` type themselves; `,` is accepted as a decimal
/// point. `Enter` and `=` evaluate, `Backspace` deletes, and `A`, `Esc`
/// or `Delete` clear. Chords with Ctrl or Alt never map to input.
pub fn key_to_input(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Enter => Some(InputEvent::Evaluate),
        KeyCode::Backspace => Some(InputEvent::Delete),
        KeyCode::Esc | KeyCode::Delete | KeyCode::Char('A') => Some(InputEvent::Clear),
        KeyCode::Char(',') => Some(InputEvent::DecimalPoint),
        KeyCode::Char(c) => InputEvent::from_char(c),
        _ => None,
    }
}
