/// Keyboard event to action mapping
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use super::action::Action;

/// Convert a key press into an action
///
/// Printable characters always go to the focused filter input, so every
/// other command lives on a non-printing key.
pub fn key_to_action(key: KeyEvent) -> Option<Action> {
    trace!("KEY: {:?}", key);

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('u') => Some(Action::ClearField),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrevious),
        KeyCode::Backspace => Some(Action::DeleteChar),
        KeyCode::PageDown => Some(Action::LoadMore),
        KeyCode::PageUp => Some(Action::ShowLess),
        KeyCode::Down => Some(Action::SelectNext),
        KeyCode::Up => Some(Action::SelectPrevious),
        KeyCode::Char(c) => Some(Action::InsertChar(c)),
        _ => None,
    }
}
