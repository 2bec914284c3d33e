use crossterm::event::KeyEvent;

use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Retreat by the effective step
    Prev,
    /// Advance by the effective step
    Next,
    /// Jump to the first slide
    First,
    /// Jump to the last page
    Last,
    /// Toggle the help overlay
    Help,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, keymap: &Keymap, help_open: bool) -> Action {
    // Any key closes the help overlay
    if help_open {
        return Action::ExitMode;
    }

    let binding = KeyBinding::new(key.code, key.modifiers);
    keymap.get(&binding).copied().unwrap_or(Action::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_navigate() {
        let keymap = Keymap::default();
        assert_eq!(handle_key_event(key(KeyCode::Left), &keymap, false), Action::Prev);
        assert_eq!(handle_key_event(key(KeyCode::Right), &keymap, false), Action::Next);
    }

    #[test]
    fn test_unbound_key_is_none() {
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('z')), &keymap, false),
            Action::None
        );
    }

    #[test]
    fn test_any_key_closes_help() {
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('z')), &keymap, true),
            Action::ExitMode
        );
        assert_eq!(handle_key_event(key(KeyCode::Left), &keymap, true), Action::ExitMode);
    }
}
