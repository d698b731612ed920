//! Key mapping from terminal events to game intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Check if the key asks for a replay (only honoured once a game is over).
pub fn wants_replay(key: KeyEvent) -> bool {
    key.code == KeyCode::Char(' ')
}

/// Check if key should quit the application.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_replay_key() {
        assert!(wants_replay(KeyEvent::from(KeyCode::Char(' '))));
        assert!(!wants_replay(KeyEvent::from(KeyCode::Enter)));
        assert!(!wants_replay(KeyEvent::from(KeyCode::Char('r'))));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
