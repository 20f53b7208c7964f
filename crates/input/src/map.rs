//! Key mapping from terminal events to player intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the player asked for with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Generate,
    BatchUp,
    BatchDown,
    Start,
    Pick,
    Reset,
    ToggleVoice,
}

/// Map keyboard input to an intent.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyIntent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char('g') | KeyCode::Char('G') => Some(KeyIntent::Generate),

        // Batch size
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Some(KeyIntent::BatchUp),
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => Some(KeyIntent::BatchDown),

        // Game flow
        KeyCode::Char('s') | KeyCode::Char('S') => Some(KeyIntent::Start),
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(KeyIntent::Pick)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyIntent::Reset),

        KeyCode::Char('v') | KeyCode::Char('V') => Some(KeyIntent::ToggleVoice),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_flow_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('g'))),
            Some(KeyIntent::Generate)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('S'))),
            Some(KeyIntent::Start)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(KeyIntent::Reset)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('v'))),
            Some(KeyIntent::ToggleVoice)
        );
    }

    #[test]
    fn test_pick_keys() {
        for code in [KeyCode::Char(' '), KeyCode::Enter, KeyCode::Char('p')] {
            assert_eq!(handle_key_event(KeyEvent::from(code)), Some(KeyIntent::Pick));
        }
    }

    #[test]
    fn test_batch_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('+'))),
            Some(KeyIntent::BatchUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('='))),
            Some(KeyIntent::BatchUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('-'))),
            Some(KeyIntent::BatchDown)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(KeyIntent::BatchDown)
        );
    }

    #[test]
    fn test_unmapped_and_control_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
