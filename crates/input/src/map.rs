//! Key mapping from terminal events to viewer actions.

use crate::types::ViewerAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to viewer actions.
pub fn handle_key_event(key: KeyEvent) -> Option<ViewerAction> {
    if should_quit(key) {
        return Some(ViewerAction::Close);
    }

    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char(' ') => Some(ViewerAction::Reroll),
        _ => None,
    }
}

/// Check if key should close the viewer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc | KeyCode::Enter
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_reroll_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(ViewerAction::Reroll)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(ViewerAction::Reroll)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(ViewerAction::Reroll)
        );
    }

    #[test]
    fn test_close_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc, KeyCode::Enter] {
            assert_eq!(
                handle_key_event(KeyEvent::from(code)),
                Some(ViewerAction::Close)
            );
        }
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(ViewerAction::Close)
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), None);
        // Plain 'c' without Control is not a quit.
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('r'))));
    }
}
