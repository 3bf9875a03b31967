//! Maps terminal key events to shell input events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use zeroloop_types::input::InputEvent;

/// Map one terminal key event to a shell input event.
///
/// Returns `None` for keys the shell does not react to.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Enter => Some(InputEvent::Submit),
        KeyCode::Up => Some(InputEvent::RecallOlder),
        KeyCode::Down => Some(InputEvent::RecallNewer),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Esc => Some(InputEvent::Quit),
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => match c {
            'c' | 'd' => Some(InputEvent::Quit),
            _ => None,
        },
        KeyCode::Char(c) => Some(InputEvent::TextInput(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_map_to_recall() {
        assert_eq!(map_key(key(KeyCode::Up)), Some(InputEvent::RecallOlder));
        assert_eq!(map_key(key(KeyCode::Down)), Some(InputEvent::RecallNewer));
    }

    #[test]
    fn enter_submits_and_chars_type() {
        assert_eq!(map_key(key(KeyCode::Enter)), Some(InputEvent::Submit));
        assert_eq!(
            map_key(key(KeyCode::Char('x'))),
            Some(InputEvent::TextInput('x'))
        );
        assert_eq!(map_key(key(KeyCode::Backspace)), Some(InputEvent::Backspace));
    }

    #[test]
    fn control_c_and_d_quit() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let ctrl_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), Some(InputEvent::Quit));
        assert_eq!(map_key(ctrl_d), Some(InputEvent::Quit));
    }

    #[test]
    fn unhandled_keys_are_ignored() {
        assert_eq!(map_key(key(KeyCode::F(5))), None);
        let ctrl_z = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_z), None);
    }
}
