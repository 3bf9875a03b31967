//! Frontend-agnostic input events.
//!
//! Every frontend maps its native key handling to these variants. The
//! shell core never sees raw terminal input.

/// A discrete input event fed to the line editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Submit the current input line.
    Submit,
    /// Recall the next-older history entry into the input field.
    RecallOlder,
    /// Recall the next-newer history entry into the input field.
    RecallNewer,
    /// Character typed.
    TextInput(char),
    /// Delete-left.
    Backspace,
    /// User requested quit.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_compare_by_value() {
        assert_eq!(InputEvent::TextInput('a'), InputEvent::TextInput('a'));
        assert_ne!(InputEvent::TextInput('a'), InputEvent::TextInput('b'));
        assert_ne!(InputEvent::RecallOlder, InputEvent::RecallNewer);
    }
}
