//! Line editor: turns discrete input events into session actions.

use zeroloop_types::input::InputEvent;

use crate::interpreter::Session;

/// Editing state for the input field.
///
/// Owns the in-progress buffer. Recall navigation replaces it,
/// printable input appends, submission hands it to the session and
/// clears it.
#[derive(Debug, Default)]
pub struct LineEditor {
    buffer: String,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current input field contents.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Apply one input event, driving the session as needed.
    ///
    /// `Submit` is processed to completion before this returns, so a
    /// frontend feeding events sequentially can never start a second
    /// command while one is in flight. Returns `false` when the event
    /// asks to quit.
    pub async fn handle(&mut self, event: InputEvent, session: &mut Session) -> bool {
        match event {
            InputEvent::TextInput(c) => self.buffer.push(c),
            InputEvent::Backspace => {
                self.buffer.pop();
            },
            InputEvent::RecallOlder => {
                if let Some(entry) = session.recall_older() {
                    self.buffer = entry;
                }
            },
            InputEvent::RecallNewer => {
                if let Some(entry) = session.recall_newer() {
                    self.buffer = entry;
                }
            },
            InputEvent::Submit => {
                // The input field clears after any outcome.
                let line = std::mem::take(&mut self.buffer);
                session.submit(&line).await;
            },
            InputEvent::Quit => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use zeroloop_types::config::ShellConfig;
    use zeroloop_types::output::{BufferSink, Console};

    use super::*;
    use crate::interpreter::CommandRegistry;

    fn make_session() -> Session {
        Session::new(
            CommandRegistry::new(),
            Console::new(BufferSink::new()),
            ShellConfig::default(),
        )
    }

    async fn type_and_submit(editor: &mut LineEditor, session: &mut Session, line: &str) {
        for c in line.chars() {
            editor.handle(InputEvent::TextInput(c), session).await;
        }
        editor.handle(InputEvent::Submit, session).await;
    }

    #[tokio::test]
    async fn typing_and_backspace_edit_the_buffer() {
        let mut editor = LineEditor::new();
        let mut session = make_session();

        for c in "helq".chars() {
            editor.handle(InputEvent::TextInput(c), &mut session).await;
        }
        editor.handle(InputEvent::Backspace, &mut session).await;
        editor.handle(InputEvent::TextInput('p'), &mut session).await;

        assert_eq!(editor.buffer(), "help");
    }

    #[tokio::test]
    async fn submit_clears_the_buffer() {
        let mut editor = LineEditor::new();
        let mut session = make_session();

        type_and_submit(&mut editor, &mut session, "foobar").await;

        assert_eq!(editor.buffer(), "");
        assert_eq!(session.history().entries(), ["foobar"]);
    }

    #[tokio::test]
    async fn recall_replaces_buffer_newest_first() {
        let mut editor = LineEditor::new();
        let mut session = make_session();

        type_and_submit(&mut editor, &mut session, "aaa").await;
        type_and_submit(&mut editor, &mut session, "bbb").await;
        type_and_submit(&mut editor, &mut session, "ccc").await;

        editor.handle(InputEvent::RecallOlder, &mut session).await;
        assert_eq!(editor.buffer(), "ccc");
        editor.handle(InputEvent::RecallOlder, &mut session).await;
        assert_eq!(editor.buffer(), "bbb");
        editor.handle(InputEvent::RecallOlder, &mut session).await;
        assert_eq!(editor.buffer(), "aaa");
        // Pinned at the oldest entry.
        editor.handle(InputEvent::RecallOlder, &mut session).await;
        assert_eq!(editor.buffer(), "aaa");
    }

    #[tokio::test]
    async fn recall_newer_steps_back_out_and_clears() {
        let mut editor = LineEditor::new();
        let mut session = make_session();

        type_and_submit(&mut editor, &mut session, "aaa").await;
        type_and_submit(&mut editor, &mut session, "bbb").await;

        editor.handle(InputEvent::RecallOlder, &mut session).await;
        editor.handle(InputEvent::RecallOlder, &mut session).await;
        assert_eq!(editor.buffer(), "aaa");

        editor.handle(InputEvent::RecallNewer, &mut session).await;
        assert_eq!(editor.buffer(), "bbb");
        // Newer than the newest entry clears the input field.
        editor.handle(InputEvent::RecallNewer, &mut session).await;
        assert_eq!(editor.buffer(), "");
        // Further recall-newer stays a no-op with an empty field.
        editor.handle(InputEvent::RecallNewer, &mut session).await;
        assert_eq!(editor.buffer(), "");
    }

    #[tokio::test]
    async fn recall_on_empty_history_leaves_typed_text() {
        let mut editor = LineEditor::new();
        let mut session = make_session();

        editor.handle(InputEvent::TextInput('x'), &mut session).await;
        editor.handle(InputEvent::RecallOlder, &mut session).await;
        editor.handle(InputEvent::RecallNewer, &mut session).await;

        assert_eq!(editor.buffer(), "x");
    }

    #[tokio::test]
    async fn quit_stops_the_loop() {
        let mut editor = LineEditor::new();
        let mut session = make_session();

        assert!(editor.handle(InputEvent::TextInput('a'), &mut session).await);
        assert!(!editor.handle(InputEvent::Quit, &mut session).await);
    }
}
