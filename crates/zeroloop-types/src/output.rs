//! Output line model and renderer sink.
//!
//! The shell's only visible effect is a sequence of styled lines. The
//! rendering surface is abstracted behind [`OutputSink`]; the shell and
//! its commands talk to it through a shared [`Console`] handle.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// Style tag attached to every rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineStyle {
    /// Echo of a submitted command line.
    Command,
    /// Informational text (banner, progress notes).
    Info,
    /// User-visible error.
    Error,
    /// `help` listing.
    Help,
    /// `history` listing.
    History,
    /// IP information block.
    IpInfo,
    /// Ping header line.
    Ping,
    /// Individual ping reply.
    PingReply,
    /// Ping statistics block.
    PingStats,
}

/// One unit of rendered text. The text may span multiple rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub text: String,
    pub style: LineStyle,
}

/// Rendering surface for shell output.
///
/// Implementations must preserve emission order and keep the latest
/// line visible.
pub trait OutputSink: Send {
    /// Append one styled line.
    fn emit(&mut self, text: &str, style: LineStyle);

    /// Truncate all rendered output.
    fn clear_all(&mut self);
}

/// Cloneable handle to the active sink.
///
/// Every mutation goes through a single mutex, so handlers running on a
/// multi-threaded runtime cannot interleave partial writes.
#[derive(Clone)]
pub struct Console {
    sink: Arc<Mutex<dyn OutputSink>>,
}

impl Console {
    /// Wrap a sink in a shareable console handle.
    pub fn new(sink: impl OutputSink + 'static) -> Self {
        Self {
            sink: Arc::new(Mutex::new(sink)),
        }
    }

    /// Emit one styled line.
    pub fn line(&self, text: &str, style: LineStyle) {
        self.lock().emit(text, style);
    }

    /// Emit an info-styled line.
    pub fn info(&self, text: &str) {
        self.line(text, LineStyle::Info);
    }

    /// Emit an error-styled line.
    pub fn error(&self, text: &str) {
        self.line(text, LineStyle::Error);
    }

    /// Truncate all rendered output.
    pub fn clear_all(&self) {
        self.lock().clear_all();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, dyn OutputSink + 'static> {
        // A sink panicking mid-emit leaves nothing to repair; keep going.
        self.sink.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Sink that records lines in memory.
///
/// The backing store is shared: keep a [`BufferSink::lines`] handle
/// around and it stays readable after the sink itself moves into a
/// [`Console`]. Used by headless embeddings and by tests throughout the
/// workspace.
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Arc<Mutex<Vec<OutputLine>>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the recorded lines.
    pub fn lines(&self) -> Arc<Mutex<Vec<OutputLine>>> {
        Arc::clone(&self.lines)
    }
}

impl OutputSink for BufferSink {
    fn emit(&mut self, text: &str, style: LineStyle) {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(OutputLine {
                text: text.to_string(),
                style,
            });
    }

    fn clear_all(&mut self) {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_preserves_emission_order() {
        let sink = BufferSink::new();
        let lines = sink.lines();
        let console = Console::new(sink);

        console.line("first", LineStyle::Command);
        console.info("second");
        console.error("third");

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "first");
        assert_eq!(lines[0].style, LineStyle::Command);
        assert_eq!(lines[1].style, LineStyle::Info);
        assert_eq!(lines[2].style, LineStyle::Error);
    }

    #[test]
    fn clear_all_truncates() {
        let sink = BufferSink::new();
        let lines = sink.lines();
        let console = Console::new(sink);

        console.info("hello");
        console.clear_all();

        assert!(lines.lock().unwrap().is_empty());
    }

    #[test]
    fn cloned_console_shares_sink() {
        let sink = BufferSink::new();
        let lines = sink.lines();
        let console = Console::new(sink);
        let other = console.clone();

        console.info("from original");
        other.info("from clone");

        assert_eq!(lines.lock().unwrap().len(), 2);
    }

    #[test]
    fn line_style_serde_tags() {
        let tag = serde_json::to_string(&LineStyle::IpInfo).unwrap();
        assert_eq!(tag, "\"ip-info\"");
        let back: LineStyle = serde_json::from_str("\"ping-reply\"").unwrap();
        assert_eq!(back, LineStyle::PingReply);
    }
}
