//! ANSI renderer: paints shell output onto the real terminal.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};
use crossterm::{cursor, execute, terminal};

use zeroloop_types::output::{LineStyle, OutputSink};

/// Renderer sink writing styled lines to stdout.
///
/// Stdout keeps the latest line visible on its own, so emission order
/// is all that has to be maintained here.
pub struct AnsiRenderer {
    out: io::Stdout,
}

impl AnsiRenderer {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }

    fn color(style: LineStyle) -> Color {
        match style {
            LineStyle::Command => Color::White,
            LineStyle::Info => Color::Cyan,
            LineStyle::Error => Color::Red,
            LineStyle::Help => Color::Green,
            LineStyle::History => Color::Yellow,
            LineStyle::IpInfo => Color::Green,
            LineStyle::Ping => Color::Cyan,
            LineStyle::PingReply => Color::Grey,
            LineStyle::PingStats => Color::Cyan,
        }
    }
}

impl Default for AnsiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for AnsiRenderer {
    fn emit(&mut self, text: &str, style: LineStyle) {
        // In raw mode a bare \n does not return the carriage.
        for row in text.split('\n') {
            let _ = write!(self.out, "{}\r\n", row.with(Self::color(style)));
        }
        let _ = self.out.flush();
    }

    fn clear_all(&mut self) {
        let _ = execute!(
            self.out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        );
    }
}
