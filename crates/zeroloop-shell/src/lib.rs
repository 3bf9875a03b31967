//! Command interpreter and line-editing engine for zeroloop.
//!
//! The shell is a registry-based dispatch system. Commands implement
//! the `Command` trait and are registered by name; a `Session` parses
//! input lines, resolves the command name, awaits `execute()`, and
//! records accepted lines in history. The `LineEditor` sits in front,
//! turning discrete input events into edits, recall navigation, and
//! submissions.

mod commands;
mod editor;
mod history;
mod interpreter;
mod network_commands;

/// Register the built-in commands (help, clear, history).
pub use commands::register_builtins;
/// Editing state for the input field.
pub use editor::LineEditor;
/// Newest-first log of accepted input lines with a recall cursor.
pub use history::History;
/// A single executable command trait.
pub use interpreter::Command;
/// Registry of available commands.
pub use interpreter::CommandRegistry;
/// An interactive shell session.
pub use interpreter::Session;
/// Split a raw input line into command name and argument string.
pub use interpreter::tokenize;
/// Register the network demo commands (scanip, ping).
pub use network_commands::register_network_commands;
