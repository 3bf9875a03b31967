//! Command trait, registry, and dispatch logic.
//!
//! The shell is a registry-based dispatch system. Commands implement the
//! [`Command`] trait and are registered by name. A [`Session`] parses
//! input lines, resolves the command name, awaits `execute()`, and
//! records accepted lines in history.

use std::collections::HashMap;

use async_trait::async_trait;
use zeroloop_types::config::ShellConfig;
use zeroloop_types::error::Result;
use zeroloop_types::output::{Console, LineStyle};

use crate::history::History;

/// A single executable command.
///
/// Handlers communicate results only by emitting lines through the
/// console; there is no structured return value. Argument validation
/// failures should be emitted by the handler itself as error-styled
/// lines. A returned `Err` is a contract violation: the session renders
/// it as one generic error line and stays usable.
#[async_trait]
pub trait Command: Send + Sync {
    /// The command name (what the user types). Stored lowercase.
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "scanip <ip_address>").
    fn usage(&self) -> &str;

    /// Execute the command.
    ///
    /// `args` is the remainder of the input line after the command
    /// token, lowercased with runs of whitespace collapsed to single
    /// spaces; trimming is the handler's responsibility. Handlers may
    /// await freely; the session waits for full completion.
    async fn execute(&self, args: &str, console: &Console) -> Result<()>;
}

/// Registry of available commands.
///
/// Built once at startup and immutable afterwards.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command under its lowercased name.
    ///
    /// Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_ascii_lowercase(), cmd);
    }

    /// Look up a command by case-insensitive name.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .get(&name.to_ascii_lowercase())
            .map(|c| c.as_ref())
    }

    /// Sorted (name, description, usage) triples, for `help`.
    pub fn list_commands(&self) -> Vec<(&str, &str, &str)> {
        let mut cmds: Vec<(&str, &str, &str)> = self
            .commands
            .values()
            .map(|c| (c.name(), c.description(), c.usage()))
            .collect();
        cmds.sort_by_key(|(name, _, _)| *name);
        cmds
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a raw input line into a lowercased command name and argument
/// string.
///
/// Returns `None` for blank input. Runs of whitespace collapse to
/// single separators; the shell has no quoting.
pub fn tokenize(line: &str) -> Option<(String, String)> {
    let lowered = line.to_lowercase();
    let mut tokens = lowered.split_whitespace();
    let name = tokens.next()?.to_string();
    let args = tokens.collect::<Vec<&str>>().join(" ");
    Some((name, args))
}

/// An interactive shell session.
///
/// Owns the command registry, the history buffer, and the console; all
/// submissions and recall navigation flow through one session value, so
/// there is no shared mutable state outside it.
pub struct Session {
    registry: CommandRegistry,
    history: History,
    console: Console,
    config: ShellConfig,
    busy: bool,
}

impl Session {
    pub fn new(registry: CommandRegistry, console: Console, config: ShellConfig) -> Self {
        Self {
            registry,
            history: History::new(),
            console,
            config,
            busy: false,
        }
    }

    /// The console handle commands emit through.
    pub fn console(&self) -> &Console {
        &self.console
    }

    /// The session configuration.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Accepted input lines, newest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether a command is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Print the configured welcome banner.
    pub fn print_banner(&self) {
        if !self.config.banner.is_empty() {
            self.console.line(&self.config.banner.join("\n"), LineStyle::Info);
        }
    }

    /// Process one submitted input line to completion.
    ///
    /// Blank input is a no-op: no echo, no history entry, no dispatch.
    /// Otherwise the trimmed line is recorded in history, echoed, and
    /// dispatched; the session waits for the handler to finish before
    /// returning. There is no timeout: a hung handler blocks further
    /// input.
    pub async fn submit(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return;
        }
        if self.busy {
            // One command at a time; drop the extra submission.
            log::debug!("submission dropped while a command is in flight: {trimmed}");
            return;
        }

        // Record first, then echo: the recall cursor resets on every
        // accepted submission, including unknown commands.
        self.history.push(trimmed);
        self.console.line(trimmed, LineStyle::Command);

        let Some((name, args)) = tokenize(trimmed) else {
            return;
        };

        // Builtins that need registry or history state are intercepted
        // here; their registered structs only carry `help` metadata.
        match name.as_str() {
            "help" => return self.execute_help(),
            "clear" => return self.execute_clear(),
            "history" => return self.execute_history(),
            _ => {},
        }

        match self.registry.get(&name) {
            Some(cmd) => {
                log::debug!("dispatching '{name}' with args '{args}'");
                self.busy = true;
                if let Err(e) = cmd.execute(&args, &self.console).await {
                    log::error!("command '{name}' failed: {e}");
                    self.console
                        .error("Error: command failed. Please try again.");
                }
                self.busy = false;
            },
            None => {
                self.console.error(&format!(
                    "Command not found: {name}. Type 'help' for available commands."
                ));
            },
        }
    }

    /// Step the recall cursor to the next-older entry.
    ///
    /// Returns the text to place in the input field, or `None` to leave
    /// it unchanged.
    pub fn recall_older(&mut self) -> Option<String> {
        self.history.recall_older()
    }

    /// Step the recall cursor to the next-newer entry.
    pub fn recall_newer(&mut self) -> Option<String> {
        self.history.recall_newer()
    }

    fn execute_help(&self) {
        let mut out = String::from("Available Commands:");
        for (_, description, usage) in self.registry.list_commands() {
            out.push_str(&format!("\n  {usage:<20} - {description}"));
        }
        self.console.line(&out, LineStyle::Help);
    }

    fn execute_clear(&self) {
        // Rendered output only; the history buffer is untouched.
        self.console.clear_all();
    }

    fn execute_history(&self) {
        if self.history.is_empty() {
            self.console.info("No command history available.");
            return;
        }
        let mut out = String::from("Command History:");
        for (i, entry) in self.history.entries().iter().enumerate() {
            out.push_str(&format!("\n{}. {entry}", i + 1));
        }
        self.console.line(&out, LineStyle::History);
    }
}
