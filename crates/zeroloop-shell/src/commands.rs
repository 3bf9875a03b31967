//! Built-in shell commands.
//!
//! `help`, `clear`, and `history` need registry or history state, so
//! the session intercepts them by name before dispatch; the structs
//! registered here carry the metadata the `help` listing shows.

use async_trait::async_trait;
use zeroloop_types::error::Result;
use zeroloop_types::output::Console;

use crate::interpreter::{Command, CommandRegistry};

/// Register the built-in commands into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(HistoryCmd));
}

struct HelpCmd;

#[async_trait]
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Show available commands"
    }
    fn usage(&self) -> &str {
        "help"
    }
    async fn execute(&self, _args: &str, _console: &Console) -> Result<()> {
        // Intercepted by the session, which has registry access.
        Ok(())
    }
}

struct ClearCmd;

#[async_trait]
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the terminal"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    async fn execute(&self, _args: &str, _console: &Console) -> Result<()> {
        // Intercepted by the session.
        Ok(())
    }
}

struct HistoryCmd;

#[async_trait]
impl Command for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }
    fn description(&self) -> &str {
        "Show command history"
    }
    fn usage(&self) -> &str {
        "history"
    }
    async fn execute(&self, _args: &str, _console: &Console) -> Result<()> {
        // Intercepted by the session, which has history access.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_register_with_metadata() {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg);

        let names: Vec<&str> = reg.list_commands().iter().map(|(n, _, _)| *n).collect();
        assert_eq!(names, ["clear", "help", "history"]);

        let help = reg.get("help").unwrap();
        assert_eq!(help.description(), "Show available commands");
    }
}
