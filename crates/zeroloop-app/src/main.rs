//! zeroloop desktop entry point.
//!
//! Fake-terminal frontend: crossterm raw mode for input, ANSI styled
//! output, driving a single shell session. Up/Down recall history,
//! Enter submits, Ctrl-C / Ctrl-D / Escape quit.

mod input;
mod render;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::{cursor, execute, terminal};

use zeroloop_shell::{
    CommandRegistry, LineEditor, Session, register_builtins, register_network_commands,
};
use zeroloop_types::config::ShellConfig;
use zeroloop_types::output::Console;

use render::AnsiRenderer;

#[derive(Parser, Debug)]
#[clap(name = "zeroloop", version, about = "ZeroLoop fake-terminal shell")]
struct Cli {
    /// Path to a TOML configuration file.
    #[clap(long, short)]
    config: Option<PathBuf>,

    /// Log level filter (error, warn, info, debug, trace).
    #[clap(long, default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_level.as_str()),
    )
    .init();

    let config = match &cli.config {
        Some(path) => ShellConfig::load(path)?,
        None => ShellConfig::default(),
    };
    log::info!("starting zeroloop");

    let console = Console::new(AnsiRenderer::new());
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    register_network_commands(&mut registry, &config);

    let mut session = Session::new(registry, console, config);
    let mut editor = LineEditor::new();

    terminal::enable_raw_mode()?;
    let result = run(&mut session, &mut editor).await;
    terminal::disable_raw_mode()?;
    result
}

async fn run(session: &mut Session, editor: &mut LineEditor) -> Result<()> {
    session.print_banner();
    draw_prompt(session, editor)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(ev) = input::map_key(key) else {
            continue;
        };

        // Wipe the prompt row; the session echoes accepted lines
        // itself. Submissions are awaited to completion here, so keys
        // typed mid-command wait in the terminal buffer.
        clear_prompt_row()?;
        if !editor.handle(ev, session).await {
            break;
        }
        draw_prompt(session, editor)?;
    }

    log::info!("zeroloop exiting");
    Ok(())
}

fn draw_prompt(session: &Session, editor: &LineEditor) -> Result<()> {
    let mut out = io::stdout();
    write!(out, "{}{}", session.config().prompt, editor.buffer())?;
    out.flush()?;
    Ok(())
}

fn clear_prompt_row() -> Result<()> {
    execute!(
        io::stdout(),
        cursor::MoveToColumn(0),
        terminal::Clear(terminal::ClearType::CurrentLine)
    )?;
    Ok(())
}
