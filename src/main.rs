// Digital Divide Atlas: energy infrastructure vs. digital connectivity
// A terminal dashboard projecting one country table into three charts

mod app;
mod cli;
mod data;
mod headless;
mod projection;
mod terminal;
mod theme;
mod ui;

use anyhow::{anyhow, Context, Result};
use app::{
    config::ui_interval,
    event::{handle_key_event, handle_mouse_event},
    AppState,
};
use clap::Parser;
use cli::CliArgs;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::fs::OpenOptions;
use std::sync::Mutex;
use terminal::TerminalSession;
use tracing::Level;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args)?;

    data::validate(data::COUNTRIES).context("built-in country table is inconsistent")?;
    tracing::info!(records = data::COUNTRIES.len(), "Dataset loaded");

    let mut app = AppState::new();
    args.apply(&mut app);

    if args.headless {
        return headless::run_headless(&app.records, &app.layouts, args.json);
    }

    let mut session = TerminalSession::start()?;
    let res = run_app(session.terminal_mut(), &mut app);
    app.tilt.end_drag();
    drop(session);

    res
}

/// Install a file logger when `--log-file` is given
///
/// The TUI owns stdout, so nothing is ever logged to the terminal.
fn init_logging(args: &CliArgs) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let level = if args.debug { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Logging started");
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut AppState) -> Result<()> {
    loop {
        app.on_tick();
        terminal.draw(|f| ui::draw(f, app))?;

        if !app.running {
            return Ok(());
        }

        if event::poll(ui_interval())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(app, key.code);
                }
                Event::Mouse(mouse) => handle_mouse_event(app, mouse),
                _ => {}
            }
        }
    }
}
