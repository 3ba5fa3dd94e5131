// Application shell: owns the store handle and the terminal, wires key
// events to the form controller and refreshes to the roster.

mod app;
mod term;
mod ui;

pub use app::App;

use anyhow::{Context, Result, bail};
use crossterm::event::{self, Event};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use rollcall_core::resolve_data_dir;
use rollcall_store::Database;

const DB_FILE_NAME: &str = "attendance.sqlite";

pub fn run() -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("rollcall is a full-screen terminal application; run it in an interactive terminal");
    }

    let data_dir = resolve_data_dir()?;
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

    let db_path = data_dir.join(DB_FILE_NAME);
    let db = Database::open(&db_path)
        .with_context(|| format!("Failed to open attendance database: {}", db_path.display()))?;

    let mut app = App::new(db);
    let result = run_event_loop(&mut app);

    // The terminal is restored by now; late errors go to stderr. The log
    // is drained whether the loop quit normally or failed.
    for message in app.take_diagnostics() {
        eprintln!("{} {}", "warning:".yellow().bold(), message);
    }

    result
}

fn run_event_loop(app: &mut App) -> Result<()> {
    let mut tui = term::Tui::new()?;

    while !app.should_quit() {
        tui.draw(app)?;

        match event::read().context("Failed to read terminal event")? {
            Event::Key(key) => app.on_key(key),
            // A redraw happens at the top of the loop anyway.
            Event::Resize(..) => {}
            _ => {}
        }
    }

    Ok(())
}
