//! `Bookwright` - TUI writing companion
//!
//! Entry point for the application.

use std::time::Duration;

use clap::Parser;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use bookwright::app::App;
use bookwright::cli::Args;
use bookwright::core::GenerationClient;
use bookwright::logging;
use bookwright::tui::TerminalEventGuard;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    let paths = args.paths();

    // Without a log file the application still runs; there is nowhere to
    // report the failure once the TUI owns the terminal.
    if let Err(e) = logging::init(&paths.log_file(), args.log_level.as_deref()) {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    let credential = paths.load_credential();
    if credential.is_none() {
        tracing::info!(key_file = %paths.key_file().display(), "no API key, using mock responses");
    }
    let client = GenerationClient::from_credential(credential, &args.model);

    let app = App::new(paths, client).map_err(std::io::Error::other)?;

    // Initialize the terminal with crossterm backend
    let mut terminal = ratatui::init();

    // Run the application
    let result = run_app(&mut terminal, app);

    // Restore the terminal
    ratatui::restore();

    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal error");
    }
    tracing::info!("application stopped");
    result
}

fn run_app(terminal: &mut ratatui::DefaultTerminal, mut app: App) -> std::io::Result<()> {
    // Must come after ratatui::init, which resets terminal flags.
    let _event_guard = TerminalEventGuard::new();

    loop {
        // Layout is calculated inside the draw closure so it uses the exact
        // area being rendered.
        terminal.draw(|frame| {
            app.update_layout(frame.area());
            app.render(frame);
        })?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Event::Paste(text) => {
                    tracing::debug!(chars = text.chars().count(), "paste received");
                    app.handle_paste(&text);
                }
                _ => {}
            }
        }

        // Apply finished jobs
        app.process_events();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
