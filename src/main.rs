//! Resume Matcher - terminal client for a resume/job match analysis service.
//!
//! Entry point for the application.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info};

use resume_matcher::app::App;
use resume_matcher::cli::Args;
use resume_matcher::config::{Config, load_dotenv};
use resume_matcher::fs::AppPaths;
use resume_matcher::tui::{TerminalEventGuard, init_logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing, so `.env` can supply the service URL
    load_dotenv();
    let args = Args::parse();
    let config = Config::from_args(args)?;

    let paths = AppPaths::from_cwd()?;
    paths.ensure_state_dir()?;
    init_logging(&paths.log_file(), &config.log_level)?;
    info!(endpoint = %config.endpoint, "Starting");

    let app = App::new(&config, paths)?;

    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, app);
    ratatui::restore();

    if let Err(e) = &result {
        error!(error = %e, "Exited with error");
    }
    result
}

fn run_app(terminal: &mut ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    // Must come after `ratatui::init`, which resets terminal flags
    let _event_guard = TerminalEventGuard::new();

    loop {
        terminal
            .draw(|frame| app.render(frame))
            .context("Failed to draw frame")?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Event::Paste(text) => app.handle_paste(&text),
                _ => {}
            }
        }

        app.process_events();
        app.tick();

        if app.should_quit() {
            if app.is_busy() {
                info!("Quitting with a submission in flight");
            }
            break;
        }
    }

    Ok(())
}
