//! Terminal setup and logging initialization.
//!
//! - Bracketed paste mode, so a pasted path arrives as one event
//! - Keyboard enhancement protocol, so `Ctrl+Enter` is distinguishable
//! - A `tracing` subscriber writing to a file, since the UI owns the terminal

use std::fs::OpenOptions;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use ratatui::crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use ratatui::crossterm::execute;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Environment variable that enables raw key event logging.
pub const DEBUG_KEYS_ENV: &str = "RESUME_MATCHER_DEBUG_KEYS";

/// Returns true if raw key events should be logged.
#[must_use]
pub fn debug_keys_enabled() -> bool {
    std::env::var_os(DEBUG_KEYS_ENV).is_some()
}

/// Installs the global `tracing` subscriber, appending to `log_file`.
///
/// `RUST_LOG` takes precedence over `default_level`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init_logging(log_file: &Path, default_level: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file: {}", log_file.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))
}

/// Guard to ensure terminal event modes are disabled on drop.
///
/// This ensures proper cleanup even if the application panics.
pub struct TerminalEventGuard {
    bracketed_paste_enabled: bool,
    keyboard_enhancement_enabled: bool,
}

impl TerminalEventGuard {
    #[must_use]
    pub fn new() -> Self {
        let mut guard = Self {
            bracketed_paste_enabled: false,
            keyboard_enhancement_enabled: false,
        };

        match execute!(stdout(), EnableBracketedPaste) {
            Ok(()) => {
                debug!("Bracketed paste mode enabled");
                guard.bracketed_paste_enabled = true;
            }
            Err(e) => {
                warn!(error = %e, "Could not enable bracketed paste mode");
            }
        }

        // Required to tell Ctrl+Enter apart from Enter
        match execute!(
            stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        ) {
            Ok(()) => {
                debug!("Keyboard enhancement enabled");
                guard.keyboard_enhancement_enabled = true;
            }
            Err(e) => {
                debug!(error = %e, "Keyboard enhancement unavailable");
            }
        }

        guard
    }
}

impl Default for TerminalEventGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalEventGuard {
    fn drop(&mut self) {
        if self.keyboard_enhancement_enabled {
            let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        }
        if self.bracketed_paste_enabled {
            let _ = execute!(stdout(), DisableBracketedPaste);
        }
    }
}
