//! Display preference persistence.
//!
//! The dark-mode flag is stored as JSON under the `darkMode` key in
//! `.resume-matcher/preferences.json`. It is read once at startup and
//! written on every change.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// On-disk form of the display preference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PersistedPreferences {
    /// Whether the dark palette is active.
    #[serde(rename = "darkMode", default)]
    pub dark_mode: bool,
}

/// Loads preferences from `path`.
///
/// A missing file yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_preferences(path: &Path) -> Result<PersistedPreferences> {
    if !path.exists() {
        return Ok(PersistedPreferences::default());
    }

    let content = std::fs::read_to_string(path).context("Failed to read preferences file")?;

    serde_json::from_str(&content).context("Failed to parse preferences file")
}

/// Saves preferences to `path`, creating the parent directory if needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn save_preferences(path: &Path, preferences: PersistedPreferences) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let json =
        serde_json::to_string_pretty(&preferences).context("Failed to serialize preferences")?;

    std::fs::write(path, json).context("Failed to write preferences file")
}

/// Last-write-wins store for the dark-mode flag.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    dark_mode: bool,
}

impl PreferenceStore {
    /// Opens the store backed by `path`, reading the persisted value once.
    ///
    /// An unreadable or corrupt file is logged and treated as absent.
    #[must_use]
    pub fn open(path: PathBuf) -> Self {
        let dark_mode = match load_preferences(&path) {
            Ok(prefs) => prefs.dark_mode,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring unreadable preferences");
                false
            }
        };
        Self { path, dark_mode }
    }

    /// Returns the current dark-mode flag.
    #[must_use]
    pub const fn get(&self) -> bool {
        self.dark_mode
    }

    /// Sets and persists the dark-mode flag.
    ///
    /// The in-memory value is updated even if the write fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the preferences file cannot be written.
    pub fn set(&mut self, dark_mode: bool) -> Result<()> {
        self.dark_mode = dark_mode;
        save_preferences(&self.path, PersistedPreferences { dark_mode })?;
        info!(dark_mode, "Display preference saved");
        Ok(())
    }
}
