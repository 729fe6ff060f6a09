//! Client-local storage.

use std::path::{Path, PathBuf};

use anyhow::Context;

pub mod preferences;

pub use preferences::{PersistedPreferences, PreferenceStore, load_preferences, save_preferences};

/// Name of the state directory created under the base directory.
pub const STATE_DIR: &str = ".resume-matcher";

/// Holds all client-local paths derived from a base directory.
///
/// Tests pass a temporary directory as the base; production uses the
/// current working directory.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use resume_matcher::fs::AppPaths;
///
/// let paths = AppPaths::new(Path::new("/tmp/test"));
/// assert_eq!(
///     paths.preferences_file(),
///     Path::new("/tmp/test/.resume-matcher/preferences.json")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct AppPaths {
    base: PathBuf,
}

impl AppPaths {
    /// Creates paths rooted at the given base directory.
    #[must_use]
    pub fn new(base: &Path) -> Self {
        Self {
            base: base.to_path_buf(),
        }
    }

    /// Creates paths rooted at the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn from_cwd() -> anyhow::Result<Self> {
        let base = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self { base })
    }

    /// Returns the base directory.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Returns the state directory (`.resume-matcher`).
    #[must_use]
    pub fn state_dir(&self) -> PathBuf {
        self.base.join(STATE_DIR)
    }

    /// Returns the preferences file (`.resume-matcher/preferences.json`).
    #[must_use]
    pub fn preferences_file(&self) -> PathBuf {
        self.state_dir().join("preferences.json")
    }

    /// Returns the log file (`.resume-matcher/resume-matcher.log`).
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.state_dir().join("resume-matcher.log")
    }

    /// Ensures the state directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_state_dir(&self) -> anyhow::Result<()> {
        let dir = self.state_dir();
        if !dir.exists() {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::TempDir;

    #[test]
    fn derived_paths_live_under_state_dir() {
        let paths = AppPaths::new(Path::new("/base"));
        assert_eq!(paths.base(), Path::new("/base"));
        assert_eq!(paths.state_dir(), Path::new("/base/.resume-matcher"));
        assert_eq!(
            paths.log_file(),
            Path::new("/base/.resume-matcher/resume-matcher.log")
        );
    }

    #[test]
    fn ensure_state_dir_is_idempotent() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let paths = AppPaths::new(temp_dir.path());

        assert!(!paths.state_dir().exists());
        paths.ensure_state_dir()?;
        paths.ensure_state_dir()?;
        assert!(paths.state_dir().is_dir());
        Ok(())
    }
}
