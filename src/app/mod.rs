//! Main application state and logic.
//!
//! Submodules:
//! - `events` - key handling, submission dispatch and background events
//! - `layout` - screen regions
//! - `render` - drawing, including the result renderer
//! - `state` - mode, event and modal state types
//!
//! ## Ownership
//!
//! Each piece of shared state has exactly one owner inside [`App`]:
//! the [`FileSelectionRegistry`] owns the document slots, the
//! [`SubmissionController`] owns the lifecycle state, and the
//! [`PreferenceStore`] owns the display preference. Background tasks never
//! touch them; they send an [`AppEvent`] that the UI thread applies in
//! [`App::process_events`].

pub mod events;
pub mod layout;
pub mod render;
pub mod state;

#[cfg(test)]
mod tests;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::config::Config;
use crate::core::{
    AnalysisService, DocumentFile, DocumentRole, FileSelectionRegistry, HttpAnalysisClient,
    SubmissionController, SubmissionState,
};
use crate::fs::{AppPaths, PreferenceStore};
use crate::tui::Theme;

pub use self::layout::{MainLayout, calculate_main_layout, centered_rect};
pub use self::render::result::{ReportView, ResultView};
pub use self::state::{AppEvent, AppMode, Notice, PickerState, SearchQuery};

/// Channel buffer size for background events.
const EVENT_CHANNEL_SIZE: usize = 64;

/// Main application state.
pub struct App {
    /// Client-local storage paths.
    pub(crate) paths: AppPaths,
    /// Active palette, derived from the display preference.
    pub(crate) theme: Theme,
    /// Persisted dark-mode flag.
    pub(crate) preferences: PreferenceStore,
    /// Selected documents.
    pub(crate) registry: FileSelectionRegistry,
    /// Submission lifecycle.
    pub(crate) submission: SubmissionController,
    /// Where submissions are sent.
    pub(crate) service: Arc<dyn AnalysisService>,
    /// Current input surface.
    pub(crate) mode: AppMode,
    /// Slot with keyboard focus on the main screen.
    pub(crate) focus: DocumentRole,
    /// File picker state while `mode == Picker`.
    pub(crate) picker: Option<PickerState>,
    /// Notification while `mode == Notice`.
    pub(crate) notice: Option<Notice>,
    /// Non-blocking message shown in the footer.
    pub(crate) status: Option<String>,
    /// Should quit flag.
    should_quit: bool,
    /// Frame counter driving the busy spinner.
    pub(crate) tick_count: usize,

    /// Event receiver for background results.
    pub(crate) event_rx: mpsc::Receiver<AppEvent>,
    /// Event sender handed to background tasks.
    pub(crate) event_tx: mpsc::Sender<AppEvent>,
    /// Document search requests.
    pub(crate) search_tx: mpsc::Sender<SearchQuery>,
    /// Generation of the latest search request.
    pub(crate) search_generation: u64,
}

/// Spawns the background document search task.
///
/// Each query runs on the blocking pool; results go back through the event
/// channel tagged with the query generation.
fn spawn_search_task(mut search_rx: mpsc::Receiver<SearchQuery>, event_tx: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        while let Some(query) = search_rx.recv().await {
            let generation = query.generation;
            let search_result = tokio::task::spawn_blocking(move || {
                crate::file_search::search_documents(&query.query, &query.working_dir)
            })
            .await;

            if let Ok(result) = search_result {
                let _ = event_tx
                    .send(AppEvent::SearchResult { generation, result })
                    .await;
            }
        }
    });
}

impl App {
    /// Creates the application for the given configuration.
    ///
    /// The display preference is read here, before the first frame. Documents
    /// named in the configuration are loaded into their slots; a document that
    /// cannot be read is reported in a notice.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &Config, paths: AppPaths) -> Result<Self> {
        let service = Arc::new(HttpAnalysisClient::new(config.endpoint.clone())?);
        let mut app = Self::with_service(paths, service);

        if let Some(path) = &config.resume {
            app.load_document(DocumentRole::Resume, path);
        }
        if let Some(path) = &config.job {
            app.load_document(DocumentRole::JobDescription, path);
        }

        Ok(app)
    }

    /// Creates the application with an explicit analysis service.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn with_service(paths: AppPaths, service: Arc<dyn AnalysisService>) -> Self {
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_SIZE);
        let (search_tx, search_rx) = mpsc::channel(16);
        spawn_search_task(search_rx, event_tx.clone());

        let preferences = PreferenceStore::open(paths.preferences_file());
        let theme = Theme::for_mode(preferences.get());
        info!(dark_mode = preferences.get(), "Display preference loaded");

        Self {
            paths,
            theme,
            preferences,
            registry: FileSelectionRegistry::new(),
            submission: SubmissionController::new(),
            service,
            mode: AppMode::Main,
            focus: DocumentRole::Resume,
            picker: None,
            notice: None,
            status: None,
            should_quit: false,
            tick_count: 0,
            event_rx,
            event_tx,
            search_tx,
            search_generation: 0,
        }
    }

    /// Returns true if the application should quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Busy flag: true exactly while a submission is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.submission.is_busy()
    }

    /// Current submission state.
    #[must_use]
    pub const fn submission_state(&self) -> &SubmissionState {
        self.submission.state()
    }

    /// Selected documents.
    #[must_use]
    pub const fn registry(&self) -> &FileSelectionRegistry {
        &self.registry
    }

    /// Current dark-mode flag.
    #[must_use]
    pub const fn dark_mode(&self) -> bool {
        self.preferences.get()
    }

    /// Current input surface.
    #[must_use]
    pub const fn mode(&self) -> AppMode {
        self.mode
    }

    /// Notification currently shown, if any.
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Advances the spinner while busy.
    pub fn tick(&mut self) {
        if self.is_busy() {
            self.tick_count = self.tick_count.wrapping_add(1);
        }
    }

    /// Reads `path` into the slot for `role`.
    ///
    /// Relative paths resolve against the base directory. On failure the slot
    /// is left unchanged and a notice is shown. Returns true on success.
    pub fn load_document(&mut self, role: DocumentRole, path: &Path) -> bool {
        let resolved = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.paths.base().join(path)
        };

        match DocumentFile::from_path(&resolved) {
            Ok(file) => {
                info!(role = role.label(), name = %file.name, bytes = file.len(), "Document selected");
                self.status = Some(format!("{}: {}", role.label(), file.name));
                self.registry.select_file(role, file);
                true
            }
            Err(e) => {
                warn!(role = role.label(), path = %resolved.display(), error = %e, "Document not loaded");
                self.show_notice(
                    Notice::new("Could not read file", format!("{e:#}"))
                        .with_detail(format!("{} was not changed.", role.label())),
                );
                false
            }
        }
    }

    /// Flips and persists the display preference, applying the theme at once.
    pub fn toggle_dark_mode(&mut self) {
        let dark_mode = !self.preferences.get();
        if let Err(e) = self.preferences.set(dark_mode) {
            warn!(error = %e, "Failed to persist display preference");
            self.status = Some(format!("Failed to save preference: {e}"));
        }
        self.theme = Theme::for_mode(dark_mode);
    }

    /// Shows a blocking notification.
    pub(crate) fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.mode = AppMode::Notice;
    }

    /// Dismisses the notification and returns to the main screen.
    pub(crate) fn dismiss_notice(&mut self) {
        self.notice = None;
        self.mode = AppMode::Main;
    }
}
