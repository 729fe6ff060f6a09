//! Application state structures.
//!
//! - **`AppMode`**: which surface receives key input
//! - **`AppEvent`**: results delivered from background tasks to the UI thread
//! - **`PickerState`**: the file picker modal (path input + suggestions)
//! - **`Notice`**: a blocking notification modal

use std::path::PathBuf;

use tui_textarea::TextArea;

use crate::core::{DocumentRole, Report, SubmitError, SubmissionTicket};
use crate::file_search::SearchResult;
use crate::tui::widgets::PopupState;

/// Placeholder shown in the empty path input.
pub const PICKER_PLACEHOLDER: &str = "Type to search .pdf/.docx files, or enter a path";

/// Which surface currently receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Document slots, trigger and result region.
    #[default]
    Main,
    /// File picker modal for one document role.
    Picker,
    /// Blocking notification modal.
    Notice,
}

/// Events sent from background tasks to the UI thread.
#[derive(Debug)]
pub enum AppEvent {
    /// The outstanding submission finished.
    SubmissionSettled {
        /// Cycle the outcome belongs to.
        ticket: SubmissionTicket,
        /// Report or failure.
        outcome: Result<Report, SubmitError>,
    },
    /// Document search result for the picker.
    SearchResult {
        /// Generation of the query (stale results are dropped).
        generation: u64,
        /// The matches.
        result: SearchResult,
    },
}

/// Query sent to the background document search task.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Text typed in the picker.
    pub query: String,
    /// Directory to search.
    pub working_dir: PathBuf,
    /// Generation counter for discarding stale results.
    pub generation: u64,
}

/// State of the file picker modal.
#[derive(Debug, Clone)]
pub struct PickerState {
    /// Slot the picked file goes into.
    pub role: DocumentRole,
    /// Single-line path/query input.
    pub textarea: TextArea<'static>,
    /// Suggestion list.
    pub popup: PopupState,
    /// Generation of the latest search request.
    pub generation: u64,
}

impl PickerState {
    /// Creates an empty picker for `role`.
    #[must_use]
    pub fn new(role: DocumentRole) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(PICKER_PLACEHOLDER);
        Self {
            role,
            textarea,
            popup: PopupState::default(),
            generation: 0,
        }
    }

    /// Current input text, trimmed.
    #[must_use]
    pub fn query(&self) -> String {
        self.textarea
            .lines()
            .first()
            .map(|line| line.trim().to_string())
            .unwrap_or_default()
    }
}

/// A blocking notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Modal title.
    pub title: String,
    /// Main message.
    pub message: String,
    /// Optional second line.
    pub detail: Option<String>,
}

impl Notice {
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
