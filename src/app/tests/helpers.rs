//! Shared test utilities for the app module.
//!
//! - `ScriptedService` - an `AnalysisService` that replays canned outcomes
//! - `create_test_app` - builds an `App` without spawning background tasks
//! - `wait_until_settled` - drives `process_events` until the request settles
//! - `render_app_to_terminal` / `buffer_text` - `TestBackend` rendering
//! - Key event helpers (`char_key`, `key`, `ctrl_key`)

use std::collections::VecDeque;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use tokio::sync::Notify;

use crate::app::{App, AppMode};
use crate::core::{
    AnalysisService, DocumentFile, DocumentRole, FileSelectionRegistry, Report, SkillDatum,
    SubmissionController, SubmissionRequest, SubmitError,
};
use crate::fs::{AppPaths, PreferenceStore};
use crate::tui::Theme;

/// Creates a [`KeyEvent`] for a character key with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Creates a press [`KeyEvent`] for `code` with no modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Creates a press [`KeyEvent`] for `code` with Ctrl held.
pub fn ctrl_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// The 82% report used across the submission tests.
pub fn sample_report() -> Report {
    Report {
        match_score: 82.0,
        insights: "Strong Python background; limited cloud exposure.".to_string(),
        skill_series: vec![SkillDatum::new("Python", 90.0), SkillDatum::new("Cloud", 60.0)],
    }
}

/// An [`AnalysisService`] that replays scripted outcomes in order.
///
/// When gated, each call waits for [`ScriptedService::release`] before
/// answering, which keeps the submission in flight for as long as a test needs.
#[derive(Default)]
pub struct ScriptedService {
    outcomes: Mutex<VecDeque<Result<Report, SubmitError>>>,
    calls: AtomicUsize,
    requests: Mutex<Vec<(String, String)>>,
    gate: Option<Notify>,
}

impl ScriptedService {
    pub fn new(outcomes: impl IntoIterator<Item = Result<Report, SubmitError>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            ..Self::default()
        })
    }

    pub fn gated(outcomes: impl IntoIterator<Item = Result<Report, SubmitError>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            gate: Some(Notify::new()),
            ..Self::default()
        })
    }

    /// Lets one gated call answer.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    /// Number of requests received.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// File names of each request, as `(resume, job)`.
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalysisService for ScriptedService {
    async fn analyze(&self, request: &SubmissionRequest) -> Result<Report, SubmitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push((
            request.document(DocumentRole::Resume).name.clone(),
            request.document(DocumentRole::JobDescription).name.clone(),
        ));

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(SubmitError::Transport("no scripted outcome".to_string())))
    }
}

/// Builds a minimal `App` rooted at `base`.
///
/// Unlike `App::with_service`, no search task is spawned, so this works
/// outside a Tokio runtime. Search results can be injected through
/// `app.event_tx`.
pub fn create_test_app(base: &Path, service: Arc<dyn AnalysisService>) -> App {
    let paths = AppPaths::new(base);
    let preferences = PreferenceStore::open(paths.preferences_file());
    let (event_tx, event_rx) = tokio::sync::mpsc::channel(16);
    let (search_tx, _search_rx) = tokio::sync::mpsc::channel(16);

    App {
        theme: Theme::for_mode(preferences.get()),
        paths,
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

/// Builds an `App` with both slots already filled.
pub fn create_ready_app(base: &Path, service: Arc<dyn AnalysisService>) -> App {
    let mut app = create_test_app(base, service);
    app.registry
        .select_file(DocumentRole::Resume, DocumentFile::new("resume.pdf", "resume bytes"));
    app.registry
        .select_file(DocumentRole::JobDescription, DocumentFile::new("job.pdf", "job bytes"));
    app
}

/// Drains events until the outstanding submission settles.
///
/// # Panics
///
/// Panics if nothing settles within two seconds.
pub async fn wait_until_settled(app: &mut App) {
    for _ in 0..400 {
        app.process_events();
        if !app.is_busy() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("submission did not settle");
}

/// Renders the app to a `TestBackend` terminal.
///
/// # Errors
///
/// Returns an error if terminal creation or rendering fails.
pub fn render_app_to_terminal(app: &App, width: u16, height: u16) -> Result<Terminal<TestBackend>> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend)?;
    terminal.draw(|f| app.render(f))?;
    Ok(terminal)
}

/// All symbols in the rendered buffer, one string per row.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (0..area.height)
        .map(|y| (0..area.width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

/// True if any rendered row contains `needle`.
pub fn screen_contains(terminal: &Terminal<TestBackend>, needle: &str) -> bool {
    buffer_text(terminal).iter().any(|row| row.contains(needle))
}
