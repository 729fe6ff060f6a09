//! Event handling logic for the App.

use std::path::PathBuf;
use std::sync::Arc;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};
use tui_textarea::{CursorMove, TextArea};

use super::App;
use crate::app::state::{
    AppEvent, AppMode, Notice, PICKER_PLACEHOLDER, PickerState, SearchQuery,
};
use crate::core::{
    DocumentRole, MISSING_DOCUMENTS_MESSAGE, SubmissionRequest, SubmitError, SubmitRejection,
};
use crate::file_search::SearchResult;
use crate::tui::debug_keys_enabled;
use crate::tui::widgets::PopupState;

impl App {
    /// Handles pasted text from bracketed paste mode.
    ///
    /// Only the picker accepts text. Line breaks and control characters are
    /// dropped, since the input holds a single path.
    pub fn handle_paste(&mut self, text: &str) {
        if self.mode != AppMode::Picker {
            return;
        }
        let Some(picker) = self.picker.as_mut() else {
            return;
        };

        let filtered: String = text.chars().filter(|c| !c.is_control()).collect();
        if filtered.is_empty() {
            return;
        }
        picker.textarea.insert_str(&filtered);
        self.request_search();
    }

    /// Handles a key event.
    ///
    /// The application operates in three modes:
    /// - **Main**: slot focus, picker shortcuts, submit and theme toggle
    /// - **Picker**: path input with document suggestions
    /// - **Notice**: blocking notification, dismissed with `Enter`/`Esc`
    pub fn handle_key(&mut self, key: KeyEvent) {
        if debug_keys_enabled() {
            debug!(code = ?key.code, modifiers = ?key.modifiers, kind = ?key.kind, mode = ?self.mode, "Key event");
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.mode {
            AppMode::Main => self.handle_main_key(key),
            AppMode::Picker => self.handle_picker_key(key),
            AppMode::Notice => self.handle_notice_key(key),
        }
    }

    fn handle_main_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
            }
            KeyCode::Enter => self.open_picker(self.focus),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.other();
            }
            KeyCode::Char('r') => self.open_picker(DocumentRole::Resume),
            KeyCode::Char('j') => self.open_picker(DocumentRole::JobDescription),
            KeyCode::Char('s') => self.submit(),
            KeyCode::Char('t') => self.toggle_dark_mode(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_notice_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.dismiss_notice();
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_picker(),
            KeyCode::Enter => self.confirm_picker(),
            KeyCode::Up => {
                if let Some(picker) = self.picker.as_mut() {
                    picker.popup.select_previous();
                }
            }
            KeyCode::Down => {
                if let Some(picker) = self.picker.as_mut() {
                    picker.popup.select_next();
                }
            }
            KeyCode::Tab => self.complete_picker_selection(),
            _ => {
                let Some(picker) = self.picker.as_mut() else {
                    return;
                };
                if picker.textarea.input(key) {
                    self.request_search();
                }
            }
        }
    }

    /// Opens the file picker for `role` and starts listing documents.
    pub(crate) fn open_picker(&mut self, role: DocumentRole) {
        self.focus = role;
        self.picker = Some(PickerState::new(role));
        self.mode = AppMode::Picker;
        self.request_search();
    }

    pub(crate) fn close_picker(&mut self) {
        self.picker = None;
        if self.mode == AppMode::Picker {
            self.mode = AppMode::Main;
        }
    }

    /// Replaces the typed text with the highlighted suggestion.
    fn complete_picker_selection(&mut self) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        let Some(selected) = picker.popup.selected_match() else {
            return;
        };
        let completed = selected.path.to_string_lossy().into_owned();
        let mut textarea = TextArea::new(vec![completed]);
        textarea.set_placeholder_text(PICKER_PLACEHOLDER);
        textarea.move_cursor(CursorMove::End);
        picker.textarea = textarea;
        self.request_search();
    }

    /// Loads the highlighted suggestion, or the typed path when there is none.
    fn confirm_picker(&mut self) {
        let Some(picker) = self.picker.as_ref() else {
            return;
        };
        let role = picker.role;
        let chosen: Option<PathBuf> = picker
            .popup
            .selected_match()
            .map(|m| m.path.clone())
            .or_else(|| {
                let typed = picker.query();
                (!typed.is_empty()).then(|| PathBuf::from(typed))
            });

        let Some(path) = chosen else {
            return;
        };

        self.close_picker();
        self.load_document(role, &path);
    }

    /// Sends the current picker query to the search task.
    fn request_search(&mut self) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        self.search_generation += 1;
        picker.generation = self.search_generation;

        let query = SearchQuery {
            query: picker.query(),
            working_dir: self.paths.base().to_path_buf(),
            generation: self.search_generation,
        };
        if self.search_tx.try_send(query).is_err() {
            debug!("Search queue full, dropping query");
        }
    }

    /// Activates the trigger.
    ///
    /// Ignored while busy. With a slot empty, a notice is shown and nothing
    /// else changes. Otherwise the request is sent in the background.
    pub fn submit(&mut self) {
        match self.submission.begin(&self.registry) {
            Ok(request) => {
                self.status = None;
                self.tick_count = 0;
                self.spawn_submission(request);
            }
            Err(SubmitRejection::Busy) => {
                debug!("Trigger ignored while busy");
            }
            Err(SubmitRejection::MissingDocuments(missing)) => {
                let names: Vec<&str> = missing.iter().map(DocumentRole::label).collect();
                self.show_notice(
                    Notice::new("Missing documents", MISSING_DOCUMENTS_MESSAGE)
                        .with_detail(format!("Missing: {}", names.join(", "))),
                );
            }
        }
    }

    /// Runs the analysis request and reports its outcome as an event.
    fn spawn_submission(&self, request: SubmissionRequest) {
        let tx = self.event_tx.clone();
        let service = Arc::clone(&self.service);
        let ticket = request.ticket;

        tokio::spawn(async move {
            // A panicking service still settles the cycle.
            let handle = tokio::spawn(async move { service.analyze(&request).await });
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(e) => Err(SubmitError::Transport(format!("Analysis task failed: {e}"))),
            };
            let _ = tx.send(AppEvent::SubmissionSettled { ticket, outcome }).await;
        });
    }

    /// Processes pending background events.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                AppEvent::SubmissionSettled { ticket, outcome } => {
                    if self.submission.settle(ticket, outcome) {
                        info!(state = self.submission.state().name(), "Result region updated");
                    }
                }
                AppEvent::SearchResult { generation, result } => {
                    self.handle_search_result(generation, result);
                }
            }
        }
    }

    /// Applies a search result if it belongs to the latest query.
    fn handle_search_result(&mut self, generation: u64, result: SearchResult) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        if generation != picker.generation {
            return;
        }
        if result.had_errors {
            debug!(inaccessible = result.inaccessible_dirs, "Document search skipped some directories");
        }

        let previous = match &picker.popup {
            PopupState::Showing { selected, .. } => *selected,
            _ => 0,
        };
        picker.popup = PopupState::from_matches(result.matches);
        if let PopupState::Showing { matches, selected } = &mut picker.popup {
            *selected = previous.min(matches.len().saturating_sub(1));
        }
    }
}
