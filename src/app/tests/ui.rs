//! Rendering tests using `TestBackend`.

use tempfile::TempDir;

use super::helpers::*;
use crate::core::{DocumentFile, DocumentRole, SubmissionState, SubmitError};
use crate::tui::widgets::{BUSY_LABEL, TRIGGER_LABEL};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 30;

#[test]
fn empty_screen_shows_slots_and_trigger() {
    let dir = TempDir::new().unwrap();
    let app = create_test_app(dir.path(), ScriptedService::new([Ok(sample_report())]));
    let terminal = render_app_to_terminal(&app, WIDTH, HEIGHT).unwrap();

    assert!(screen_contains(&terminal, "Resume Matcher"));
    assert!(screen_contains(&terminal, "Resume (PDF/DOCX)"));
    assert!(screen_contains(&terminal, "Job Description (PDF/DOCX)"));
    assert!(screen_contains(&terminal, "not selected"));
    assert!(screen_contains(&terminal, TRIGGER_LABEL));
    assert!(screen_contains(&terminal, "light theme"));
    assert!(!screen_contains(&terminal, "Match Score"));
}

#[test]
fn selected_documents_show_name_and_size() {
    let dir = TempDir::new().unwrap();
    let mut app = create_test_app(dir.path(), ScriptedService::new([Ok(sample_report())]));
    app.registry
        .select_file(DocumentRole::Resume, DocumentFile::new("jane_doe.pdf", vec![0u8; 2048]));

    let terminal = render_app_to_terminal(&app, WIDTH, HEIGHT).unwrap();

    assert!(screen_contains(&terminal, "jane_doe.pdf"));
    assert!(screen_contains(&terminal, "2.0 KB"));
}

#[test]
fn busy_trigger_shows_progress_label() {
    let dir = TempDir::new().unwrap();
    let mut app = create_ready_app(dir.path(), ScriptedService::new([Ok(sample_report())]));
    app.submission.begin(&app.registry).unwrap();

    let terminal = render_app_to_terminal(&app, WIDTH, HEIGHT).unwrap();

    assert!(screen_contains(&terminal, BUSY_LABEL));
    assert!(!screen_contains(&terminal, TRIGGER_LABEL));
}

#[test]
fn report_shows_score_insights_and_chart() {
    let dir = TempDir::new().unwrap();
    let mut app = create_ready_app(dir.path(), ScriptedService::new([Ok(sample_report())]));
    let request = app.submission.begin(&app.registry).unwrap();
    app.submission.settle(request.ticket, Ok(sample_report()));

    let terminal = render_app_to_terminal(&app, WIDTH, HEIGHT).unwrap();

    assert!(screen_contains(&terminal, "Match Score: 82%"));
    assert!(screen_contains(&terminal, "Strong Python background"));
    assert!(screen_contains(&terminal, "Skill Analysis Breakdown"));
    assert!(screen_contains(&terminal, "Python"));
    assert!(screen_contains(&terminal, "Analyzed at"));
    assert!(screen_contains(&terminal, TRIGGER_LABEL));
}

#[test]
fn failure_shows_only_the_message() {
    let dir = TempDir::new().unwrap();
    let mut app = create_ready_app(dir.path(), ScriptedService::new([Ok(sample_report())]));
    let request = app.submission.begin(&app.registry).unwrap();
    app.submission.settle(
        request.ticket,
        Err(SubmitError::Service("Unsupported file type".to_string())),
    );

    let terminal = render_app_to_terminal(&app, WIDTH, HEIGHT).unwrap();

    assert!(screen_contains(&terminal, "Unsupported file type"));
    assert!(!screen_contains(&terminal, "Match Score"));
    assert!(!screen_contains(&terminal, "Skill Analysis Breakdown"));
}

#[test]
fn status_fallback_failure_is_visible() {
    let dir = TempDir::new().unwrap();
    let mut app = create_ready_app(dir.path(), ScriptedService::new([Ok(sample_report())]));
    let request = app.submission.begin(&app.registry).unwrap();
    app.submission.settle(
        request.ticket,
        Err(SubmitError::Transport(
            "Request failed with status code 400".to_string(),
        )),
    );

    let terminal = render_app_to_terminal(&app, WIDTH, HEIGHT).unwrap();

    assert!(screen_contains(&terminal, "Request failed with status code 400"));
}

#[test]
fn theme_toggle_changes_colors_not_content() {
    let dir = TempDir::new().unwrap();
    let mut app = create_ready_app(dir.path(), ScriptedService::new([Ok(sample_report())]));
    let request = app.submission.begin(&app.registry).unwrap();
    app.submission.settle(request.ticket, Ok(sample_report()));
    let before_state = app.submission_state().clone();

    let light = render_app_to_terminal(&app, WIDTH, HEIGHT).unwrap();
    app.toggle_dark_mode();
    let dark = render_app_to_terminal(&app, WIDTH, HEIGHT).unwrap();

    assert_eq!(app.submission_state(), &before_state);
    assert!(matches!(app.submission_state(), SubmissionState::Succeeded(_)));

    // Only the header theme indicator differs in text.
    let light_rows = buffer_text(&light);
    let dark_rows = buffer_text(&dark);
    assert_eq!(light_rows[1..], dark_rows[1..]);
    assert!(light_rows[0].contains("light theme"));
    assert!(dark_rows[0].contains("dark theme"));

    let light_bg = light.backend().buffer()[(0, 5)].style().bg;
    let dark_bg = dark.backend().buffer()[(0, 5)].style().bg;
    assert_ne!(light_bg, dark_bg);
}

#[test]
fn missing_documents_notice_is_rendered() {
    let dir = TempDir::new().unwrap();
    let mut app = create_test_app(dir.path(), ScriptedService::new([Ok(sample_report())]));
    app.submit();

    let terminal = render_app_to_terminal(&app, WIDTH, HEIGHT).unwrap();

    assert!(screen_contains(&terminal, "Missing documents"));
    assert!(screen_contains(&terminal, "Upload both files."));
}

#[test]
fn picker_overlay_shows_role_and_suggestions_state() {
    let dir = TempDir::new().unwrap();
    let mut app = create_test_app(dir.path(), ScriptedService::new([Ok(sample_report())]));
    app.open_picker(DocumentRole::JobDescription);

    let terminal = render_app_to_terminal(&app, WIDTH, HEIGHT).unwrap();

    assert!(screen_contains(&terminal, "Choose Job Description"));
    assert!(screen_contains(&terminal, "Searching..."));
}
