//! Submission lifecycle tests.
//!
//! Drives `App::submit` against a scripted analysis service:
//! - Successful and failed requests settle exactly once
//! - Missing documents block the request and raise a notice
//! - The trigger is inert while a request is in flight
//! - Selections survive every outcome

use ratatui::crossterm::event::KeyCode;
use tempfile::TempDir;

use super::helpers::*;
use crate::app::{AppMode, ResultView};
use crate::core::{
    DocumentFile, DocumentRole, MISSING_DOCUMENTS_MESSAGE, SubmissionState, SubmitError,
};

#[tokio::test]
async fn successful_submission_renders_report() {
    let dir = TempDir::new().unwrap();
    let service = ScriptedService::new([Ok(sample_report())]);
    let mut app = create_ready_app(dir.path(), service.clone());

    app.handle_key(char_key('s'));
    assert!(app.is_busy());
    assert_eq!(app.submission_state(), &SubmissionState::InFlight);

    wait_until_settled(&mut app).await;

    assert_eq!(service.calls(), 1);
    let ResultView::Report(view) = ResultView::from_state(app.submission_state()) else {
        panic!("expected a report, got {:?}", app.submission_state());
    };
    assert_eq!(view.score_line(), "Match Score: 82%");
    let labels: Vec<&str> = view.bars.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, ["Python", "Cloud"]);
    assert_eq!(view.bars[0].value, 90);
    assert_eq!(view.bars[1].value, 60);
    assert!(app.submission.settled_at().is_some());
}

#[tokio::test]
async fn service_error_is_shown_verbatim() {
    let dir = TempDir::new().unwrap();
    let service = ScriptedService::new([Err(SubmitError::Service(
        "Unsupported file type".to_string(),
    ))]);
    let mut app = create_ready_app(dir.path(), service);

    app.submit();
    wait_until_settled(&mut app).await;

    assert_eq!(
        app.submission_state(),
        &SubmissionState::Failed("Unsupported file type".to_string())
    );
    assert_eq!(
        ResultView::from_state(app.submission_state()),
        ResultView::Error("Unsupported file type".to_string())
    );
}

#[tokio::test]
async fn transport_failure_settles_as_failed() {
    let dir = TempDir::new().unwrap();
    let service = ScriptedService::new([Err(SubmitError::Transport(
        "connection refused".to_string(),
    ))]);
    let mut app = create_ready_app(dir.path(), service);

    app.submit();
    wait_until_settled(&mut app).await;

    assert!(matches!(app.submission_state(), SubmissionState::Failed(msg) if msg.contains("connection refused")));
    assert!(!app.is_busy());
}

#[tokio::test]
async fn missing_job_description_blocks_submission() {
    let dir = TempDir::new().unwrap();
    let service = ScriptedService::new([Ok(sample_report())]);
    let mut app = create_test_app(dir.path(), service.clone());
    app.registry
        .select_file(DocumentRole::Resume, DocumentFile::new("resume.pdf", "bytes"));

    app.handle_key(char_key('s'));

    assert_eq!(app.submission_state(), &SubmissionState::Idle);
    assert!(!app.is_busy());
    assert_eq!(app.mode(), AppMode::Notice);
    let notice = app.notice().unwrap();
    assert_eq!(notice.message, MISSING_DOCUMENTS_MESSAGE);
    assert_eq!(notice.detail.as_deref(), Some("Missing: Job Description"));

    tokio::task::yield_now().await;
    assert_eq!(service.calls(), 0);
}

#[tokio::test]
async fn missing_documents_keep_previous_result() {
    let dir = TempDir::new().unwrap();
    let service = ScriptedService::new([Ok(sample_report())]);
    let mut app = create_ready_app(dir.path(), service.clone());
    app.submit();
    wait_until_settled(&mut app).await;

    app.registry = crate::core::FileSelectionRegistry::new();
    app.submit();

    assert!(matches!(app.submission_state(), SubmissionState::Succeeded(_)));
    assert_eq!(app.mode(), AppMode::Notice);
    assert_eq!(service.calls(), 1);
}

#[tokio::test]
async fn trigger_is_inert_while_busy() {
    let dir = TempDir::new().unwrap();
    let service = ScriptedService::gated([Ok(sample_report()), Ok(sample_report())]);
    let mut app = create_ready_app(dir.path(), service.clone());

    app.handle_key(char_key('s'));
    for _ in 0..100 {
        if service.calls() == 1 {
            break;
        }
        tokio::task::yield_now().await;
    }
    app.handle_key(char_key('s'));
    app.handle_key(ctrl_key(KeyCode::Enter));
    tokio::task::yield_now().await;

    assert!(app.is_busy());
    assert_eq!(service.calls(), 1);

    service.release();
    wait_until_settled(&mut app).await;

    assert_eq!(service.calls(), 1);
    assert!(matches!(app.submission_state(), SubmissionState::Succeeded(_)));
}

#[tokio::test]
async fn resubmitting_after_settle_starts_a_new_cycle() {
    let dir = TempDir::new().unwrap();
    let service = ScriptedService::new([
        Err(SubmitError::Service("Unsupported file type".to_string())),
        Ok(sample_report()),
    ]);
    let mut app = create_ready_app(dir.path(), service.clone());

    app.submit();
    wait_until_settled(&mut app).await;
    assert!(matches!(app.submission_state(), SubmissionState::Failed(_)));

    app.submit();
    assert_eq!(app.submission_state(), &SubmissionState::InFlight);
    wait_until_settled(&mut app).await;

    assert_eq!(service.calls(), 2);
    assert!(matches!(app.submission_state(), SubmissionState::Succeeded(_)));
}

#[tokio::test]
async fn selections_are_retained_after_settle() {
    let dir = TempDir::new().unwrap();
    let service = ScriptedService::new([
        Ok(sample_report()),
        Err(SubmitError::Service("bad".to_string())),
    ]);
    let mut app = create_ready_app(dir.path(), service.clone());

    app.submit();
    wait_until_settled(&mut app).await;
    app.submit();
    wait_until_settled(&mut app).await;

    assert_eq!(
        app.registry().file(DocumentRole::Resume).map(|f| f.name.as_str()),
        Some("resume.pdf")
    );
    assert_eq!(
        app.registry()
            .file(DocumentRole::JobDescription)
            .map(|f| f.name.as_str()),
        Some("job.pdf")
    );
    assert_eq!(
        service.requests(),
        vec![
            ("resume.pdf".to_string(), "job.pdf".to_string()),
            ("resume.pdf".to_string(), "job.pdf".to_string()),
        ]
    );
}

#[tokio::test]
async fn latest_selection_is_sent() {
    let dir = TempDir::new().unwrap();
    let service = ScriptedService::new([Ok(sample_report())]);
    let mut app = create_ready_app(dir.path(), service.clone());
    app.registry
        .select_file(DocumentRole::Resume, DocumentFile::new("resume_v2.docx", "newer"));

    app.submit();
    wait_until_settled(&mut app).await;

    assert_eq!(
        service.requests(),
        vec![("resume_v2.docx".to_string(), "job.pdf".to_string())]
    );
}

#[tokio::test]
async fn quitting_while_busy_is_allowed() {
    let dir = TempDir::new().unwrap();
    let service = ScriptedService::gated([Ok(sample_report())]);
    let mut app = create_ready_app(dir.path(), service);

    app.submit();
    app.handle_key(char_key('q'));

    assert!(app.is_busy());
    assert!(app.should_quit());
}
