//! Submission lifecycle state machine.
//!
//! ```text
//! Idle ──begin──▶ InFlight ──settle(Ok)──▶ Succeeded(Report)
//!   ▲                 │                          │
//!   │                 └──settle(Err)──▶ Failed(msg)
//!   │                                            │
//!   └──────── settled states re-enter InFlight via begin
//! ```
//!
//! `begin` is the only way into `InFlight` and `settle` the only way out.
//! There is no cancellation: once a request is in flight, further `begin`
//! calls are rejected until it settles.

use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::{info, warn};

use super::client::SubmitError;
use super::document::{DocumentFile, DocumentRole};
use super::registry::FileSelectionRegistry;
use super::report::Report;

/// Message shown when a submission is attempted without both documents.
pub const MISSING_DOCUMENTS_MESSAGE: &str = "Upload both files.";

/// Lifecycle state of the current submission cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is outstanding.
    InFlight,
    /// The last request returned a report.
    Succeeded(Report),
    /// The last request failed with this message.
    Failed(String),
}

impl SubmissionState {
    /// True exactly while a request is outstanding.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// True for `Succeeded` and `Failed`.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Succeeded(_) | Self::Failed(_))
    }

    /// Short state name for logs and the status line.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::InFlight => "in flight",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}

/// Identifies one submission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionTicket(u64);

impl SubmissionTicket {
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.0
    }
}

/// Why `begin` refused to start a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    /// A request is already outstanding.
    #[error("A submission is already in progress")]
    Busy,
    /// One or both document slots are empty.
    #[error("{}", MISSING_DOCUMENTS_MESSAGE)]
    MissingDocuments(Vec<DocumentRole>),
}

/// Owned snapshot of the two documents for one request.
#[derive(Debug, Clone)]
pub struct SubmissionRequest {
    /// Cycle this request belongs to.
    pub ticket: SubmissionTicket,
    /// The resume document.
    pub resume: DocumentFile,
    /// The job description document.
    pub job_description: DocumentFile,
}

impl SubmissionRequest {
    /// Returns the document for `role`.
    #[must_use]
    pub const fn document(&self, role: DocumentRole) -> &DocumentFile {
        match role {
            DocumentRole::Resume => &self.resume,
            DocumentRole::JobDescription => &self.job_description,
        }
    }
}

/// Drives [`SubmissionState`] transitions.
#[derive(Debug, Default)]
pub struct SubmissionController {
    state: SubmissionState,
    in_flight: Option<SubmissionTicket>,
    next_ticket: u64,
    settled_at: Option<DateTime<Local>>,
}

impl SubmissionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Busy flag: true iff the state is `InFlight`.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    /// Wall-clock time the current settled state was reached.
    #[must_use]
    pub const fn settled_at(&self) -> Option<DateTime<Local>> {
        self.settled_at
    }

    /// Starts a submission cycle.
    ///
    /// On success the state is `InFlight` and the returned request carries
    /// owned copies of both documents. On rejection the state is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejection::Busy`] while a request is outstanding and
    /// [`SubmitRejection::MissingDocuments`] when either slot is empty.
    pub fn begin(
        &mut self,
        registry: &FileSelectionRegistry,
    ) -> Result<SubmissionRequest, SubmitRejection> {
        if self.is_busy() {
            return Err(SubmitRejection::Busy);
        }

        let (Some(resume), Some(job_description)) = (
            registry.file(DocumentRole::Resume),
            registry.file(DocumentRole::JobDescription),
        ) else {
            let missing = registry.missing_roles();
            info!(?missing, "Submission rejected: documents missing");
            return Err(SubmitRejection::MissingDocuments(missing));
        };

        self.next_ticket += 1;
        let ticket = SubmissionTicket(self.next_ticket);
        self.in_flight = Some(ticket);
        self.state = SubmissionState::InFlight;
        self.settled_at = None;

        info!(
            ticket = ticket.id(),
            resume = %resume.name,
            resume_bytes = resume.len(),
            job = %job_description.name,
            job_bytes = job_description.len(),
            "Submission started"
        );

        Ok(SubmissionRequest {
            ticket,
            resume: resume.clone(),
            job_description: job_description.clone(),
        })
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// Returns `false` and leaves the state unchanged if `ticket` is not the
    /// outstanding request.
    pub fn settle(&mut self, ticket: SubmissionTicket, outcome: Result<Report, SubmitError>) -> bool {
        if self.in_flight != Some(ticket) {
            warn!(ticket = ticket.id(), "Ignoring settlement for a request that is not in flight");
            return false;
        }

        self.in_flight = None;
        self.settled_at = Some(Local::now());
        self.state = match outcome {
            Ok(report) => {
                info!(
                    ticket = ticket.id(),
                    score = report.score_percent(),
                    skills = report.skill_series.len(),
                    "Submission succeeded"
                );
                SubmissionState::Succeeded(report)
            }
            Err(err) => {
                warn!(ticket = ticket.id(), kind = err.kind(), error = %err, "Submission failed");
                SubmissionState::Failed(err.to_string())
            }
        };
        true
    }
}
