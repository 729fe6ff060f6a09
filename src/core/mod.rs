//! Core submission logic: documents, the selection registry, the submission
//! state machine and the analysis service client.

pub mod client;
pub mod document;
pub mod registry;
pub mod report;
pub mod submission;

pub use client::{AnalysisService, HttpAnalysisClient, SubmitError, interpret_response};
pub use document::{ACCEPTED_EXTENSIONS, DocumentFile, DocumentRole, has_accepted_extension};
pub use registry::FileSelectionRegistry;
pub use report::{Report, SkillDatum, clamp_percent};
pub use submission::{
    MISSING_DOCUMENTS_MESSAGE, SubmissionController, SubmissionRequest, SubmissionState,
    SubmissionTicket, SubmitRejection,
};
