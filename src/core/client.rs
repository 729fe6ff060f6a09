//! Analysis service client.
//!
//! [`AnalysisService`] is the seam between the submission lifecycle and the
//! network. [`HttpAnalysisClient`] is the real implementation: one multipart
//! POST to `<base>/match`, no retries and no timeout.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::document::{DocumentFile, DocumentRole};
use super::report::Report;
use super::submission::SubmissionRequest;

/// Why a submission ended in the failed state.
///
/// Both variants display as the bare message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The service answered and reported an error in its `error` field.
    #[error("{0}")]
    Service(String),
    /// The request did not complete or the response could not be understood.
    #[error("{0}")]
    Transport(String),
}

impl SubmitError {
    /// Short kind name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Service(_) => "service",
            Self::Transport(_) => "transport",
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// A remote service that turns two documents into a [`Report`].
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Submits both documents and waits for the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Service`] when the service reports an error and
    /// [`SubmitError::Transport`] for network or decoding failures.
    async fn analyze(&self, request: &SubmissionRequest) -> Result<Report, SubmitError>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP implementation of [`AnalysisService`].
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    client: Client,
    endpoint: Url,
}

impl HttpAnalysisClient {
    /// Creates a client posting to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: Url) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("resume-matcher/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, endpoint })
    }

    fn build_form(request: &SubmissionRequest) -> Result<Form, SubmitError> {
        let mut form = Form::new();
        for role in DocumentRole::all() {
            form = form.part(role.field_name(), file_part(request.document(*role))?);
        }
        Ok(form)
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisClient {
    async fn analyze(&self, request: &SubmissionRequest) -> Result<Report, SubmitError> {
        let form = Self::build_form(request)?;

        debug!(endpoint = %self.endpoint, ticket = request.ticket.id(), "Posting documents");
        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(%status, bytes = body.len(), "Analysis service responded");

        interpret_response(status, &body)
    }
}

fn file_part(file: &DocumentFile) -> Result<Part, SubmitError> {
    let part = Part::bytes(file.content.clone()).file_name(file.name.clone());
    Ok(part.mime_str(mime_for(&file.name))?)
}

fn mime_for(name: &str) -> &'static str {
    let lower = name.to_ascii_lowercase();
    if lower.ends_with(".pdf") {
        "application/pdf"
    } else if lower.ends_with(".docx") {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    } else {
        "application/octet-stream"
    }
}

/// Maps a raw HTTP response onto a report or a submission error.
///
/// A body with a non-empty string `error` field is a service error regardless
/// of the status code. Otherwise a non-2xx status is a generic failure and a
/// 2xx body must decode as a [`Report`].
///
/// # Errors
///
/// Returns the [`SubmitError`] the response represents.
pub fn interpret_response(status: StatusCode, body: &[u8]) -> Result<Report, SubmitError> {
    if let Ok(ErrorBody { error }) = serde_json::from_slice::<ErrorBody>(body)
        && !error.is_empty()
    {
        return Err(SubmitError::Service(error));
    }

    if !status.is_success() {
        return Err(SubmitError::Transport(format!(
            "Request failed with status code {}",
            status.as_u16()
        )));
    }

    serde_json::from_slice::<Report>(body).map_err(|e| {
        SubmitError::Transport(format!("Malformed response from analysis service: {e}"))
    })
}
