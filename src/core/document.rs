//! Documents and the roles they fill in a submission.

use std::path::Path;

use anyhow::{Context, Result};

/// File extensions offered in the file picker.
///
/// This is only a filter hint. Any readable file can be selected.
pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["pdf", "docx"];

/// The two document roles a submission requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocumentRole {
    /// The candidate's resume.
    #[default]
    Resume,
    /// The job description being matched against.
    JobDescription,
}

impl DocumentRole {
    /// Multipart field name used for this role.
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Resume => "resume",
            Self::JobDescription => "job",
        }
    }

    /// Display label for this role.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Resume => "Resume",
            Self::JobDescription => "Job Description",
        }
    }

    /// Returns the other role.
    #[must_use]
    pub const fn other(&self) -> Self {
        match self {
            Self::Resume => Self::JobDescription,
            Self::JobDescription => Self::Resume,
        }
    }

    /// Returns all roles in display order.
    #[must_use]
    pub const fn all() -> &'static [DocumentRole] {
        &[Self::Resume, Self::JobDescription]
    }
}

/// A user-selected file: its name and raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    /// File name sent with the upload (no directory components).
    pub name: String,
    /// Raw file content.
    pub content: Vec<u8>,
}

impl DocumentFile {
    /// Creates a document from a name and content.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Reads a document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path has no file name or cannot be read.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("Not a file path: {}", path.display()))?;
        let content =
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self { name, content })
    }

    /// Size of the content in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns true if the file has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Human-readable size, e.g. `12.4 KB`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Display only
    pub fn size_label(&self) -> String {
        let bytes = self.content.len();
        if bytes < 1024 {
            format!("{bytes} B")
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}

/// Returns true if the path ends in one of [`ACCEPTED_EXTENSIONS`] (case-insensitive).
#[must_use]
pub fn has_accepted_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
}
