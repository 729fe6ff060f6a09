//! File selection registry: one slot per document role.

use super::document::{DocumentFile, DocumentRole};

/// Holds at most one selected file per [`DocumentRole`].
///
/// Slots start empty and are only ever replaced, never cleared.
#[derive(Debug, Clone, Default)]
pub struct FileSelectionRegistry {
    resume: Option<DocumentFile>,
    job_description: Option<DocumentFile>,
}

impl FileSelectionRegistry {
    /// Creates a registry with both slots empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `file` in the slot for `role`, replacing any previous selection.
    pub fn select_file(&mut self, role: DocumentRole, file: DocumentFile) {
        *self.slot_mut(role) = Some(file);
    }

    /// Returns the file selected for `role`, if any.
    #[must_use]
    pub fn file(&self, role: DocumentRole) -> Option<&DocumentFile> {
        match role {
            DocumentRole::Resume => self.resume.as_ref(),
            DocumentRole::JobDescription => self.job_description.as_ref(),
        }
    }

    /// Returns true iff both roles have a file.
    #[must_use]
    pub fn readiness(&self) -> bool {
        self.resume.is_some() && self.job_description.is_some()
    }

    /// Roles that still have no file, in display order.
    #[must_use]
    pub fn missing_roles(&self) -> Vec<DocumentRole> {
        DocumentRole::all()
            .iter()
            .copied()
            .filter(|role| self.file(*role).is_none())
            .collect()
    }

    fn slot_mut(&mut self, role: DocumentRole) -> &mut Option<DocumentFile> {
        match role {
            DocumentRole::Resume => &mut self.resume,
            DocumentRole::JobDescription => &mut self.job_description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_not_ready() {
        let registry = FileSelectionRegistry::new();
        assert!(!registry.readiness());
        assert!(registry.file(DocumentRole::Resume).is_none());
        assert_eq!(
            registry.missing_roles(),
            vec![DocumentRole::Resume, DocumentRole::JobDescription]
        );
    }

    #[test]
    fn one_slot_is_not_ready() {
        let mut registry = FileSelectionRegistry::new();
        registry.select_file(DocumentRole::Resume, DocumentFile::new("r.pdf", "r"));

        assert!(!registry.readiness());
        assert_eq!(registry.missing_roles(), vec![DocumentRole::JobDescription]);
    }

    #[test]
    fn both_slots_ready() {
        let mut registry = FileSelectionRegistry::new();
        registry.select_file(DocumentRole::Resume, DocumentFile::new("r.pdf", "r"));
        registry.select_file(
            DocumentRole::JobDescription,
            DocumentFile::new("j.pdf", "j"),
        );

        assert!(registry.readiness());
        assert!(registry.missing_roles().is_empty());
    }

    #[test]
    fn last_selection_wins() {
        let mut registry = FileSelectionRegistry::new();
        registry.select_file(DocumentRole::Resume, DocumentFile::new("old.pdf", "1"));
        registry.select_file(DocumentRole::Resume, DocumentFile::new("new.docx", "2"));

        let file = registry.file(DocumentRole::Resume);
        assert_eq!(file.map(|f| f.name.as_str()), Some("new.docx"));
        assert!(registry.file(DocumentRole::JobDescription).is_none());
    }

    #[test]
    fn no_extension_validation() {
        let mut registry = FileSelectionRegistry::new();
        registry.select_file(DocumentRole::Resume, DocumentFile::new("cv.txt", ""));
        assert!(registry.file(DocumentRole::Resume).is_some());
    }
}
