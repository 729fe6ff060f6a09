//! Document search for the file picker.
//!
//! Walks the working directory with the `ignore` crate and ranks candidate
//! documents with `nucleo-matcher`. Only files with an accepted extension are
//! offered; typing a path directly bypasses this filter.

use ignore::WalkBuilder;
use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use std::path::{Path, PathBuf};

use crate::core::has_accepted_extension;

/// Maximum number of document matches to return.
pub const MAX_DOCUMENT_MATCHES: usize = 8;

/// A single document match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMatch {
    /// The path relative to the search root.
    pub path: PathBuf,
    /// The fuzzy match score (higher is better).
    pub score: u32,
}

/// Result of a document search.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// Matching documents, best first.
    pub matches: Vec<DocumentMatch>,
    /// Number of directories that could not be accessed.
    pub inaccessible_dirs: usize,
    /// True if any errors occurred during the walk.
    pub had_errors: bool,
}

/// Searches `working_dir` for documents matching `query`.
///
/// An empty query lists documents alphabetically. Returns at most
/// [`MAX_DOCUMENT_MATCHES`] results.
#[must_use]
pub fn search_documents(query: &str, working_dir: &Path) -> SearchResult {
    let mut result = SearchResult::default();

    let walker = WalkBuilder::new(working_dir)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .follow_links(true)
        .build();

    let mut candidates: Vec<PathBuf> = Vec::new();

    for entry_result in walker {
        match entry_result {
            Ok(entry) => {
                let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
                if !is_file || !has_accepted_extension(entry.path()) {
                    continue;
                }
                if let Ok(relative_path) = entry.path().strip_prefix(working_dir) {
                    candidates.push(relative_path.to_path_buf());
                }
            }
            Err(e) => {
                result.had_errors = true;
                if let Some(io_error) = e.io_error()
                    && io_error.kind() == std::io::ErrorKind::PermissionDenied
                {
                    result.inaccessible_dirs += 1;
                }
            }
        }
    }

    if query.is_empty() {
        candidates.sort();
        result.matches = candidates
            .into_iter()
            .take(MAX_DOCUMENT_MATCHES)
            .map(|path| DocumentMatch { path, score: 0 })
            .collect();
        return result;
    }

    let mut fuzzy_matcher = Matcher::new(Config::DEFAULT);
    let atom = Atom::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
        false,
    );

    let mut matches: Vec<DocumentMatch> = Vec::new();
    let mut haystack_buf = Vec::new();
    for path in candidates {
        let path_str = path.to_string_lossy();
        let haystack = Utf32Str::new(&path_str, &mut haystack_buf);
        if let Some(score) = atom.score(haystack, &mut fuzzy_matcher) {
            matches.push(DocumentMatch {
                path: path.clone(),
                score: u32::from(score),
            });
        }
    }

    matches.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.path.cmp(&b.path)));
    matches.truncate(MAX_DOCUMENT_MATCHES);
    result.matches = matches;
    result
}
