//! Document suggestion list for the file picker.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, Widget},
};

use crate::file_search::DocumentMatch;
use crate::tui::Theme;

/// Maximum number of visible rows in the suggestion list.
pub const MAX_POPUP_ROWS: usize = 8;

/// State of the suggestion list.
#[derive(Debug, Clone, Default)]
pub enum PopupState {
    /// No search has completed yet.
    #[default]
    Loading,
    /// The search found nothing.
    NoMatches,
    /// Showing suggestions.
    Showing {
        /// The matched documents.
        matches: Vec<DocumentMatch>,
        /// Currently selected index (0-indexed).
        selected: usize,
    },
}

impl PopupState {
    /// Builds the state for a finished search.
    #[must_use]
    pub fn from_matches(matches: Vec<DocumentMatch>) -> Self {
        if matches.is_empty() {
            Self::NoMatches
        } else {
            Self::Showing {
                matches,
                selected: 0,
            }
        }
    }

    /// Returns the number of matches if in Showing state.
    #[must_use]
    pub fn match_count(&self) -> usize {
        match self {
            Self::Showing { matches, .. } => matches.len(),
            _ => 0,
        }
    }

    /// Returns the currently selected match.
    #[must_use]
    pub fn selected_match(&self) -> Option<&DocumentMatch> {
        match self {
            Self::Showing { matches, selected } => matches.get(*selected),
            _ => None,
        }
    }

    /// Moves the selection up, wrapping to the bottom.
    pub fn select_previous(&mut self) {
        if let Self::Showing { matches, selected } = self {
            let count = matches.len().min(MAX_POPUP_ROWS);
            if count > 0 {
                *selected = if *selected == 0 { count - 1 } else { *selected - 1 };
            }
        }
    }

    /// Moves the selection down, wrapping to the top.
    pub fn select_next(&mut self) {
        if let Self::Showing { matches, selected } = self {
            let count = matches.len().min(MAX_POPUP_ROWS);
            if count > 0 {
                *selected = (*selected + 1) % count;
            }
        }
    }
}

/// Renders the suggestion list inside the picker modal.
pub struct FileSuggestionPopup<'a> {
    state: &'a PopupState,
    theme: &'a Theme,
}

impl<'a> FileSuggestionPopup<'a> {
    #[must_use]
    pub const fn new(state: &'a PopupState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for FileSuggestionPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.state {
            PopupState::Loading => {
                Line::from("Searching...")
                    .style(self.theme.muted_style())
                    .render(area, buf);
            }
            PopupState::NoMatches => {
                Line::from("No .pdf or .docx files match (Enter uses the typed path)")
                    .style(self.theme.muted_style())
                    .render(area, buf);
            }
            PopupState::Showing { matches, selected } => {
                let items: Vec<ListItem> = matches
                    .iter()
                    .enumerate()
                    .take(MAX_POPUP_ROWS)
                    .map(|(i, doc)| {
                        let is_selected = i == *selected;
                        let style = if is_selected {
                            self.theme.highlight_style()
                        } else {
                            self.theme.normal_style()
                        };
                        let prefix = if is_selected { "> " } else { "  " };
                        ListItem::new(Line::from(vec![
                            Span::styled(prefix, style),
                            Span::styled(doc.path.display().to_string(), style),
                        ]))
                    })
                    .collect();

                Widget::render(List::new(items), area, buf);
            }
        }
    }
}
