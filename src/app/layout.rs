//! Layout calculation helpers for the TUI.
//!
//! Single source of truth for the main screen regions, used by both
//! `App::update_layout` and rendering.

use ratatui::layout::{Constraint, Layout, Rect};

/// Regions of the main screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MainLayout {
    /// Title line.
    pub header: Rect,
    /// Resume slot.
    pub resume_slot: Rect,
    /// Job description slot.
    pub job_slot: Rect,
    /// Submit trigger.
    pub trigger: Rect,
    /// Result region (empty, error, or report).
    pub result: Rect,
    /// Key hints and status messages.
    pub footer: Rect,
}

const MAIN_LAYOUT_CONSTRAINTS: [Constraint; 6] = [
    Constraint::Length(1), // Header
    Constraint::Length(3), // Resume slot
    Constraint::Length(3), // Job description slot
    Constraint::Length(3), // Trigger
    Constraint::Min(6),    // Result region (grows)
    Constraint::Length(1), // Footer
];

/// Calculates the main screen layout.
#[must_use]
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::vertical(MAIN_LAYOUT_CONSTRAINTS).split(area);
    MainLayout {
        header: chunks[0],
        resume_slot: chunks[1],
        job_slot: chunks[2],
        trigger: chunks[3],
        result: chunks[4],
        footer: chunks[5],
    }
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
