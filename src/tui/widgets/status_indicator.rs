//! Submit trigger with busy indicator.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::tui::Theme;

/// Label shown while idle or settled.
pub const TRIGGER_LABEL: &str = "Generate Match Report";

/// Label shown while a submission is in flight.
pub const BUSY_LABEL: &str = "Analyzing Documents...";

/// Spinner frames cycled while busy.
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// The submit trigger.
///
/// While busy it shows a spinner and [`BUSY_LABEL`] in the disabled style.
pub struct StatusIndicatorWidget<'a> {
    busy: bool,
    ready: bool,
    spinner_frame: usize,
    theme: &'a Theme,
}

impl<'a> StatusIndicatorWidget<'a> {
    /// Creates the trigger widget.
    ///
    /// `ready` dims the label hint when a document is still missing; the
    /// trigger stays usable so the missing-document notice can be shown.
    #[must_use]
    pub const fn new(busy: bool, ready: bool, spinner_frame: usize, theme: &'a Theme) -> Self {
        Self {
            busy,
            ready,
            spinner_frame,
            theme,
        }
    }

    fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }
}

impl Widget for StatusIndicatorWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (line, border_style) = if self.busy {
            (
                Line::from(vec![
                    Span::styled(format!("{} ", self.spinner()), self.theme.highlight_style()),
                    Span::styled(BUSY_LABEL, self.theme.disabled_style()),
                ]),
                self.theme.disabled_style(),
            )
        } else {
            let hint = if self.ready {
                Span::styled("  [s]", self.theme.highlight_style())
            } else {
                Span::styled("  [s] select both files first", self.theme.muted_style())
            };
            (
                Line::from(vec![
                    Span::styled(TRIGGER_LABEL, self.theme.header_style()),
                    hint,
                ]),
                self.theme.focus_border_style(),
            )
        };

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .render(area, buf);
    }
}
