//! File picker modal rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear},
};

use crate::app::{App, centered_rect};
use crate::tui::widgets::{FileSuggestionPopup, MAX_POPUP_ROWS};

const PICKER_WIDTH: u16 = 72;

impl App {
    /// Renders the picker as a centered overlay.
    pub(crate) fn render_picker(&self, frame: &mut Frame) {
        let Some(picker) = &self.picker else {
            return;
        };

        // Input (3) + suggestions + outer border (2)
        #[allow(clippy::cast_possible_truncation)] // MAX_POPUP_ROWS is small
        let height = 3 + MAX_POPUP_ROWS as u16 + 2;
        let popup_area = centered_rect(PICKER_WIDTH, height, frame.area());
        frame.render_widget(Clear, popup_area);

        let outer = Block::bordered()
            .title(format!(" Choose {} ", picker.role.label()))
            .title_style(self.theme.header_style())
            .title_bottom(Line::from(vec![
                Span::styled(" Enter", self.theme.highlight_style()),
                Span::styled(" select  ", self.theme.muted_style()),
                Span::styled("Tab", self.theme.highlight_style()),
                Span::styled(" complete  ", self.theme.muted_style()),
                Span::styled("Esc", self.theme.highlight_style()),
                Span::styled(" cancel ", self.theme.muted_style()),
            ]))
            .border_style(self.theme.focus_border_style())
            .style(self.theme.base_style());
        let inner = outer.inner(popup_area);
        frame.render_widget(outer, popup_area);

        let [input_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(inner);

        let mut textarea = picker.textarea.clone();
        textarea.set_block(
            Block::bordered()
                .title(" Path ")
                .border_style(self.theme.border_style()),
        );
        textarea.set_style(self.theme.normal_style());
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_style(self.theme.placeholder_style());
        frame.render_widget(&textarea, input_area);

        frame.render_widget(FileSuggestionPopup::new(&picker.popup, &self.theme), list_area);
    }
}
