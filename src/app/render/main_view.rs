//! Main screen rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::{App, calculate_main_layout};
use crate::core::DocumentRole;
use crate::tui::widgets::StatusIndicatorWidget;

/// Application title shown in the header.
const APP_TITLE: &str = "Resume Matcher";

impl App {
    pub(crate) fn render_main(&self, frame: &mut Frame) {
        let layout = calculate_main_layout(frame.area());

        self.render_header(frame, layout.header);
        self.render_slot(frame, layout.resume_slot, DocumentRole::Resume);
        self.render_slot(frame, layout.job_slot, DocumentRole::JobDescription);
        frame.render_widget(
            StatusIndicatorWidget::new(
                self.is_busy(),
                self.registry.readiness(),
                self.tick_count,
                &self.theme,
            ),
            layout.trigger,
        );
        self.render_result(frame, layout.result);
        self.render_footer(frame, layout.footer);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {APP_TITLE}"),
                self.theme.header_style(),
            ))),
            area,
        );

        let mode = if self.theme.dark { "dark" } else { "light" };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("[t] ", self.theme.muted_style()),
                Span::styled(format!("{mode} theme "), self.theme.normal_style()),
            ]))
            .alignment(Alignment::Right),
            area,
        );
    }

    fn render_slot(&self, frame: &mut Frame, area: Rect, role: DocumentRole) {
        let focused = self.focus == role;
        let border_style = if focused {
            self.theme.focus_border_style()
        } else {
            self.theme.border_style()
        };
        let shortcut = match role {
            DocumentRole::Resume => "r",
            DocumentRole::JobDescription => "j",
        };

        let block = Block::bordered()
            .title(format!(" {} (PDF/DOCX) ", role.label()))
            .title_style(self.theme.header_style())
            .title_bottom(Line::from(Span::styled(
                format!(" [{shortcut}] choose "),
                self.theme.muted_style(),
            )))
            .border_style(border_style);

        let content = match self.registry.file(role) {
            Some(file) => Line::from(vec![
                Span::styled(file.name.clone(), self.theme.normal_style()),
                Span::styled(format!("  {}", file.size_label()), self.theme.muted_style()),
            ]),
            None => Line::from(Span::styled("not selected", self.theme.placeholder_style())),
        };

        frame.render_widget(Paragraph::new(content).block(block), area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.status {
            Some(status) => Line::from(Span::styled(format!(" {status}"), self.theme.muted_style())),
            None => Line::from(vec![
                Span::styled(" Tab", self.theme.highlight_style()),
                Span::styled(" focus  ", self.theme.muted_style()),
                Span::styled("Enter", self.theme.highlight_style()),
                Span::styled(" choose file  ", self.theme.muted_style()),
                Span::styled("s", self.theme.highlight_style()),
                Span::styled(" generate  ", self.theme.muted_style()),
                Span::styled("t", self.theme.highlight_style()),
                Span::styled(" theme  ", self.theme.muted_style()),
                Span::styled("q", self.theme.highlight_style()),
                Span::styled(" quit", self.theme.muted_style()),
            ]),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}
