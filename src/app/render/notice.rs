//! Notification modal rendering.

use ratatui::{
    Frame,
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
};

use crate::app::{App, centered_rect};

const NOTICE_WIDTH: u16 = 48;
const NOTICE_HEIGHT: u16 = 8;

impl App {
    /// Renders the blocking notification as a centered overlay.
    pub(crate) fn render_notice(&self, frame: &mut Frame) {
        let Some(notice) = &self.notice else {
            return;
        };

        let area = centered_rect(NOTICE_WIDTH, NOTICE_HEIGHT, frame.area());
        frame.render_widget(Clear, area);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(notice.message.as_str(), self.theme.warning_style())),
        ];
        if let Some(detail) = &notice.detail {
            lines.push(Line::from(Span::styled(detail.as_str(), self.theme.muted_style())));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Enter", self.theme.highlight_style()),
            Span::styled(" / ", self.theme.muted_style()),
            Span::styled("Esc", self.theme.highlight_style()),
            Span::styled(" dismiss", self.theme.muted_style()),
        ]));

        let block = Block::bordered()
            .title(format!(" {} ", notice.title))
            .title_style(self.theme.header_style())
            .border_style(self.theme.warning_style())
            .style(self.theme.base_style());

        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            area,
        );
    }
}
