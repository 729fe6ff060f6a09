//! Result region: empty, an error message, or a match report.
//!
//! [`ResultView::from_state`] is a pure projection of the submission state.
//! The theme only affects how the view is drawn, never what it contains.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
};

use crate::app::App;
use crate::core::{Report, SubmissionState};
use crate::tui::widgets::{ChartBar, SkillChartWidget};

/// Title of the result region.
const RESULT_TITLE: &str = " Match Report ";

/// Displayable content of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportView {
    /// Score as an integer percentage.
    pub score_percent: u8,
    /// Narrative text, verbatim.
    pub insights: String,
    /// Chart bars in the order the service sent them.
    pub bars: Vec<ChartBar>,
}

impl ReportView {
    #[must_use]
    pub fn from_report(report: &Report) -> Self {
        Self {
            score_percent: report.score_percent(),
            insights: report.insights.clone(),
            bars: report
                .skill_series
                .iter()
                .map(|datum| ChartBar {
                    label: datum.name.clone(),
                    value: datum.bar_value(),
                })
                .collect(),
        }
    }

    /// Headline line, e.g. `Match Score: 82%`.
    #[must_use]
    pub fn score_line(&self) -> String {
        format!("Match Score: {}%", self.score_percent)
    }
}

/// What the result region shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    /// Nothing submitted yet.
    Empty,
    /// Request outstanding; no report.
    Pending,
    /// The failure message as the sole output.
    Error(String),
    /// Score, narrative and chart.
    Report(ReportView),
}

impl ResultView {
    #[must_use]
    pub fn from_state(state: &SubmissionState) -> Self {
        match state {
            SubmissionState::Idle => Self::Empty,
            SubmissionState::InFlight => Self::Pending,
            SubmissionState::Failed(message) => Self::Error(message.clone()),
            SubmissionState::Succeeded(report) => Self::Report(ReportView::from_report(report)),
        }
    }
}

impl App {
    pub(crate) fn render_result(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(RESULT_TITLE)
            .title_style(self.theme.header_style())
            .border_style(self.theme.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match ResultView::from_state(self.submission.state()) {
            ResultView::Empty => {
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        "Select both documents and generate a report.",
                        self.theme.placeholder_style(),
                    ))),
                    inner,
                );
            }
            ResultView::Pending => {
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        "Waiting for the analysis service...",
                        self.theme.muted_style(),
                    ))),
                    inner,
                );
            }
            ResultView::Error(message) => {
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(message, self.theme.error_style())))
                        .wrap(Wrap { trim: true }),
                    inner,
                );
            }
            ResultView::Report(view) => self.render_report(frame, inner, &view),
        }
    }

    fn render_report(&self, frame: &mut Frame, area: Rect, view: &ReportView) {
        let [score_area, insights_area, chart_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Max(6),
            Constraint::Min(5),
        ])
        .areas(area);

        let mut score_lines = vec![Line::from(Span::styled(
            view.score_line(),
            self.theme.success_style(),
        ))];
        if let Some(settled_at) = self.submission.settled_at() {
            score_lines.push(Line::from(Span::styled(
                format!("Analyzed at {}", settled_at.format("%H:%M:%S")),
                self.theme.muted_style(),
            )));
        }
        frame.render_widget(Paragraph::new(score_lines), score_area);

        frame.render_widget(
            Paragraph::new(view.insights.as_str())
                .style(self.theme.normal_style())
                .wrap(Wrap { trim: true }),
            insights_area,
        );

        frame.render_widget(SkillChartWidget::new(&view.bars, &self.theme), chart_area);
    }
}
