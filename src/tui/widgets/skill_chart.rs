//! Skill breakdown bar chart.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::tui::Theme;

/// Fixed top of the chart scale.
pub const CHART_MAX: u64 = 100;

/// Widest bar drawn, in cells.
const MAX_BAR_WIDTH: u16 = 12;

/// Gap between bars, in cells.
const BAR_GAP: u16 = 1;

/// One bar: a category label and its height on the 0-100 scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBar {
    /// Category label (skill name).
    pub label: String,
    /// Bar height, already clamped to `0..=100`.
    pub value: u64,
}

/// Bar chart over a fixed 0-100 scale, one bar per skill, in input order.
pub struct SkillChartWidget<'a> {
    bars: &'a [ChartBar],
    theme: &'a Theme,
}

impl<'a> SkillChartWidget<'a> {
    #[must_use]
    pub const fn new(bars: &'a [ChartBar], theme: &'a Theme) -> Self {
        Self { bars, theme }
    }

    /// Width of each bar so that all bars fit in `inner_width`.
    #[must_use]
    pub fn bar_width(bar_count: usize, inner_width: u16) -> u16 {
        let Ok(count) = u16::try_from(bar_count) else {
            return 1;
        };
        if count == 0 {
            return MAX_BAR_WIDTH;
        }
        let gaps = BAR_GAP.saturating_mul(count - 1);
        (inner_width.saturating_sub(gaps) / count).clamp(1, MAX_BAR_WIDTH)
    }
}

/// Truncates `label` to at most `width` display cells.
#[must_use]
pub fn fit_label(label: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for c in label.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

impl Widget for SkillChartWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Skill Analysis Breakdown ")
            .title_style(self.theme.header_style())
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());

        if self.bars.is_empty() {
            Paragraph::new(Line::from("No skill data").style(self.theme.muted_style()))
                .block(block)
                .render(area, buf);
            return;
        }

        let inner_width = block.inner(area).width;
        let bar_width = Self::bar_width(self.bars.len(), inner_width);

        let bars: Vec<Bar> = self
            .bars
            .iter()
            .map(|bar| {
                Bar::default()
                    .value(bar.value)
                    .text_value(bar.value.to_string())
                    .label(Line::from(fit_label(&bar.label, usize::from(bar_width))))
            })
            .collect();

        BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .max(CHART_MAX)
            .bar_width(bar_width)
            .bar_gap(BAR_GAP)
            .bar_style(self.theme.bar_style())
            .value_style(self.theme.base_style().bg(self.theme.bar))
            .label_style(self.theme.axis_style())
            .render(area, buf);
    }
}
