//! Custom TUI widgets.

pub mod file_popup;
pub mod skill_chart;
pub mod status_indicator;

pub use file_popup::{FileSuggestionPopup, MAX_POPUP_ROWS, PopupState};
pub use skill_chart::{CHART_MAX, ChartBar, SkillChartWidget};
pub use status_indicator::{BUSY_LABEL, StatusIndicatorWidget, TRIGGER_LABEL};
