//! Centralized theme and styling.
//!
//! Two palettes exist, light and dark, selected by the persisted
//! display preference. Palettes only change colors; widget geometry and
//! content are identical between them.

use ratatui::style::{Color, Modifier, Style};

/// Application theme with consistent colors and styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Whether this is the dark palette.
    pub dark: bool,
    /// Background color.
    pub bg: Color,
    /// Primary foreground color.
    pub fg: Color,
    /// Accent/highlight color.
    pub accent: Color,
    /// Success color (match score).
    pub success: Color,
    /// Warning color.
    pub warning: Color,
    /// Error color.
    pub error: Color,
    /// Muted/secondary text color.
    pub muted: Color,
    /// Border color.
    pub border: Color,
    /// Bar fill color in the skill chart.
    pub bar: Color,
    /// Axis and label color in the skill chart.
    pub axis: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Light palette (the default).
    #[must_use]
    pub const fn light() -> Self {
        Self {
            dark: false,
            bg: Color::Reset,
            fg: Color::Black,
            accent: Color::Blue,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            muted: Color::DarkGray,
            border: Color::Gray,
            bar: Color::Blue,
            axis: Color::DarkGray,
        }
    }

    /// Dark palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            dark: true,
            bg: Color::Black,
            fg: Color::White,
            accent: Color::LightBlue,
            success: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,
            muted: Color::Gray,
            border: Color::DarkGray,
            bar: Color::LightBlue,
            axis: Color::Gray,
        }
    }

    /// Palette for the given dark-mode flag.
    #[must_use]
    pub const fn for_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }

    /// Base style for the whole screen.
    #[must_use]
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Style for the header/title.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for normal text.
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Style for muted/secondary text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for the match score.
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for warnings.
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for error messages.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for borders.
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for the focused border.
    #[must_use]
    pub fn focus_border_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for highlighted/selected items.
    #[must_use]
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the trigger when it is disabled.
    #[must_use]
    pub fn disabled_style(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::DIM)
    }

    /// Style for chart bars.
    #[must_use]
    pub fn bar_style(&self) -> Style {
        Style::default().fg(self.bar)
    }

    /// Style for chart labels.
    #[must_use]
    pub fn axis_style(&self) -> Style {
        Style::default().fg(self.axis)
    }

    /// Style for placeholder text.
    #[must_use]
    pub fn placeholder_style(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::DIM)
    }
}
