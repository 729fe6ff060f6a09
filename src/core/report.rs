//! Compatibility report returned by the analysis service.

use serde::Deserialize;

/// Upper bound of the score scale.
pub const MAX_SCORE: f64 = 100.0;

/// One bar of the skill breakdown.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillDatum {
    /// Skill label.
    pub name: String,
    /// Score, nominally in `[0, 100]`.
    pub score: f64,
}

impl SkillDatum {
    #[must_use]
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// Bar height on the fixed 0-100 scale.
    #[must_use]
    pub fn bar_value(&self) -> u64 {
        u64::from(clamp_percent(self.score))
    }
}

/// A structured analysis result.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Report {
    /// Overall match score, nominally in `[0, 100]`.
    pub match_score: f64,
    /// Narrative explanation of the score.
    pub insights: String,
    /// Per-skill breakdown in display order.
    #[serde(rename = "chart_data", alias = "chartData", default)]
    pub skill_series: Vec<SkillDatum>,
}

impl Report {
    /// The match score as a whole percentage.
    #[must_use]
    pub fn score_percent(&self) -> u8 {
        clamp_percent(self.match_score)
    }
}

/// Rounds `value` half away from zero and clamps it to `0..=100`.
///
/// Non-finite input maps to 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Clamped to 0..=100 first
pub fn clamp_percent(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, MAX_SCORE) as u8
}
