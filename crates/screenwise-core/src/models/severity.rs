use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Coarse severity used for UI coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Low,
    Mild,
    Moderate,
    High,
}

/// Fine-grained severity band. Drives the label and the recommendation text.
///
/// The two highest bands share [`Severity::High`] but keep distinct labels
/// and recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityBand {
    /// `[0, 25)`
    VeryLow,
    /// `[25, 40)`
    LowIndicators,
    /// `[40, 60)`
    ModerateIndicators,
    /// `[60, 75)`
    HighIndicators,
    /// `[75, 100]`
    VeryHighIndicators,
}

impl SeverityBand {
    /// Lower bounds of each band, in ascending order. Each band extends up to
    /// (but not including) the next band's lower bound.
    pub const LOWER_BOUNDS: [(f64, SeverityBand); 5] = [
        (0.0, SeverityBand::VeryLow),
        (25.0, SeverityBand::LowIndicators),
        (40.0, SeverityBand::ModerateIndicators),
        (60.0, SeverityBand::HighIndicators),
        (75.0, SeverityBand::VeryHighIndicators),
    ];

    /// Map a score to its band.
    ///
    /// Total over every `f64`: scores below 0 (and NaN) fall into the lowest
    /// band, scores above 100 into the highest.
    pub fn classify(score: f64) -> SeverityBand {
        if score.is_nan() {
            return SeverityBand::VeryLow;
        }
        Self::LOWER_BOUNDS
            .iter()
            .rev()
            .find(|(lower, _)| score >= *lower)
            .map(|(_, band)| *band)
            .unwrap_or(SeverityBand::VeryLow)
    }

    pub fn severity(self) -> Severity {
        match self {
            SeverityBand::VeryLow => Severity::Low,
            SeverityBand::LowIndicators => Severity::Mild,
            SeverityBand::ModerateIndicators => Severity::Moderate,
            SeverityBand::HighIndicators | SeverityBand::VeryHighIndicators => Severity::High,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeverityBand::VeryLow => "Very Low",
            SeverityBand::LowIndicators => "Low Indicators",
            SeverityBand::ModerateIndicators => "Moderate Indicators",
            SeverityBand::HighIndicators => "High Indicators",
            SeverityBand::VeryHighIndicators => "Very High Indicators",
        }
    }

    /// General guidance shown alongside the per-question actions.
    pub fn recommendations(self) -> &'static [&'static str] {
        match self {
            SeverityBand::VeryLow => &[
                "Continue routine developmental monitoring.",
                "Repeat the screening if new concerns arise.",
            ],
            SeverityBand::LowIndicators => &[
                "Monitor the reported behaviors over the coming months.",
                "Discuss the results at the next routine check-up.",
                "Repeat the screening in 3 to 6 months.",
            ],
            SeverityBand::ModerateIndicators => &[
                "Share these results with a primary care provider.",
                "Consider a developmental evaluation by a qualified specialist.",
                "Keep a diary of the behaviors flagged below.",
            ],
            SeverityBand::HighIndicators => &[
                "Schedule a comprehensive evaluation with a specialist.",
                "Share these results with a primary care provider.",
                "Ask about early intervention or support services.",
            ],
            SeverityBand::VeryHighIndicators => &[
                "Seek a comprehensive diagnostic evaluation as soon as possible.",
                "Contact early intervention or support services now.",
                "Bring this report to every related appointment.",
                "Connect with local support groups for families.",
            ],
        }
    }
}
