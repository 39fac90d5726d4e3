use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::fallback::FallbackRange;

/// Tuning knobs for a scoring run. Injected per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ScoringOptions {
    /// How many contributors to report. Values below 1 are treated as 1.
    pub top_contributors: usize,
    /// Points added to the normalized score when the family-history flag is
    /// set. Result is clamped to 100.
    pub family_history_bonus: f64,
    /// Range for synthesized fallback predictions.
    pub fallback_range: FallbackRange,
}

impl ScoringOptions {
    pub const DEFAULT_TOP_CONTRIBUTORS: usize = 5;
    pub const DEFAULT_FAMILY_HISTORY_BONUS: f64 = 5.0;
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            top_contributors: Self::DEFAULT_TOP_CONTRIBUTORS,
            family_history_bonus: Self::DEFAULT_FAMILY_HISTORY_BONUS,
            fallback_range: FallbackRange::default(),
        }
    }
}
