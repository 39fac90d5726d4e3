use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::prediction::VideoPrediction;
use super::severity::{Severity, SeverityBand};

/// A question ranked by how much it contributed to the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Contributor {
    pub question_id: String,
    /// Question text from the bank.
    pub question: String,
    pub domain: String,
    /// Recommended action from the bank.
    pub action: String,
    /// `(severity_index / 4) * weight`
    pub contribution_weight: f64,
}

/// Output of one scoring run.
///
/// Produced once per completed questionnaire and only read afterwards.
/// Presentation and export collaborators render it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringResult {
    /// Questionnaire score in `[0, 100]`, one decimal.
    pub normalized_score: f64,
    /// Present only when a fusable prediction was supplied.
    pub fused_score: Option<f64>,
    pub severity: Severity,
    pub severity_label: String,
    pub band: SeverityBand,
    /// Descending by contribution; ties keep question-bank order.
    pub top_contributors: Vec<Contributor>,
    pub recommendations: Vec<String>,
    pub video_prediction: Option<VideoPrediction>,
    /// Answers that matched a weighted question in the bank.
    pub answered_count: usize,
}

impl ScoringResult {
    /// The score used for classification: fused when present, else normalized.
    pub fn effective_score(&self) -> f64 {
        self.fused_score.unwrap_or(self.normalized_score)
    }

    /// No weighted question was answered. This means "incomplete
    /// assessment", not "no risk".
    pub fn is_incomplete(&self) -> bool {
        self.answered_count == 0
    }

    /// True when the video score shown comes from the fallback generator.
    pub fn uses_fallback_prediction(&self) -> bool {
        self.video_prediction
            .as_ref()
            .is_some_and(|p| p.source.is_fallback())
    }
}
