use screenwise_banks::QuestionBank;
use screenwise_core::models::answer::Answer;
use screenwise_core::models::result::ScoringResult;
use screenwise_core::models::severity::SeverityBand;
use tracing::info;

use crate::contributors::rank_contributors;
use crate::fusion::fuse;
use crate::normalize::normalize;
use crate::options::ScoringOptions;
use crate::prediction::PredictionInput;

/// Score one completed questionnaire submission.
///
/// `family_history` is derived by the caller, usually with
/// [`QuestionBank::family_history_flag`]. Never fails: malformed numbers and
/// payloads are replaced by defaults. Identical inputs give identical
/// results.
pub fn score(
    answers: &[Answer],
    bank: &dyn QuestionBank,
    family_history: bool,
    prediction: &PredictionInput,
    options: &ScoringOptions,
) -> ScoringResult {
    let normalized = normalize(answers, bank, family_history, options.family_history_bonus);
    let video_prediction = prediction.resolve(&options.fallback_range);
    let fused_score = fuse(normalized.score, video_prediction.as_ref());

    let effective = fused_score.unwrap_or(normalized.score);
    let band = SeverityBand::classify(effective);
    let top_contributors = rank_contributors(&normalized.contributions, options.top_contributors);
    let answered = normalized.contributions.len();

    info!(
        bank_id = bank.id(),
        answered,
        normalized_score = normalized.score,
        fused_score = ?fused_score,
        band = band.label(),
        "computed screening score"
    );

    ScoringResult {
        normalized_score: normalized.score,
        fused_score,
        severity: band.severity(),
        severity_label: band.label().to_string(),
        band,
        top_contributors,
        recommendations: band.recommendations().iter().map(|r| r.to_string()).collect(),
        video_prediction,
        answered_count: answered,
    }
}
