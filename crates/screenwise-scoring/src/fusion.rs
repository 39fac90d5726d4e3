use screenwise_core::models::prediction::VideoPrediction;

use crate::round1;

/// Share of the fused score taken from the questionnaire.
pub const QUESTIONNAIRE_WEIGHT: f64 = 0.6;
/// Share of the fused score taken from the video prediction.
pub const VIDEO_WEIGHT: f64 = 0.4;

/// Fuse the questionnaire score with a video prediction.
///
/// Returns `None` when there is no prediction or its score is unusable; the
/// caller then uses `normalized_score` as the effective score.
pub fn fuse(normalized_score: f64, prediction: Option<&VideoPrediction>) -> Option<f64> {
    let video = prediction?.prediction_score.filter(|s| s.is_finite())?;
    let questionnaire = if normalized_score.is_finite() {
        normalized_score.clamp(0.0, 100.0)
    } else {
        0.0
    };
    Some(round1(
        QUESTIONNAIRE_WEIGHT * questionnaire + VIDEO_WEIGHT * video.clamp(0.0, 100.0),
    ))
}
