use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use screenwise_core::models::prediction::{PredictionSource, VideoPrediction};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::round1;

/// Behavioral features reported by the video model, in report order.
pub const FALLBACK_FEATURES: [&str; 5] = [
    "eye_contact",
    "facial_expression",
    "repetitive_movements",
    "social_engagement",
    "gesture_use",
];

/// Bounds for synthesized fallback predictions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct FallbackRange {
    pub min_score: f64,
    pub max_score: f64,
    pub min_confidence: f64,
    pub max_confidence: f64,
}

impl Default for FallbackRange {
    fn default() -> Self {
        Self {
            min_score: 20.0,
            max_score: 80.0,
            min_confidence: 0.5,
            max_confidence: 0.7,
        }
    }
}

impl FallbackRange {
    /// Clamp bounds into their valid domains and put them in order.
    fn sanitized(&self) -> (f64, f64, f64, f64) {
        let (lo_s, hi_s) = ordered(
            finite_or(self.min_score, 20.0).clamp(0.0, 100.0),
            finite_or(self.max_score, 80.0).clamp(0.0, 100.0),
        );
        let (lo_c, hi_c) = ordered(
            finite_or(self.min_confidence, 0.5).clamp(0.0, 1.0),
            finite_or(self.max_confidence, 0.7).clamp(0.0, 1.0),
        );
        (lo_s, hi_s, lo_c, hi_c)
    }
}

/// Synthesize a prediction for when the video model is unavailable.
///
/// Deterministic for a given `seed` and range: every layer that needs a
/// fallback calls this function and gets the same value. The result is
/// tagged [`PredictionSource::Fallback`].
pub fn fallback_prediction(seed: u64, range: &FallbackRange) -> VideoPrediction {
    let (min_score, max_score, min_confidence, max_confidence) = range.sanitized();
    let mut rng = StdRng::seed_from_u64(seed);

    let prediction_score = round1(min_score + rng.r#gen::<f64>() * (max_score - min_score));
    let confidence = round2(min_confidence + rng.r#gen::<f64>() * (max_confidence - min_confidence));

    let features_detected: BTreeMap<String, f64> = FALLBACK_FEATURES
        .iter()
        .map(|name| (name.to_string(), round2(rng.r#gen::<f64>())))
        .collect();

    VideoPrediction {
        prediction_score: Some(prediction_score),
        confidence,
        features_detected,
        source: PredictionSource::Fallback,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn finite_or(value: f64, default: f64) -> f64 {
    if value.is_finite() { value } else { default }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
