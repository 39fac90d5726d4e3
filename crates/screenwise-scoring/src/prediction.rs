use std::collections::BTreeMap;

use screenwise_core::models::prediction::{PredictionSource, VideoPrediction};
use serde_json::{Map, Value};
use tracing::debug;

use crate::fallback::{FallbackRange, fallback_prediction};

/// Confidence assumed when the payload carries no usable confidence.
pub const DEFAULT_CONFIDENCE: f64 = 0.7;

/// What the caller knows about the video prediction for this submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PredictionInput {
    /// No video was submitted. Nothing is fused.
    #[default]
    Absent,
    /// Raw payload from the prediction service. Validated before use.
    Payload(Value),
    /// The prediction service was unreachable. The engine synthesizes the
    /// fallback prediction from `seed`.
    Unavailable { seed: u64 },
}

impl PredictionInput {
    /// Turn the input into a validated prediction, if there is one.
    pub fn resolve(&self, fallback_range: &FallbackRange) -> Option<VideoPrediction> {
        match self {
            PredictionInput::Absent => None,
            PredictionInput::Payload(payload) => harden_prediction(payload),
            PredictionInput::Unavailable { seed } => {
                Some(fallback_prediction(*seed, fallback_range))
            }
        }
    }
}

/// Validate an untrusted prediction payload.
///
/// Returns `None` only when the payload is not a JSON object. Otherwise:
/// - `prediction_score` must be a finite number (or numeric string); it is
///   clamped to `[0, 100]` and left empty when invalid, which disables fusion.
/// - `confidence` defaults to [`DEFAULT_CONFIDENCE`] when invalid and is
///   clamped to `[0, 1]`. Without a valid confidence the score is left empty
///   as well.
/// - feature scores that are not finite numbers are dropped.
/// - a missing or blank `source` defaults to `model`.
///
/// camelCase field names are accepted as well.
pub fn harden_prediction(payload: &Value) -> Option<VideoPrediction> {
    let Some(object) = payload.as_object() else {
        debug!("discarding prediction payload that is not an object");
        return None;
    };

    let confidence = field(object, &["confidence"]).and_then(finite);
    if confidence.is_none() {
        debug!(default = DEFAULT_CONFIDENCE, "prediction payload has no finite confidence");
    }

    // A score without a usable confidence is shown but not fused.
    let score_field = field(object, &["prediction_score", "predictionScore"]);
    let prediction_score = match (score_field.and_then(finite), confidence) {
        (Some(score), Some(_)) => Some(score.clamp(0.0, 100.0)),
        (Some(_), None) => None,
        (None, _) => {
            debug!("prediction payload has no finite prediction_score");
            None
        }
    };
    let confidence = confidence.map_or(DEFAULT_CONFIDENCE, |c| c.clamp(0.0, 1.0));

    let features_detected = field(object, &["features_detected", "featuresDetected"])
        .and_then(Value::as_object)
        .map(|features| {
            features
                .iter()
                .filter_map(|(name, value)| finite(value).map(|score| (name.clone(), score)))
                .collect()
        })
        .unwrap_or_else(BTreeMap::new);

    let source = field(object, &["source"])
        .and_then(Value::as_str)
        .filter(|tag| !tag.trim().is_empty())
        .map(|tag| PredictionSource::from(tag.to_string()))
        .unwrap_or(PredictionSource::Model);

    Some(VideoPrediction {
        prediction_score,
        confidence,
        features_detected,
        source,
    })
}

fn field<'a>(object: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| object.get(*name))
}

fn finite(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}
