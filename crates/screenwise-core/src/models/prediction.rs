use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Where a video prediction came from.
///
/// `Fallback` marks a synthesized estimate produced while the real model was
/// unavailable. The UI shows it with reduced confidence but never blocks on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PredictionSource {
    Model,
    Python,
    Fallback,
    Other(String),
}

impl PredictionSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, PredictionSource::Fallback)
    }

    pub fn as_str(&self) -> &str {
        match self {
            PredictionSource::Model => "model",
            PredictionSource::Python => "python",
            PredictionSource::Fallback => "fallback",
            PredictionSource::Other(tag) => tag,
        }
    }
}

impl From<String> for PredictionSource {
    fn from(tag: String) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "model" => PredictionSource::Model,
            "python" => PredictionSource::Python,
            "fallback" => PredictionSource::Fallback,
            _ => PredictionSource::Other(tag),
        }
    }
}

impl From<PredictionSource> for String {
    fn from(source: PredictionSource) -> Self {
        source.as_str().to_string()
    }
}

impl fmt::Display for PredictionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated prediction from the video-analysis collaborator.
///
/// Only the scoring engine constructs these from network payloads. A
/// prediction whose payload carried no finite score keeps `prediction_score`
/// empty: it is still shown to the user but is never fused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VideoPrediction {
    /// Model score in `[0, 100]`.
    pub prediction_score: Option<f64>,
    /// Model confidence in `[0, 1]`.
    pub confidence: f64,
    pub features_detected: BTreeMap<String, f64>,
    #[ts(type = "string")]
    pub source: PredictionSource,
}

impl VideoPrediction {
    /// True when the score can take part in fusion.
    pub fn is_fusable(&self) -> bool {
        self.prediction_score.is_some_and(f64::is_finite)
    }
}
