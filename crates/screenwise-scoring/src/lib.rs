//! screenwise-scoring
//!
//! The scoring engine. Turns questionnaire answers and an optional video
//! prediction into a `ScoringResult`. Pure and deterministic: no I/O, no
//! clock, no shared mutable state. Malformed input never fails a run; it is
//! replaced by documented defaults at the point of use.

pub mod contributors;
pub mod engine;
pub mod fallback;
pub mod fusion;
pub mod normalize;
pub mod options;
pub mod prediction;
pub mod summary;

pub use engine::score;
pub use options::ScoringOptions;
pub use prediction::PredictionInput;

/// Round to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
