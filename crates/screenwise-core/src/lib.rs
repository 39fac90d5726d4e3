//! screenwise-core
//!
//! Pure domain types shared by the question banks, the scoring engine, and
//! the presentation collaborators that render a `ScoringResult`.

pub mod error;
pub mod models;
