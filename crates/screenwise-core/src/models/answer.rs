use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::UnknownAnswerValue;

/// How often a behavior occurs, as reported by the respondent.
///
/// Variants are declared in ascending severity, so the derived `Ord`
/// matches the ordinal severity index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerValue {
    Never,
    Rarely,
    Sometimes,
    Often,
    Always,
}

impl AnswerValue {
    pub const ALL: [AnswerValue; 5] = [
        AnswerValue::Never,
        AnswerValue::Rarely,
        AnswerValue::Sometimes,
        AnswerValue::Often,
        AnswerValue::Always,
    ];

    /// Highest value returned by [`AnswerValue::severity_index`].
    pub const MAX_INDEX: u8 = 4;

    /// Ordinal severity index, `never = 0` through `always = 4`.
    pub fn severity_index(self) -> u8 {
        match self {
            AnswerValue::Never => 0,
            AnswerValue::Rarely => 1,
            AnswerValue::Sometimes => 2,
            AnswerValue::Often => 3,
            AnswerValue::Always => 4,
        }
    }

    /// Severity index scaled into `[0, 1]`.
    pub fn fraction(self) -> f64 {
        f64::from(self.severity_index()) / f64::from(Self::MAX_INDEX)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AnswerValue::Never => "never",
            AnswerValue::Rarely => "rarely",
            AnswerValue::Sometimes => "sometimes",
            AnswerValue::Often => "often",
            AnswerValue::Always => "always",
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnswerValue {
    type Err = UnknownAnswerValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        AnswerValue::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownAnswerValue(s.to_string()))
    }
}

/// One answered question. Unanswered questions have no `Answer` at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answer {
    pub question_id: String,
    pub value: AnswerValue,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, value: AnswerValue) -> Self {
        Self {
            question_id: question_id.into(),
            value,
        }
    }
}
