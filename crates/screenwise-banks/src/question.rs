use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Who fills in the questionnaire. Each respondent has its own bank with its
/// own weight total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Respondent {
    /// Self-report.
    Individual,
    /// Caregiver report.
    Parent,
    Clinician,
}

/// A weighted question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
    /// Positive relative weight.
    pub weight: f64,
    /// Category label, e.g. "Social Communication".
    pub domain: String,
    /// Action recommended when this question ranks as a top contributor.
    pub action: String,
}

impl Question {
    pub fn new(id: &str, text: &str, weight: f64, domain: &str, action: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            weight,
            domain: domain.to_string(),
            action: action.to_string(),
        }
    }
}

/// A consistency problem found in a bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum BankIssue {
    Empty,
    DuplicateQuestion { question_id: String },
    InvalidWeight { question_id: String, weight: f64 },
    WeightedFamilyHistory { question_id: String },
}

impl fmt::Display for BankIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankIssue::Empty => write!(f, "bank has no questions"),
            BankIssue::DuplicateQuestion { question_id } => {
                write!(f, "duplicate question id '{question_id}'")
            }
            BankIssue::InvalidWeight {
                question_id,
                weight,
            } => write!(
                f,
                "question '{question_id}' has weight {weight}, expected a finite positive number"
            ),
            BankIssue::WeightedFamilyHistory { question_id } => write!(
                f,
                "family-history question '{question_id}' must not be a weighted question"
            ),
        }
    }
}
