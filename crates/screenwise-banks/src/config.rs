use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;

use crate::error::BankError;
use crate::question::{Question, Respondent};
use crate::QuestionBank;

/// On-disk description of a question bank.
///
/// ```json
/// {
///   "id": "school",
///   "name": "Teacher Report",
///   "respondent": "clinician",
///   "family_history_question": "family_history",
///   "questions": [
///     { "id": "peers", "text": "...", "weight": 1.2, "domain": "Social", "action": "..." }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BankConfig {
    pub id: String,
    pub name: String,
    pub respondent: Respondent,
    #[serde(default)]
    pub family_history_question: Option<String>,
    pub questions: Vec<Question>,
}

/// A question bank loaded from configuration. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct CustomBank {
    config: BankConfig,
}

impl CustomBank {
    /// Validate a config and wrap it as a bank.
    pub fn new(config: BankConfig) -> Result<Self, BankError> {
        let bank = Self { config };
        let issues = bank.validate();
        if !issues.is_empty() {
            return Err(BankError::Invalid {
                bank_id: bank.config.id,
                issues,
            });
        }
        Ok(bank)
    }

    pub fn from_json(json: &str) -> Result<Self, BankError> {
        let config: BankConfig = serde_json::from_str(json)?;
        let bank = Self::new(config)?;
        info!(
            bank_id = bank.id(),
            questions = bank.questions().len(),
            "loaded question bank"
        );
        Ok(bank)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| BankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }
}

impl QuestionBank for CustomBank {
    fn id(&self) -> &str {
        &self.config.id
    }

    fn name(&self) -> &str {
        &self.config.name
    }

    fn respondent(&self) -> Respondent {
        self.config.respondent
    }

    fn questions(&self) -> &[Question] {
        &self.config.questions
    }

    fn family_history_question(&self) -> Option<&str> {
        self.config.family_history_question.as_deref()
    }
}

impl BankConfig {
    /// Snapshot any bank as configuration, e.g. to seed a custom bank from a
    /// built-in one.
    pub fn from_bank(bank: &dyn QuestionBank) -> Self {
        Self {
            id: bank.id().to_string(),
            name: bank.name().to_string(),
            respondent: bank.respondent(),
            family_history_question: bank.family_history_question().map(str::to_string),
            questions: bank.questions().to_vec(),
        }
    }
}
