//! screenwise-banks
//!
//! Question banks for the screening questionnaire. Pure data: each bank
//! defines its questions, their weights, domains, and recommended actions.
//! Custom banks can be loaded from JSON configuration.

pub mod banks;
pub mod config;
pub mod error;
pub mod question;

use screenwise_core::models::answer::{Answer, AnswerValue};

use question::{BankIssue, Question, Respondent};

/// Answers at or above this value on the family-history question set the
/// family-history flag.
pub const FAMILY_HISTORY_THRESHOLD: AnswerValue = AnswerValue::Often;

/// Trait implemented by each question bank.
///
/// The scoring engine takes a `&dyn QuestionBank` per call, so tests can
/// inject synthetic banks.
pub trait QuestionBank: Send + Sync {
    /// Unique identifier for this bank (e.g., "individual", "parent").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Who answers this bank.
    fn respondent(&self) -> Respondent;

    /// Weighted questions, in presentation order.
    fn questions(&self) -> &[Question];

    /// Unweighted question signalling hereditary risk, if the bank has one.
    fn family_history_question(&self) -> Option<&str> {
        None
    }

    /// Look up a weighted question by ID.
    fn question(&self, id: &str) -> Option<&Question> {
        self.questions().iter().find(|q| q.id == id)
    }

    /// Sum of every question weight in the bank.
    fn total_weight(&self) -> f64 {
        self.questions().iter().map(|q| q.weight).sum()
    }

    /// Check the bank's own consistency.
    fn validate(&self) -> Vec<BankIssue> {
        let mut issues = Vec::new();
        let questions = self.questions();

        if questions.is_empty() {
            issues.push(BankIssue::Empty);
        }

        for (index, question) in questions.iter().enumerate() {
            if questions[..index].iter().any(|q| q.id == question.id) {
                issues.push(BankIssue::DuplicateQuestion {
                    question_id: question.id.clone(),
                });
            }
            if !(question.weight.is_finite() && question.weight > 0.0) {
                issues.push(BankIssue::InvalidWeight {
                    question_id: question.id.clone(),
                    weight: question.weight,
                });
            }
        }

        if let Some(id) = self.family_history_question()
            && questions.iter().any(|q| q.id == id)
        {
            issues.push(BankIssue::WeightedFamilyHistory {
                question_id: id.to_string(),
            });
        }

        issues
    }

    /// Derive the family-history flag from the answers. The last answer to
    /// the family-history question wins.
    fn family_history_flag(&self, answers: &[Answer]) -> bool {
        let Some(id) = self.family_history_question() else {
            return false;
        };
        answers
            .iter()
            .rev()
            .find(|a| a.question_id == id)
            .is_some_and(|a| a.value >= FAMILY_HISTORY_THRESHOLD)
    }
}

/// Return all built-in banks.
pub fn all_banks() -> Vec<Box<dyn QuestionBank>> {
    vec![
        Box::new(banks::individual::Individual),
        Box::new(banks::parent::Parent),
        Box::new(banks::clinician::Clinician),
    ]
}

/// Look up a built-in bank by ID.
pub fn get_bank(id: &str) -> Option<Box<dyn QuestionBank>> {
    all_banks().into_iter().find(|b| b.id() == id)
}

/// The built-in bank for a respondent.
pub fn bank_for(respondent: Respondent) -> Box<dyn QuestionBank> {
    match respondent {
        Respondent::Individual => Box::new(banks::individual::Individual),
        Respondent::Parent => Box::new(banks::parent::Parent),
        Respondent::Clinician => Box::new(banks::clinician::Clinician),
    }
}
