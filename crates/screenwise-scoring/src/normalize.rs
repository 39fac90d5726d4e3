use std::collections::HashMap;

use screenwise_banks::question::Question;
use screenwise_banks::QuestionBank;
use screenwise_core::models::answer::{Answer, AnswerValue};
use tracing::debug;

use crate::round1;

/// One answered, weighted question and what it adds to the score.
#[derive(Debug, Clone, Copy)]
pub struct Contribution<'a> {
    pub question: &'a Question,
    pub value: AnswerValue,
    /// `(severity_index / 4) * weight`
    pub amount: f64,
}

/// Questionnaire score before fusion.
#[derive(Debug, Clone)]
pub struct Normalized<'a> {
    /// In `[0, 100]`, one decimal, family-history bonus applied.
    pub score: f64,
    /// In question-bank order.
    pub contributions: Vec<Contribution<'a>>,
}

/// Match answers to the bank's weighted questions.
///
/// The result follows question-bank order. When a question is answered more
/// than once the last answer wins. Answers to questions the bank does not
/// weight are skipped, as are questions whose weight is not a finite
/// positive number.
pub fn contributions<'a>(answers: &[Answer], bank: &'a dyn QuestionBank) -> Vec<Contribution<'a>> {
    let mut latest: HashMap<&str, AnswerValue> = HashMap::with_capacity(answers.len());
    for answer in answers {
        latest.insert(answer.question_id.as_str(), answer.value);
    }

    let mut matched = Vec::with_capacity(latest.len());
    for question in bank.questions() {
        let Some(value) = latest.remove(question.id.as_str()) else {
            continue;
        };
        if !(question.weight.is_finite() && question.weight > 0.0) {
            debug!(
                bank_id = bank.id(),
                question_id = %question.id,
                weight = question.weight,
                "skipping question with unusable weight"
            );
            continue;
        }
        matched.push(Contribution {
            question,
            value,
            amount: value.fraction() * question.weight,
        });
    }

    for question_id in latest.keys() {
        debug!(bank_id = bank.id(), question_id, "ignoring answer to unknown question");
    }

    matched
}

/// Compute the normalized questionnaire score.
///
/// Divides by the weights of the answered questions only, so a partially
/// completed questionnaire is not pulled toward zero. With no answered
/// questions the score is 0 and no bonus applies.
pub fn normalize<'a>(
    answers: &[Answer],
    bank: &'a dyn QuestionBank,
    family_history: bool,
    family_history_bonus: f64,
) -> Normalized<'a> {
    let contributions = contributions(answers, bank);

    let answered_weight: f64 = contributions.iter().map(|c| c.question.weight).sum();
    if contributions.is_empty() || answered_weight <= 0.0 {
        return Normalized {
            score: 0.0,
            contributions,
        };
    }

    let total: f64 = contributions.iter().map(|c| c.amount).sum();
    let mut score = round1((total / answered_weight * 100.0).clamp(0.0, 100.0));

    if family_history {
        score = apply_family_history(score, family_history_bonus);
    }

    Normalized {
        score,
        contributions,
    }
}

/// Add the family-history bonus, capped at 100. A bonus that is not a finite
/// non-negative number adds nothing.
pub fn apply_family_history(score: f64, bonus: f64) -> f64 {
    let bonus = if bonus.is_finite() && bonus > 0.0 {
        bonus
    } else {
        0.0
    };
    round1((score + bonus).min(100.0))
}
