use screenwise_core::models::result::Contributor;

use crate::normalize::Contribution;

/// Rank contributions, highest first, and keep the top `limit`.
///
/// Contributions arrive in question-bank order and the sort is stable, so
/// equal contributions keep that order. `limit` below 1 is treated as 1.
pub fn rank_contributors(contributions: &[Contribution<'_>], limit: usize) -> Vec<Contributor> {
    let mut ranked: Vec<&Contribution<'_>> = contributions.iter().collect();
    ranked.sort_by(|a, b| b.amount.total_cmp(&a.amount));

    ranked
        .into_iter()
        .take(limit.max(1))
        .map(|c| Contributor {
            question_id: c.question.id.clone(),
            question: c.question.text.clone(),
            domain: c.question.domain.clone(),
            action: c.question.action.clone(),
            contribution_weight: c.amount,
        })
        .collect()
}
