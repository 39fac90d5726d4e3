use std::path::PathBuf;

use thiserror::Error;

use crate::question::BankIssue;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to read bank config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid bank config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("bank '{bank_id}' is inconsistent: {}", format_issues(.issues))]
    Invalid {
        bank_id: String,
        issues: Vec<BankIssue>,
    },
}

fn format_issues(issues: &[BankIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
