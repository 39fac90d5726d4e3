use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown answer value: {0}")]
pub struct UnknownAnswerValue(pub String);
