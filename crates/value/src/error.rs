use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("cannot mutate a frozen value")]
    Frozen,
    #[error("invalid pattern /{pattern}/: {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("unsupported pattern flag '{0}'")]
    UnsupportedFlag(char),
    #[error("duplicate pattern flag '{0}'")]
    DuplicateFlag(char),
    #[error("value graph contains a cycle")]
    Cycle,
}
