use thiserror::Error;

/// Errors produced when parsing a single enhancer record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseEnhancerError {
    #[error("missing '{0}' field in enhancer record")]
    MissingField(&'static str),

    #[error("invalid position '{0}'")]
    InvalidPosition(String),

    #[error("invalid score '{0}'")]
    InvalidScore(String),

    #[error("unexpected trailing field '{0}'")]
    TrailingField(String),
}

/// A record-level parse failure located within a multi-line track input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("record on line {line}: {source}")]
pub struct ParseTrackError {
    /// 1-based line number of the offending record.
    pub line: usize,
    #[source]
    pub source: ParseEnhancerError,
}
