//! Configuration errors raised when building widgets

use thiserror::Error;

/// Rejected table configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a data table needs at least one column")]
    NoColumns,
    #[error("duplicate column key `{0}`")]
    DuplicateColumnKey(String),
}

/// Rejected theme override
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid theme JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("theme token `{token}` has invalid color `{value}`")]
    InvalidColor { token: &'static str, value: String },
}
