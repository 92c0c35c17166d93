// src/errors.rs

//! Crate-wide error types.

use thiserror::Error;

use crate::dag::TaskId;

/// Structural problems detected while building a [`crate::dag::TaskGraph`].
///
/// This is the only error the scheduling core can produce. Cycles and
/// dangling dependency references are not errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("duplicate task id {0}")]
    DuplicateId(TaskId),
}

#[derive(Error, Debug)]
pub enum TaskOrderError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TaskOrderError>;
