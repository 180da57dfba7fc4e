//! Projector error types.
//!
//! Projections themselves are total; only construction-time inputs
//! (configuration, raw key material) can be rejected.

use shared_types::KeyError;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Unknown value format name
    #[error("invalid value format: {0} (expected `denominated` or `decimal`)")]
    InvalidValueFormat(String),
    /// Disassembly lines need a separator
    #[error("disassembly separator cannot be empty")]
    EmptySeparator,
    /// Unparseable boolean flag
    #[error("invalid flag {key}: {value}")]
    InvalidFlag { key: String, value: String },
}

/// Top-level projector error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectorError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("key material rejected: {0}")]
    Key(#[from] KeyError),
}

/// Result alias for fallible projector entry points
pub type ProjectorResult<T> = Result<T, ProjectorError>;
