//! Domain types for the view projector.
//!
//! View records, formatting helpers, configuration and errors.

pub mod config;
pub mod error;
pub mod format;
pub mod views;

// Re-exports for convenience
pub use config::{ProjectorConfig, ValueFormat};
pub use error::{ConfigError, ProjectorError, ProjectorResult};
pub use format::{currency_to_string, normalize_hex, to_hex};
pub use views::*;
