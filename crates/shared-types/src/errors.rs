//! # Error Types
//!
//! Defines error types raised by domain entity constructors.

use thiserror::Error;

/// Errors that can occur when building a key pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Secret key material has the wrong length.
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Secret key is zero or not below the curve order.
    #[error("Invalid secret key: not a valid secp256k1 scalar")]
    InvalidSecretKey,
}
