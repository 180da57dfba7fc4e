//! # Shared Types Crate
//!
//! Domain entities supplied by the node runtime to read-only consumers
//! (the UI view projector, tracing tools).
//!
//! ## Design Principles
//!
//! - **Plain data**: entities carry no validation or execution logic.
//! - **Canonical hashing**: every hash is Keccak-256 over RLP.
//! - **Single Source of Truth**: all cross-crate entity types are defined here.

pub mod entities;
pub mod errors;
pub mod keys;

pub use entities::*;
pub use errors::*;
pub use keys::*;
