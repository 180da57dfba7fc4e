// Allow missing docs for internal items in development
#![allow(missing_docs)]

//! QC-18 View Projector - read-only display projections for the desktop UI.
//!
//! Converts node-runtime domain objects into flat, JSON-serializable view
//! records that the front-end binds to by field name.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                   VIEW PROJECTOR (qc-18)                      │
//! ├──────────────────────────────────────────────────────────────┤
//! │   shared-types           ViewProjector           front-end   │
//! │  ┌────────────┐        ┌───────────────┐       ┌──────────┐  │
//! │  │ Block      │ ─────▶ │ project_block │ ────▶ │ BlockView│  │
//! │  │ Transaction│ ─────▶ │ project_tx    │ ────▶ │ TxView   │  │
//! │  │ KeyPair    │ ─────▶ │ project_key   │ ────▶ │ KeyView  │  │
//! │  │ Peer       │ ─────▶ │ project_peer  │ ────▶ │ PeerView │  │
//! │  │ Message    │ ─────▶ │ project_msg   │ ────▶ │ MsgView  │  │
//! │  └────────────┘        └───────┬───────┘       └──────────┘  │
//! │                                │                              │
//! │                  evm::{disassemble, contract_address}         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Guarantees
//!
//! - Projections are total and side-effect free (apart from `tracing` events).
//! - Views are value snapshots; none keeps a reference to its source.
//! - Byte fields are lowercase hex without prefix; big integers are decimal.
//!
//! # Usage
//!
//! ```ignore
//! use qc_18_view_projector::{ProjectorConfig, ViewProjector};
//!
//! let projector = ViewProjector::new(ProjectorConfig::from_env()?)?;
//! let view = projector.project_block(chain.current_block());
//! let json = serde_json::to_string(&view)?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod evm;
pub mod service;

// Re-exports for public API
pub use domain::config::{ProjectorConfig, ValueFormat};
pub use domain::error::{ConfigError, ProjectorError, ProjectorResult};
pub use domain::views::*;
pub use evm::{contract_address, disassemble};
pub use service::ViewProjector;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
