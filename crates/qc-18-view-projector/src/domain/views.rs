//! View records handed to the front-end.
//!
//! Every record is a value snapshot: it owns display strings copied out of
//! the source object and keeps no reference back to it. JSON keys are
//! camelCase and are bound by name on the UI side.

use super::format::{normalize_hex, to_hex};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Block projection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockView {
    /// Encoded size, human readable (e.g. `"1.21 kB"`)
    pub size: String,
    pub number: u64,
    pub hash: String,
    pub transactions: Vec<TransactionView>,
    /// Uncle headers, each projected as a body-less block
    pub uncles: Vec<BlockView>,
    pub time: u64,
    pub coinbase: String,
    /// Display label; not populated by the projector
    pub name: String,
    pub gas_limit: String,
    pub gas_used: String,
    pub prev_hash: String,
    pub bloom: String,
    /// Textual dump of the whole block; empty when the dump is disabled
    pub raw: String,
    #[serde(skip)]
    pub(crate) text: String,
}

impl BlockView {
    /// Looks up a projected transaction by hex hash.
    ///
    /// Linear scan over `transactions`; the hash may carry a `0x` prefix
    /// and any letter case. Malformed hex never matches.
    pub fn transaction(&self, hash: &str) -> Option<&TransactionView> {
        let needle = normalize_hex(hash)?;
        self.transactions.iter().find(|tx| tx.hash == needle)
    }
}

impl fmt::Display for BlockView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Transaction projection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    pub value: String,
    pub gas: String,
    pub gas_price: String,
    pub hash: String,
    /// Recipient, or the deployed contract address for creations
    pub address: String,
    pub sender: String,
    /// Payload as plain hex
    pub raw_data: String,
    /// Disassembly for creations, otherwise the hex payload
    pub data: String,
    pub is_contract: bool,
    pub creates_contract: bool,
    pub confirmations: u64,
    #[serde(skip)]
    pub(crate) raw: String,
}

impl fmt::Display for TransactionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Key pair projection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyView {
    pub address: String,
    pub private_key: String,
    pub public_key: String,
}

/// Connected peer projection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeerView {
    /// Remote socket address
    pub ip: String,
    /// Client identity string
    pub version: String,
    /// Capabilities, e.g. `"[eth/60 shh/1]"`
    pub caps: String,
}

/// Outcome of submitting a transaction.
///
/// Shared by the front-end receipt and the transact call result.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptView {
    pub created_contract: bool,
    /// Deployed contract address (empty for plain transfers)
    pub address: String,
    pub hash: String,
    pub sender: String,
}

impl ReceiptView {
    pub fn new(
        created_contract: bool,
        creation_address: impl AsRef<[u8]>,
        hash: impl AsRef<[u8]>,
        sender: impl AsRef<[u8]>,
    ) -> Self {
        Self {
            created_contract,
            address: to_hex(creation_address),
            hash: to_hex(hash),
            sender: to_hex(sender),
        }
    }
}

/// Execution-trace message projection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessageView {
    pub to: String,
    pub from: String,
    pub input: String,
    pub output: String,
    pub path: u64,
    pub origin: String,
    pub timestamp: u64,
    /// Mirrors `origin`, not the message's own coinbase
    pub coinbase: String,
    /// Enclosing block hash
    pub block: String,
    pub number: u64,
    pub value: String,
}
