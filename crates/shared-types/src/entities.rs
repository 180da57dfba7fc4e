//! # Core Domain Entities
//!
//! The chain objects the node runtime hands to read-only consumers such as
//! the view projector.
//!
//! ## Clusters
//!
//! - **Chain**: `BlockHeader`, `Block`, `Transaction`
//! - **Execution Trace**: `Message`
//! - **Networking**: `Peer`, `Cap`, `ClientIdentity`
//!
//! Hashes are Keccak-256 over the canonical RLP encoding of each entity.

use rlp::{Encodable, RlpStream};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use std::fmt;
use std::net::SocketAddr;

pub use ethereum_types::{Address, Bloom, H256 as Hash, U256};

/// Keccak-256 of arbitrary bytes.
pub fn keccak256(data: impl AsRef<[u8]>) -> Hash {
    Hash::from_slice(&Keccak256::digest(data.as_ref()))
}

// =============================================================================
// CLUSTER A: THE CHAIN
// =============================================================================

/// The header of a block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Hash of the parent block.
    pub parent_hash: Hash,
    /// Hash of the RLP list of uncle headers.
    pub uncle_hash: Hash,
    /// Beneficiary of the block reward.
    pub coinbase: Address,
    /// State trie root after applying this block.
    pub state_root: Hash,
    /// Transaction trie root.
    pub tx_root: Hash,
    /// Receipt trie root.
    pub receipt_root: Hash,
    /// Log bloom of all receipts in the block.
    pub bloom: Bloom,
    /// Proof-of-work difficulty.
    pub difficulty: U256,
    /// Block height.
    pub number: u64,
    /// Gas limit for the block.
    pub gas_limit: U256,
    /// Gas consumed by all transactions in the block.
    pub gas_used: U256,
    /// Unix timestamp.
    pub time: u64,
    /// Arbitrary extra data (max 32 bytes on mainnet).
    pub extra: Vec<u8>,
    /// Proof-of-work nonce.
    pub nonce: u64,
}

impl BlockHeader {
    /// Keccak-256 of the RLP-encoded header.
    pub fn hash(&self) -> Hash {
        keccak256(rlp::encode(self))
    }
}

impl Encodable for BlockHeader {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(14);
        s.append(&self.parent_hash);
        s.append(&self.uncle_hash);
        s.append(&self.coinbase);
        s.append(&self.state_root);
        s.append(&self.tx_root);
        s.append(&self.receipt_root);
        s.append(&self.bloom);
        s.append(&self.difficulty);
        s.append(&self.number);
        s.append(&self.gas_limit);
        s.append(&self.gas_used);
        s.append(&self.time);
        s.append(&self.extra);
        s.append(&self.nonce);
    }
}

impl fmt::Display for BlockHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\tHash:       {}", hex::encode(self.hash().as_bytes()))?;
        writeln!(f, "\tParentHash: {}", hex::encode(self.parent_hash.as_bytes()))?;
        writeln!(f, "\tUncleHash:  {}", hex::encode(self.uncle_hash.as_bytes()))?;
        writeln!(f, "\tCoinbase:   {}", hex::encode(self.coinbase.as_bytes()))?;
        writeln!(f, "\tStateRoot:  {}", hex::encode(self.state_root.as_bytes()))?;
        writeln!(f, "\tTxRoot:     {}", hex::encode(self.tx_root.as_bytes()))?;
        writeln!(f, "\tReceiptRoot:{}", hex::encode(self.receipt_root.as_bytes()))?;
        writeln!(f, "\tBloom:      {}", hex::encode(self.bloom.as_bytes()))?;
        writeln!(f, "\tDifficulty: {}", self.difficulty)?;
        writeln!(f, "\tNumber:     {}", self.number)?;
        writeln!(f, "\tGasLimit:   {}", self.gas_limit)?;
        writeln!(f, "\tGasUsed:    {}", self.gas_used)?;
        writeln!(f, "\tTime:       {}", self.time)?;
        writeln!(f, "\tExtra:      {}", hex::encode(&self.extra))?;
        write!(f, "\tNonce:      {:016x}", self.nonce)
    }
}

/// A block: header plus body (transactions and uncle headers).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Block {
    /// The block header.
    pub header: BlockHeader,
    /// Transactions in execution order.
    pub transactions: Vec<Transaction>,
    /// Uncle headers referenced by this block.
    pub uncles: Vec<BlockHeader>,
}

impl Block {
    /// Creates a body-less block around a header.
    ///
    /// Used to present uncle headers as blocks of their own.
    pub fn with_header(header: BlockHeader) -> Self {
        Self {
            header,
            transactions: Vec::new(),
            uncles: Vec::new(),
        }
    }

    /// Block hash (the header hash).
    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    pub fn number(&self) -> u64 {
        self.header.number
    }

    pub fn parent_hash(&self) -> Hash {
        self.header.parent_hash
    }

    pub fn coinbase(&self) -> Address {
        self.header.coinbase
    }

    pub fn bloom(&self) -> &Bloom {
        &self.header.bloom
    }

    pub fn time(&self) -> u64 {
        self.header.time
    }

    pub fn gas_limit(&self) -> U256 {
        self.header.gas_limit
    }

    pub fn gas_used(&self) -> U256 {
        self.header.gas_used
    }

    /// Size of the RLP-encoded block.
    pub fn size(&self) -> StorageSize {
        StorageSize(rlp::encode(self).len() as f64)
    }

    /// Finds a transaction by hash.
    pub fn transaction(&self, hash: &Hash) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.hash() == *hash)
    }
}

impl Encodable for Block {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(3);
        s.append(&self.header);
        s.append_list::<Transaction, _>(&self.transactions);
        s.append_list::<BlockHeader, _>(&self.uncles);
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Block(#{}): Size: {} {{", self.header.number, self.size())?;
        writeln!(f, "Header:\n[\n{}\n]", self.header)?;
        writeln!(f, "Transactions:\n[")?;
        for tx in &self.transactions {
            writeln!(f, "{}", tx)?;
        }
        writeln!(f, "]\nUncles:\n[")?;
        for uncle in &self.uncles {
            writeln!(f, "{}", uncle)?;
        }
        write!(f, "]\n}}")
    }
}

/// A signed transaction as included in a block.
///
/// `from` is the sender recovered by the runtime when the transaction was
/// admitted; it is not part of the signed payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transaction {
    /// Sender's account nonce.
    pub nonce: u64,
    /// Price per unit of gas.
    pub gas_price: U256,
    /// Gas limit.
    pub gas: U256,
    /// Recipient (`None` for contract creation).
    pub to: Option<Address>,
    /// Transferred value in Wei.
    pub value: U256,
    /// Call data or contract init code.
    pub data: Vec<u8>,
    /// Recovered sender address.
    pub from: Address,
    /// Signature recovery id.
    pub v: u8,
    /// Signature r.
    pub r: U256,
    /// Signature s.
    pub s: U256,
}

impl Transaction {
    /// Keccak-256 of the RLP-encoded signed transaction.
    pub fn hash(&self) -> Hash {
        keccak256(rlp::encode(self))
    }

    /// The literal recipient field; the zero address when absent.
    pub fn recipient(&self) -> Address {
        self.to.unwrap_or_else(Address::zero)
    }

    /// A transaction without a recipient deploys its payload as a contract.
    pub fn creates_contract(&self) -> bool {
        self.to.is_none()
    }
}

impl Encodable for Transaction {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(9);
        s.append(&self.nonce);
        s.append(&self.gas_price);
        s.append(&self.gas);
        match &self.to {
            Some(to) => s.append(to),
            None => s.append_empty_data(),
        };
        s.append(&self.value);
        s.append(&self.data);
        s.append(&self.v);
        s.append(&self.r);
        s.append(&self.s);
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TX({})", hex::encode(self.hash().as_bytes()))?;
        writeln!(f, "\tContract: {}", self.creates_contract())?;
        writeln!(f, "\tFrom:     {}", hex::encode(self.from.as_bytes()))?;
        writeln!(f, "\tTo:       {}", hex::encode(self.recipient().as_bytes()))?;
        writeln!(f, "\tNonce:    {}", self.nonce)?;
        writeln!(f, "\tGasPrice: {}", self.gas_price)?;
        writeln!(f, "\tGasLimit: {}", self.gas)?;
        writeln!(f, "\tValue:    {}", self.value)?;
        writeln!(f, "\tData:     0x{}", hex::encode(&self.data))?;
        writeln!(f, "\tV:        0x{:x}", self.v)?;
        writeln!(f, "\tR:        0x{:x}", self.r)?;
        write!(f, "\tS:        0x{:x}", self.s)
    }
}

/// Byte count with human-readable display.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct StorageSize(pub f64);

impl fmt::Display for StorageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 1_000_000.0 {
            write!(f, "{:.2} mB", self.0 / 1_000_000.0)
        } else if self.0 > 1000.0 {
            write!(f, "{:.2} kB", self.0 / 1000.0)
        } else {
            write!(f, "{:.2} B", self.0)
        }
    }
}

// =============================================================================
// CLUSTER B: EXECUTION TRACE
// =============================================================================

/// A contract-call trace record emitted by the execution engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Message {
    /// Callee.
    pub to: Address,
    /// Caller.
    pub from: Address,
    /// Call data.
    pub input: Vec<u8>,
    /// Return data.
    pub output: Vec<u8>,
    /// Position of this call in the call tree.
    pub path: u64,
    /// Externally owned account that started the call chain.
    pub origin: Address,
    /// Timestamp of the enclosing block.
    pub timestamp: u64,
    /// Beneficiary of the enclosing block.
    pub coinbase: Address,
    /// Hash of the enclosing block.
    pub block: Hash,
    /// Height of the enclosing block.
    pub number: u64,
    /// Value transferred with the call.
    pub value: U256,
}

// =============================================================================
// CLUSTER C: NETWORKING
// =============================================================================

/// A protocol capability announced during the handshake.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cap {
    pub name: String,
    pub version: u32,
}

impl Cap {
    pub fn new(name: impl Into<String>, version: u32) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }
}

impl fmt::Display for Cap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

/// Client identity advertised by a peer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientIdentity {
    /// Client name, e.g. `QuantumChain`.
    pub client: String,
    pub version: String,
    /// Optional operator-supplied tag.
    #[serde(default)]
    pub custom: Option<String>,
    pub os: String,
    /// Implementation / toolchain, e.g. `rust1.82`.
    pub implementation: String,
}

impl fmt::Display for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/v{}/", self.client, self.version)?;
        if let Some(custom) = self.custom.as_deref().filter(|c| !c.is_empty()) {
            write!(f, "{}/", custom)?;
        }
        write!(f, "{}/{}", self.os, self.implementation)
    }
}

/// A connected peer as seen by the networking layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peer {
    pub remote_addr: SocketAddr,
    pub identity: ClientIdentity,
    pub caps: Vec<Cap>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tx(nonce: u64) -> Transaction {
        Transaction {
            nonce,
            gas_price: U256::from(10_000_000_000_000u64),
            gas: U256::from(21_000u64),
            to: Some(Address::repeat_byte(0xbb)),
            value: U256::from(1_000u64),
            data: vec![],
            from: Address::repeat_byte(0xaa),
            v: 27,
            r: U256::one(),
            s: U256::one(),
        }
    }

    #[test]
    fn test_keccak256_empty() {
        assert_eq!(
            hex::encode(keccak256(b"").as_bytes()),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_tx_hash_depends_on_nonce() {
        assert_ne!(sample_tx(0).hash(), sample_tx(1).hash());
        assert_eq!(sample_tx(7).hash(), sample_tx(7).hash());
    }

    #[test]
    fn test_recipient_defaults_to_zero() {
        let mut tx = sample_tx(0);
        assert!(!tx.creates_contract());
        tx.to = None;
        assert!(tx.creates_contract());
        assert!(tx.recipient().is_zero());
    }

    #[test]
    fn test_block_lookup_by_hash() {
        let block = Block {
            header: BlockHeader::default(),
            transactions: vec![sample_tx(0), sample_tx(1)],
            uncles: vec![],
        };
        let wanted = block.transactions[1].hash();
        assert_eq!(block.transaction(&wanted), Some(&block.transactions[1]));
        assert!(block.transaction(&Hash::zero()).is_none());
    }

    #[test]
    fn test_with_header_has_empty_body() {
        let header = BlockHeader {
            number: 9,
            ..Default::default()
        };
        let block = Block::with_header(header.clone());
        assert!(block.transactions.is_empty());
        assert!(block.uncles.is_empty());
        assert_eq!(block.hash(), header.hash());
    }

    #[test]
    fn test_storage_size_display() {
        assert_eq!(StorageSize(512.0).to_string(), "512.00 B");
        assert_eq!(StorageSize(1000.0).to_string(), "1000.00 B");
        assert_eq!(StorageSize(1536.0).to_string(), "1.54 kB");
        assert_eq!(StorageSize(2_500_000.0).to_string(), "2.50 mB");
    }

    #[test]
    fn test_block_size_is_encoded_length() {
        let block = Block::default();
        assert_eq!(block.size().0 as usize, rlp::encode(&block).len());
    }

    #[test]
    fn test_block_dump_mentions_number_and_txs() {
        let block = Block {
            header: BlockHeader {
                number: 42,
                ..Default::default()
            },
            transactions: vec![sample_tx(3)],
            uncles: vec![],
        };
        let dump = block.to_string();
        assert!(dump.starts_with("Block(#42)"));
        assert!(dump.contains(&hex::encode(block.transactions[0].hash().as_bytes())));
    }

    #[test]
    fn test_cap_and_identity_display() {
        assert_eq!(Cap::new("eth", 60).to_string(), "eth/60");
        let id = ClientIdentity {
            client: "QuantumChain".into(),
            version: "0.1.0".into(),
            custom: None,
            os: "linux".into(),
            implementation: "rust".into(),
        };
        assert_eq!(id.to_string(), "QuantumChain/v0.1.0/linux/rust");
        let tagged = ClientIdentity {
            custom: Some("node-7".into()),
            ..id
        };
        assert_eq!(tagged.to_string(), "QuantumChain/v0.1.0/node-7/linux/rust");
    }
}
