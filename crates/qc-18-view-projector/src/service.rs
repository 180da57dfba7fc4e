//! # View Projector Service
//!
//! Converts node-runtime domain objects into [`crate::domain::views`]
//! records. Every projection is a pure function of its input and the
//! immutable [`ProjectorConfig`]; nothing here mutates the source objects.

use crate::domain::config::{ProjectorConfig, ValueFormat};
use crate::domain::error::ProjectorResult;
use crate::domain::format::{currency_to_string, to_hex};
use crate::domain::views::{
    BlockView, KeyView, MessageView, PeerView, ReceiptView, TransactionView,
};
use crate::evm::{created_address, disassemble};
use shared_types::{Block, Cap, KeyPair, Message, Peer, Transaction, U256};
use tracing::{debug, instrument, trace};

/// Stateless projector from domain objects to view records.
#[derive(Debug, Clone, Default)]
pub struct ViewProjector {
    config: ProjectorConfig,
}

impl ViewProjector {
    /// Creates a projector after validating `config`.
    pub fn new(config: ProjectorConfig) -> ProjectorResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ProjectorConfig {
        &self.config
    }

    // ═══════════════════════════════════════════════════════════════════════
    // CHAIN
    // ═══════════════════════════════════════════════════════════════════════

    /// Projects a block with its transactions and uncles.
    ///
    /// An absent block yields [`BlockView::default`]. Uncles are projected
    /// as body-less blocks built from their header alone.
    #[instrument(skip_all, fields(number = block.map(Block::number)))]
    pub fn project_block(&self, block: Option<&Block>) -> BlockView {
        let Some(block) = block else {
            debug!("No block supplied, returning empty view");
            return BlockView::default();
        };

        let view = self.block_view(block);
        debug!(
            hash = %view.hash,
            transactions = view.transactions.len(),
            uncles = view.uncles.len(),
            "Projected block"
        );
        view
    }

    fn block_view(&self, block: &Block) -> BlockView {
        let transactions = block
            .transactions
            .iter()
            .map(|tx| self.project_transaction(tx))
            .collect();

        let uncles = block
            .uncles
            .iter()
            .map(|header| self.block_view(&Block::with_header(header.clone())))
            .collect();

        let text = block.to_string();

        BlockView {
            size: block.size().to_string(),
            number: block.number(),
            hash: to_hex(block.hash()),
            transactions,
            uncles,
            time: block.time(),
            coinbase: to_hex(block.coinbase()),
            name: String::new(),
            gas_limit: block.gas_limit().to_string(),
            gas_used: block.gas_used().to_string(),
            prev_hash: to_hex(block.parent_hash()),
            bloom: to_hex(block.bloom()),
            raw: self.dump(&text),
            text,
        }
    }

    /// Projects a single transaction.
    ///
    /// A zero recipient is replaced by the address the transaction deploys
    /// to. Creation payloads are rendered as disassembly; `raw_data` always
    /// keeps the plain hex.
    ///
    /// `creates_contract` follows the absence of a recipient only. An
    /// explicit `Some(Address::zero())` still gets the derived address but
    /// keeps its payload as hex.
    pub fn project_transaction(&self, tx: &Transaction) -> TransactionView {
        let hash = to_hex(tx.hash());
        let sender = tx.from;

        let mut recipient = tx.recipient();
        if recipient.is_zero() {
            recipient = created_address(tx);
        }

        let creates_contract = tx.creates_contract();
        let raw_data = to_hex(&tx.data);
        let data = if creates_contract {
            disassemble(&tx.data).join(&self.config.disassembly_separator)
        } else {
            raw_data.clone()
        };

        trace!(%hash, creates_contract, "Projected transaction");

        TransactionView {
            value: self.format_value(&tx.value),
            gas: tx.gas.to_string(),
            gas_price: tx.gas_price.to_string(),
            hash,
            address: to_hex(recipient),
            sender: to_hex(sender),
            raw_data,
            data,
            is_contract: creates_contract,
            creates_contract,
            confirmations: 0,
            raw: tx.to_string(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // KEYS & PEERS
    // ═══════════════════════════════════════════════════════════════════════

    /// Hex projection of a key pair.
    pub fn project_key(&self, key: &KeyPair) -> KeyView {
        KeyView {
            address: to_hex(key.address()),
            private_key: to_hex(key.private_key),
            public_key: to_hex(key.public_key),
        }
    }

    /// Builds a key pair from raw secret bytes and projects it.
    pub fn project_secret_key(&self, secret: &[u8]) -> ProjectorResult<KeyView> {
        let key = KeyPair::from_secret(secret)?;
        Ok(self.project_key(&key))
    }

    /// Projects a connected peer. Capabilities render as `[name/version ...]`.
    pub fn project_peer(&self, peer: &Peer) -> PeerView {
        let caps = peer
            .caps
            .iter()
            .map(Cap::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        debug!(remote = %peer.remote_addr, caps = peer.caps.len(), "Projected peer");

        PeerView {
            ip: peer.remote_addr.to_string(),
            version: peer.identity.to_string(),
            caps: format!("[{}]", caps),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // RECEIPTS & TRACES
    // ═══════════════════════════════════════════════════════════════════════

    /// Receipt shown to the front-end after it submits a transaction.
    pub fn project_receipt(
        &self,
        created_contract: bool,
        creation_address: &[u8],
        hash: &[u8],
        sender: &[u8],
    ) -> ReceiptView {
        ReceiptView::new(created_contract, creation_address, hash, sender)
    }

    /// Receipt returned by the transact call to scripted callers.
    pub fn project_transact_receipt(
        &self,
        created_contract: bool,
        creation_address: &[u8],
        hash: &[u8],
        sender: &[u8],
    ) -> ReceiptView {
        ReceiptView::new(created_contract, creation_address, hash, sender)
    }

    /// Projects an execution-trace message.
    ///
    /// `coinbase` is filled from `origin`, not from the message's own
    /// coinbase field.
    #[instrument(skip_all, fields(path = message.path, number = message.number))]
    pub fn project_message(&self, message: &Message) -> MessageView {
        let origin = to_hex(message.origin);

        debug!(to = %to_hex(message.to), "Projected message");

        MessageView {
            to: to_hex(message.to),
            from: to_hex(message.from),
            input: to_hex(&message.input),
            output: to_hex(&message.output),
            path: message.path,
            coinbase: origin.clone(),
            origin,
            timestamp: message.timestamp,
            block: to_hex(message.block),
            number: message.number,
            value: message.value.to_string(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    fn format_value(&self, value: &U256) -> String {
        match self.config.value_format {
            ValueFormat::Denominated => currency_to_string(value),
            ValueFormat::Decimal => value.to_string(),
        }
    }

    fn dump(&self, text: &str) -> String {
        if self.config.include_raw_dump {
            text.to_owned()
        } else {
            String::new()
        }
    }
}
