//! # Projection Contract Tests
//!
//! End-to-end checks of the view records the desktop UI binds to.
//!
//! ## Test Categories
//!
//! 1. **Block projection** - counts, ordering, uncles, lookups
//! 2. **Contract creation** - address resolution, disassembly
//! 3. **Wire shape** - JSON keys and values

use qc_18_view_projector::{contract_address, BlockView, ProjectorConfig, ViewProjector};
use serde_json::{json, Value};
use shared_types::{Address, Block, BlockHeader, Cap, ClientIdentity, Message, Peer, Transaction, U256};

// =============================================================================
// TEST HELPERS
// =============================================================================

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn make_projector() -> ViewProjector {
    init_tracing();
    ViewProjector::new(ProjectorConfig::default()).unwrap()
}

fn make_tx(nonce: u64, to: Option<Address>, data: Vec<u8>) -> Transaction {
    Transaction {
        nonce,
        gas_price: U256::from(20_000_000_000u64),
        gas: U256::from(90_000u64),
        to,
        value: U256::from(1_000_000u64),
        data,
        from: Address::repeat_byte(0xAA),
        v: 28,
        r: U256::from(nonce + 1),
        s: U256::from(nonce + 2),
    }
}

fn make_block(number: u64, txs: Vec<Transaction>, uncles: Vec<BlockHeader>) -> Block {
    Block {
        header: BlockHeader {
            number,
            gas_limit: U256::from(4_712_388u64),
            gas_used: U256::from(21_000u64 * txs.len() as u64),
            time: 1_438_269_988,
            ..Default::default()
        },
        transactions: txs,
        uncles,
    }
}

fn hex(bytes: impl AsRef<[u8]>) -> String {
    ::hex::encode(bytes)
}

// =============================================================================
// BLOCK PROJECTION
// =============================================================================

#[test]
fn block_number_and_transaction_order_preserved() {
    let projector = make_projector();
    let txs: Vec<_> = (0..5)
        .map(|n| make_tx(n, Some(Address::repeat_byte(0xBB)), vec![n as u8]))
        .collect();
    let block = make_block(1_150_000, txs.clone(), vec![]);

    let view = projector.project_block(Some(&block));

    assert_eq!(view.number, block.header.number);
    assert_eq!(view.transactions.len(), txs.len());
    for (projected, source) in view.transactions.iter().zip(&txs) {
        assert_eq!(projected.hash, hex(source.hash()));
        assert_eq!(projected.raw_data, hex(&source.data));
    }
}

#[test]
fn absent_block_is_default_view() {
    let projector = make_projector();
    let view = projector.project_block(None);
    assert_eq!(view, BlockView::default());
    assert!(view.transactions.is_empty());
    assert!(view.uncles.is_empty());
}

#[test]
fn uncles_are_headers_only() {
    let projector = make_projector();
    let uncle = BlockHeader {
        number: 99,
        coinbase: Address::repeat_byte(0xCC),
        ..Default::default()
    };
    let block = make_block(100, vec![make_tx(0, None, vec![0x00])], vec![uncle.clone()]);

    let view = projector.project_block(Some(&block));

    assert_eq!(view.uncles.len(), 1);
    let projected = &view.uncles[0];
    assert_eq!(projected.number, 99);
    assert_eq!(projected.hash, hex(uncle.hash()));
    assert_eq!(projected.coinbase, "cc".repeat(20));
    assert!(projected.transactions.is_empty());
    assert!(projected.uncles.is_empty());
}

#[test]
fn lookup_finds_second_transaction() {
    let projector = make_projector();
    let t1 = make_tx(0, Some(Address::repeat_byte(0x01)), vec![]);
    let t2 = make_tx(1, Some(Address::repeat_byte(0x02)), vec![]);
    let block = make_block(7, vec![t1, t2.clone()], vec![]);

    let view = projector.project_block(Some(&block));

    let found = view.transaction(&hex(t2.hash())).unwrap();
    assert_eq!(found, &projector.project_transaction(&t2));
    assert!(view.transaction("deadbeef").is_none());
    assert!(projector.project_block(None).transaction("deadbeef").is_none());
}

#[test]
fn display_survives_disabled_raw_dump() {
    init_tracing();
    let projector = ViewProjector::new(ProjectorConfig {
        include_raw_dump: false,
        ..Default::default()
    })
    .unwrap();
    let block = make_block(12, vec![make_tx(0, None, vec![0x00])], vec![BlockHeader::default()]);

    let view = projector.project_block(Some(&block));

    assert_eq!(view.to_string(), block.to_string());
    assert_eq!(serde_json::to_value(&view).unwrap()["raw"], json!(""));
}

// =============================================================================
// CONTRACT CREATION
// =============================================================================

#[test]
fn zero_recipient_resolves_to_created_address() {
    let projector = make_projector();
    let tx = make_tx(3, None, vec![0x60, 0x01]);

    let view = projector.project_transaction(&tx);

    let expected = contract_address(&tx.from, tx.nonce);
    assert_eq!(view.address, hex(expected));
    assert_ne!(view.address, "00".repeat(20));
}

#[test]
fn creation_payload_is_disassembled() {
    let projector = make_projector();
    let code = vec![0x60, 0x2a, 0x60, 0x00, 0x55, 0x00];
    let tx = make_tx(0, None, code.clone());

    let view = projector.project_transaction(&tx);

    assert!(view.creates_contract);
    assert_eq!(view.raw_data, hex(&code));
    let lines: Vec<&str> = view.data.lines().collect();
    assert_eq!(
        lines,
        [
            "0000: PUSH1",
            "0001: 0x2a",
            "0002: PUSH1",
            "0003: 0x00",
            "0004: SSTORE",
            "0005: STOP"
        ]
    );
}

#[test]
fn call_payload_stays_hex() {
    let projector = make_projector();
    let tx = make_tx(0, Some(Address::repeat_byte(0x10)), vec![0xa9, 0x05, 0x9c, 0xbb]);
    let view = projector.project_transaction(&tx);
    assert!(!view.creates_contract);
    assert_eq!(view.data, "a9059cbb");
    assert_eq!(view.data, view.raw_data);
}

// =============================================================================
// WIRE SHAPE
// =============================================================================

#[test]
fn transaction_json_keys() {
    let projector = make_projector();
    let view = projector.project_transaction(&make_tx(0, Some(Address::repeat_byte(0x10)), vec![]));
    let value = serde_json::to_value(&view).unwrap();

    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    for key in [
        "value",
        "gas",
        "gasPrice",
        "hash",
        "address",
        "sender",
        "rawData",
        "data",
        "isContract",
        "createsContract",
        "confirmations",
    ] {
        assert!(keys.contains(&key), "missing {key}");
    }
    assert_eq!(value["value"], json!("1 Babbage"));
    assert_eq!(value["gasPrice"], json!("20000000000"));
}

#[test]
fn block_json_nests_transactions_and_uncles() {
    let projector = make_projector();
    let block = make_block(
        5,
        vec![make_tx(0, Some(Address::repeat_byte(0x10)), vec![])],
        vec![BlockHeader::default()],
    );
    let value = serde_json::to_value(projector.project_block(Some(&block))).unwrap();

    assert_eq!(value["number"], json!(5));
    assert_eq!(value["gasLimit"], json!("4712388"));
    assert_eq!(value["gasUsed"], json!("21000"));
    assert!(matches!(&value["transactions"], Value::Array(txs) if txs.len() == 1));
    assert!(matches!(&value["uncles"], Value::Array(uncles) if uncles.len() == 1));
    assert!(value["raw"].as_str().unwrap().starts_with("Block(#5)"));
}

#[test]
fn peer_and_message_json() {
    let projector = make_projector();
    let peer = Peer {
        remote_addr: "[::1]:30303".parse().unwrap(),
        identity: ClientIdentity {
            client: "QuantumChain".into(),
            version: "0.1.0".into(),
            custom: Some("ui".into()),
            os: "linux".into(),
            implementation: "rust".into(),
        },
        caps: vec![Cap::new("eth", 60), Cap::new("shh", 1)],
    };
    assert_eq!(
        serde_json::to_value(projector.project_peer(&peer)).unwrap(),
        json!({
            "ip": "[::1]:30303",
            "version": "QuantumChain/v0.1.0/ui/linux/rust",
            "caps": "[eth/60 shh/1]",
        })
    );

    let message = Message {
        origin: Address::repeat_byte(0x0F),
        coinbase: Address::repeat_byte(0xF0),
        value: U256::exp10(30),
        ..Default::default()
    };
    let value = serde_json::to_value(projector.project_message(&message)).unwrap();
    assert_eq!(value["coinbase"], value["origin"]);
    assert_eq!(value["value"], json!("1000000000000000000000000000000"));
    assert_eq!(value["path"], json!(0));
}
