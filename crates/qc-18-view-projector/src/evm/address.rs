//! CREATE address derivation.

use rlp::RlpStream;
use shared_types::{keccak256, Address, Transaction};

/// Address of a contract deployed by `sender` at account nonce `nonce`.
///
/// `keccak256(rlp([sender, nonce]))[12..]`
pub fn contract_address(sender: &Address, nonce: u64) -> Address {
    let mut stream = RlpStream::new_list(2);
    stream.append(sender);
    stream.append(&nonce);
    let hash = keccak256(stream.out());
    Address::from_slice(&hash.as_bytes()[12..])
}

/// Address a contract-creation transaction deploys to.
pub fn created_address(tx: &Transaction) -> Address {
    contract_address(&tx.from, tx.nonce)
}
