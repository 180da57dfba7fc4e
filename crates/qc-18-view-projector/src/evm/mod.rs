//! # EVM Utilities
//!
//! Stateless helpers borrowed from the execution layer for presentation:
//! opcode naming, bytecode disassembly and CREATE address derivation.

pub mod address;
pub mod disasm;
pub mod opcodes;

pub use address::{contract_address, created_address};
pub use disasm::disassemble;
pub use opcodes::Opcode;
