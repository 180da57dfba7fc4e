//! # EVM Opcodes
//!
//! Mnemonic table for the Ethereum Virtual Machine instruction set, up to
//! Cancun (transient storage, MCOPY).

use std::fmt;

const PUSH: [&str; 32] = [
    "PUSH1", "PUSH2", "PUSH3", "PUSH4", "PUSH5", "PUSH6", "PUSH7", "PUSH8", "PUSH9", "PUSH10",
    "PUSH11", "PUSH12", "PUSH13", "PUSH14", "PUSH15", "PUSH16", "PUSH17", "PUSH18", "PUSH19",
    "PUSH20", "PUSH21", "PUSH22", "PUSH23", "PUSH24", "PUSH25", "PUSH26", "PUSH27", "PUSH28",
    "PUSH29", "PUSH30", "PUSH31", "PUSH32",
];

const DUP: [&str; 16] = [
    "DUP1", "DUP2", "DUP3", "DUP4", "DUP5", "DUP6", "DUP7", "DUP8", "DUP9", "DUP10", "DUP11",
    "DUP12", "DUP13", "DUP14", "DUP15", "DUP16",
];

const SWAP: [&str; 16] = [
    "SWAP1", "SWAP2", "SWAP3", "SWAP4", "SWAP5", "SWAP6", "SWAP7", "SWAP8", "SWAP9", "SWAP10",
    "SWAP11", "SWAP12", "SWAP13", "SWAP14", "SWAP15", "SWAP16",
];

const LOG: [&str; 5] = ["LOG0", "LOG1", "LOG2", "LOG3", "LOG4"];

/// A single EVM instruction byte.
///
/// Any byte is representable; bytes without an assigned instruction have no
/// mnemonic and display as `Missing opcode 0x..`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Opcode(pub u8);

impl Opcode {
    pub const PUSH0: Self = Self(0x5F);
    pub const PUSH1: Self = Self(0x60);
    pub const PUSH32: Self = Self(0x7F);

    /// Upper-case mnemonic, or `None` for an unassigned byte.
    #[must_use]
    pub fn mnemonic(&self) -> Option<&'static str> {
        let name = match self.0 {
            // 0x00 - Stop and Arithmetic
            0x00 => "STOP",
            0x01 => "ADD",
            0x02 => "MUL",
            0x03 => "SUB",
            0x04 => "DIV",
            0x05 => "SDIV",
            0x06 => "MOD",
            0x07 => "SMOD",
            0x08 => "ADDMOD",
            0x09 => "MULMOD",
            0x0A => "EXP",
            0x0B => "SIGNEXTEND",

            // 0x10 - Comparison & Bitwise
            0x10 => "LT",
            0x11 => "GT",
            0x12 => "SLT",
            0x13 => "SGT",
            0x14 => "EQ",
            0x15 => "ISZERO",
            0x16 => "AND",
            0x17 => "OR",
            0x18 => "XOR",
            0x19 => "NOT",
            0x1A => "BYTE",
            0x1B => "SHL",
            0x1C => "SHR",
            0x1D => "SAR",

            0x20 => "KECCAK256",

            // 0x30 - Environmental Information
            0x30 => "ADDRESS",
            0x31 => "BALANCE",
            0x32 => "ORIGIN",
            0x33 => "CALLER",
            0x34 => "CALLVALUE",
            0x35 => "CALLDATALOAD",
            0x36 => "CALLDATASIZE",
            0x37 => "CALLDATACOPY",
            0x38 => "CODESIZE",
            0x39 => "CODECOPY",
            0x3A => "GASPRICE",
            0x3B => "EXTCODESIZE",
            0x3C => "EXTCODECOPY",
            0x3D => "RETURNDATASIZE",
            0x3E => "RETURNDATACOPY",
            0x3F => "EXTCODEHASH",

            // 0x40 - Block Information
            0x40 => "BLOCKHASH",
            0x41 => "COINBASE",
            0x42 => "TIMESTAMP",
            0x43 => "NUMBER",
            0x44 => "PREVRANDAO",
            0x45 => "GASLIMIT",
            0x46 => "CHAINID",
            0x47 => "SELFBALANCE",
            0x48 => "BASEFEE",
            0x49 => "BLOBHASH",
            0x4A => "BLOBBASEFEE",

            // 0x50 - Stack, Memory, Storage
            0x50 => "POP",
            0x51 => "MLOAD",
            0x52 => "MSTORE",
            0x53 => "MSTORE8",
            0x54 => "SLOAD",
            0x55 => "SSTORE",
            0x56 => "JUMP",
            0x57 => "JUMPI",
            0x58 => "PC",
            0x59 => "MSIZE",
            0x5A => "GAS",
            0x5B => "JUMPDEST",
            0x5C => "TLOAD",
            0x5D => "TSTORE",
            0x5E => "MCOPY",
            0x5F => "PUSH0",

            b @ 0x60..=0x7F => PUSH[(b - 0x60) as usize],
            b @ 0x80..=0x8F => DUP[(b - 0x80) as usize],
            b @ 0x90..=0x9F => SWAP[(b - 0x90) as usize],
            b @ 0xA0..=0xA4 => LOG[(b - 0xA0) as usize],

            // 0xF0 - System
            0xF0 => "CREATE",
            0xF1 => "CALL",
            0xF2 => "CALLCODE",
            0xF3 => "RETURN",
            0xF4 => "DELEGATECALL",
            0xF5 => "CREATE2",
            0xFA => "STATICCALL",
            0xFD => "REVERT",
            0xFE => "INVALID",
            0xFF => "SELFDESTRUCT",

            _ => return None,
        };
        Some(name)
    }

    /// Number of immediate bytes following a PUSH instruction.
    #[must_use]
    pub fn push_size(&self) -> Option<usize> {
        match self.0 {
            b if b == Self::PUSH0.0 => Some(0),
            b if (Self::PUSH1.0..=Self::PUSH32.0).contains(&b) => {
                Some((b - Self::PUSH0.0) as usize)
            }
            _ => None,
        }
    }

    /// Returns true if this is a PUSH instruction.
    #[must_use]
    pub fn is_push(&self) -> bool {
        self.push_size().is_some()
    }
}

impl From<u8> for Opcode {
    fn from(byte: u8) -> Self {
        Self(byte)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mnemonic() {
            Some(name) => f.write_str(name),
            None => write!(f, "Missing opcode 0x{:x}", self.0),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
