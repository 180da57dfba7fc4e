//! Bytecode disassembly.

use super::opcodes::Opcode;

/// Renders bytecode as one listing line per instruction.
///
/// Each instruction is printed as `PPPP: MNEMONIC` with a zero-padded
/// decimal program counter. A PUSH immediate gets its own line at its own
/// offset, printed as `0x` hex. A PUSH whose immediate runs past the end of
/// the code ends the listing.
pub fn disassemble(code: &[u8]) -> Vec<String> {
    let mut listing = Vec::new();
    let mut pc = 0usize;

    while pc < code.len() {
        let op = Opcode(code[pc]);
        listing.push(format!("{:04}: {}", pc, op));

        if let Some(size) = op.push_size().filter(|&n| n > 0) {
            pc += 1;
            let Some(immediate) = code.get(pc..pc + size) else {
                break;
            };
            listing.push(format!("{:04}: 0x{}", pc, hex::encode(immediate)));
            pc += size - 1;
        }

        pc += 1;
    }

    listing
}
