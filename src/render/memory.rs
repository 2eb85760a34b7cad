//! Synthetic addresses, size estimates, and hex dumps for the
//! memory-style reports. Everything here is cosmetic and derived
//! deterministically from record fields, so reports are stable across
//! runs and usable in tests.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash64(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}

/// Stable fake heap address for a variable name.
pub fn variable_address(name: &str) -> u64 {
    0x2000_0000 + hash64(name) % 0x100_0000
}

/// Stable fake stack address for a procedure frame.
pub fn frame_address(function: &str) -> u64 {
    0x7FFF_0000 + hash64(function) % 0x1_0000
}

/// Stable fake code address for a line breakpoint.
pub fn breakpoint_address(line: usize) -> u64 {
    0x1000_0000 + (line as u64 * 0x1000) % 0x100_0000
}

/// Fake address of the n-th element inside a composite value.
pub fn element_address(base: u64, index: usize) -> u64 {
    base + index as u64 * 0x1000
}

/// Pointer plus text plus terminator, mirroring the original estimate.
pub fn estimated_size(value: &str) -> usize {
    std::mem::size_of::<usize>() + value.len() + 1
}

const DUMP_LIMIT: usize = 32;
const FILLER_BYTES: usize = 8;

/// Hex dump of the value's bytes plus a few deterministic filler bytes,
/// 16 per row, truncated after 32 bytes.
pub fn hex_dump(value: &str) -> String {
    let mut bytes: Vec<u8> = value.bytes().collect();
    let filler = hash64(value);
    for i in 0..FILLER_BYTES {
        bytes.push((filler >> (i * 8)) as u8);
    }

    let mut out = String::from("    ");
    for (i, byte) in bytes.iter().take(DUMP_LIMIT).enumerate() {
        if i > 0 && i % 16 == 0 {
            out.push_str("\n    ");
        }
        out.push_str(&format!("{:02x} ", byte));
    }
    if bytes.len() > DUMP_LIMIT {
        out.push_str(&format!("\n    ... (+{} more bytes)", bytes.len() - DUMP_LIMIT));
    }
    out
}
