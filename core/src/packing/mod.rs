//! packing/mod.rs
//! Bit packer: bytes <-> quaternary symbol strings.
//!
//! Mapping (2 bits per symbol, MSB pair first):
//! 00 -> A, 01 -> C, 10 -> G, 11 -> T

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;

/// True when every character is one of A, C, G, T (either case).
pub fn is_valid_symbols(symbols: &str) -> bool {
    symbols.chars().all(|c| Symbol::from_char(c).is_some())
}

/// Percentage of G and C among all characters; 0.0 for an empty string.
pub fn gc_content(symbols: &str) -> f64 {
    let mut total = 0usize;
    let mut gc = 0usize;
    for c in symbols.chars() {
        total += 1;
        if matches!(c, 'G' | 'g' | 'C' | 'c') {
            gc += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }
    gc as f64 / total as f64 * 100.0
}
