//! constants.rs
//! Fixed codes, alphabet and defaults shared by every layer.

/// Reserved in-band code: flush the LZW dictionary and start over.
/// Never assigned as a learned code.
pub const RESET_MARKER: u32 = 65_535;

/// Number of singleton codes (A, C, G, T).
pub const SINGLETON_CODES: u32 = 4;

/// First code handed out to a learned dictionary entry.
pub const FIRST_LEARNED_CODE: u32 = SINGLETON_CODES;

/// Last code that may be learned; everything above is reserved.
pub const LAST_LEARNED_CODE: u32 = RESET_MARKER - 1;

/// Alphabet in code order: A=0, C=1, G=2, T=3.
pub const ALPHABET: [u8; 4] = *b"ACGT";

/// Bits carried by one symbol.
pub const BITS_PER_SYMBOL: u64 = 2;

/// Symbols produced by one byte.
pub const SYMBOLS_PER_BYTE: u64 = 4;

/// Bridge suffix never grows past this many codes.
pub const MAX_BRIDGE_LEN: usize = 10;

/// Defaults when the config leaves a field unset.
pub const DEFAULT_CHUNK_SIZE: u64 = 1000;
pub const DEFAULT_MIN_PATTERN_LENGTH: u64 = 4;

/// Floor for the per-code width used by size accounting.
pub const MIN_BITS_PER_CODE: u32 = 16;

/// Bits per base of a plain 2-bit nucleotide encoding.
pub const DNA_BITS_PER_BASE_LIMIT: f64 = 2.0;

/// `log` target used by every diagnostic line.
pub const LOG_TARGET: &str = "ccc";
