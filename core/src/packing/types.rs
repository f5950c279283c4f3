//! packing/types.rs
//! Quaternary symbol type.

use std::fmt;

use num_enum::TryFromPrimitive;

use crate::constants::{ALPHABET, SINGLETON_CODES};
use crate::types::Code;

/// One nucleotide symbol. The discriminant is both its 2-bit value and its
/// singleton LZW code.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, TryFromPrimitive)]
pub enum Symbol {
    A = 0b00,
    C = 0b01,
    G = 0b10,
    T = 0b11,
}

impl Symbol {
    /// Map the low two bits of `bits`.
    #[inline(always)]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Symbol::A,
            0b01 => Symbol::C,
            0b10 => Symbol::G,
            _ => Symbol::T,
        }
    }

    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    #[inline(always)]
    pub const fn code(self) -> Code {
        self as u8 as Code
    }

    #[inline(always)]
    pub const fn as_byte(self) -> u8 {
        ALPHABET[self as usize]
    }

    /// Accepts upper and lower case.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' | 'a' => Some(Symbol::A),
            'C' | 'c' => Some(Symbol::C),
            'G' | 'g' => Some(Symbol::G),
            'T' | 't' => Some(Symbol::T),
            _ => None,
        }
    }

    /// Singleton code back to its symbol; `None` for any learned or reserved code.
    pub fn from_code(code: Code) -> Option<Self> {
        if code >= SINGLETON_CODES {
            return None;
        }
        Symbol::try_from_primitive(code as u8).ok()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_byte() as char)
    }
}

/// Render symbols as an ASCII string.
pub fn symbols_to_string(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.as_byte() as char).collect()
}
