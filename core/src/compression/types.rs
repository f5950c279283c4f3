//! compression/types.rs
//! Coder traits and the two bounded LZW dictionaries.

use std::collections::HashMap;

use crate::constants::{FIRST_LEARNED_CODE, LAST_LEARNED_CODE, RESET_MARKER};
use crate::packing::Symbol;
use crate::types::{Code, CodecError};

// Require Send so coders can move between threads with their owner.
pub trait Compressor: Send {
    /// Feed a run of symbols, appending any codes that become final.
    fn compress_chunk(&mut self, input: &[Symbol], out: &mut Vec<Code>) -> Result<(), CodecError>;
    /// Flush the pending phrase.
    fn finish(&mut self, out: &mut Vec<Code>) -> Result<(), CodecError>;
}

pub trait Decompressor: Send {
    /// Feed a run of codes, appending decoded symbols.
    fn decompress_chunk(&mut self, input: &[Code], out: &mut Vec<Symbol>) -> Result<(), CodecError>;
    /// Check the stream ended in a valid state.
    fn finish(&mut self, out: &mut Vec<Symbol>) -> Result<(), CodecError>;
}

/// Encoder side: phrase `prefix + symbol` -> code.
///
/// A phrase is identified by the code of its prefix plus one trailing symbol,
/// so lookups never hash whole strings.
#[derive(Debug, Clone)]
pub struct EncodeDictionary {
    learned: HashMap<(Code, Symbol), Code>,
    next_code: Code,
}

impl Default for EncodeDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl EncodeDictionary {
    pub fn new() -> Self {
        Self {
            learned: HashMap::new(),
            next_code: FIRST_LEARNED_CODE,
        }
    }

    /// Back to the four singletons.
    pub fn reset(&mut self) {
        self.learned.clear();
        self.next_code = FIRST_LEARNED_CODE;
    }

    #[inline]
    pub fn next_code(&self) -> Code {
        self.next_code
    }

    /// No learnable code left below the reset marker.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.next_code > LAST_LEARNED_CODE
    }

    #[inline]
    pub fn lookup(&self, prefix: Code, symbol: Symbol) -> Option<Code> {
        self.learned.get(&(prefix, symbol)).copied()
    }

    /// Assign the next code to `prefix + symbol`.
    pub fn learn(&mut self, prefix: Code, symbol: Symbol) -> Result<Code, CodecError> {
        if self.is_full() {
            return Err(CodecError::DictionaryOverflow { code: self.next_code });
        }
        let code = self.next_code;
        self.learned.insert((prefix, symbol), code);
        self.next_code += 1;
        Ok(code)
    }
}

const NO_PREFIX: Code = Code::MAX;

#[derive(Debug, Clone, Copy)]
struct Entry {
    prefix: Code,
    last: Symbol,
    first: Symbol,
    len: u32,
}

/// Decoder side: code -> phrase, stored as prefix links.
#[derive(Debug, Clone)]
pub struct DecodeDictionary {
    entries: Vec<Entry>,
}

impl Default for DecodeDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl DecodeDictionary {
    pub fn new() -> Self {
        let entries = [Symbol::A, Symbol::C, Symbol::G, Symbol::T]
            .into_iter()
            .map(|s| Entry { prefix: NO_PREFIX, last: s, first: s, len: 1 })
            .collect();
        Self { entries }
    }

    pub fn reset(&mut self) {
        self.entries.truncate(FIRST_LEARNED_CODE as usize);
    }

    #[inline]
    pub fn next_code(&self) -> Code {
        self.entries.len() as Code
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.next_code() > LAST_LEARNED_CODE
    }

    #[inline]
    pub fn contains(&self, code: Code) -> bool {
        code != RESET_MARKER && (code as usize) < self.entries.len()
    }

    /// First symbol of the phrase behind `code`. Caller checks `contains`.
    #[inline]
    pub fn first(&self, code: Code) -> Symbol {
        self.entries[code as usize].first
    }

    /// Phrase length behind `code`. Caller checks `contains`.
    #[inline]
    pub fn phrase_len(&self, code: Code) -> usize {
        self.entries[code as usize].len as usize
    }

    /// Define the next code as `phrase(prefix) + symbol`.
    pub fn learn(&mut self, prefix: Code, symbol: Symbol) -> Result<Code, CodecError> {
        if self.is_full() {
            return Err(CodecError::DictionaryOverflow { code: self.next_code() });
        }
        let parent = self.entries[prefix as usize];
        let code = self.next_code();
        self.entries.push(Entry {
            prefix,
            last: symbol,
            first: parent.first,
            len: parent.len + 1,
        });
        Ok(code)
    }

    /// Append the phrase behind `code` to `out`. Caller checks `contains`.
    pub fn expand(&self, code: Code, out: &mut Vec<Symbol>) {
        let len = self.phrase_len(code);
        let start = out.len();
        out.resize(start + len, Symbol::A);

        let mut at = start + len;
        let mut cursor = code;
        loop {
            let entry = self.entries[cursor as usize];
            at -= 1;
            out[at] = entry.last;
            if entry.prefix == NO_PREFIX {
                break;
            }
            cursor = entry.prefix;
        }
        debug_assert_eq!(at, start);
    }
}
