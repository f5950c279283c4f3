//! compression/decode.rs
//! Streaming LZW decoder with reset handling and strict/lenient policy.

use crate::codec::Diagnostics;
use crate::compression::types::{DecodeDictionary, Decompressor};
use crate::constants::RESET_MARKER;
use crate::packing::Symbol;
use crate::types::{Code, CodecError, ValidationMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecoderState {
    /// Nothing decoded yet.
    Start,
    /// Reset marker seen; the next code must be a singleton.
    AfterReset,
    /// `prev` is the last code that produced output.
    Running { prev: Code },
}

/// LZW decoder mirroring [`LzwEncoder`](crate::compression::LzwEncoder).
///
/// Handles the code-equals-next-code case, rebuilds the dictionary in step
/// with the encoder and applies the reset protocol. Unknown codes are an
/// error in strict mode and skipped with a warning in lenient mode.
pub struct LzwDecoder {
    dict: DecodeDictionary,
    state: DecoderState,
    mode: ValidationMode,
    position: usize,
    skipped: u64,
    resets: u64,
    diag: Diagnostics,
}

impl LzwDecoder {
    pub fn new(mode: ValidationMode, diag: Diagnostics) -> Self {
        Self {
            dict: DecodeDictionary::new(),
            state: DecoderState::Start,
            mode,
            position: 0,
            skipped: 0,
            resets: 0,
            diag,
        }
    }

    /// Codes dropped in lenient mode.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn resets(&self) -> u64 {
        self.resets
    }

    fn reject(&mut self, code: Code, position: usize) -> Result<(), CodecError> {
        let err = CodecError::InvalidCode {
            code,
            position,
            next_code: self.dict.next_code(),
        };
        if self.mode.is_strict() {
            return Err(err);
        }
        self.skipped += 1;
        self.diag.warn(format!("skipping {}", err));
        Ok(())
    }

    fn step(&mut self, code: Code, position: usize, out: &mut Vec<Symbol>) -> Result<(), CodecError> {
        match self.state {
            DecoderState::Start => {
                if code == RESET_MARKER {
                    return Err(CodecError::InvalidStream(
                        "stream starts with a reset marker".into(),
                    ));
                }
                if self.dict.contains(code) {
                    self.dict.expand(code, out);
                    self.state = DecoderState::Running { prev: code };
                    Ok(())
                } else {
                    self.reject(code, position)
                }
            }
            DecoderState::AfterReset => {
                if Symbol::from_code(code).is_none() {
                    return Err(CodecError::InvalidStream(format!(
                        "code {} at position {} follows a reset marker but is not a singleton",
                        code, position
                    )));
                }
                self.dict.expand(code, out);
                self.state = DecoderState::Running { prev: code };
                Ok(())
            }
            DecoderState::Running { prev } => {
                if code == RESET_MARKER {
                    self.dict.reset();
                    self.resets += 1;
                    self.diag.debug(format!("reset marker at position {}", position));
                    self.state = DecoderState::AfterReset;
                    return Ok(());
                }

                if self.dict.contains(code) {
                    let first = self.dict.first(code);
                    self.dict.expand(code, out);
                    if !self.dict.is_full() {
                        self.dict.learn(prev, first)?;
                    }
                } else if code == self.dict.next_code() {
                    // Phrase not yet known: it is prev + first(prev).
                    let first = self.dict.first(prev);
                    self.dict.learn(prev, first)?;
                    self.dict.expand(code, out);
                } else {
                    return self.reject(code, position);
                }

                self.state = DecoderState::Running { prev: code };
                Ok(())
            }
        }
    }
}

impl Decompressor for LzwDecoder {
    fn decompress_chunk(&mut self, input: &[Code], out: &mut Vec<Symbol>) -> Result<(), CodecError> {
        for &code in input {
            let position = self.position;
            self.position += 1;
            self.step(code, position, out)?;
        }
        Ok(())
    }

    fn finish(&mut self, _out: &mut Vec<Symbol>) -> Result<(), CodecError> {
        if self.state == DecoderState::AfterReset {
            return Err(CodecError::InvalidStream("stream ends with a reset marker".into()));
        }
        if self.skipped > 0 {
            self.diag.warn(format!("skipped {} invalid code(s) while decoding", self.skipped));
        }
        Ok(())
    }
}

/// One-shot decode of a code sequence.
pub fn lzw_decode_codes(
    codes: &[Code],
    mode: ValidationMode,
    diag: &Diagnostics,
) -> Result<Vec<Symbol>, CodecError> {
    let mut decoder = LzwDecoder::new(mode, diag.clone());
    let mut out = Vec::with_capacity(codes.len() * 2);
    decoder.decompress_chunk(codes, &mut out)?;
    decoder.finish(&mut out)?;
    Ok(out)
}
