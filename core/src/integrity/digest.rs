//! integrity/digest.rs
//! Weak integrity hash over code sequences.
//!
//! Canonical hash input:
//!
//! ```text
//! decimal(code[0]) "," decimal(code[1]) "," ... decimal(code[n-1])
//! ```
//!
//! hashed with CRC-32 (IEEE) and rendered as 8 lower-case hex characters,
//! big-endian. An empty sequence hashes to the empty string.

use crc32fast::Hasher;

use crate::types::{Code, CodecError};

/// Incremental hash builder; feed codes in stream order.
pub struct DigestBuilder {
    hasher: Hasher,
    count: u64,
}

impl Default for DigestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DigestBuilder {
    #[inline]
    pub fn new() -> Self {
        Self { hasher: Hasher::new(), count: 0 }
    }

    /// Feed one code.
    #[inline]
    pub fn update(&mut self, code: Code) {
        if self.count > 0 {
            self.hasher.update(b",");
        }
        let mut buf = [0u8; 10];
        self.hasher.update(render_decimal(code, &mut buf));
        self.count += 1;
    }

    pub fn update_all(&mut self, codes: &[Code]) {
        for &code in codes {
            self.update(code);
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Finish and render.
    pub fn finalize(self) -> String {
        if self.count == 0 {
            return String::new();
        }
        hex::encode(self.hasher.finalize().to_be_bytes())
    }
}

/// Streaming verifier against a known hash.
pub struct DigestVerifier {
    expected: String,
    builder: DigestBuilder,
}

impl DigestVerifier {
    pub fn new(expected: impl Into<String>) -> Self {
        Self { expected: expected.into(), builder: DigestBuilder::new() }
    }

    #[inline]
    pub fn update(&mut self, code: Code) {
        self.builder.update(code);
    }

    pub fn update_all(&mut self, codes: &[Code]) {
        self.builder.update_all(codes);
    }

    /// Compare; hex case is ignored.
    pub fn finalize(self) -> Result<(), CodecError> {
        let actual = self.builder.finalize();
        if actual.eq_ignore_ascii_case(&self.expected) {
            Ok(())
        } else {
            Err(CodecError::IntegrityMismatch { expected: self.expected, actual })
        }
    }
}

/// One-shot hash of a code sequence.
pub fn weak_hash(codes: &[Code]) -> String {
    let mut builder = DigestBuilder::new();
    builder.update_all(codes);
    builder.finalize()
}

/// One-shot check of `codes` against `expected`.
pub fn verify(codes: &[Code], expected: &str) -> Result<(), CodecError> {
    let mut verifier = DigestVerifier::new(expected);
    verifier.update_all(codes);
    verifier.finalize()
}

fn render_decimal(mut value: Code, buf: &mut [u8; 10]) -> &[u8] {
    let mut at = buf.len();
    loop {
        at -= 1;
        buf[at] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    &buf[at..]
}
