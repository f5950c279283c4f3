use std::fmt;

use thiserror::Error;

/// Code type used on every layer (LZW codes, ring, framed output).
pub type Code = u32;

/// Structured error kind, stable across messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInputRejected,
    InvalidSymbol,
    InvalidCode,
    InvalidStream,
    IntegrityMismatch,
    DictionaryOverflow,
    InvalidConfig,
    InvalidMetadata,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::EmptyInputRejected => "empty_input_rejected",
            ErrorKind::InvalidSymbol      => "invalid_symbol",
            ErrorKind::InvalidCode        => "invalid_code",
            ErrorKind::InvalidStream      => "invalid_stream",
            ErrorKind::IntegrityMismatch  => "integrity_mismatch",
            ErrorKind::DictionaryOverflow => "dictionary_overflow",
            ErrorKind::InvalidConfig      => "invalid_config",
            ErrorKind::InvalidMetadata    => "invalid_metadata",
        };
        f.write_str(name)
    }
}

/// Unified codec error covering every layer of the pipeline.
/// - One variant per `ErrorKind`, each with a contextual message.
/// - Messages aim to be stable so they can be matched in logs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    #[error("empty {what} rejected")]
    EmptyInputRejected { what: &'static str },

    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("invalid code {code} at position {position} (next assignable code {next_code})")]
    InvalidCode { code: Code, position: usize, next_code: Code },

    #[error("invalid code stream: {0}")]
    InvalidStream(String),

    #[error("integrity check failed: expected hash {expected:?}, got {actual:?}")]
    IntegrityMismatch { expected: String, actual: String },

    #[error("dictionary overflow: code {code} would collide with the reset marker")]
    DictionaryOverflow { code: Code },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::EmptyInputRejected { .. } => ErrorKind::EmptyInputRejected,
            CodecError::InvalidSymbol { .. }      => ErrorKind::InvalidSymbol,
            CodecError::InvalidCode { .. }        => ErrorKind::InvalidCode,
            CodecError::InvalidStream(_)          => ErrorKind::InvalidStream,
            CodecError::IntegrityMismatch { .. }  => ErrorKind::IntegrityMismatch,
            CodecError::DictionaryOverflow { .. } => ErrorKind::DictionaryOverflow,
            CodecError::InvalidConfig(_)          => ErrorKind::InvalidConfig,
            CodecError::InvalidMetadata(_)        => ErrorKind::InvalidMetadata,
        }
    }
}

/// Strict surfaces every fault; lenient skips or defaults and reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    #[default]
    Strict,
    Lenient,
}

impl ValidationMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict { ValidationMode::Strict } else { ValidationMode::Lenient }
    }

    #[inline]
    pub fn is_strict(self) -> bool {
        matches!(self, ValidationMode::Strict)
    }
}
