//! codec/pipeline.rs
//! Layer-by-layer orchestration of compress and decompress.
//!
//! compress:   pack -> encode -> wrap -> frame
//! decompress: unframe -> unwrap -> decode -> unpack
//!
//! Every stage is timed and counted; callers that do not want telemetry
//! simply drop it.

use crate::codec::config::CodecConfig;
use crate::codec::Diagnostics;
use crate::compression::{count_resets, lzw_decode_codes, lzw_encode_symbols};
use crate::framing::{insert_markers, remove_markers};
use crate::metadata::{expansion_ratio, CompressionMeta, CoreMeta};
use crate::packing::{pack_symbols, unpack_symbols};
use crate::ring::{unwrap, wrap, RingLayout};
use crate::telemetry::{Stage, TelemetryCounters, TelemetryTimer};
use crate::types::{Code, CodecError};

pub fn run_compress_pipeline(
    bytes: &[u8],
    config: &CodecConfig,
    diag: &Diagnostics,
    counters: &mut TelemetryCounters,
    timer: &mut TelemetryTimer,
) -> Result<(Vec<Code>, CompressionMeta), CodecError> {
    if bytes.is_empty() {
        reject_empty(config, diag, "input")?;
        diag.debug("empty input, emitting empty stream");
        return Ok((Vec::new(), CompressionMeta::empty(config.chunk_size)));
    }

    // ---- L1: bytes -> symbols ----
    let (symbols, bits_len) = timer.measure(Stage::Pack, || pack_symbols(bytes));
    counters.add_pack(bytes.len(), symbols.len());
    let core = CoreMeta::for_input(bytes.len() as u64, bits_len);
    diag.debug(format!("packed {} bytes into {} symbols", bytes.len(), symbols.len()));

    // ---- L2: symbols -> LZW codes ----
    let lzw = timer.measure(Stage::Encode, || lzw_encode_symbols(&symbols, diag))?;
    drop(symbols);
    let resets = count_resets(&lzw);
    counters.add_lzw(lzw.len(), resets);
    diag.debug(format!("LZW produced {} codes with {} dictionary resets", lzw.len(), resets));

    // ---- L3: ring closure ----
    let (ring, layout) = timer.measure(Stage::Wrap, || wrap(&lzw));
    drop(lzw);
    counters.add_ring(&layout);
    diag.debug(format!(
        "ring length {} ({} padding, {} bridge)",
        layout.ring_length,
        layout.padding(),
        layout.bridge_length
    ));

    // ---- L4: frame markers ----
    let (framed, frame) =
        timer.measure(Stage::Frame, || insert_markers(&ring, config.chunk_size, &layout))?;
    counters.add_frames(frame.marker_positions.len(), framed.len());
    diag.debug(format!(
        "framed {} chunks with marker {}, hash {}",
        frame.marker_positions.len(),
        frame.marker_code,
        frame.hash
    ));

    let ratio = expansion_ratio(framed.len(), bytes.len());
    Ok((framed, CompressionMeta { core, frame, ratio }))
}

pub fn run_decompress_pipeline(
    framed: &[Code],
    meta: &CompressionMeta,
    config: &CodecConfig,
    diag: &Diagnostics,
    counters: &mut TelemetryCounters,
    timer: &mut TelemetryTimer,
) -> Result<Vec<u8>, CodecError> {
    let mode = config.mode();
    meta.validate()?;

    if framed.is_empty() && meta.is_empty() {
        reject_empty(config, diag, "code sequence")?;
        return Ok(Vec::new());
    }

    let original_size = usize::try_from(meta.core.original_size).map_err(|_| {
        CodecError::InvalidMetadata(format!(
            "original size {} exceeds address space",
            meta.core.original_size
        ))
    })?;

    // ---- L4: strip markers, check hash ----
    let ring = timer.measure(Stage::Unframe, || remove_markers(framed, &meta.frame, mode, diag))?;
    counters.add_frames(meta.frame.marker_positions.len(), framed.len());

    // ---- L3: trim ring ----
    let lzw = timer.measure(Stage::Unwrap, || unwrap(&ring, meta.frame.pre_ring_length))?;
    drop(ring);
    counters.add_ring(&RingLayout {
        pre_ring_length: meta.frame.pre_ring_length,
        ring_length: meta.frame.ring_length,
        bridge_length: meta.frame.bridge_length(),
    });

    // ---- L2: LZW decode ----
    let symbols = timer.measure(Stage::Decode, || lzw_decode_codes(&lzw, mode, diag))?;
    counters.add_lzw(lzw.len(), count_resets(&lzw));
    // unpack sizes its buffer from the metadata
    if symbols.len() as u64 != meta.core.symbol_length {
        return Err(CodecError::InvalidStream(format!(
            "decoded {} symbols, metadata records {}",
            symbols.len(),
            meta.core.symbol_length
        )));
    }

    // ---- L1: symbols -> bytes ----
    let bytes = timer.measure(Stage::Unpack, || unpack_symbols(&symbols, original_size));
    counters.add_pack(bytes.len(), symbols.len());
    diag.debug(format!("restored {} bytes from {} codes", bytes.len(), framed.len()));

    Ok(bytes)
}

fn reject_empty(config: &CodecConfig, diag: &Diagnostics, what: &'static str) -> Result<(), CodecError> {
    if config.allow_empty {
        return Ok(());
    }
    if config.mode().is_strict() {
        return Err(CodecError::EmptyInputRejected { what });
    }
    diag.warn(format!("empty {} rejected by config; returning empty result", what));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorKind;

    fn compress(bytes: &[u8], config: &CodecConfig) -> Result<(Vec<Code>, CompressionMeta), CodecError> {
        run_compress_pipeline(
            bytes,
            config,
            &Diagnostics::silent(),
            &mut TelemetryCounters::default(),
            &mut TelemetryTimer::new(),
        )
    }

    fn decompress(codes: &[Code], meta: &CompressionMeta, config: &CodecConfig) -> Result<Vec<u8>, CodecError> {
        run_decompress_pipeline(
            codes,
            meta,
            config,
            &Diagnostics::silent(),
            &mut TelemetryCounters::default(),
            &mut TelemetryTimer::new(),
        )
    }

    #[test]
    fn round_trip_small() {
        let cfg = CodecConfig::default().with_chunk_size(7);
        let (codes, meta) = compress(b"ring codec", &cfg).unwrap();
        assert_eq!(decompress(&codes, &meta, &cfg).unwrap(), b"ring codec");
    }

    #[test]
    fn empty_policy() {
        let cfg = CodecConfig::default();
        let (codes, meta) = compress(&[], &cfg).unwrap();
        assert!(codes.is_empty());
        assert_eq!(meta, CompressionMeta::empty(1000));

        let picky = CodecConfig::default().with_allow_empty(false);
        assert_eq!(compress(&[], &picky).unwrap_err().kind(), ErrorKind::EmptyInputRejected);
        assert_eq!(decompress(&[], &meta, &picky).unwrap_err().kind(), ErrorKind::EmptyInputRejected);

        let lenient_picky = CodecConfig::lenient().with_allow_empty(false);
        assert!(compress(&[], &lenient_picky).unwrap().0.is_empty());
    }

    #[test]
    fn tampered_metadata_rejected() {
        let cfg = CodecConfig::default();
        let (codes, mut meta) = compress(b"abc", &cfg).unwrap();
        meta.core.symbol_length += 4;
        assert_eq!(decompress(&codes, &meta, &cfg).unwrap_err().kind(), ErrorKind::InvalidMetadata);
    }

    #[test]
    fn symbol_count_mismatch_fails_in_both_modes() {
        let (codes, mut meta) = compress(b"abc", &CodecConfig::default()).unwrap();
        meta.core.original_size += 1;
        meta.core.original_bits_length += 8;
        meta.core.symbol_length += 4;

        for cfg in [CodecConfig::default(), CodecConfig::lenient()] {
            assert_eq!(decompress(&codes, &meta, &cfg).unwrap_err().kind(), ErrorKind::InvalidStream);
        }
    }
}
