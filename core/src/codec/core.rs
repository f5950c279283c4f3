//! codec/core.rs
//! Stable public API.
//!
//! A `Codec` owns its config and diagnostics and nothing else; every call
//! builds its own dictionaries and buffers. In lenient mode a failed
//! top-level operation returns an empty result and emits a warning.

use crate::codec::config::CodecConfig;
use crate::codec::diagnostics::{Diagnostics, LineSink};
use crate::codec::pipeline::{run_compress_pipeline, run_decompress_pipeline};
use crate::compression;
use crate::metadata::CompressionMeta;
use crate::packing;
use crate::stats::{self, Stats};
use crate::telemetry::{TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::{Code, CodecError};

#[derive(Debug, Clone)]
pub struct Codec {
    config: CodecConfig,
    diag: Diagnostics,
}

impl Codec {
    /// Validate `config` and build a codec that logs only through `log`.
    pub fn new(config: CodecConfig) -> Result<Self, CodecError> {
        config.validate()?;
        let diag = Diagnostics::new(config.verbose, None);
        Ok(Self { config, diag })
    }

    /// As [`Codec::new`], with lines also written to `sink`.
    pub fn with_sink(config: CodecConfig, sink: LineSink) -> Result<Self, CodecError> {
        config.validate()?;
        let diag = Diagnostics::new(config.verbose, Some(sink));
        Ok(Self { config, diag })
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diag
    }

    pub fn compress(&self, bytes: &[u8]) -> Result<(Vec<Code>, CompressionMeta), CodecError> {
        self.compress_with_telemetry(bytes).map(|(codes, meta, _)| (codes, meta))
    }

    pub fn decompress(&self, codes: &[Code], meta: &CompressionMeta) -> Result<Vec<u8>, CodecError> {
        self.decompress_with_telemetry(codes, meta).map(|(bytes, _)| bytes)
    }

    pub fn compress_with_telemetry(
        &self,
        bytes: &[u8],
    ) -> Result<(Vec<Code>, CompressionMeta, TelemetrySnapshot), CodecError> {
        let mut counters = TelemetryCounters::default();
        let mut timer = TelemetryTimer::new();

        let result = run_compress_pipeline(bytes, &self.config, &self.diag, &mut counters, &mut timer);
        let (codes, meta) = self.settle("compress", result, || {
            (Vec::new(), CompressionMeta::empty(self.config.chunk_size))
        })?;

        timer.finish();
        Ok((codes, meta, TelemetrySnapshot::from(&counters, &timer)))
    }

    pub fn decompress_with_telemetry(
        &self,
        codes: &[Code],
        meta: &CompressionMeta,
    ) -> Result<(Vec<u8>, TelemetrySnapshot), CodecError> {
        let mut counters = TelemetryCounters::default();
        let mut timer = TelemetryTimer::new();

        let result = run_decompress_pipeline(codes, meta, &self.config, &self.diag, &mut counters, &mut timer);
        let bytes = self.settle("decompress", result, Vec::new)?;

        timer.finish();
        Ok((bytes, TelemetrySnapshot::from(&counters, &timer)))
    }

    /// Bytes to a symbol string.
    pub fn pack(&self, bytes: &[u8]) -> String {
        packing::pack(bytes).0
    }

    pub fn unpack(&self, symbols: &str, original_size: u64) -> Result<Vec<u8>, CodecError> {
        let result = packing::unpack(symbols, original_size, self.config.mode(), &self.diag);
        self.settle("unpack", result, Vec::new)
    }

    pub fn lzw_encode(&self, symbols: &str) -> Result<Vec<Code>, CodecError> {
        let result = compression::lzw_encode(symbols, self.config.mode(), &self.diag);
        self.settle("lzw_encode", result, Vec::new)
    }

    pub fn lzw_decode(&self, codes: &[Code]) -> Result<String, CodecError> {
        let result = compression::lzw_decode(codes, self.config.mode(), &self.diag);
        self.settle("lzw_decode", result, String::new)
    }

    pub fn stats(&self, original: &[u8], framed: &[Code], meta: &CompressionMeta) -> Stats {
        Stats::compute(original, framed, meta)
    }

    pub fn entropy(&self, bytes: &[u8]) -> f64 {
        stats::entropy(bytes)
    }

    /// Strict: pass the error through. Lenient: warn and fall back.
    fn settle<T>(
        &self,
        op: &str,
        result: Result<T, CodecError>,
        fallback: impl FnOnce() -> T,
    ) -> Result<T, CodecError> {
        match result {
            Ok(v) => Ok(v),
            Err(err) if self.config.mode().is_strict() => Err(err),
            Err(err) => {
                self.diag.warn(format!("{} failed ({}): {}; returning empty result", op, err.kind(), err));
                Ok(fallback())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorKind;
    use std::sync::{Arc, Mutex};

    #[test]
    fn new_validates_config() {
        let err = Codec::new(CodecConfig::default().with_chunk_size(0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn lenient_failure_warns_and_defaults() {
        let lines = Arc::new(Mutex::new(Vec::<String>::new()));
        let sink_lines = Arc::clone(&lines);
        let sink: LineSink = Arc::new(move |l: &str| sink_lines.lock().unwrap().push(l.to_string()));

        let codec = Codec::with_sink(CodecConfig::lenient(), sink).unwrap();
        assert_eq!(codec.lzw_decode(&[crate::constants::RESET_MARKER, 1]).unwrap(), "");

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[ccc warning] lzw_decode failed (invalid_stream)"));
    }

    #[test]
    fn verbose_reports_layers() {
        let lines = Arc::new(Mutex::new(Vec::<String>::new()));
        let sink_lines = Arc::clone(&lines);
        let sink: LineSink = Arc::new(move |l: &str| sink_lines.lock().unwrap().push(l.to_string()));

        let codec = Codec::with_sink(CodecConfig::default().with_verbose(true), sink).unwrap();
        codec.compress(b"abc").unwrap();
        let lines = lines.lock().unwrap();
        assert!(lines.iter().any(|l| l.starts_with("[ccc] packed 3 bytes into 12 symbols")));
        assert!(lines.iter().all(|l| !l.starts_with("[ccc warning]")));
    }
}
