//! stats/report.rs
//! Size, ratio and entropy report for one compressed stream.

use serde::{Deserialize, Serialize};

use crate::constants::{MIN_BITS_PER_CODE, RESET_MARKER, SYMBOLS_PER_BYTE};
use crate::metadata::CompressionMeta;
use crate::stats::entropy::{bits_needed, code_entropy, entropy};
use crate::types::Code;

/// Diagnostics only; never feeds back into encoding.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub original_size_bytes: u64,
    pub compressed_size_bytes: u64,
    pub compression_ratio: f64,
    pub space_savings_percent: f64,
    pub bits_per_base: f64,
    pub bits_per_code: u32,
    pub total_codes: u64,
    pub max_code_value: Code,
    pub original_entropy: f64,
    pub compressed_entropy: f64,
    pub entropy_reduction: f64,
    pub theoretical_minimum_size: f64,
    pub shannon_efficiency: f64,
    pub compression_effectiveness: f64,
    pub frame_markers: u64,
    pub reset_markers: u64,
}

/// max(16, bits_needed(max_code) rounded up to a whole byte)
pub fn bits_per_code(max_code: Code) -> u32 {
    (bits_needed(max_code).div_ceil(8) * 8).max(MIN_BITS_PER_CODE)
}

impl Stats {
    pub fn compute(original: &[u8], framed: &[Code], meta: &CompressionMeta) -> Self {
        let original_size = original.len() as u64;
        let max_code_value = framed.iter().copied().max().unwrap_or(0);
        let bits_per_code = bits_per_code(max_code_value);
        let total_codes = framed.len() as u64;
        let compressed_size_bytes = total_codes * bits_per_code as u64 / 8;

        let (compression_ratio, space_savings_percent, bits_per_base) = if original_size > 0 {
            let ratio = compressed_size_bytes as f64 / original_size as f64;
            let bases = (original_size * SYMBOLS_PER_BYTE) as f64;
            (ratio, (1.0 - ratio) * 100.0, compressed_size_bytes as f64 * 8.0 / bases)
        } else {
            (0.0, 0.0, 0.0)
        };

        let original_entropy = entropy(original);
        let compressed_entropy = code_entropy(framed);
        let theoretical_minimum_size = original_entropy * original_size as f64 / 8.0;

        let shannon_efficiency = if compressed_size_bytes > 0 {
            (theoretical_minimum_size / compressed_size_bytes as f64).min(1.0)
        } else {
            0.0
        };

        let shannon_ratio = if original_size > 0 {
            theoretical_minimum_size / original_size as f64
        } else {
            0.0
        };
        let compression_effectiveness = if compression_ratio > shannon_ratio {
            (shannon_ratio / compression_ratio).clamp(0.0, 1.0)
        } else {
            1.0
        };

        Self {
            original_size_bytes: original_size,
            compressed_size_bytes,
            compression_ratio,
            space_savings_percent,
            bits_per_base,
            bits_per_code,
            total_codes,
            max_code_value,
            original_entropy,
            compressed_entropy,
            entropy_reduction: original_entropy - compressed_entropy,
            theoretical_minimum_size,
            shannon_efficiency,
            compression_effectiveness,
            frame_markers: meta.frame.marker_positions.len() as u64,
            reset_markers: count_pre_ring_resets(framed, meta),
        }
    }
}

/// Reset markers among the pre-ring codes of a framed stream.
fn count_pre_ring_resets(framed: &[Code], meta: &CompressionMeta) -> u64 {
    framed
        .iter()
        .filter(|&&c| c != meta.frame.marker_code)
        .take(meta.frame.pre_ring_length as usize)
        .filter(|&&c| c == RESET_MARKER)
        .count() as u64
}
