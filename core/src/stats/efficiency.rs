//! stats/efficiency.rs
//! Storage density against the plain 2-bit-per-base encoding.

use serde::{Deserialize, Serialize};

use crate::constants::DNA_BITS_PER_BASE_LIMIT;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EfficiencyReport {
    pub compression_ratio: f64,
    pub space_savings_percent: f64,
    pub bits_per_base: f64,
    /// 2-bit limit over achieved bits per base, percent, capped at 100.
    pub limit_efficiency_percent: f64,
    /// True when the stream stores at most 2 bits per base.
    pub theoretical_optimal: bool,
}

impl EfficiencyReport {
    /// `None` for a zero-size input.
    pub fn analyze(original_size: u64, compressed_size: u64, symbol_length: u64) -> Option<Self> {
        if original_size == 0 {
            return None;
        }
        let compression_ratio = compressed_size as f64 / original_size as f64;
        let bits_per_base = if symbol_length > 0 {
            compressed_size as f64 * 8.0 / symbol_length as f64
        } else {
            0.0
        };
        let limit_efficiency_percent = if bits_per_base > 0.0 {
            (DNA_BITS_PER_BASE_LIMIT / bits_per_base * 100.0).min(100.0)
        } else {
            0.0
        };

        Some(Self {
            compression_ratio,
            space_savings_percent: (1.0 - compression_ratio) * 100.0,
            bits_per_base,
            limit_efficiency_percent,
            theoretical_optimal: bits_per_base <= DNA_BITS_PER_BASE_LIMIT,
        })
    }
}
