//! telemetry/counters.rs
//! Mutable counters filled while a stream is compressed or decompressed.
//!
//! Fields are direction-neutral: `bytes_original` is the input of
//! `compress` and the output of `decompress`; `codes_framed` the other way
//! round. Converted into an immutable `TelemetrySnapshot` at the end.

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::ring::RingLayout;

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub streams: u64,
    pub bytes_original: u64,
    pub symbols: u64,
    pub lzw_codes: u64,
    pub reset_markers: u64,
    pub padding_codes: u64,
    pub bridge_codes: u64,
    pub frame_markers: u64,
    pub codes_framed: u64,
}

impl TelemetryCounters {
    /// Byte/symbol layer.
    pub fn add_pack(&mut self, bytes: usize, symbols: usize) {
        self.streams += 1;
        self.bytes_original += bytes as u64;
        self.symbols += symbols as u64;
    }

    /// LZW layer; `codes` includes reset markers.
    pub fn add_lzw(&mut self, codes: usize, resets: u64) {
        self.lzw_codes += codes as u64;
        self.reset_markers += resets;
    }

    /// Ring layer.
    pub fn add_ring(&mut self, layout: &RingLayout) {
        self.padding_codes += layout.padding();
        self.bridge_codes += layout.bridge_length;
    }

    /// Frame layer.
    pub fn add_frames(&mut self, markers: usize, framed_len: usize) {
        self.frame_markers += markers as u64;
        self.codes_framed += framed_len as u64;
    }

    /// Codes that carry no payload: padding, bridge and frame markers.
    pub fn overhead_codes(&self) -> u64 {
        self.padding_codes + self.bridge_codes + self.frame_markers
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.streams += other.streams;
        self.bytes_original += other.bytes_original;
        self.symbols += other.symbols;
        self.lzw_codes += other.lzw_codes;
        self.reset_markers += other.reset_markers;
        self.padding_codes += other.padding_codes;
        self.bridge_codes += other.bridge_codes;
        self.frame_markers += other.frame_markers;
        self.codes_framed += other.codes_framed;
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
