//! Statistics for one encode/decode run.
//!
//! Collected by the driver as it moves through the pipeline:
//! - Input size and alphabet
//! - Tree shape
//! - Packed payload size and compression ratio
//! - Round-trip verification and timing
//!
//! Single-threaded; the driver owns the struct and updates fields directly.

use std::time::{Duration, Instant};

use crate::bitio::WORD_BITS;
use crate::codec::PackedBuffer;

/// Counts and timings for a single run.
#[derive(Debug, Clone)]
pub struct CodecStats {
    // === Timing ===
    /// When the run started
    pub start_time: Instant,

    /// When the run ended (set on completion)
    pub end_time: Option<Instant>,

    // === Input ===
    /// Bytes of input text
    pub input_bytes: u64,

    /// Distinct byte values in the input
    pub distinct_symbols: usize,

    // === Tree ===
    /// Height of the coding tree (0 when absent)
    pub tree_height: usize,

    /// Longest code in bits
    pub max_code_length: usize,

    // === Packing ===
    /// Payload bits actually used
    pub payload_bits: u64,

    /// Words allocated for the payload, header excluded
    pub packed_words: u64,

    // === Decoding ===
    /// Bytes produced by decoding
    pub decoded_bytes: u64,

    /// Whether the decoded bytes matched the input
    pub verified: bool,
}

impl CodecStats {
    /// Create new stats with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            input_bytes: 0,
            distinct_symbols: 0,
            tree_height: 0,
            max_code_length: 0,
            payload_bits: 0,
            packed_words: 0,
            decoded_bytes: 0,
            verified: false,
        }
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Record the size of a packed buffer.
    pub fn record_packed(&mut self, packed: &PackedBuffer, payload_bits: u64) {
        self.packed_words = packed.words().len() as u64;
        self.payload_bits = payload_bits;
    }

    /// Packed size in bytes, header word included.
    pub fn packed_bytes(&self) -> u64 {
        (self.packed_words + 1) * (WORD_BITS as u64 / 8)
    }

    /// Compute compression ratio (packed / input).
    ///
    /// Returns 0.0 if there was no input.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.packed_bytes() as f64 / self.input_bytes as f64
        }
    }

    /// Average code length over the input.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.payload_bits as f64 / self.input_bytes as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Run Summary ===");
        println!("Duration: {} us", self.duration().as_micros());
        println!();

        println!("=== Input ===");
        println!("Bytes: {}", self.input_bytes);
        println!("Distinct symbols: {}", self.distinct_symbols);
        println!();

        println!("=== Tree ===");
        println!("Height: {}", self.tree_height);
        println!("Longest code: {} bits", self.max_code_length);
        println!();

        println!("=== Packing ===");
        println!("Payload bits: {}", self.payload_bits);
        println!("Words (+1 header): {}", self.packed_words);
        println!("Packed bytes: {}", self.packed_bytes());
        println!("Bits per symbol: {:.3}", self.bits_per_symbol());
        println!("Ratio: {:.1}%", self.compression_ratio() * 100.0);
        println!();

        if self.verified {
            println!("Round trip: PASSED ({} bytes)", self.decoded_bytes);
        } else {
            println!(
                "Round trip: FAILED ({} of {} bytes)",
                self.decoded_bytes, self.input_bytes
            );
        }
    }

    /// Export stats as a simple key=value text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "input_bytes={}\n\
             distinct_symbols={}\n\
             tree_height={}\n\
             payload_bits={}\n\
             packed_words={}\n\
             compression_ratio={:.4}\n\
             verified={}\n",
            self.input_bytes,
            self.distinct_symbols,
            self.tree_height,
            self.payload_bits,
            self.packed_words,
            self.compression_ratio(),
            self.verified,
        )
    }
}

impl Default for CodecStats {
    fn default() -> Self {
        Self::new()
    }
}
