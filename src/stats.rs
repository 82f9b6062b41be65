//! Compression statistics
//!
//! Size and efficiency numbers for a single compression, suitable for
//! reporting to callers (the surrounding application typically surfaces
//! these to a UI or log as JSON).

use crate::frequency::FrequencyTable;
use serde::Serialize;

/// Statistics describing one compression operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntropyStats {
    /// Original size in bytes
    pub input_size: usize,
    /// Compressed (framed) size in bytes
    pub output_size: usize,
    /// Compression ratio (output/input)
    pub compression_ratio: f64,
    /// Bits of output spent per input symbol
    pub bits_per_symbol: f64,
    /// Shannon entropy of the input, in bits per symbol
    pub entropy: f64,
    /// Encoding efficiency (theoretical entropy / achieved bits per symbol)
    pub efficiency: f64,
}

impl EntropyStats {
    /// Create statistics from raw sizes and a precomputed entropy
    pub fn new(input_size: usize, output_size: usize, entropy: f64) -> Self {
        let compression_ratio = if input_size > 0 {
            output_size as f64 / input_size as f64
        } else {
            0.0
        };

        let bits_per_symbol = if input_size > 0 {
            (output_size * 8) as f64 / input_size as f64
        } else {
            0.0
        };

        let efficiency = if bits_per_symbol > 0.0 {
            entropy / bits_per_symbol
        } else {
            0.0
        };

        Self {
            input_size,
            output_size,
            compression_ratio,
            bits_per_symbol,
            entropy,
            efficiency,
        }
    }

    /// Create statistics for an input and the frame produced from it
    pub fn for_frame(data: &[u8], frame_len: usize) -> Self {
        let entropy = FrequencyTable::from_bytes(data).entropy();
        Self::new(data.len(), frame_len, entropy)
    }

    /// Space savings as a percentage of the original size
    pub fn space_savings(&self) -> f64 {
        (1.0 - self.compression_ratio) * 100.0
    }
}
