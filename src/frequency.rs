//! Symbol frequency counting
//!
//! A [`FrequencyTable`] records how often each distinct byte value occurs in
//! an input. It is embedded verbatim in the compressed frame so the decoder
//! can rebuild the exact prefix-code tree without the tree itself being
//! transmitted; its sorted iteration order is what makes that reconstruction
//! deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Occurrence counts per distinct byte value
///
/// Every symbol present in the counted input appears with its exact count
/// (always at least 1), and the counts sum to the input length. Iteration is
/// in ascending symbol order, which fixes the leaf insertion order during
/// tree construction on both the compress and decompress sides.
///
/// Serializes as a plain JSON object mapping symbol values to counts, the
/// `freqMap` section of the frame metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: BTreeMap<u8, u64>,
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally the distinct byte values of `data`
    ///
    /// Empty input yields an empty table; callers treat that as "nothing to
    /// encode" rather than handing it to the tree builder.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = BTreeMap::new();
        for &byte in data {
            *counts.entry(byte).or_insert(0u64) += 1;
        }
        Self { counts }
    }

    /// Get the number of distinct symbols
    #[inline]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Check if the table has no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Get the sum of all counts, i.e. the length of the counted input
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Get the count recorded for a symbol
    pub fn get(&self, symbol: u8) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// Iterate over `(symbol, count)` pairs in ascending symbol order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }

    /// Shannon entropy of the counted distribution, in bits per symbol
    pub fn entropy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let total = total as f64;
        let mut entropy = 0.0;
        for &count in self.counts.values() {
            if count > 0 {
                let p = count as f64 / total;
                entropy -= p * p.log2();
            }
        }
        entropy
    }
}
