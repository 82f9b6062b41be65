//! Compression and decompression orchestration
//!
//! [`compress`] and [`decompress`] are pure functions: the tree and code
//! tables they need are per-call locals, so there is no shared mutable state
//! and no coupling between sequential or concurrent calls. Either operation
//! runs to completion or fails synchronously; nothing is retried and no
//! partial output is surfaced on failure.

use crate::bits::BitVec;
use crate::code::CodeTable;
use crate::error::{HuffError, Result};
use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanNode, HuffmanTree};
use tracing::debug;

/// Output of [`compress`]: the encoded bits and the table that describes them
///
/// The pair is everything decompression needs; the table is embedded in the
/// frame so the blob stays self-describing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encoded {
    /// Concatenated codes of the input symbols, in input order
    pub bits: BitVec,
    /// Occurrence counts the code tree was built from
    pub frequencies: FrequencyTable,
}

/// Huffman-encode a byte sequence
///
/// Counts symbol frequencies, builds the prefix-code tree, and concatenates
/// each input byte's code in input order. Empty input produces an [`Encoded`]
/// with empty bits and an empty table, since there is nothing to encode.
///
/// # Examples
///
/// ```rust
/// let encoded = huffpack::compress(b"aaaa")?;
/// assert_eq!(format!("{}", encoded.bits), "0000");
/// # Ok::<(), huffpack::HuffError>(())
/// ```
pub fn compress(data: &[u8]) -> Result<Encoded> {
    if data.is_empty() {
        return Ok(Encoded::default());
    }

    let frequencies = FrequencyTable::from_bytes(data);
    let tree = HuffmanTree::from_frequencies(&frequencies)?;
    let codes = CodeTable::from_tree(&tree);

    let mut bits = BitVec::with_capacity(data.len());
    for &byte in data {
        let code = codes.code(byte).ok_or_else(|| {
            HuffError::invalid_input(format!("symbol {} missing from the code table", byte))
        })?;
        bits.extend(code.iter().copied());
    }

    debug!(
        input_len = data.len(),
        distinct = frequencies.distinct(),
        bit_len = bits.len(),
        "encoded input"
    );
    Ok(Encoded { bits, frequencies })
}

/// Decode a bit sequence back to the original bytes
///
/// Rebuilds the tree from `frequencies` through the identical deterministic
/// construction the encoder used, then walks it bit by bit: left on `0`,
/// right on `1`, emitting a symbol and resetting to the root at every leaf,
/// until all bits are consumed.
///
/// # Errors
///
/// - [`HuffError::InvalidTable`] if the table is empty while `bits` is not,
///   or if the decoded symbol count disagrees with the table's total.
/// - [`HuffError::CorruptStream`] if the bit sequence ends in the middle of a
///   code, or takes an impossible path through a single-symbol tree.
pub fn decompress(bits: &BitVec, frequencies: &FrequencyTable) -> Result<Vec<u8>> {
    if frequencies.is_empty() {
        if bits.is_empty() {
            return Ok(Vec::new());
        }
        return Err(HuffError::invalid_table(
            "non-empty bit stream with an empty frequency table",
        ));
    }

    let tree = HuffmanTree::from_frequencies(frequencies)?;
    let mut output = Vec::with_capacity(bits.len().min(frequencies.total() as usize));

    match tree.root() {
        HuffmanNode::Leaf { symbol, .. } => {
            // degenerate single-symbol tree: one bit per symbol, always 0
            for bit in bits.iter() {
                if bit {
                    return Err(HuffError::corrupt_stream(
                        "invalid path through a single-symbol tree",
                    ));
                }
                output.push(*symbol);
            }
        }
        root @ HuffmanNode::Internal { .. } => {
            let mut position = 0;
            while position < bits.len() {
                let mut node = root;
                while let HuffmanNode::Internal { left, right, .. } = node {
                    match bits.get(position) {
                        Some(bit) => {
                            position += 1;
                            node = if bit { right.as_ref() } else { left.as_ref() };
                        }
                        None => {
                            return Err(HuffError::corrupt_stream(
                                "bit stream ended in the middle of a code",
                            ));
                        }
                    }
                }
                if let HuffmanNode::Leaf { symbol, .. } = node {
                    output.push(*symbol);
                }
            }
        }
    }

    let expected = frequencies.total();
    if output.len() as u64 != expected {
        return Err(HuffError::invalid_table(format!(
            "decoded {} symbols but the frequency table expects {}",
            output.len(),
            expected
        )));
    }

    debug!(
        bit_len = bits.len(),
        output_len = output.len(),
        "decoded stream"
    );
    Ok(output)
}
