//! Self-describing frame assembly and parsing
//!
//! The frame is the only wire/file format the coder owns:
//!
//! ```text
//! [4 bytes, little-endian u32: metadata length]
//! [metadata: UTF-8 JSON object {"originalName": ..., "freqMap": {...}}]
//! [packed bit data: padding-count byte, then MSB-first packed bits]
//! ```
//!
//! Carrying the frequency table instead of the tree keeps the frame compact;
//! the decoder rebuilds an identical tree from it.

use crate::bits::BitVec;
use crate::codec::{compress, decompress, Encoded};
use crate::error::{HuffError, Result};
use crate::frequency::FrequencyTable;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Metadata object embedded in a frame as UTF-8 JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameMetadata {
    /// Name of the file the blob was compressed from
    #[serde(rename = "originalName")]
    pub original_name: String,
    /// Frequency table the decoder rebuilds the code tree from
    #[serde(rename = "freqMap")]
    pub frequencies: FrequencyTable,
}

/// A parsed compressed frame: metadata plus the packed payload
///
/// Created by compression, consumed once by decompression; never mutated in
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    metadata: FrameMetadata,
    packed: Vec<u8>,
}

impl Frame {
    /// Build a frame from an encoder result and the caller-supplied name
    pub fn new<S: Into<String>>(original_name: S, encoded: &Encoded) -> Self {
        Self {
            metadata: FrameMetadata {
                original_name: original_name.into(),
                frequencies: encoded.frequencies.clone(),
            },
            packed: encoded.bits.pack(),
        }
    }

    /// Get the embedded metadata
    pub fn metadata(&self) -> &FrameMetadata {
        &self.metadata
    }

    /// Get the original file name carried in the metadata
    pub fn original_name(&self) -> &str {
        &self.metadata.original_name
    }

    /// Get the packed payload (padding byte plus bit data)
    pub fn packed(&self) -> &[u8] {
        &self.packed
    }

    /// Unpack the payload back into the encoded bit sequence
    pub fn bits(&self) -> Result<BitVec> {
        BitVec::unpack(&self.packed)
    }

    /// Serialize the frame to its wire layout
    ///
    /// # Errors
    ///
    /// Returns [`HuffError::InvalidInput`] if the metadata does not fit the
    /// 32-bit length prefix.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let metadata = serde_json::to_vec(&self.metadata).map_err(|e| {
            HuffError::invalid_input(format!("metadata serialization failed: {}", e))
        })?;
        let metadata_len = u32::try_from(metadata.len()).map_err(|_| {
            HuffError::invalid_input("frame metadata exceeds the 32-bit length prefix")
        })?;

        let mut out = Vec::with_capacity(4 + metadata.len() + self.packed.len());
        out.extend_from_slice(&metadata_len.to_le_bytes());
        out.extend_from_slice(&metadata);
        out.extend_from_slice(&self.packed);
        Ok(out)
    }

    /// Parse a frame from its wire layout
    ///
    /// # Errors
    ///
    /// Returns [`HuffError::CorruptStream`] if the buffer is shorter than its
    /// length prefix claims, the metadata is not valid UTF-8 JSON of the
    /// expected shape, or no packed payload follows the metadata.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < 4 {
            return Err(HuffError::corrupt_stream(
                "frame shorter than its length prefix",
            ));
        }
        let metadata_len = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
        let metadata_end = 4usize
            .checked_add(metadata_len)
            .ok_or_else(|| HuffError::corrupt_stream("metadata length overflows"))?;
        if bytes.len() < metadata_end {
            return Err(HuffError::corrupt_stream("truncated frame metadata"));
        }

        let metadata: FrameMetadata = serde_json::from_slice(&bytes[4..metadata_end])
            .map_err(|e| HuffError::corrupt_stream(format!("malformed frame metadata: {}", e)))?;

        let packed = bytes[metadata_end..].to_vec();
        if packed.is_empty() {
            return Err(HuffError::corrupt_stream("frame carries no packed payload"));
        }

        debug!(
            metadata_len,
            payload_len = packed.len(),
            name = %metadata.original_name,
            "parsed frame"
        );
        Ok(Self { metadata, packed })
    }
}

/// Compress a byte sequence straight into frame bytes
///
/// One-call form of compress, pack, and frame assembly.
///
/// # Examples
///
/// ```rust
/// let frame = huffpack::compress_to_frame("notes.txt", b"abracadabra")?;
/// let (metadata, restored) = huffpack::decompress_frame(&frame)?;
/// assert_eq!(metadata.original_name, "notes.txt");
/// assert_eq!(restored, b"abracadabra");
/// # Ok::<(), huffpack::HuffError>(())
/// ```
pub fn compress_to_frame(original_name: &str, data: &[u8]) -> Result<Vec<u8>> {
    let encoded = compress(data)?;
    Frame::new(original_name, &encoded).to_bytes()
}

/// Parse a frame and decode its payload back to the original bytes
pub fn decompress_frame(bytes: &[u8]) -> Result<(FrameMetadata, Vec<u8>)> {
    let frame = Frame::from_bytes(bytes)?;
    let bits = frame.bits()?;
    let data = decompress(&bits, &frame.metadata.frequencies)?;
    Ok((frame.metadata, data))
}
