//! # Huffpack: Huffman Coding with Self-Describing Frames
//!
//! This crate implements a byte-oriented Huffman entropy coder together with
//! the wire framing that makes a compressed blob self-describing: the frame
//! embeds the symbol frequency table, so decompression rebuilds the exact
//! prefix-code tree without the tree itself ever being transmitted.
//!
//! ## Key Features
//!
//! - **Optimal prefix codes**: classic greedy min-heap Huffman construction
//! - **Deterministic rebuilds**: identical trees on the compress and
//!   decompress sides, the invariant the frame format depends on
//! - **Byte-aligned packing**: MSB-first bit packing with an explicit padding
//!   marker, exact to the bit on round trip
//! - **Self-describing frames**: length-prefixed JSON metadata (original
//!   name + frequency table) ahead of the packed payload
//! - **Pure per-call state**: no shared mutable coder state, so concurrent
//!   callers need no external synchronization
//!
//! ## Quick Start
//!
//! ```rust
//! use huffpack::{compress, decompress, compress_to_frame, decompress_frame};
//!
//! // core pair: encoded bits + the table that describes them
//! let encoded = compress(b"abracadabra")?;
//! let restored = decompress(&encoded.bits, &encoded.frequencies)?;
//! assert_eq!(restored, b"abracadabra");
//!
//! // one-call framing for storage or transmission
//! let frame = compress_to_frame("notes.txt", b"abracadabra")?;
//! let (metadata, restored) = decompress_frame(&frame)?;
//! assert_eq!(metadata.original_name, "notes.txt");
//! assert_eq!(restored, b"abracadabra");
//! # Ok::<(), huffpack::HuffError>(())
//! ```

#![warn(missing_docs)]

pub mod bits;
pub mod code;
pub mod codec;
pub mod error;
pub mod frame;
pub mod frequency;
pub mod heap;
pub mod stats;
pub mod tree;

// Re-export core types
pub use bits::BitVec;
pub use code::CodeTable;
pub use codec::{compress, decompress, Encoded};
pub use error::{HuffError, Result};
pub use frame::{compress_to_frame, decompress_frame, Frame, FrameMetadata};
pub use frequency::FrequencyTable;
pub use stats::EntropyStats;
pub use tree::{HuffmanNode, HuffmanTree};
