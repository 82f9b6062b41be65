//! Error handling for the huffpack library
//!
//! All failures are detected synchronously and reported through [`HuffError`];
//! nothing is retried internally, since re-running the same deterministic
//! transform on malformed input cannot repair it.

use thiserror::Error;

/// Main error type for the huffpack library
#[derive(Error, Debug)]
pub enum HuffError {
    /// Input that cannot be encoded, e.g. an empty frequency table handed to
    /// the tree builder
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Error message describing the issue
        message: String,
    },

    /// Damaged or truncated bit stream or frame bytes
    #[error("Corrupt stream: {message}")]
    CorruptStream {
        /// Error message describing the issue
        message: String,
    },

    /// Frequency table inconsistent with the bit stream it claims to describe
    #[error("Invalid table: {message}")]
    InvalidTable {
        /// Error message describing the issue
        message: String,
    },
}

impl HuffError {
    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a corrupt stream error
    pub fn corrupt_stream<S: Into<String>>(message: S) -> Self {
        Self::CorruptStream {
            message: message.into(),
        }
    }

    /// Create an invalid table error
    pub fn invalid_table<S: Into<String>>(message: S) -> Self {
        Self::InvalidTable {
            message: message.into(),
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "input",
            Self::CorruptStream { .. } => "stream",
            Self::InvalidTable { .. } => "table",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, HuffError>;
