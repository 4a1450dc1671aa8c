//! Error types for emission and decoding.

use std::io;
use thiserror::Error;

/// Result type for emit operations.
pub type EmitResult<T> = Result<T, EmitError>;

/// Errors that can occur while emitting or decoding bank data.
#[derive(Debug, Error)]
pub enum EmitError {
    /// An I/O error from the output target.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The image configuration is unusable.
    #[error("invalid image config: {message}")]
    InvalidConfig {
        /// Description of the problem.
        message: String,
    },

    /// A serialized bank does not fit its physical bank.
    #[error("bank {bank} overflows: {len} bytes serialized into a {bank_size} byte bank")]
    BankOverflow {
        /// Bank number that overflowed.
        bank: u32,
        /// Serialized size in bytes.
        len: usize,
        /// Physical bank size in bytes.
        bank_size: usize,
    },

    /// Bank numbering exceeds what a one-byte descriptor field can address.
    #[error("bank number {bank} does not fit in a descriptor byte")]
    BankOutOfRange {
        /// The offending bank number.
        bank: u32,
    },

    /// Encoded bank data ended before a record's terminator.
    #[error("truncated bank data: {message}")]
    TruncatedSegment {
        /// Description of where the data ended.
        message: String,
    },

    /// A record list or index is missing its reserved terminator.
    #[error("missing terminator: {message}")]
    MissingTerminator {
        /// Description of the missing terminator.
        message: String,
    },

    /// An index descriptor is malformed.
    #[error("invalid descriptor: {message}")]
    InvalidDescriptor {
        /// Description of the problem.
        message: String,
    },

    /// Extra bytes follow a reserved terminator.
    #[error("unexpected data after terminator: {extra} trailing bytes")]
    TrailingData {
        /// Number of trailing bytes.
        extra: usize,
    },

    /// Decoded record bytes are not valid UTF-8.
    #[error("record is not valid UTF-8 at byte offset {offset}")]
    InvalidUtf8 {
        /// Offset of the first invalid byte.
        offset: usize,
    },
}

impl EmitError {
    /// Creates an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates a truncated bank data error.
    pub fn truncated(message: impl Into<String>) -> Self {
        Self::TruncatedSegment {
            message: message.into(),
        }
    }

    /// Creates a missing terminator error.
    pub fn missing_terminator(message: impl Into<String>) -> Self {
        Self::MissingTerminator {
            message: message.into(),
        }
    }

    /// Creates an invalid descriptor error.
    pub fn invalid_descriptor(message: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            message: message.into(),
        }
    }
}
