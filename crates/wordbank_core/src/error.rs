//! Error types for wordbank core.

use thiserror::Error;

/// Result type for packing operations.
pub type PackResult<T> = Result<T, PackError>;

/// Errors that can occur while packing records into banks.
///
/// The packing core has a narrow failure surface: configuration is validated
/// up front and packing itself never fails. A record longer than the capacity
/// is not an error; it is accepted into its own over-budget bank.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackError {
    /// The configured capacity cannot hold any bank.
    #[error("invalid capacity: {capacity} (must be positive)")]
    InvalidCapacity {
        /// The rejected capacity value.
        capacity: usize,
    },
}
