//! Packing configuration.

use crate::error::{PackError, PackResult};

/// Default bank capacity in bytes.
pub const DEFAULT_CAPACITY: usize = 4096;

/// Configuration for a packing run.
#[derive(Debug, Clone)]
pub struct PackConfig {
    /// Maximum accumulated record length per bank. One byte of every bank is
    /// reserved for its trailing sentinel; record terminator bytes are not
    /// counted (see [`crate::Segmenter`]).
    pub capacity: usize,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl PackConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bank capacity.
    #[must_use]
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Checks the configuration before any packing begins.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::InvalidCapacity`] if the capacity is zero.
    pub fn validate(&self) -> PackResult<()> {
        if self.capacity == 0 {
            return Err(PackError::InvalidCapacity {
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}
