//! # Wordbank Core
//!
//! Core bank-packing engine for wordbank.
//!
//! This crate decides how an ordered word list is partitioned into
//! fixed-capacity ROM banks:
//! - [`Segmenter`] implements the greedy sequential fill policy
//! - [`Layout`] and [`Segment`] form the packing artifact
//! - [`PackConfig`] carries the capacity knob
//!
//! The core performs no I/O and never interprets record contents; it only
//! accounts for record lengths. Serializing the resulting layout is the
//! emitters' job (see the `wordbank_emit` crate).

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod record;
mod segment;
mod segmenter;
mod types;

pub use config::{PackConfig, DEFAULT_CAPACITY};
pub use error::{PackError, PackResult};
pub use record::WordRecord;
pub use segment::{Layout, Segment};
pub use segmenter::{pack, Segmenter};
pub use types::BankId;

/// Core crate version, re-exported for the CLI's version command.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
