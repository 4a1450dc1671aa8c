//! Bank index descriptors.
//!
//! The index is an ordered list of 3-byte descriptors, one per bank in
//! bank-id order, closed by a reserved all-zero terminator. Valid descriptors
//! always carry a nonzero bank byte (switchable banks are numbered from 1),
//! so a reader can detect the end of the index without knowing the bank count
//! in advance.

use crate::error::{EmitError, EmitResult};
use bytes::Bytes;

/// A resolved reference to one bank: bank number plus base address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    /// Switchable bank number holding the segment. Never zero.
    pub bank: u8,
    /// Base address of the segment's data within the bank.
    pub addr: u16,
}

impl IndexEntry {
    /// Encoded descriptor size in bytes.
    pub const SIZE: usize = 3;

    /// The reserved all-zero terminator descriptor.
    pub const TERMINATOR: [u8; Self::SIZE] = [0, 0, 0];

    /// Creates an index entry.
    #[must_use]
    pub const fn new(bank: u8, addr: u16) -> Self {
        Self { bank, addr }
    }

    /// Encodes the descriptor as `bank, address high byte, address low byte`.
    #[must_use]
    pub const fn encode(self) -> [u8; Self::SIZE] {
        [self.bank, (self.addr >> 8) as u8, (self.addr & 0xFF) as u8]
    }

    /// Decodes one descriptor.
    ///
    /// # Errors
    ///
    /// Rejects descriptors with a zero bank byte; bank 0 is reserved for the
    /// index terminator.
    pub fn decode(bytes: [u8; Self::SIZE]) -> EmitResult<Self> {
        if bytes[0] == 0 {
            return Err(EmitError::invalid_descriptor(
                "bank byte is zero (reserved for the index terminator)",
            ));
        }
        Ok(Self {
            bank: bytes[0],
            addr: ((bytes[1] as u16) << 8) | bytes[2] as u16,
        })
    }
}

/// Encodes an index: every descriptor in order, then the terminator.
#[must_use]
pub fn encode_index(entries: &[IndexEntry]) -> Bytes {
    let mut buf = Vec::with_capacity((entries.len() + 1) * IndexEntry::SIZE);
    for entry in entries {
        buf.extend_from_slice(&entry.encode());
    }
    buf.extend_from_slice(&IndexEntry::TERMINATOR);
    Bytes::from(buf)
}

/// Decodes a binary index, validating the reserved terminator.
///
/// # Errors
///
/// Fails if the data ends before a terminator, a descriptor is malformed, or
/// bytes follow the terminator.
pub fn decode_index(data: &[u8]) -> EmitResult<Vec<IndexEntry>> {
    let mut entries = Vec::new();
    let mut offset = 0;
    loop {
        let remaining = data.len() - offset;
        if remaining == 0 {
            return Err(EmitError::missing_terminator(
                "index ended without its terminator descriptor",
            ));
        }
        if remaining < IndexEntry::SIZE {
            return Err(EmitError::truncated(format!(
                "index ended mid-descriptor with {remaining} bytes"
            )));
        }

        let chunk = [data[offset], data[offset + 1], data[offset + 2]];
        if chunk == IndexEntry::TERMINATOR {
            let extra = remaining - IndexEntry::SIZE;
            if extra != 0 {
                return Err(EmitError::TrailingData { extra });
            }
            return Ok(entries);
        }
        entries.push(IndexEntry::decode(chunk)?);
        offset += IndexEntry::SIZE;
    }
}
