//! Resolved binary bank images.
//!
//! Unlike the assembly emitter, which leaves location resolution to the
//! linker, the image emitter assigns every segment a physical bank number and
//! base address itself and produces the raw bytes that would occupy each
//! bank, plus the binary index.

use bytes::Bytes;

use wordbank_core::{BankId, Layout, Segment};

use crate::error::{EmitError, EmitResult};
use crate::index::{encode_index, IndexEntry};
use crate::TERMINATOR_BYTE;

/// Physical addressing for emitted bank images.
#[derive(Debug, Clone)]
pub struct ImageConfig {
    /// Size of one physical bank in bytes.
    pub bank_size: usize,
    /// Bank number assigned to the layout's first segment. Bank 0 is
    /// reserved for the index terminator and is never assigned.
    pub first_bank: u8,
    /// Base address every bank is mapped at.
    pub base_addr: u16,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            bank_size: 0x4000, // 16 KiB switchable ROM bank
            first_bank: 1,
            base_addr: 0x4000,
        }
    }
}

impl ImageConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the physical bank size.
    #[must_use]
    pub const fn bank_size(mut self, bank_size: usize) -> Self {
        self.bank_size = bank_size;
        self
    }

    /// Sets the bank number of the first segment.
    #[must_use]
    pub const fn first_bank(mut self, first_bank: u8) -> Self {
        self.first_bank = first_bank;
        self
    }

    /// Sets the base address banks are mapped at.
    #[must_use]
    pub const fn base_addr(mut self, base_addr: u16) -> Self {
        self.base_addr = base_addr;
        self
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::InvalidConfig`] if the bank size is zero or the
    /// first bank is the reserved bank 0.
    pub fn validate(&self) -> EmitResult<()> {
        if self.bank_size == 0 {
            return Err(EmitError::invalid_config("bank size must be positive"));
        }
        if self.first_bank == 0 {
            return Err(EmitError::invalid_config(
                "first bank must be nonzero; bank 0 is reserved for the index terminator",
            ));
        }
        Ok(())
    }
}

/// One emitted bank image: resolved location plus serialized bytes.
#[derive(Debug, Clone)]
pub struct SegmentImage {
    /// Bank id within the layout.
    pub id: BankId,
    /// Resolved physical location.
    pub entry: IndexEntry,
    /// Serialized records plus the trailing end-of-bank terminator.
    pub data: Bytes,
}

/// Binary emitter that resolves bank numbers and addresses itself.
///
/// Segments are assigned consecutive bank numbers starting at
/// [`ImageConfig::first_bank`]; every bank is mapped at the same base
/// address. The nominal packing capacity is an approximation (record
/// terminators are not counted), so this emitter checks every serialized
/// segment against the true bank size and reports overflow instead of
/// producing an unloadable image.
#[derive(Debug, Clone)]
pub struct ImageEmitter {
    config: ImageConfig,
}

impl ImageEmitter {
    /// Creates an image emitter.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::InvalidConfig`] if the configuration is unusable.
    pub fn new(config: ImageConfig) -> EmitResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Serializes one segment: each record's characters followed by one
    /// terminator byte, then the end-of-bank terminator.
    #[must_use]
    pub fn encode_segment(segment: &Segment) -> Bytes {
        let mut buf = Vec::with_capacity(segment.serialized_len());
        for record in segment.records() {
            buf.extend_from_slice(record.as_str().as_bytes());
            buf.push(TERMINATOR_BYTE);
        }
        buf.push(TERMINATOR_BYTE);
        Bytes::from(buf)
    }

    /// Resolves the physical location of a bank id.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::BankOutOfRange`] if the resulting bank number
    /// does not fit in a descriptor byte.
    pub fn entry_for(&self, id: BankId) -> EmitResult<IndexEntry> {
        let bank = u32::from(self.config.first_bank) + id.as_u32();
        let bank = u8::try_from(bank).map_err(|_| EmitError::BankOutOfRange { bank })?;
        Ok(IndexEntry::new(bank, self.config.base_addr))
    }

    /// Emits one segment's bank image.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::BankOverflow`] if the serialized segment does not
    /// fit the physical bank, or [`EmitError::BankOutOfRange`] if the bank
    /// number cannot be addressed.
    pub fn emit_segment(&self, segment: &Segment) -> EmitResult<SegmentImage> {
        let entry = self.entry_for(segment.id())?;
        let data = Self::encode_segment(segment);
        if data.len() > self.config.bank_size {
            return Err(EmitError::BankOverflow {
                bank: u32::from(entry.bank),
                len: data.len(),
                bank_size: self.config.bank_size,
            });
        }
        Ok(SegmentImage {
            id: segment.id(),
            entry,
            data,
        })
    }

    /// Emits every bank image for the layout, in bank-id order.
    ///
    /// # Errors
    ///
    /// Fails on the first segment that overflows its bank or falls outside
    /// the addressable bank range.
    pub fn emit(&self, layout: &Layout) -> EmitResult<Vec<SegmentImage>> {
        layout.iter().map(|s| self.emit_segment(s)).collect()
    }

    /// Builds the binary index for the layout: one descriptor per bank in
    /// bank-id order, then the reserved terminator.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::BankOutOfRange`] if any bank number cannot be
    /// addressed.
    pub fn build_index(&self, layout: &Layout) -> EmitResult<Bytes> {
        let entries = layout
            .iter()
            .map(|s| self.entry_for(s.id()))
            .collect::<EmitResult<Vec<_>>>()?;
        Ok(encode_index(&entries))
    }
}

/// Decodes a serialized bank back into its records, validating terminators.
///
/// An empty record serializes identically to the end-of-bank terminator, so
/// the first bare terminator byte is always read as end-of-bank; empty
/// records do not round-trip. This matches the runtime's view of the format.
///
/// # Errors
///
/// Fails if a record or the bank is unterminated, bytes follow the
/// end-of-bank terminator, or a record is not valid UTF-8.
pub fn decode_segment(data: &[u8]) -> EmitResult<Vec<String>> {
    let mut records = Vec::new();
    let mut offset = 0;
    loop {
        if offset >= data.len() {
            return Err(EmitError::missing_terminator(
                "bank data ended without its end-of-bank terminator",
            ));
        }
        if data[offset] == TERMINATOR_BYTE {
            let extra = data.len() - offset - 1;
            if extra != 0 {
                return Err(EmitError::TrailingData { extra });
            }
            return Ok(records);
        }

        let end = match data[offset..].iter().position(|&b| b == TERMINATOR_BYTE) {
            Some(rel) => offset + rel,
            None => {
                return Err(EmitError::truncated(
                    "record ended without its terminator byte",
                ))
            }
        };
        let text = std::str::from_utf8(&data[offset..end])
            .map_err(|e| EmitError::InvalidUtf8 {
                offset: offset + e.valid_up_to(),
            })?;
        records.push(text.to_string());
        offset = end + 1;
    }
}
