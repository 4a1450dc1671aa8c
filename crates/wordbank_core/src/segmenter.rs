//! The segmenter: greedy sequential fill of records into banks.

use crate::config::PackConfig;
use crate::error::PackResult;
use crate::record::WordRecord;
use crate::segment::{Layout, Segment};
use crate::types::BankId;
use tracing::{debug, warn};

/// Streaming packer that assigns records to fixed-capacity banks.
///
/// The segmenter holds the only mutable segment: the one currently being
/// filled. Bank 0 is opened as soon as the segmenter is created, so even an
/// empty input produces one (empty) bank. Records must be pushed in input
/// order; bank boundaries are a function of the fill counter carried from one
/// record to the next.
///
/// The fill counter starts at 1 for every bank, reserving the bank's trailing
/// sentinel byte. Each record contributes only its byte length; the
/// terminator byte every record also consumes in serialized form is not
/// counted. A bank's serialized size can therefore exceed the nominal
/// capacity by up to one byte per record. Emitters that assign physical banks
/// enforce the true size (see `wordbank_emit`).
#[derive(Debug)]
pub struct Segmenter {
    capacity: usize,
    current: Segment,
    fill: usize,
    closed: Vec<Segment>,
}

impl Segmenter {
    /// Creates a segmenter, opening bank 0 immediately.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PackError::InvalidCapacity`] if the configured
    /// capacity is zero. Validation happens here, before any record is seen.
    pub fn new(config: &PackConfig) -> PackResult<Self> {
        config.validate()?;
        Ok(Self {
            capacity: config.capacity,
            current: Segment::new(BankId::ZERO),
            fill: 1,
            closed: Vec::new(),
        })
    }

    /// Appends one record, rolling over to a new bank first when the fill
    /// counter would exceed capacity.
    ///
    /// The record that triggers an overflow is never placed in the bank that
    /// overflowed; it becomes the first record of the new bank. A record at
    /// least as long as the capacity is accepted anyway and ends up alone in
    /// an over-budget bank.
    pub fn push(&mut self, record: WordRecord) {
        let contribution = record.len();
        if contribution >= self.capacity {
            warn!(
                bank = %self.current.id(),
                len = contribution,
                capacity = self.capacity,
                word = record.as_str(),
                "record longer than bank capacity, packing into an over-budget bank"
            );
        }

        self.fill += contribution;
        if self.fill > self.capacity {
            self.roll_over();
            self.fill = 1 + contribution;
        }
        self.current.push(record);
    }

    /// Closes the in-progress bank and returns the finished layout.
    #[must_use]
    pub fn finish(mut self) -> Layout {
        debug!(
            banks = self.closed.len() + 1,
            fill = self.fill,
            "segmentation finished"
        );
        self.closed.push(self.current);
        Layout::new(self.closed)
    }

    /// Returns the number of banks opened so far, including the in-progress
    /// one.
    #[must_use]
    pub fn bank_count(&self) -> usize {
        self.closed.len() + 1
    }

    fn roll_over(&mut self) {
        let next = self.current.id().next();
        debug!(
            closed = %self.current.id(),
            fill = self.fill,
            capacity = self.capacity,
            "bank full, rolling over"
        );
        let full = std::mem::replace(&mut self.current, Segment::new(next));
        self.closed.push(full);
    }
}

/// Packs an ordered record sequence into a layout in one pass.
///
/// The sequence is consumed exactly once and never replayed, so any
/// forward-only source works; neither random access nor a known length is
/// assumed. Empty input still produces a single empty bank.
///
/// # Errors
///
/// Returns [`crate::PackError::InvalidCapacity`] if the configured capacity
/// is zero; validation happens before the first record is drawn.
pub fn pack<I, R>(records: I, config: &PackConfig) -> PackResult<Layout>
where
    I: IntoIterator<Item = R>,
    R: Into<WordRecord>,
{
    let mut segmenter = Segmenter::new(config)?;
    for record in records {
        segmenter.push(record.into());
    }
    Ok(segmenter.finish())
}
