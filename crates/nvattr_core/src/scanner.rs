//! Linear slot scanner.
//!
//! Walks a medium one fixed-size slot at a time from offset 0. There is no
//! index, so every lookup costs one read per slot before the match.
//!
//! A medium whose size is not a whole number of slots is rejected when the
//! scanner is created, with [`CoreError::TruncatedMedium`]. This keeps a torn
//! trailing slot distinct from both "not found" and a checksum mismatch.

use crate::error::{CoreError, CoreResult};
use crate::record::{AttributeRecord, SLOT_SIZE};
use crate::types::AttrId;
use nvattr_storage::StorageBackend;
use tracing::{trace, warn};

/// A sequential scanner over the slots of one opened medium.
///
/// The scanner keeps a position, like a file cursor. After a successful
/// [`SlotScanner::find`] the position is the start of the matched slot, so
/// the caller can overwrite it in place; after an exhausted scan it is the
/// end of the medium, where a new slot would be appended.
///
/// It is also an iterator over `(offset, record)` pairs for every slot.
pub struct SlotScanner<'a> {
    backend: &'a dyn StorageBackend,
    size: u64,
    position: u64,
    finished: bool,
}

impl<'a> SlotScanner<'a> {
    /// Creates a scanner positioned at the first slot.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TruncatedMedium`] if the medium size is not a
    /// multiple of [`SLOT_SIZE`], or a storage error if the size cannot be
    /// read.
    pub fn new(backend: &'a dyn StorageBackend) -> CoreResult<Self> {
        let size = backend.size()?;
        if size % SLOT_SIZE as u64 != 0 {
            warn!(size, slot_size = SLOT_SIZE, "medium has a partial trailing slot");
            return Err(CoreError::TruncatedMedium { size });
        }

        Ok(Self {
            backend,
            size,
            position: 0,
            finished: false,
        })
    }

    /// Returns the current position in bytes.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Returns the medium size observed when the scanner was created.
    #[must_use]
    pub fn medium_size(&self) -> u64 {
        self.size
    }

    /// Returns the number of slots on the medium.
    #[must_use]
    pub fn slot_count(&self) -> u64 {
        self.size / SLOT_SIZE as u64
    }

    /// Scans forward for the first slot holding attribute `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if a slot cannot be read.
    pub fn find(&mut self, id: AttrId) -> CoreResult<Option<AttributeRecord>> {
        self.find_by(|record| record.id() == id)
    }

    /// Scans forward for the first slot whose record satisfies `predicate`.
    ///
    /// On a match the position is left at the start of that slot. On
    /// exhaustion the position is the end of the medium and `Ok(None)` is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an error if a slot cannot be read.
    pub fn find_by<F>(&mut self, mut predicate: F) -> CoreResult<Option<AttributeRecord>>
    where
        F: FnMut(&AttributeRecord) -> bool,
    {
        while let Some((offset, record)) = self.read_slot()? {
            if predicate(&record) {
                self.position = offset;
                return Ok(Some(record));
            }
        }
        Ok(None)
    }

    fn read_slot(&mut self) -> CoreResult<Option<(u64, AttributeRecord)>> {
        if self.position >= self.size {
            return Ok(None);
        }

        let offset = self.position;
        let block = self.backend.read_at(offset, SLOT_SIZE)?;
        let record = AttributeRecord::decode(&block)?;
        self.position = offset + SLOT_SIZE as u64;

        trace!(offset, id = %record.id(), length = record.length(), "read slot");
        Ok(Some((offset, record)))
    }
}

impl Iterator for SlotScanner<'_> {
    type Item = CoreResult<(u64, AttributeRecord)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.read_slot().transpose();
        if matches!(result, None | Some(Err(_))) {
            self.finished = true;
        }
        result
    }
}
