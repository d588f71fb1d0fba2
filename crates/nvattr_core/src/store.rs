//! The attribute store facade.

use crate::config::StoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::record::{AttributeRecord, SCALAR_LEN, SLOT_SIZE};
use crate::report::{StoredSlot, VerifyReport};
use crate::scanner::SlotScanner;
use crate::types::{AttrId, Attribute};
use nvattr_storage::{FileMedium, InMemoryMedium, Medium};
use parking_lot::{Mutex, MutexGuard};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

/// Where a [`AttributeStore::set`] put its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotWrite {
    /// An existing slot for the id was overwritten in place.
    Overwritten {
        /// Offset of the slot.
        offset: u64,
    },
    /// A new slot was appended at the end of the medium.
    Appended {
        /// Offset of the slot.
        offset: u64,
    },
}

impl SlotWrite {
    /// Returns the offset of the written slot.
    #[must_use]
    pub fn offset(self) -> u64 {
        match self {
            Self::Overwritten { offset } | Self::Appended { offset } => offset,
        }
    }
}

/// A persistent store of small tagged values.
///
/// Each attribute is an 8-bit id plus up to 255 value bytes, kept in a
/// fixed-size slot on a backing medium. Every operation opens the medium,
/// scans it from the start, optionally writes one slot, and closes it
/// again. Nothing is cached between calls.
///
/// # Concurrency
///
/// Operations on one store are serialized by a process-local mutex unless
/// [`StoreConfig::serialize_operations`] is turned off. Nothing protects a
/// medium shared between several stores or processes: a reader can observe
/// a half-written slot, and two writers of the same id can interleave.
/// Callers sharing a medium must coordinate access themselves.
///
/// # Example
///
/// ```rust
/// use nvattr_core::{AttrId, AttributeStore};
///
/// let store = AttributeStore::in_memory();
/// store.set(AttrId::new(1), b"hello").unwrap();
///
/// let attr = store.get(AttrId::new(1)).unwrap();
/// assert_eq!(attr.value(), b"hello");
/// ```
pub struct AttributeStore {
    medium: Arc<dyn Medium>,
    config: StoreConfig,
    guard: Mutex<()>,
}

impl AttributeStore {
    /// Creates a store over the file at `path` with default configuration.
    ///
    /// The file is not touched until the first operation.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::open_with_config(path, StoreConfig::default())
    }

    /// Creates a store over the file at `path`.
    #[must_use]
    pub fn open_with_config(path: impl Into<PathBuf>, config: StoreConfig) -> Self {
        let medium = FileMedium::new(path).create_dirs(config.create_dirs);
        Self::with_medium(Arc::new(medium), config)
    }

    /// Creates a store over a fresh in-memory medium.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_medium(Arc::new(InMemoryMedium::new()), StoreConfig::default())
    }

    /// Creates a store over an arbitrary medium.
    #[must_use]
    pub fn with_medium(medium: Arc<dyn Medium>, config: StoreConfig) -> Self {
        Self {
            medium,
            config,
            guard: Mutex::new(()),
        }
    }

    /// Returns the store configuration.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn lock(&self) -> Option<MutexGuard<'_, ()>> {
        self.config.serialize_operations.then(|| self.guard.lock())
    }

    /// Reads attribute `id`.
    ///
    /// A 4-byte value is returned in host byte order.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the medium does not exist or holds no
    ///   slot for `id`
    /// - [`CoreError::ChecksumMismatch`] if the slot is corrupted; no value
    ///   is returned
    /// - [`CoreError::TruncatedMedium`] if the medium has a partial slot
    /// - [`CoreError::Storage`] if the medium cannot be read
    pub fn get(&self, id: AttrId) -> CoreResult<Attribute> {
        let _guard = self.lock();

        let Some(backend) = self.medium.open_existing()? else {
            debug!(%id, medium = %self.medium.describe(), "get: medium does not exist");
            return Err(CoreError::NotFound { id });
        };

        let mut scanner = SlotScanner::new(&*backend)?;
        let Some(record) = scanner.find(id)? else {
            debug!(%id, slots = scanner.slot_count(), "get: exhausted without match");
            return Err(CoreError::NotFound { id });
        };

        if let Err(e) = record.verify() {
            warn!(%id, offset = scanner.position(), "get: corrupted slot, read aborted");
            return Err(e);
        }

        debug!(%id, offset = scanner.position(), length = record.length(), "get: matched");
        Attribute::new(id, record.host_value(self.config.host_order))
    }

    /// Writes attribute `id`, replacing any previous value.
    ///
    /// An existing slot for `id` is overwritten in place, whether or not it
    /// was intact; otherwise a new slot is appended. The medium is created
    /// if it does not exist.
    ///
    /// A failed write may leave the slot torn. There is no rollback.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidArgument`] if `value` exceeds the slot capacity;
    ///   the medium is not touched
    /// - [`CoreError::TruncatedMedium`] if the medium has a partial slot
    /// - [`CoreError::ShortWrite`] if the backend wrote less than a slot
    /// - [`CoreError::Storage`] if the medium cannot be opened or written
    pub fn set(&self, id: AttrId, value: &[u8]) -> CoreResult<SlotWrite> {
        let record = AttributeRecord::new(id, value, self.config.host_order)?;
        let _guard = self.lock();

        let mut backend = self.medium.open_or_create()?;

        let (matched, offset) = {
            let mut scanner = SlotScanner::new(&*backend)?;
            let matched = scanner.find(id)?.is_some();
            (matched, scanner.position())
        };
        let outcome = if matched {
            SlotWrite::Overwritten { offset }
        } else {
            SlotWrite::Appended { offset }
        };

        let written = backend.write_at(offset, &record.encode())?;
        if written != SLOT_SIZE {
            warn!(%id, offset, written, "set: short write, slot may be torn");
            return Err(CoreError::ShortWrite {
                offset,
                expected: SLOT_SIZE,
                written,
            });
        }

        backend.flush()?;
        if self.config.sync_on_write {
            backend.sync()?;
        }

        debug!(%id, ?outcome, length = record.length(), "set: slot written");
        Ok(outcome)
    }

    /// Reads attribute `id` as a 4-byte scalar.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if the stored value is not
    /// four bytes long, plus every error of [`Self::get`].
    pub fn get_u32(&self, id: AttrId) -> CoreResult<u32> {
        let attr = self.get(id)?;
        let bytes = <[u8; SCALAR_LEN]>::try_from(attr.value()).map_err(|_| {
            CoreError::invalid_argument(format!(
                "{id} holds {} bytes, not a {SCALAR_LEN}-byte scalar",
                attr.value().len()
            ))
        })?;
        Ok(self.config.host_order.read_u32(bytes))
    }

    /// Writes attribute `id` as a 4-byte scalar.
    ///
    /// # Errors
    ///
    /// Returns every error of [`Self::set`].
    pub fn set_u32(&self, id: AttrId, value: u32) -> CoreResult<SlotWrite> {
        self.set(id, &self.config.host_order.write_u32(value))
    }

    /// Returns whether the medium holds a slot for `id`.
    ///
    /// The slot's checksum is not checked.
    ///
    /// # Errors
    ///
    /// Same as [`Self::records`].
    pub fn contains(&self, id: AttrId) -> CoreResult<bool> {
        let _guard = self.lock();

        let Some(backend) = self.medium.open_existing()? else {
            return Ok(false);
        };
        let found = SlotScanner::new(&*backend)?.find(id)?.is_some();
        Ok(found)
    }

    /// Lists every slot on the medium, in medium order.
    ///
    /// Corrupted slots are listed, not rejected. A missing medium has no
    /// slots.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TruncatedMedium`] if the medium has a partial
    /// slot, or a storage error if it cannot be read.
    pub fn records(&self) -> CoreResult<Vec<StoredSlot>> {
        let _guard = self.lock();

        let Some(backend) = self.medium.open_existing()? else {
            return Ok(Vec::new());
        };

        let slots = SlotScanner::new(&*backend)?
            .map(|slot| slot.map(|(offset, record)| StoredSlot::from_record(offset, &record)))
            .collect::<CoreResult<Vec<_>>>()?;
        Ok(slots)
    }

    /// Checks every slot's checksum and the uniqueness of ids.
    ///
    /// # Errors
    ///
    /// Same as [`Self::records`].
    pub fn verify(&self) -> CoreResult<VerifyReport> {
        let slots = self.records()?;
        let report = VerifyReport::from_slots(&slots);
        if !report.is_clean() {
            warn!(
                corrupted = report.corrupted.len(),
                duplicates = report.duplicates.len(),
                "verify: medium is not clean"
            );
        }
        Ok(report)
    }

    /// Returns the number of slots on the medium.
    ///
    /// # Errors
    ///
    /// Same as [`Self::records`].
    pub fn slot_count(&self) -> CoreResult<u64> {
        let _guard = self.lock();

        let Some(backend) = self.medium.open_existing()? else {
            return Ok(0);
        };
        let count = SlotScanner::new(&*backend)?.slot_count();
        Ok(count)
    }
}

impl std::fmt::Debug for AttributeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttributeStore")
            .field("medium", &self.medium.describe())
            .field("config", &self.config)
            .finish()
    }
}
