//! Storage backend trait definition.

use crate::error::StorageResult;

/// A random-access byte store backing an attribute medium.
///
/// Backends are **opaque byte stores**. They read and write bytes at
/// absolute offsets and report their size. The attribute store owns all
/// slot layout interpretation - backends do not understand records,
/// lengths, or checksums.
///
/// # Invariants
///
/// - `read_at` returns exactly the bytes previously written at that offset
/// - `write_at` may overwrite existing bytes or extend the store at its end,
///   never past it
/// - `size` grows by exactly the number of bytes written past the old end
/// - Backends must be `Send + Sync`
///
/// # Implementors
///
/// - [`super::InMemoryBackend`] - For testing
/// - [`super::FileBackend`] - For persistent storage
pub trait StorageBackend: Send + Sync {
    /// Reads `len` bytes starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The read would extend beyond the current size
    /// - An I/O error occurs
    fn read_at(&self, offset: u64, len: usize) -> StorageResult<Vec<u8>>;

    /// Writes `data` starting at `offset`.
    ///
    /// Returns the number of bytes actually written. A well-behaved backend
    /// writes everything or fails; callers still compare the count against
    /// `data.len()` and treat a shortfall as a failed write.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `offset` is beyond the current size
    /// - An I/O error occurs
    fn write_at(&mut self, offset: u64, data: &[u8]) -> StorageResult<usize>;

    /// Flushes all pending writes to the OS.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush operation fails.
    fn flush(&mut self) -> StorageResult<()>;

    /// Returns the current size of the storage in bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the size cannot be determined.
    fn size(&self) -> StorageResult<u64>;

    /// Syncs all data and metadata to durable storage.
    ///
    /// This is a stronger guarantee than `flush` - after it returns, the
    /// written bytes survive power loss as far as the OS can promise.
    ///
    /// # Errors
    ///
    /// Returns an error if the sync operation fails.
    fn sync(&mut self) -> StorageResult<()>;
}
