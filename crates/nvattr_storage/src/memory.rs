//! In-memory storage backend for testing.

use crate::backend::StorageBackend;
use crate::error::{StorageError, StorageResult};
use parking_lot::RwLock;
use std::sync::Arc;

/// An in-memory storage backend.
///
/// This backend stores all data in memory and is suitable for:
/// - Unit tests
/// - Integration tests
/// - Ephemeral stores that don't need persistence
///
/// Clones share the same buffer, which is how [`crate::InMemoryMedium`]
/// hands out a fresh handle per operation while keeping one medium.
///
/// # Example
///
/// ```rust
/// use nvattr_storage::{StorageBackend, InMemoryBackend};
///
/// let mut backend = InMemoryBackend::new();
/// backend.write_at(0, b"test data").unwrap();
/// assert_eq!(backend.size().unwrap(), 9);
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryBackend {
    data: Arc<RwLock<Vec<u8>>>,
}

impl InMemoryBackend {
    /// Creates a new empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory backend with pre-existing data.
    ///
    /// Useful for testing recovery and corruption scenarios.
    #[must_use]
    pub fn with_data(data: Vec<u8>) -> Self {
        Self {
            data: Arc::new(RwLock::new(data)),
        }
    }

    /// Returns a copy of all data in the backend.
    #[must_use]
    pub fn data(&self) -> Vec<u8> {
        self.data.read().clone()
    }

    /// Replaces the whole buffer, for every clone of this backend.
    pub fn replace_data(&self, data: Vec<u8>) {
        *self.data.write() = data;
    }
}

impl StorageBackend for InMemoryBackend {
    fn read_at(&self, offset: u64, len: usize) -> StorageResult<Vec<u8>> {
        let data = self.data.read();
        let size = data.len() as u64;
        let offset_usize = offset as usize;
        let end = offset_usize.saturating_add(len);

        if offset > size || end > data.len() {
            return Err(StorageError::ReadPastEnd { offset, len, size });
        }

        Ok(data[offset_usize..end].to_vec())
    }

    fn write_at(&mut self, offset: u64, new_data: &[u8]) -> StorageResult<usize> {
        let mut data = self.data.write();
        let size = data.len() as u64;

        if offset > size {
            return Err(StorageError::WritePastEnd { offset, size });
        }

        let start = offset as usize;
        let end = start + new_data.len();
        if end > data.len() {
            data.resize(end, 0);
        }
        data[start..end].copy_from_slice(new_data);

        Ok(new_data.len())
    }

    fn flush(&mut self) -> StorageResult<()> {
        // In-memory backend has no pending writes
        Ok(())
    }

    fn size(&self) -> StorageResult<u64> {
        Ok(self.data.read().len() as u64)
    }

    fn sync(&mut self) -> StorageResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_new_is_empty() {
        let backend = InMemoryBackend::new();
        assert_eq!(backend.size().unwrap(), 0);
        assert!(backend.data().is_empty());
    }

    #[test]
    fn memory_write_extends_at_end() {
        let mut backend = InMemoryBackend::new();

        assert_eq!(backend.write_at(0, b"hello").unwrap(), 5);
        assert_eq!(backend.write_at(5, b" world").unwrap(), 6);

        assert_eq!(backend.size().unwrap(), 11);
        assert_eq!(backend.data(), b"hello world");
    }

    #[test]
    fn memory_overwrite_in_place() {
        let mut backend = InMemoryBackend::with_data(b"hello world".to_vec());
        backend.write_at(0, b"HELLO").unwrap();

        assert_eq!(backend.size().unwrap(), 11);
        assert_eq!(backend.data(), b"HELLO world");
    }

    #[test]
    fn memory_overwrite_straddling_end_grows() {
        let mut backend = InMemoryBackend::with_data(b"abc".to_vec());
        backend.write_at(2, b"XYZ").unwrap();
        assert_eq!(backend.data(), b"abXYZ");
    }

    #[test]
    fn memory_write_past_end_fails() {
        let mut backend = InMemoryBackend::with_data(b"abc".to_vec());
        let result = backend.write_at(4, b"x");
        assert!(matches!(result, Err(StorageError::WritePastEnd { offset: 4, size: 3 })));
        assert_eq!(backend.data(), b"abc");
    }

    #[test]
    fn memory_read_at_returns_correct_data() {
        let backend = InMemoryBackend::with_data(b"hello world".to_vec());

        assert_eq!(&backend.read_at(0, 5).unwrap(), b"hello");
        assert_eq!(&backend.read_at(6, 5).unwrap(), b"world");
    }

    #[test]
    fn memory_read_at_past_end_fails() {
        let backend = InMemoryBackend::with_data(b"hello".to_vec());

        assert!(matches!(
            backend.read_at(10, 5),
            Err(StorageError::ReadPastEnd { .. })
        ));
        assert!(matches!(
            backend.read_at(3, 10),
            Err(StorageError::ReadPastEnd { .. })
        ));
    }

    #[test]
    fn memory_empty_read() {
        let backend = InMemoryBackend::with_data(b"hello".to_vec());
        assert!(backend.read_at(2, 0).unwrap().is_empty());
    }

    #[test]
    fn memory_clones_share_buffer() {
        let backend = InMemoryBackend::new();
        let mut handle = backend.clone();
        handle.write_at(0, b"shared").unwrap();

        assert_eq!(backend.data(), b"shared");

        backend.replace_data(b"swapped".to_vec());
        assert_eq!(handle.size().unwrap(), 7);
    }

    #[test]
    fn memory_flush_and_sync_succeed() {
        let mut backend = InMemoryBackend::new();
        backend.write_at(0, b"data").unwrap();
        assert!(backend.flush().is_ok());
        assert!(backend.sync().is_ok());
    }
}
