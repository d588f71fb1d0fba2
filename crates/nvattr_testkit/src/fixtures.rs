//! Store fixtures with automatic cleanup.

use nvattr_core::{AttributeStore, HostByteOrder, StoreConfig};
use nvattr_storage::InMemoryMedium;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Name of the medium file inside a [`FileStore`]'s temporary directory.
pub const MEDIUM_FILE: &str = "attributes.nvm";

/// A store over an in-memory medium, with the medium kept reachable for
/// inspection and tampering.
pub struct MemoryStore {
    /// The store under test.
    pub store: AttributeStore,
    /// The medium behind it.
    pub medium: Arc<InMemoryMedium>,
}

impl MemoryStore {
    /// Creates a store over a medium that does not exist yet.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates a store with a custom configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        let medium = Arc::new(InMemoryMedium::new());
        let store = AttributeStore::with_medium(medium.clone(), config);
        Self { store, medium }
    }

    /// Opens a second store over the same medium, as a host with a
    /// different byte order would.
    pub fn reopen_as(&self, order: HostByteOrder) -> AttributeStore {
        AttributeStore::with_medium(
            self.medium.clone(),
            self.store.config().clone().host_order(order),
        )
    }

    /// Returns the medium bytes, or an empty vector if it does not exist.
    pub fn bytes(&self) -> Vec<u8> {
        self.medium.snapshot().unwrap_or_default()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// A store over a file in a temporary directory.
///
/// The directory is removed when the fixture is dropped.
pub struct FileStore {
    /// The store under test.
    pub store: AttributeStore,
    path: PathBuf,
    _temp_dir: TempDir,
}

impl FileStore {
    /// Creates a store whose medium file does not exist yet.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join(MEDIUM_FILE);
        let store =
            AttributeStore::open_with_config(&path, StoreConfig::default().sync_on_write(false));
        Self {
            store,
            path,
            _temp_dir: temp_dir,
        }
    }

    /// Returns the medium file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a fresh store over the same file, as a restarted process would.
    pub fn reopen(&self) -> AttributeStore {
        AttributeStore::open(&self.path)
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs a test with a temporary in-memory store.
pub fn with_memory_store<F, R>(f: F) -> R
where
    F: FnOnce(&AttributeStore) -> R,
{
    let fixture = MemoryStore::new();
    f(&fixture.store)
}

/// Runs a test with a temporary file-backed store and its path.
pub fn with_file_store<F, R>(f: F) -> R
where
    F: FnOnce(&AttributeStore, &Path) -> R,
{
    let fixture = FileStore::new();
    f(&fixture.store, fixture.path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nvattr_core::AttrId;

    #[test]
    fn memory_fixture_starts_without_medium() {
        let fixture = MemoryStore::new();
        assert!(fixture.bytes().is_empty());
        assert!(!fixture.medium.exists());
    }

    #[test]
    fn file_fixture_reopen_sees_data() {
        let fixture = FileStore::new();
        fixture.store.set(AttrId::new(1), b"kept").unwrap();

        assert_eq!(fixture.reopen().get(AttrId::new(1)).unwrap().value(), b"kept");
    }

    #[test]
    fn with_file_store_passes_path() {
        with_file_store(|store, path| {
            assert!(!path.exists());
            store.set(AttrId::new(2), b"x").unwrap();
            assert!(path.exists());
        });
    }
}
