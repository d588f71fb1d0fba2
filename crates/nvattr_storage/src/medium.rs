//! Media: where backend handles come from.
//!
//! The attribute store never holds a backend between operations. Each call
//! asks its [`Medium`] for a handle, uses it, and drops it, so a failed call
//! cannot leave a dangling handle behind.

use crate::backend::StorageBackend;
use crate::error::{StorageError, StorageResult};
use crate::file::FileBackend;
use crate::memory::InMemoryBackend;
use parking_lot::Mutex;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A source of backend handles for one logical medium.
pub trait Medium: Send + Sync {
    /// Opens the medium for reading if it exists.
    ///
    /// Returns `Ok(None)` when the medium has never been created.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium exists but cannot be opened.
    fn open_existing(&self) -> StorageResult<Option<Box<dyn StorageBackend>>>;

    /// Opens the medium for reading and writing, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium cannot be opened or created.
    fn open_or_create(&self) -> StorageResult<Box<dyn StorageBackend>>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}

/// A medium backed by a single file at an injected path.
#[derive(Debug, Clone)]
pub struct FileMedium {
    path: PathBuf,
    create_dirs: bool,
}

impl FileMedium {
    /// Creates a medium for the file at `path`.
    ///
    /// Nothing is touched on disk until the first write opens the medium.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            create_dirs: true,
        }
    }

    /// Sets whether missing parent directories are created on first write.
    #[must_use]
    pub fn create_dirs(mut self, value: bool) -> Self {
        self.create_dirs = value;
        self
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Medium for FileMedium {
    fn open_existing(&self) -> StorageResult<Option<Box<dyn StorageBackend>>> {
        match FileBackend::open_read_only(&self.path) {
            Ok(backend) => Ok(Some(Box::new(backend))),
            Err(StorageError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "medium does not exist");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn open_or_create(&self) -> StorageResult<Box<dyn StorageBackend>> {
        let backend = if self.create_dirs {
            FileBackend::open_with_create_dirs(&self.path)?
        } else {
            FileBackend::open(&self.path)?
        };
        Ok(Box::new(backend))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// An in-memory medium that starts out absent, like a file never written.
///
/// Every handle shares one buffer, so data written through one operation is
/// visible to the next.
#[derive(Debug, Default)]
pub struct InMemoryMedium {
    backend: Mutex<Option<InMemoryBackend>>,
}

impl InMemoryMedium {
    /// Creates a medium that does not exist yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a medium that already holds `data`.
    #[must_use]
    pub fn with_data(data: Vec<u8>) -> Self {
        Self {
            backend: Mutex::new(Some(InMemoryBackend::with_data(data))),
        }
    }

    /// Returns whether the medium has been created.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.backend.lock().is_some()
    }

    /// Returns a copy of the medium's bytes, or `None` if it does not exist.
    #[must_use]
    pub fn snapshot(&self) -> Option<Vec<u8>> {
        self.backend.lock().as_ref().map(InMemoryBackend::data)
    }

    /// Replaces the medium's bytes, creating it if needed.
    pub fn replace(&self, data: Vec<u8>) {
        let mut backend = self.backend.lock();
        match backend.as_ref() {
            Some(existing) => existing.replace_data(data),
            None => *backend = Some(InMemoryBackend::with_data(data)),
        }
    }
}

impl Medium for InMemoryMedium {
    fn open_existing(&self) -> StorageResult<Option<Box<dyn StorageBackend>>> {
        Ok(self
            .backend
            .lock()
            .clone()
            .map(|b| Box::new(b) as Box<dyn StorageBackend>))
    }

    fn open_or_create(&self) -> StorageResult<Box<dyn StorageBackend>> {
        let backend = self
            .backend
            .lock()
            .get_or_insert_with(InMemoryBackend::new)
            .clone();
        Ok(Box::new(backend))
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
