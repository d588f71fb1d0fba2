//! Fault-injecting media.
//!
//! [`FaultyMedium`] wraps an [`InMemoryMedium`] and misbehaves in one chosen
//! way, so failure paths of the store can be exercised without a real
//! failing disk.

use nvattr_storage::{InMemoryMedium, Medium, StorageBackend, StorageError, StorageResult};
use parking_lot::Mutex;
use std::io;

/// The misbehavior a [`FaultyMedium`] injects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Behave normally.
    None,
    /// Write only the first `n` bytes of every write and report `n`.
    ShortWrite(usize),
    /// Fail every write with an I/O error.
    FailWrites,
    /// Fail every read with an I/O error.
    FailReads,
    /// Fail every open with an I/O error.
    FailOpen,
}

/// An in-memory medium with an injected fault.
#[derive(Debug)]
pub struct FaultyMedium {
    inner: InMemoryMedium,
    fault: Mutex<Fault>,
}

impl FaultyMedium {
    /// Creates an absent medium that injects `fault`.
    pub fn new(fault: Fault) -> Self {
        Self {
            inner: InMemoryMedium::new(),
            fault: Mutex::new(fault),
        }
    }

    /// Changes the injected fault for subsequent opens.
    pub fn set_fault(&self, fault: Fault) {
        *self.fault.lock() = fault;
    }

    /// Returns the underlying medium.
    pub fn inner(&self) -> &InMemoryMedium {
        &self.inner
    }

    fn wrap(&self, backend: Box<dyn StorageBackend>) -> Box<dyn StorageBackend> {
        Box::new(FaultyBackend {
            inner: backend,
            fault: *self.fault.lock(),
        })
    }

    fn check_open(&self) -> StorageResult<()> {
        if *self.fault.lock() == Fault::FailOpen {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "injected open failure",
            )));
        }
        Ok(())
    }
}

impl Medium for FaultyMedium {
    fn open_existing(&self) -> StorageResult<Option<Box<dyn StorageBackend>>> {
        self.check_open()?;
        Ok(self.inner.open_existing()?.map(|b| self.wrap(b)))
    }

    fn open_or_create(&self) -> StorageResult<Box<dyn StorageBackend>> {
        self.check_open()?;
        Ok(self.wrap(self.inner.open_or_create()?))
    }

    fn describe(&self) -> String {
        format!("<faulty {:?}>", *self.fault.lock())
    }
}

struct FaultyBackend {
    inner: Box<dyn StorageBackend>,
    fault: Fault,
}

impl StorageBackend for FaultyBackend {
    fn read_at(&self, offset: u64, len: usize) -> StorageResult<Vec<u8>> {
        if self.fault == Fault::FailReads {
            return Err(StorageError::Io(io::Error::other("injected read failure")));
        }
        self.inner.read_at(offset, len)
    }

    fn write_at(&mut self, offset: u64, data: &[u8]) -> StorageResult<usize> {
        match self.fault {
            Fault::ShortWrite(n) => {
                let n = n.min(data.len());
                self.inner.write_at(offset, &data[..n])
            }
            Fault::FailWrites => Err(StorageError::Io(io::Error::other("injected write failure"))),
            Fault::None | Fault::FailReads | Fault::FailOpen => self.inner.write_at(offset, data),
        }
    }

    fn flush(&mut self) -> StorageResult<()> {
        self.inner.flush()
    }

    fn size(&self) -> StorageResult<u64> {
        self.inner.size()
    }

    fn sync(&mut self) -> StorageResult<()> {
        self.inner.sync()
    }
}
