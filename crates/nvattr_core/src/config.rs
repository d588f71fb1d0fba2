//! Attribute store configuration.

use crate::types::HostByteOrder;

/// Configuration for an attribute store.
///
/// The medium location is not part of the configuration; it is passed to
/// [`crate::AttributeStore::open_with_config`] or supplied as a
/// [`nvattr_storage::Medium`].
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Whether missing parent directories of a file medium are created on
    /// the first write.
    pub create_dirs: bool,

    /// Whether every write is followed by `sync_all` (safer but slower).
    /// The handle is always flushed.
    pub sync_on_write: bool,

    /// Whether public operations of one store are serialized with a
    /// process-local mutex.
    pub serialize_operations: bool,

    /// Byte order used to interpret 4-byte scalar values.
    pub host_order: HostByteOrder,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            create_dirs: true,
            sync_on_write: true,
            serialize_operations: true,
            host_order: HostByteOrder::native(),
        }
    }
}

impl StoreConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to create missing parent directories.
    #[must_use]
    pub const fn create_dirs(mut self, value: bool) -> Self {
        self.create_dirs = value;
        self
    }

    /// Sets whether to sync after every write.
    #[must_use]
    pub const fn sync_on_write(mut self, value: bool) -> Self {
        self.sync_on_write = value;
        self
    }

    /// Sets whether to serialize public operations.
    #[must_use]
    pub const fn serialize_operations(mut self, value: bool) -> Self {
        self.serialize_operations = value;
        self
    }

    /// Sets the host byte order for scalar values.
    #[must_use]
    pub const fn host_order(mut self, order: HostByteOrder) -> Self {
        self.host_order = order;
        self
    }
}
