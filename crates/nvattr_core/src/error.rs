//! Error types for NvAttr core.

use crate::types::AttrId;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Coarse classification of a [`CoreError`].
///
/// Callers that only need to decide between "never set", "reset it",
/// "fix the call", and "retry or abort" match on this instead of the
/// individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The attribute was never stored, or the medium does not exist.
    NotFound,
    /// A checksum or structural invariant of the medium failed.
    Corrupted,
    /// The caller passed an argument the slot layout cannot hold.
    InvalidArgument,
    /// The backing medium failed to open, read, or write.
    IoFailure,
}

/// Errors that can occur in attribute store operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No slot holds the requested attribute.
    #[error("attribute not found: {id}")]
    NotFound {
        /// The attribute searched for.
        id: AttrId,
    },

    /// A slot's stored checksum does not match its value bytes.
    #[error("checksum mismatch for {id}: stored {expected:02x}, computed {actual:02x}")]
    ChecksumMismatch {
        /// The attribute whose slot is corrupted.
        id: AttrId,
        /// Checksum stored in the slot.
        expected: u8,
        /// Checksum recomputed from the stored value bytes.
        actual: u8,
    },

    /// The medium size is not a whole number of slots.
    #[error("medium truncated: {size} bytes is not a multiple of the slot size")]
    TruncatedMedium {
        /// Medium size in bytes.
        size: u64,
    },

    /// A slot block did not have the slot size.
    #[error("malformed slot: {message}")]
    MalformedSlot {
        /// Description of the problem.
        message: String,
    },

    /// An argument cannot be represented in a slot.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the problem.
        message: String,
    },

    /// The backend accepted fewer bytes than a full slot.
    #[error("short write at offset {offset}: wrote {written} of {expected} bytes")]
    ShortWrite {
        /// Offset of the slot being written.
        offset: u64,
        /// Bytes that should have been written.
        expected: usize,
        /// Bytes the backend reported as written.
        written: usize,
    },

    /// Storage backend error.
    #[error("storage error: {0}")]
    Storage(#[from] nvattr_storage::StorageError),
}

impl CoreError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a malformed slot error.
    pub fn malformed_slot(message: impl Into<String>) -> Self {
        Self::MalformedSlot {
            message: message.into(),
        }
    }

    /// Returns the coarse classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::ChecksumMismatch { .. }
            | Self::TruncatedMedium { .. }
            | Self::MalformedSlot { .. } => ErrorKind::Corrupted,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::ShortWrite { .. } | Self::Storage(_) => ErrorKind::IoFailure,
        }
    }

    /// Returns whether this error means the medium holds bad data.
    #[must_use]
    pub fn is_corruption(&self) -> bool {
        self.kind() == ErrorKind::Corrupted
    }
}
