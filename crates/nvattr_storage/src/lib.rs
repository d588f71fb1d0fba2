//! # NvAttr Storage
//!
//! Backing media for the NvAttr attribute store.
//!
//! This crate provides the lowest-level storage abstraction for NvAttr.
//! Backends are **opaque, randomly addressable byte stores** - they do not
//! interpret the slots written to them.
//!
//! ## Design Principles
//!
//! - Backends are simple byte stores (read at, write at, flush, sync)
//! - No knowledge of the attribute slot layout or checksums
//! - A [`Medium`] hands out a fresh backend handle for every operation;
//!   callers never keep a handle open between operations
//!
//! ## Available Backends
//!
//! - [`InMemoryBackend`] - For testing and ephemeral storage
//! - [`FileBackend`] - For persistent storage using OS file APIs
//!
//! ## Available Media
//!
//! - [`InMemoryMedium`] - Shares one in-memory buffer across opens
//! - [`FileMedium`] - Opens the file at an injected path
//!
//! ## Example
//!
//! ```rust
//! use nvattr_storage::{StorageBackend, InMemoryBackend};
//!
//! let mut backend = InMemoryBackend::new();
//! backend.write_at(0, b"hello world").unwrap();
//! let data = backend.read_at(6, 5).unwrap();
//! assert_eq!(&data, b"world");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod file;
mod medium;
mod memory;

pub use backend::StorageBackend;
pub use error::{StorageError, StorageResult};
pub use file::FileBackend;
pub use medium::{FileMedium, InMemoryMedium, Medium};
pub use memory::InMemoryBackend;
