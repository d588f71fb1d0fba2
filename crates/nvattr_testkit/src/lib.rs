//! # NvAttr Testkit
//!
//! Test utilities for NvAttr.
//!
//! This crate provides:
//! - Store fixtures over temporary files and in-memory media
//! - Property-based test generators using proptest
//! - Fault-injecting media for short-write and I/O failure tests
//! - Helpers that corrupt a medium in precise places
//!
//! ## Usage
//!
//! ```rust
//! use nvattr_testkit::prelude::*;
//! use nvattr_core::AttrId;
//!
//! let fixture = MemoryStore::new();
//! fixture.store.set(AttrId::new(1), b"value").unwrap();
//! flip_value_byte(&fixture.medium, 0, 0);
//! assert!(fixture.store.get(AttrId::new(1)).is_err());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod corrupt;
pub mod faults;
pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::corrupt::*;
    pub use crate::faults::*;
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}
