//! # NvAttr Core
//!
//! Persistent attribute store engine for NvAttr.
//!
//! This crate provides:
//! - The fixed-size slot codec ([`AttributeRecord`])
//! - The slot checksum ([`compute_checksum`])
//! - The linear slot scanner ([`SlotScanner`])
//! - The [`AttributeStore`] facade with get/set and inspection
//!
//! ## Medium Format
//!
//! A medium is a flat sequence of 258-byte slots with no header or index:
//!
//! ```text
//! | id (1) | length (1) | value (255) | checksum (1) |
//! ```
//!
//! ## Invariants
//!
//! - At most one slot per attribute id; updates overwrite in place
//! - The checksum covers exactly the first `length` value bytes
//! - A slot failing its checksum is never returned as data
//! - The medium size is always a multiple of the slot size

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod checksum;
mod config;
mod error;
mod record;
mod report;
mod scanner;
mod store;
mod types;

pub use checksum::{compute_checksum, verify_checksum};
pub use config::StoreConfig;
pub use error::{CoreError, CoreResult, ErrorKind};
pub use record::{AttributeRecord, SCALAR_LEN, SLOT_SIZE, VALUE_CAPACITY};
pub use report::{StoredSlot, VerifyReport};
pub use scanner::SlotScanner;
pub use store::{AttributeStore, SlotWrite};
pub use types::{AttrId, Attribute, HostByteOrder};

/// Crate version, for tooling output.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
