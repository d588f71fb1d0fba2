//! CLI command implementations.

pub mod dump;
pub mod get;
pub mod set;
pub mod verify;
