//! Slot integrity digest.
//!
//! An 8-bit XOR over the meaningful value bytes. It detects any single
//! flipped byte; it cannot locate or repair one.

use crate::error::{CoreError, CoreResult};
use crate::types::AttrId;

/// Computes the digest of `data`. Empty input digests to 0.
#[must_use]
pub fn compute_checksum(data: &[u8]) -> u8 {
    data.iter().fold(0, |acc, &b| acc ^ b)
}

/// Checks `data` against the checksum stored for attribute `id`.
///
/// # Errors
///
/// Returns [`CoreError::ChecksumMismatch`] if the digests differ.
pub fn verify_checksum(id: AttrId, data: &[u8], stored: u8) -> CoreResult<()> {
    let actual = compute_checksum(data);
    if actual != stored {
        return Err(CoreError::ChecksumMismatch {
            id,
            expected: stored,
            actual,
        });
    }
    Ok(())
}
