//! Precise medium corruption.
//!
//! Offsets are computed from the slot layout so a test can damage exactly
//! the field it means to.

use nvattr_core::SLOT_SIZE;
use nvattr_storage::InMemoryMedium;
use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Offset of the value field inside a slot.
pub const VALUE_FIELD_OFFSET: usize = 2;

/// Offset of the checksum byte inside a slot.
pub const CHECKSUM_FIELD_OFFSET: usize = SLOT_SIZE - 1;

/// Returns the absolute offset of value byte `byte` in slot `slot`.
pub fn value_byte_offset(slot: usize, byte: usize) -> usize {
    slot * SLOT_SIZE + VALUE_FIELD_OFFSET + byte
}

/// Inverts every bit of value byte `byte` in slot `slot`.
///
/// # Panics
///
/// Panics if the medium does not exist or is too short.
pub fn flip_value_byte(medium: &InMemoryMedium, slot: usize, byte: usize) {
    let mut data = medium.snapshot().expect("medium should exist");
    data[value_byte_offset(slot, byte)] ^= 0xFF;
    medium.replace(data);
}

/// Overwrites the checksum byte of slot `slot`.
///
/// # Panics
///
/// Panics if the medium does not exist or is too short.
pub fn set_checksum_byte(medium: &InMemoryMedium, slot: usize, checksum: u8) {
    let mut data = medium.snapshot().expect("medium should exist");
    data[slot * SLOT_SIZE + CHECKSUM_FIELD_OFFSET] = checksum;
    medium.replace(data);
}

/// Drops the last `count` bytes of the medium, leaving a torn slot.
///
/// # Panics
///
/// Panics if the medium does not exist.
pub fn truncate_tail(medium: &InMemoryMedium, count: usize) {
    let mut data = medium.snapshot().expect("medium should exist");
    let len = data.len().saturating_sub(count);
    data.truncate(len);
    medium.replace(data);
}

/// Inverts every bit of the byte at `offset` in a medium file.
///
/// # Panics
///
/// Panics if the file cannot be opened or is too short.
pub fn flip_file_byte(path: &Path, offset: u64) {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .expect("medium file should open");

    let mut byte = [0u8; 1];
    file.seek(SeekFrom::Start(offset)).expect("seek failed");
    file.read_exact(&mut byte).expect("read failed");
    byte[0] ^= 0xFF;
    file.seek(SeekFrom::Start(offset)).expect("seek failed");
    file.write_all(&byte).expect("write failed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_offsets_follow_slot_layout() {
        assert_eq!(value_byte_offset(0, 0), 2);
        assert_eq!(value_byte_offset(1, 3), SLOT_SIZE + 5);
    }

    #[test]
    fn truncate_tail_shortens_medium() {
        let medium = InMemoryMedium::with_data(vec![0; SLOT_SIZE]);
        truncate_tail(&medium, 8);
        assert_eq!(medium.snapshot().unwrap().len(), SLOT_SIZE - 8);
    }
}
