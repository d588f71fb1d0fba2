//! Attribute slot layout and codec.
//!
//! ```text
//! | id (1) | length (1) | value (255) | checksum (1) |
//! ```
//!
//! Every record occupies exactly [`SLOT_SIZE`] bytes, so slot `n` starts at
//! `n * SLOT_SIZE` and an existing record can be overwritten in place.

use crate::checksum::{compute_checksum, verify_checksum};
use crate::error::{CoreError, CoreResult};
use crate::types::{AttrId, HostByteOrder};

/// Capacity of the value field in bytes.
pub const VALUE_CAPACITY: usize = 255;

/// Size of one on-medium slot in bytes.
pub const SLOT_SIZE: usize = 1 + 1 + VALUE_CAPACITY + 1;

/// Length of values treated as a portable `u32` scalar.
pub const SCALAR_LEN: usize = 4;

const ID_OFFSET: usize = 0;
const LENGTH_OFFSET: usize = 1;
const VALUE_OFFSET: usize = 2;
const CHECKSUM_OFFSET: usize = VALUE_OFFSET + VALUE_CAPACITY;

/// One attribute record in its stored form.
///
/// The value bytes are kept as they appear on the medium: a 4-byte scalar
/// is already in portable order. Use [`AttributeRecord::host_value`] to get
/// the caller's representation back.
#[derive(Clone, PartialEq, Eq)]
pub struct AttributeRecord {
    id: AttrId,
    length: u8,
    value: [u8; VALUE_CAPACITY],
    checksum: u8,
}

impl AttributeRecord {
    /// Builds the stored form of `value` for attribute `id`.
    ///
    /// A 4-byte value is read as a `u32` in `host_order` and stored
    /// most-significant byte first. The checksum covers the stored bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if `value` is longer than
    /// [`VALUE_CAPACITY`].
    pub fn new(id: AttrId, value: &[u8], host_order: HostByteOrder) -> CoreResult<Self> {
        if value.len() > VALUE_CAPACITY {
            return Err(CoreError::invalid_argument(format!(
                "value for {id} is {} bytes, slot capacity is {VALUE_CAPACITY}",
                value.len()
            )));
        }

        let mut stored = [0u8; VALUE_CAPACITY];
        if let Ok(scalar) = <[u8; SCALAR_LEN]>::try_from(value) {
            stored[..SCALAR_LEN].copy_from_slice(&host_order.to_portable(scalar));
        } else {
            stored[..value.len()].copy_from_slice(value);
        }

        // Checked against VALUE_CAPACITY above.
        let length = value.len() as u8;
        let checksum = compute_checksum(&stored[..value.len()]);

        Ok(Self {
            id,
            length,
            value: stored,
            checksum,
        })
    }

    /// Decodes a slot block without checking its checksum.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MalformedSlot`] if `block` is not exactly
    /// [`SLOT_SIZE`] bytes.
    pub fn decode(block: &[u8]) -> CoreResult<Self> {
        if block.len() != SLOT_SIZE {
            return Err(CoreError::malformed_slot(format!(
                "expected {SLOT_SIZE} bytes, got {}",
                block.len()
            )));
        }

        let mut value = [0u8; VALUE_CAPACITY];
        value.copy_from_slice(&block[VALUE_OFFSET..CHECKSUM_OFFSET]);

        Ok(Self {
            id: AttrId::new(block[ID_OFFSET]),
            length: block[LENGTH_OFFSET],
            value,
            checksum: block[CHECKSUM_OFFSET],
        })
    }

    /// Encodes the record into one slot block.
    #[must_use]
    pub fn encode(&self) -> [u8; SLOT_SIZE] {
        let mut block = [0u8; SLOT_SIZE];
        block[ID_OFFSET] = self.id.as_u8();
        block[LENGTH_OFFSET] = self.length;
        block[VALUE_OFFSET..CHECKSUM_OFFSET].copy_from_slice(&self.value);
        block[CHECKSUM_OFFSET] = self.checksum;
        block
    }

    /// Returns the attribute id.
    #[must_use]
    pub fn id(&self) -> AttrId {
        self.id
    }

    /// Returns the number of meaningful value bytes.
    #[must_use]
    pub fn length(&self) -> u8 {
        self.length
    }

    /// Returns the stored checksum.
    #[must_use]
    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    /// Returns the meaningful value bytes as stored on the medium.
    #[must_use]
    pub fn stored_value(&self) -> &[u8] {
        &self.value[..usize::from(self.length)]
    }

    /// Recomputes the checksum over the stored value bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ChecksumMismatch`] if the record is corrupted.
    pub fn verify(&self) -> CoreResult<()> {
        verify_checksum(self.id, self.stored_value(), self.checksum)
    }

    /// Returns whether the stored checksum matches the value bytes.
    #[must_use]
    pub fn is_intact(&self) -> bool {
        self.verify().is_ok()
    }

    /// Returns the value in the representation of a host with `host_order`.
    ///
    /// This does not verify the checksum; callers check [`Self::verify`]
    /// first.
    #[must_use]
    pub fn host_value(&self, host_order: HostByteOrder) -> Vec<u8> {
        let stored = self.stored_value();
        match <[u8; SCALAR_LEN]>::try_from(stored) {
            Ok(scalar) => host_order.from_portable(scalar).to_vec(),
            Err(_) => stored.to_vec(),
        }
    }
}

impl std::fmt::Debug for AttributeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttributeRecord")
            .field("id", &self.id)
            .field("length", &self.length)
            .field("value", &self.stored_value())
            .field("checksum", &self.checksum)
            .finish()
    }
}
