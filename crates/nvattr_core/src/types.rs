//! Core type definitions for NvAttr.

use crate::error::{CoreError, CoreResult};
use crate::record::VALUE_CAPACITY;
use std::fmt;

/// Identifier of a stored attribute.
///
/// The id is the primary key of the store: at most one slot per id exists
/// on a well-formed medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttrId(pub u8);

impl AttrId {
    /// Creates a new attribute ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl From<u8> for AttrId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl fmt::Display for AttrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "attr:{}", self.0)
    }
}

/// Byte order of the host that produces and consumes 4-byte scalars.
///
/// Values of exactly four bytes are taken to be a `u32` in host order.
/// They are stored most-significant byte first so a medium written on one
/// architecture reads back correctly on another. Making the host order a
/// value instead of a compile-time fact lets tests write as one host and
/// read as another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostByteOrder {
    /// Least-significant byte first.
    Little,
    /// Most-significant byte first.
    Big,
}

impl HostByteOrder {
    /// Returns the byte order of the compile target.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }

    /// Interprets host bytes as a scalar.
    #[must_use]
    pub const fn read_u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            Self::Little => u32::from_le_bytes(bytes),
            Self::Big => u32::from_be_bytes(bytes),
        }
    }

    /// Lays out a scalar in host order.
    #[must_use]
    pub const fn write_u32(self, value: u32) -> [u8; 4] {
        match self {
            Self::Little => value.to_le_bytes(),
            Self::Big => value.to_be_bytes(),
        }
    }

    /// Converts host-order scalar bytes to the on-medium order.
    #[must_use]
    pub const fn to_portable(self, host: [u8; 4]) -> [u8; 4] {
        self.read_u32(host).to_be_bytes()
    }

    /// Converts on-medium scalar bytes back to host order.
    #[must_use]
    pub const fn from_portable(self, stored: [u8; 4]) -> [u8; 4] {
        self.write_u32(u32::from_be_bytes(stored))
    }
}

impl Default for HostByteOrder {
    fn default() -> Self {
        Self::native()
    }
}

/// An attribute as returned to callers.
///
/// The value is in host representation: a 4-byte scalar has already been
/// converted from the on-medium order. It never exceeds the slot capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    id: AttrId,
    value: Vec<u8>,
}

impl Attribute {
    /// Creates an attribute from host-order value bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if `value` is longer than
    /// [`VALUE_CAPACITY`].
    pub fn new(id: AttrId, value: Vec<u8>) -> CoreResult<Self> {
        if value.len() > VALUE_CAPACITY {
            return Err(CoreError::invalid_argument(format!(
                "value for {id} is {} bytes, slot capacity is {VALUE_CAPACITY}",
                value.len()
            )));
        }
        Ok(Self { id, value })
    }

    /// Returns the attribute id.
    #[must_use]
    pub fn id(&self) -> AttrId {
        self.id
    }

    /// Returns the stored length of the value.
    #[must_use]
    pub fn length(&self) -> u8 {
        // Bounded by VALUE_CAPACITY in `new`.
        self.value.len() as u8
    }

    /// Returns the value bytes.
    #[must_use]
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Consumes the attribute, returning its value bytes.
    #[must_use]
    pub fn into_value(self) -> Vec<u8> {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_id_display() {
        assert_eq!(AttrId::new(42).to_string(), "attr:42");
        assert_eq!(AttrId::from(7).as_u8(), 7);
    }

    #[test]
    fn portable_order_is_big_endian() {
        let host = HostByteOrder::Little.write_u32(0x0102_0304);
        assert_eq!(host, [4, 3, 2, 1]);
        assert_eq!(HostByteOrder::Little.to_portable(host), [1, 2, 3, 4]);

        let host = HostByteOrder::Big.write_u32(0x0102_0304);
        assert_eq!(HostByteOrder::Big.to_portable(host), [1, 2, 3, 4]);
    }

    #[test]
    fn portable_conversion_is_symmetric() {
        for order in [HostByteOrder::Little, HostByteOrder::Big] {
            let host = order.write_u32(123_456_789);
            assert_eq!(order.from_portable(order.to_portable(host)), host);
        }
    }

    #[test]
    fn attribute_rejects_oversized_value() {
        let err = Attribute::new(AttrId::new(1), vec![0; VALUE_CAPACITY + 45]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument { .. }));

        let attr = Attribute::new(AttrId::new(1), vec![7; VALUE_CAPACITY]).unwrap();
        assert_eq!(attr.length(), 255);
        assert_eq!(attr.id(), AttrId::new(1));
        assert_eq!(attr.into_value().len(), VALUE_CAPACITY);
    }

    #[test]
    fn native_matches_target() {
        let host = HostByteOrder::native().write_u32(0xAABB_CCDD);
        assert_eq!(host, 0xAABB_CCDD_u32.to_ne_bytes());
    }
}
