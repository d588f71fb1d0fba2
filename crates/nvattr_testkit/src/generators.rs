//! Property-based test generators using proptest.

use nvattr_core::{AttrId, HostByteOrder, VALUE_CAPACITY};
use proptest::prelude::*;

/// Strategy for any attribute id.
pub fn attr_id_strategy() -> impl Strategy<Value = AttrId> {
    any::<u8>().prop_map(AttrId::new)
}

/// Strategy for values that fit a slot, including empty and full ones.
pub fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..=VALUE_CAPACITY),
        prop::collection::vec(any::<u8>(), VALUE_CAPACITY..=VALUE_CAPACITY),
        Just(Vec::new()),
    ]
}

/// Strategy for values that are too long for a slot.
pub fn oversized_value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), VALUE_CAPACITY + 1..VALUE_CAPACITY * 2)
}

/// Strategy for a host byte order.
pub fn host_order_strategy() -> impl Strategy<Value = HostByteOrder> {
    prop_oneof![Just(HostByteOrder::Little), Just(HostByteOrder::Big)]
}

/// Strategy for a sequence of sets, with ids drawn from a small range so
/// updates of the same id are common.
pub fn set_sequence_strategy(max_len: usize) -> impl Strategy<Value = Vec<(AttrId, Vec<u8>)>> {
    prop::collection::vec(
        (
            (0u8..8).prop_map(AttrId::new),
            prop::collection::vec(any::<u8>(), 0..32),
        ),
        1..=max_len,
    )
}
