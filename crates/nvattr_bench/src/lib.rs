//! Benchmark utilities.

use nvattr_core::{AttrId, AttributeStore};

/// Generate deterministic value bytes of the specified size.
pub fn patterned_value(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Build an in-memory store holding `count` attributes with ids `0..count`.
pub fn populated_store(count: u8, value_size: usize) -> AttributeStore {
    let store = AttributeStore::in_memory();
    fill(&store, count, value_size);
    store
}

/// Write attributes `0..count` into `store`.
pub fn fill(store: &AttributeStore, count: u8, value_size: usize) {
    let value = patterned_value(value_size);
    for id in 0..count {
        if let Err(err) = store.set(AttrId::new(id), &value) {
            panic!("failed to populate attr:{id}: {err}");
        }
    }
}
