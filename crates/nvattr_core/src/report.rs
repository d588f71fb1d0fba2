//! Medium inspection results.

use crate::record::AttributeRecord;
use crate::types::AttrId;
use std::collections::BTreeMap;

/// Summary of one slot as found on the medium.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSlot {
    /// Byte offset of the slot.
    pub offset: u64,
    /// Attribute id held by the slot.
    pub id: AttrId,
    /// Stored value length.
    pub length: u8,
    /// Stored checksum.
    pub checksum: u8,
    /// Whether the checksum matches the value bytes.
    pub intact: bool,
}

impl StoredSlot {
    pub(crate) fn from_record(offset: u64, record: &AttributeRecord) -> Self {
        Self {
            offset,
            id: record.id(),
            length: record.length(),
            checksum: record.checksum(),
            intact: record.is_intact(),
        }
    }
}

/// Result of a full integrity pass over a medium.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Number of slots on the medium.
    pub slot_count: u64,
    /// Number of slots whose checksum matches.
    pub intact_count: u64,
    /// Slots whose checksum does not match.
    pub corrupted: Vec<StoredSlot>,
    /// Ids held by more than one slot, with every offset holding them.
    pub duplicates: BTreeMap<AttrId, Vec<u64>>,
}

impl VerifyReport {
    /// Builds a report from the slots of a medium, in medium order.
    #[must_use]
    pub fn from_slots(slots: &[StoredSlot]) -> Self {
        let mut report = Self {
            slot_count: slots.len() as u64,
            ..Self::default()
        };

        let mut offsets: BTreeMap<AttrId, Vec<u64>> = BTreeMap::new();
        for slot in slots {
            if slot.intact {
                report.intact_count += 1;
            } else {
                report.corrupted.push(slot.clone());
            }
            offsets.entry(slot.id).or_default().push(slot.offset);
        }
        offsets.retain(|_, offsets| offsets.len() > 1);
        report.duplicates = offsets;

        report
    }

    /// Returns whether every slot is intact and every id unique.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.corrupted.is_empty() && self.duplicates.is_empty()
    }
}
