//! Dump command implementation.

use nvattr_core::{AttributeStore, StoredSlot};
use serde::Serialize;
use std::path::Path;

/// One slot as printed by `dump --format json`.
#[derive(Debug, Serialize)]
pub struct SlotEntry {
    /// Byte offset of the slot.
    pub offset: u64,
    /// Attribute id.
    pub id: u8,
    /// Stored value length.
    pub length: u8,
    /// Stored checksum.
    pub checksum: u8,
    /// Whether the checksum matches.
    pub intact: bool,
}

impl From<&StoredSlot> for SlotEntry {
    fn from(slot: &StoredSlot) -> Self {
        Self {
            offset: slot.offset,
            id: slot.id.as_u8(),
            length: slot.length,
            checksum: slot.checksum,
            intact: slot.intact,
        }
    }
}

/// Runs the dump command.
pub fn run(path: &Path, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("No medium found at {:?}", path).into());
    }

    let store = AttributeStore::open(path);
    let entries: Vec<SlotEntry> = store.records()?.iter().map(SlotEntry::from).collect();

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&entries)?),
        "text" => print_text_output(path, &entries),
        other => return Err(format!("unknown output format: {other}").into()),
    }

    Ok(())
}

fn print_text_output(path: &Path, entries: &[SlotEntry]) {
    println!("Medium: {}", path.display());
    println!("Slots:  {}", entries.len());
    println!();
    println!("{:>8}  {:>4}  {:>6}  {:>8}  status", "offset", "id", "length", "checksum");
    for entry in entries {
        println!(
            "{:>8}  {:>4}  {:>6}        {:02x}  {}",
            entry.offset,
            entry.id,
            entry.length,
            entry.checksum,
            if entry.intact { "ok" } else { "CORRUPTED" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nvattr_core::AttrId;
    use tempfile::tempdir;

    #[test]
    fn entries_serialize_in_medium_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("attributes.nvm");
        let store = AttributeStore::open(&path);
        store.set(AttrId::new(4), b"abc").unwrap();
        store.set(AttrId::new(1), &[9]).unwrap();

        let entries: Vec<SlotEntry> = store
            .records()
            .unwrap()
            .iter()
            .map(SlotEntry::from)
            .collect();
        let json = serde_json::to_value(&entries).unwrap();

        assert_eq!(json[0]["id"], 4);
        assert_eq!(json[0]["length"], 3);
        assert_eq!(json[1]["offset"], 258);
        assert_eq!(json[1]["intact"], true);
    }

    #[test]
    fn missing_medium_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(run(&dir.path().join("absent.nvm"), "text").is_err());
    }
}
