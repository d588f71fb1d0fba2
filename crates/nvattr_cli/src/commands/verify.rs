//! Verify command implementation.

use nvattr_core::{AttributeStore, VerifyReport};
use std::path::Path;

/// Runs the verify command.
pub fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("Verifying medium at {:?}", path);
    println!();

    if !path.exists() {
        println!("Medium not found (nothing has been stored yet)");
        return Ok(());
    }

    let report = AttributeStore::open(path).verify()?;
    print_report(&report);

    println!();
    if report.is_clean() {
        println!("✓ Medium verification passed");
        Ok(())
    } else {
        println!("✗ Medium verification failed");
        Err("Verification failed".into())
    }
}

fn print_report(report: &VerifyReport) {
    println!("  Slots checked: {}", report.slot_count);
    println!("  Intact slots:  {}", report.intact_count);
    println!("  Corrupt slots: {}", report.corrupted.len());

    for slot in &report.corrupted {
        println!("    - {} at offset {}", slot.id, slot.offset);
    }
    for (id, offsets) in &report.duplicates {
        println!("    - {} held by {} slots at {:?}", id, offsets.len(), offsets);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nvattr_core::AttrId;
    use tempfile::tempdir;

    #[test]
    fn clean_medium_passes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("attributes.nvm");
        AttributeStore::open(&path).set(AttrId::new(1), b"ok").unwrap();

        assert!(run(&path).is_ok());
    }

    #[test]
    fn missing_medium_passes() {
        let dir = tempdir().unwrap();
        assert!(run(&dir.path().join("absent.nvm")).is_ok());
    }

    #[test]
    fn corrupted_medium_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("attributes.nvm");
        AttributeStore::open(&path).set(AttrId::new(1), b"ok").unwrap();

        let mut bytes = std::fs::read(&path).unwrap();
        bytes[2] ^= 0xFF;
        std::fs::write(&path, bytes).unwrap();

        assert!(run(&path).is_err());
    }
}
