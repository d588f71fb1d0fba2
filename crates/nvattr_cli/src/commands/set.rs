//! Set command implementation.

use nvattr_core::{AttrId, AttributeStore, HostByteOrder, SlotWrite, StoreConfig};
use std::path::Path;
use tracing::info;

/// Converts the command-line value into the bytes to store.
fn parse_value(
    value: &str,
    encoding: &str,
    order: HostByteOrder,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    match encoding {
        "text" => Ok(value.as_bytes().to_vec()),
        "hex" => Ok(hex::decode(value)?),
        "u32" => {
            let scalar: u32 = value.parse()?;
            Ok(order.write_u32(scalar).to_vec())
        }
        other => Err(format!("unknown value encoding: {other}").into()),
    }
}

/// Runs the set command.
pub fn run(
    path: &Path,
    id: u8,
    value: &str,
    encoding: &str,
    sync: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::default().sync_on_write(sync);
    let bytes = parse_value(value, encoding, config.host_order)?;

    info!("Writing {} bytes to attribute {} in {:?}", bytes.len(), id, path);

    let store = AttributeStore::open_with_config(path, config);
    match store.set(AttrId::new(id), &bytes)? {
        SlotWrite::Overwritten { offset } => {
            println!("Overwrote attr:{id} in place at offset {offset}");
        }
        SlotWrite::Appended { offset } => {
            println!("Appended attr:{id} at offset {offset}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_text_and_hex() {
        let order = HostByteOrder::Little;
        assert_eq!(parse_value("abc", "text", order).unwrap(), b"abc");
        assert_eq!(parse_value("00ff10", "hex", order).unwrap(), vec![0x00, 0xff, 0x10]);
        assert!(parse_value("zz", "hex", order).is_err());
    }

    #[test]
    fn parse_u32_uses_host_order() {
        assert_eq!(
            parse_value("258", "u32", HostByteOrder::Little).unwrap(),
            vec![2, 1, 0, 0]
        );
        assert_eq!(
            parse_value("258", "u32", HostByteOrder::Big).unwrap(),
            vec![0, 0, 1, 2]
        );
        assert!(parse_value("-1", "u32", HostByteOrder::Big).is_err());
    }

    #[test]
    fn unknown_encoding_rejected() {
        assert!(parse_value("x", "base64", HostByteOrder::Little).is_err());
    }

    #[test]
    fn run_writes_to_medium() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("attributes.nvm");

        run(&path, 3, "0a0b0c0d", "hex", false).unwrap();

        let store = AttributeStore::open(&path);
        assert_eq!(
            store.get(AttrId::new(3)).unwrap().value(),
            vec![0x0a, 0x0b, 0x0c, 0x0d]
        );
    }
}
