//! Get command implementation.

use nvattr_core::{AttrId, Attribute, AttributeStore, HostByteOrder};
use serde::Serialize;
use std::path::Path;

/// One attribute as printed by `get --format json`.
#[derive(Debug, Serialize)]
pub struct GetResult {
    /// Attribute id.
    pub id: u8,
    /// Value length in bytes.
    pub length: u8,
    /// Value bytes as lowercase hex.
    pub hex: String,
    /// Value as a scalar, for 4-byte values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scalar: Option<u32>,
    /// Value as text, when it is valid UTF-8.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl GetResult {
    fn new(attr: &Attribute, order: HostByteOrder) -> Self {
        Self {
            id: attr.id().as_u8(),
            length: attr.length(),
            hex: hex::encode(attr.value()),
            scalar: <[u8; 4]>::try_from(attr.value())
                .ok()
                .map(|bytes| order.read_u32(bytes)),
            text: std::str::from_utf8(attr.value()).ok().map(str::to_owned),
        }
    }
}

/// Runs the get command.
pub fn run(path: &Path, id: u8, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = AttributeStore::open(path);
    let attr = store.get(AttrId::new(id))?;
    let result = GetResult::new(&attr, store.config().host_order);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        "hex" => println!("{}", result.hex),
        "u32" => {
            let scalar = result
                .scalar
                .ok_or_else(|| format!("{} holds {} bytes, not 4", attr.id(), attr.length()))?;
            println!("{scalar}");
        }
        "text" => println!("{}", String::from_utf8_lossy(attr.value())),
        other => return Err(format!("unknown output format: {other}").into()),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_for_scalar_value() {
        let attr =
            Attribute::new(AttrId::new(2), HostByteOrder::Little.write_u32(258).to_vec()).unwrap();
        let result = GetResult::new(&attr, HostByteOrder::Little);

        assert_eq!(result.length, 4);
        assert_eq!(result.hex, "02010000");
        assert_eq!(result.scalar, Some(258));
    }

    #[test]
    fn result_for_text_value() {
        let attr = Attribute::new(AttrId::new(1), b"hello".to_vec()).unwrap();
        let result = GetResult::new(&attr, HostByteOrder::Little);

        assert_eq!(result.text.as_deref(), Some("hello"));
        assert_eq!(result.scalar, None);
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("scalar"));
    }
}
