//! Text helpers for byte payloads embedded in JSON documents.

/// Decodes hexadecimal text with an optional `0x` prefix.
pub fn parse_hex(text: &str) -> Option<Vec<u8>> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    hex::decode(digits).ok()
}

/// Serde adapter storing opaque bytes as `0x`-prefixed lowercase hex.
pub mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", hex::encode(bytes)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_hex(&text).ok_or_else(|| serde::de::Error::custom("invalid hex payload"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_accepts_prefixes() {
        assert_eq!(parse_hex("0x0a0b"), Some(vec![0x0a, 0x0b]));
        assert_eq!(parse_hex("0X0a0b"), Some(vec![0x0a, 0x0b]));
        assert_eq!(parse_hex("0a0b"), Some(vec![0x0a, 0x0b]));
        assert_eq!(parse_hex("0x"), Some(Vec::new()));
    }

    #[test]
    fn parse_hex_rejects_garbage() {
        assert_eq!(parse_hex("0xzz"), None);
        assert_eq!(parse_hex("abc"), None);
    }
}
