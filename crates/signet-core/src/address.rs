//! # Address — Key Pair Identifier Newtype
//!
//! An [`Address`] identifies a cryptographic key pair without revealing
//! anything about where the key material lives. Equality is value
//! equality; the registry layer treats addresses as opaque lookup keys
//! and only ever observes them through backend queries.
//!
//! ## Serde
//!
//! Addresses serialize/deserialize as lowercase hex strings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AddressError;

/// Byte length of an address.
pub const ADDRESS_LENGTH: usize = 20;

/// An opaque 20-byte identifier for a cryptographic key pair.
///
/// Owned by whichever backend currently holds the corresponding key
/// material; the registry never stores independent address state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(pub [u8; ADDRESS_LENGTH]);

impl Address {
    /// Create an address from raw bytes.
    pub fn from_bytes(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Return the raw 20-byte address.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Render the address as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse an address from a 40-character hex string.
    pub fn from_hex(hex: &str) -> Result<Self, AddressError> {
        let hex = hex.trim().to_lowercase();
        if hex.len() != ADDRESS_LENGTH * 2 {
            return Err(AddressError::InvalidLength {
                expected: ADDRESS_LENGTH * 2,
                actual: hex.len(),
            });
        }
        let bytes = hex_to_bytes(&hex).map_err(AddressError::InvalidHex)?;
        let mut arr = [0u8; ADDRESS_LENGTH];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.0.iter().take(4).map(|b| format!("{b:02x}")).collect();
        write!(f, "Address({prefix}...)")
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, String> {
    // Length checks count bytes, so slicing below must not land inside
    // a multi-byte character.
    if !hex.is_ascii() {
        return Err("hex string must be ascii".to_string());
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| format!("invalid hex at position {i}: {e}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let addr = Address::from_bytes([0xab; ADDRESS_LENGTH]);
        let hex = addr.to_hex();
        assert_eq!(hex.len(), 40);
        let parsed = Address::from_hex(&hex).unwrap();
        assert_eq!(addr, parsed);
    }

    #[test]
    fn test_from_hex_accepts_uppercase_and_whitespace() {
        let addr = Address::from_bytes([0xcd; ADDRESS_LENGTH]);
        let hex = addr.to_hex().to_uppercase();
        let parsed = Address::from_hex(&format!("  {hex} ")).unwrap();
        assert_eq!(addr, parsed);
    }

    #[test]
    fn test_from_hex_wrong_length() {
        assert!(matches!(
            Address::from_hex("aabb"),
            Err(AddressError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_from_hex_invalid_chars() {
        let bad = "zz".repeat(ADDRESS_LENGTH);
        assert!(matches!(
            Address::from_hex(&bad),
            Err(AddressError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_from_hex_multibyte_utf8_is_error_not_panic() {
        // 13 three-byte chars + 1 ascii char = 40 bytes, passing the
        // length check while containing no slicable hex pairs.
        let bad = "€".repeat(13) + "a";
        assert_eq!(bad.len(), ADDRESS_LENGTH * 2);
        assert!(matches!(
            Address::from_hex(&bad),
            Err(AddressError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_serde_json_roundtrip() {
        let addr = Address::from_bytes([7; ADDRESS_LENGTH]);
        let json = serde_json::to_string(&addr).unwrap();
        assert!(json.starts_with('"'));
        assert_eq!(json.len(), 40 + 2); // 40 hex chars + 2 quotes

        let parsed: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, parsed);
    }

    #[test]
    fn test_debug_shows_prefix_only() {
        let addr = Address::from_bytes([0x12; ADDRESS_LENGTH]);
        let debug = format!("{addr:?}");
        assert_eq!(debug, "Address(12121212...)");
    }

    #[test]
    fn test_value_equality() {
        let a = Address::from_bytes([1; ADDRESS_LENGTH]);
        let b = Address::from_bytes([1; ADDRESS_LENGTH]);
        let c = Address::from_bytes([2; ADDRESS_LENGTH]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
