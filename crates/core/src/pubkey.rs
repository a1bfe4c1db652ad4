//! 32-byte account and program addresses.

use crate::error::CoreError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use svmcodec_base58::{decode_32, encode_32_into, MAX_ENCODED_LEN_32};

/// Length of a public key in bytes.
pub const PUBKEY_BYTES: usize = 32;

/// A 32-byte public key, rendered as base58.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Pubkey(pub [u8; PUBKEY_BYTES]);

impl Pubkey {
    /// The all-zero key.
    pub const ZERO: Self = Self([0u8; PUBKEY_BYTES]);

    /// Create a key from raw bytes.
    pub const fn new_from_array(bytes: [u8; PUBKEY_BYTES]) -> Self {
        Self(bytes)
    }

    /// Create a key from a slice, which must be exactly 32 bytes.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, CoreError> {
        let arr: [u8; PUBKEY_BYTES] =
            bytes.try_into().map_err(|_| CoreError::InvalidLength {
                expected: PUBKEY_BYTES,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }

    /// Get the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; PUBKEY_BYTES] {
        &self.0
    }

    /// Copy out the underlying bytes.
    pub fn to_bytes(self) -> [u8; PUBKEY_BYTES] {
        self.0
    }

    /// Convert to a hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from a hex string (with or without 0x prefix).
    pub fn from_hex(s: &str) -> Result<Self, CoreError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        Self::try_from_slice(&hex::decode(s)?)
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = [0u8; MAX_ENCODED_LEN_32];
        let len = encode_32_into(&self.0, &mut out);
        // The alphabet is pure ASCII.
        let text = std::str::from_utf8(&out[..len]).map_err(|_| fmt::Error)?;
        f.write_str(text)
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pubkey({})", self)
    }
}

impl FromStr for Pubkey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(decode_32(s)?))
    }
}

impl From<[u8; PUBKEY_BYTES]> for Pubkey {
    fn from(bytes: [u8; PUBKEY_BYTES]) -> Self {
        Self(bytes)
    }
}

impl From<Pubkey> for [u8; PUBKEY_BYTES] {
    fn from(key: Pubkey) -> Self {
        key.0
    }
}

impl AsRef<[u8]> for Pubkey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Pubkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            self.0.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for Pubkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        } else {
            Ok(Self(<[u8; PUBKEY_BYTES]>::deserialize(deserializer)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_zero() {
        assert_eq!(Pubkey::ZERO.to_string(), "1".repeat(32));
    }

    #[test]
    fn test_display_parse_roundtrip() {
        let key = Pubkey([7u8; 32]);
        let parsed: Pubkey = key.to_string().parse().unwrap();
        assert_eq!(key, parsed);
    }

    #[test]
    fn test_parse_invalid() {
        let err = "not-a-key".parse::<Pubkey>().unwrap_err();
        assert!(matches!(err, CoreError::Base58(_)));
    }

    #[test]
    fn test_hex_roundtrip() {
        let key = Pubkey([0xAB; 32]);
        assert_eq!(Pubkey::from_hex(&key.to_hex()).unwrap(), key);
        assert_eq!(Pubkey::from_hex(&format!("0x{}", key.to_hex())).unwrap(), key);
    }

    #[test]
    fn test_from_hex_wrong_length() {
        let err = Pubkey::from_hex("abcd").unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidLength {
                expected: 32,
                actual: 2
            }
        );
    }

    #[test]
    fn test_debug() {
        let key = Pubkey([0xFF; 32]);
        assert_eq!(
            format!("{:?}", key),
            "Pubkey(JEKNVnkbo3jma5nREBBJCDoXFVeKkD56V3xKrvRmWxFG)"
        );
    }

    #[test]
    fn test_serde_json_as_base58() {
        let key = Pubkey([0xFF; 32]);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"JEKNVnkbo3jma5nREBBJCDoXFVeKkD56V3xKrvRmWxFG\"");
        let back: Pubkey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
