//! Fixed-width base58 codec for svmcodec.
//!
//! Public keys (32 bytes) and signatures (64 bytes) are converted to and from
//! base58 without general bignum arithmetic. The binary value is split into
//! 32-bit limbs and pushed through precomputed tables into an intermediate
//! base of 58^5, so that each arithmetic step produces five base58 digits.
//!
//! Only the two widths above are supported. Other sizes need a new pair of
//! tables generated offline.
//!
//! # Example
//!
//! ```rust
//! use svmcodec_base58::{decode_32, encode_32};
//!
//! let key = [0xFFu8; 32];
//! let text = encode_32(&key);
//! assert_eq!(text, "JEKNVnkbo3jma5nREBBJCDoXFVeKkD56V3xKrvRmWxFG");
//! assert_eq!(decode_32(&text).unwrap(), key);
//! ```

pub mod alphabet;
pub mod decode;
pub mod encode;
pub mod error;
mod tables;

use std::fmt;

pub use alphabet::ALPHABET;
pub use decode::{decode_32, decode_64};
pub use encode::{
    encode_32, encode_32_into, encode_64, encode_64_into, MAX_ENCODED_LEN_32,
    MAX_ENCODED_LEN_64,
};
pub use error::{Base58Error, Result};

/// The binary widths the codec has tables for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// 32 bytes, e.g. a public key.
    W32,
    /// 64 bytes, e.g. a signature.
    W64,
}

impl Width {
    /// Pick the width for a binary value of `len` bytes.
    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            32 => Ok(Width::W32),
            64 => Ok(Width::W64),
            other => Err(Base58Error::UnsupportedWidth(other)),
        }
    }

    /// Number of bytes in the binary form.
    pub const fn byte_len(self) -> usize {
        match self {
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }

    /// Shortest valid encoding (every byte zero).
    pub const fn min_encoded_len(self) -> usize {
        self.byte_len()
    }

    /// Longest valid encoding.
    pub const fn max_encoded_len(self) -> usize {
        match self {
            Width::W32 => MAX_ENCODED_LEN_32,
            Width::W64 => MAX_ENCODED_LEN_64,
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-byte", self.byte_len())
    }
}

/// Encode a 32 or 64 byte slice.
pub fn encode(bytes: &[u8]) -> Result<String> {
    match Width::from_len(bytes.len())? {
        Width::W32 => Ok(encode_32(array_ref(bytes)?)),
        Width::W64 => Ok(encode_64(array_ref(bytes)?)),
    }
}

/// Decode `text` as a value of the given width.
pub fn decode(text: &str, width: Width) -> Result<Vec<u8>> {
    match width {
        Width::W32 => decode_32(text).map(|b| b.to_vec()),
        Width::W64 => decode_64(text).map(|b| b.to_vec()),
    }
}

/// Decode `text` into `out`, whose length selects the width.
///
/// `out` is only written once decoding has fully succeeded.
pub fn decode_into(text: &str, out: &mut [u8]) -> Result<()> {
    match Width::from_len(out.len())? {
        Width::W32 => out.copy_from_slice(&decode_32(text)?),
        Width::W64 => out.copy_from_slice(&decode_64(text)?),
    }
    Ok(())
}

fn array_ref<const N: usize>(bytes: &[u8]) -> Result<&[u8; N]> {
    bytes
        .try_into()
        .map_err(|_| Base58Error::UnsupportedWidth(bytes.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_from_len() {
        assert_eq!(Width::from_len(32), Ok(Width::W32));
        assert_eq!(Width::from_len(64), Ok(Width::W64));
        assert_eq!(Width::from_len(33), Err(Base58Error::UnsupportedWidth(33)));
        assert_eq!(Width::from_len(0), Err(Base58Error::UnsupportedWidth(0)));
    }

    #[test]
    fn test_width_lengths() {
        assert_eq!(Width::W32.min_encoded_len(), 32);
        assert_eq!(Width::W32.max_encoded_len(), 44);
        assert_eq!(Width::W64.min_encoded_len(), 64);
        assert_eq!(Width::W64.max_encoded_len(), 88);
    }

    #[test]
    fn test_encode_dispatch() {
        assert_eq!(encode(&[0u8; 32]).unwrap(), "1".repeat(32));
        assert_eq!(encode(&[0u8; 64]).unwrap(), "1".repeat(64));
        assert_eq!(encode(&[0u8; 20]), Err(Base58Error::UnsupportedWidth(20)));
    }

    #[test]
    fn test_decode_into_unsupported_width() {
        let mut out = [0u8; 48];
        assert_eq!(
            decode_into(&"1".repeat(48), &mut out),
            Err(Base58Error::UnsupportedWidth(48))
        );
    }

    #[test]
    fn test_decode_into_leaves_output_on_failure() {
        let mut out = [0xAAu8; 32];
        assert!(decode_into(&"z".repeat(44), &mut out).is_err());
        assert_eq!(out, [0xAA; 32]);
    }

    #[test]
    fn test_decode_width_mismatch() {
        // A valid 64-byte encoding is too long for a 32-byte value.
        let text = encode_64(&[0xFF; 64]);
        assert!(matches!(
            decode(&text, Width::W32),
            Err(Base58Error::InvalidLength { len: 88, .. })
        ));
        assert_eq!(decode(&text, Width::W64).unwrap(), vec![0xFF; 64]);
    }

    #[test]
    fn test_error_display() {
        let err = Base58Error::InvalidLength {
            len: 10,
            width: Width::W32,
        };
        assert_eq!(
            err.to_string(),
            "invalid length 10 for a 32-byte value (expected 32 to 44 characters)"
        );
    }
}
