//! Base58 codec errors.

use crate::Width;
use thiserror::Error;

/// Errors that can occur while encoding or decoding base58.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base58Error {
    #[error("invalid length {len} for a {width} value (expected {} to {} characters)", .width.min_encoded_len(), .width.max_encoded_len())]
    InvalidLength { len: usize, width: Width },

    #[error("invalid base58 character {ch:?} at offset {index}")]
    InvalidCharacter { ch: char, index: usize },

    #[error("decoded value does not fit in a {0} value")]
    NumericOverflow(Width),

    #[error("non-canonical encoding: leading '1' count does not match leading zero bytes")]
    NonCanonical,

    #[error("unsupported width: {0} bytes (expected 32 or 64)")]
    UnsupportedWidth(usize),
}

pub type Result<T> = std::result::Result<T, Base58Error>;
