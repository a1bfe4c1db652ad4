//! Errors for parsing keys and signatures.

use svmcodec_base58::Base58Error;
use thiserror::Error;

/// Errors that can occur when parsing a [`Pubkey`](crate::Pubkey) or
/// [`Signature`](crate::Signature) from text or bytes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("invalid base58: {0}")]
    Base58(#[from] Base58Error),
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
