//! Core primitives for svmcodec.
//!
//! This crate provides the fixed-width values passed around an execution
//! node:
//! - Public keys (32 bytes)
//! - Signatures (64 bytes)
//!
//! Both render as base58 through `svmcodec-base58` and serialize as base58
//! strings in human-readable formats.

pub mod error;
pub mod pubkey;
pub mod signature;

// Re-export commonly used types at the crate root
pub use error::CoreError;
pub use pubkey::{Pubkey, PUBKEY_BYTES};
pub use signature::{Signature, SIGNATURE_BYTES};
