//! Errors raised while building or re-reading a VM input block.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[error("number of accounts changed: expected {expected}, found {found}")]
    AccountSetChanged { expected: usize, found: u64 },

    #[error("account order changed at index {index}: expected marker 0x{expected:02X}, found 0x{found:02X}")]
    AccountOrderChanged { index: usize, expected: u8, found: u8 },

    #[error("account {index} attempted to shrink from {old_len} to {new_len} bytes")]
    ShrinkNotAllowed {
        index: usize,
        old_len: u64,
        new_len: u64,
    },

    #[error("account {index} attempted to grow from {old_len} to {new_len} bytes")]
    GrowthExceeded {
        index: usize,
        old_len: u64,
        new_len: u64,
    },

    #[error("input truncated: needed {needed} bytes at offset {offset}, {remaining} remaining")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("account {index} has no recorded block layout; serialize the params before updating")]
    NotSerialized { index: usize },

    #[error("account {index} is a duplicate of {duplicate_of}, which is not an earlier position")]
    InvalidDuplicateIndex { index: usize, duplicate_of: u8 },
}

pub type Result<T> = std::result::Result<T, ParamsError>;
