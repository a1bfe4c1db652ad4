//! VM input block serialization for svmcodec.
//!
//! A program invocation receives its accounts, instruction data and program
//! id as one contiguous block. The program may modify account fields in
//! place, and the runtime reads the mutated block back afterwards.
//!
//! # Layout
//!
//! All integers are little-endian.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ account count (u64)                                      │
//! ├──────────────────────────────────────────────────────────┤
//! │ per account, either                                      │
//! │   duplicate: index (u8) | reserved [7]                   │
//! │ or                                                       │
//! │   primary:   0xFF | signer | writable | executable       │
//! │              reserved [4] | key [32] | owner [32]        │
//! │              lamports (u64) | data len (u64) | data      │
//! │              padding [REALLOC_SPACE + align to 8]        │
//! │              rent epoch (u64)                            │
//! ├──────────────────────────────────────────────────────────┤
//! │ instruction data len (u64) | instruction data            │
//! │ program id [32]                                          │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use svmcodec_core::Pubkey;
//! use svmcodec_sealevel::{AccountInfo, AccountParam, Params};
//!
//! let mut params = Params::new(
//!     vec![
//!         AccountInfo::new(Pubkey([1; 32]), Pubkey([2; 32]), 100, vec![0; 4])
//!             .writable()
//!             .into(),
//!         AccountParam::Duplicate { index: 0 },
//!     ],
//!     b"hello".to_vec(),
//!     Pubkey([3; 32]),
//! );
//!
//! let mut block = params.serialize().unwrap();
//! // ... the VM runs and may modify `block` ...
//! block[80..88].copy_from_slice(&90u64.to_le_bytes());
//! params.update(&block).unwrap();
//!
//! assert_eq!(params.resolve(1).unwrap().lamports, 90);
//! ```

pub mod error;
pub mod params;
pub mod reader;
mod serialize;
mod update;

pub use error::{ParamsError, Result};
pub use params::{
    realloc_padding, AccountInfo, AccountParam, Params, DUPLICATE_RECORD_LEN, NON_DUP_MARKER,
    PRIMARY_HEADER_LEN, REALLOC_ALIGN, REALLOC_SPACE,
};
pub use reader::ByteReader;
