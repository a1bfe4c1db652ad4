//! Accounts and instruction data passed to a program invocation.

use serde::{Deserialize, Serialize};
use svmcodec_core::Pubkey;

/// Extra bytes each primary account may grow by during one call.
pub const REALLOC_SPACE: usize = 1024 * 10;

/// Alignment of the field following an account's realloc region.
pub const REALLOC_ALIGN: usize = 8;

/// Marker byte written in place of a duplicate index for primary accounts.
pub const NON_DUP_MARKER: u8 = 0xFF;

/// Fixed bytes of a primary record before its data:
/// marker, three flags, 4 reserved, key, owner, lamports, data length.
pub const PRIMARY_HEADER_LEN: usize = 1 + 3 + 4 + 32 + 32 + 8 + 8;

/// A duplicate record is its index followed by 7 reserved bytes.
pub const DUPLICATE_RECORD_LEN: usize = 8;

/// Full state of a non-duplicate account as seen by the VM.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountInfo {
    pub key: Pubkey,
    pub owner: Pubkey,
    #[serde(default)]
    pub is_signer: bool,
    #[serde(default)]
    pub is_writable: bool,
    #[serde(default)]
    pub is_executable: bool,
    pub lamports: u64,
    #[serde(default)]
    pub data: Vec<u8>,
    #[serde(default)]
    pub rent_epoch: u64,
    #[serde(skip)]
    pub(crate) padding: Option<usize>,
}

impl AccountInfo {
    /// A read-only, non-signing account.
    pub fn new(key: Pubkey, owner: Pubkey, lamports: u64, data: Vec<u8>) -> Self {
        Self {
            key,
            owner,
            lamports,
            data,
            ..Default::default()
        }
    }

    pub fn signer(mut self) -> Self {
        self.is_signer = true;
        self
    }

    pub fn writable(mut self) -> Self {
        self.is_writable = true;
        self
    }

    pub fn executable(mut self) -> Self {
        self.is_executable = true;
        self
    }

    pub fn with_rent_epoch(mut self, rent_epoch: u64) -> Self {
        self.rent_epoch = rent_epoch;
        self
    }

    /// Bytes reserved after `data` in the last block built by
    /// [`Params::serialize`](crate::Params::serialize): the realloc budget
    /// plus alignment.
    ///
    /// `None` until the account is serialized, and again once
    /// [`Params::update`](crate::Params::update) has consumed that block.
    pub fn padding(&self) -> Option<usize> {
        self.padding
    }
}

/// One account entry of an invocation.
///
/// Whether an entry is a duplicate, and which position it refers to, is
/// fixed when the block is built and must survive the VM round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountParam {
    Primary(AccountInfo),
    /// Alias of the account at an earlier position.
    Duplicate { index: u8 },
}

impl AccountParam {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, AccountParam::Duplicate { .. })
    }

    /// The byte that opens this entry's record.
    pub fn marker(&self) -> u8 {
        match self {
            AccountParam::Primary(_) => NON_DUP_MARKER,
            AccountParam::Duplicate { index } => *index,
        }
    }

    pub fn as_primary(&self) -> Option<&AccountInfo> {
        match self {
            AccountParam::Primary(info) => Some(info),
            AccountParam::Duplicate { .. } => None,
        }
    }
}

impl From<AccountInfo> for AccountParam {
    fn from(info: AccountInfo) -> Self {
        AccountParam::Primary(info)
    }
}

/// Input segment of a program invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Params {
    pub accounts: Vec<AccountParam>,
    /// Per-instruction data.
    #[serde(default)]
    pub instruction_data: Vec<u8>,
    pub program_id: Pubkey,
}

impl Params {
    pub fn new(accounts: Vec<AccountParam>, instruction_data: Vec<u8>, program_id: Pubkey) -> Self {
        Self {
            accounts,
            instruction_data,
            program_id,
        }
    }

    /// Follow duplicates to the primary entry they alias.
    pub fn resolve(&self, index: usize) -> Option<&AccountInfo> {
        match self.accounts.get(index)? {
            AccountParam::Primary(info) => Some(info),
            AccountParam::Duplicate { index: target } if (*target as usize) < index => {
                self.resolve(*target as usize)
            }
            AccountParam::Duplicate { .. } => None,
        }
    }
}

/// Bytes of padding after an account's data ending at `offset`.
pub fn realloc_padding(offset: usize) -> usize {
    let misalignment = offset % REALLOC_ALIGN;
    let align = if misalignment == 0 {
        0
    } else {
        REALLOC_ALIGN - misalignment
    };
    REALLOC_SPACE + align
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_realloc_padding() {
        assert_eq!(realloc_padding(0), REALLOC_SPACE);
        assert_eq!(realloc_padding(8), REALLOC_SPACE);
        assert_eq!(realloc_padding(9), REALLOC_SPACE + 7);
        assert_eq!(realloc_padding(15), REALLOC_SPACE + 1);
    }

    #[test]
    fn test_header_is_aligned() {
        assert_eq!(PRIMARY_HEADER_LEN % REALLOC_ALIGN, 0);
        assert_eq!(DUPLICATE_RECORD_LEN % REALLOC_ALIGN, 0);
    }

    #[test]
    fn test_marker() {
        let primary = AccountParam::from(AccountInfo::default());
        assert_eq!(primary.marker(), NON_DUP_MARKER);
        assert!(!primary.is_duplicate());

        let dup = AccountParam::Duplicate { index: 3 };
        assert_eq!(dup.marker(), 3);
        assert!(dup.is_duplicate());
        assert!(dup.as_primary().is_none());
    }

    #[test]
    fn test_resolve_duplicate() {
        let a = AccountInfo::new(Pubkey([1; 32]), Pubkey::ZERO, 5, vec![]);
        let params = Params::new(
            vec![a.clone().into(), AccountParam::Duplicate { index: 0 }],
            vec![],
            Pubkey::ZERO,
        );
        assert_eq!(params.resolve(1), Some(&a));
        assert_eq!(params.resolve(2), None);
    }

    #[test]
    fn test_builder_flags() {
        let info = AccountInfo::new(Pubkey::ZERO, Pubkey::ZERO, 0, vec![])
            .signer()
            .writable()
            .with_rent_epoch(9);
        assert!(info.is_signer);
        assert!(info.is_writable);
        assert!(!info.is_executable);
        assert_eq!(info.rent_epoch, 9);
    }

    #[test]
    fn test_json_shape() {
        let params = Params::new(
            vec![
                AccountInfo::new(Pubkey::ZERO, Pubkey::ZERO, 1, vec![1, 2]).into(),
                AccountParam::Duplicate { index: 0 },
            ],
            vec![7],
            Pubkey::ZERO,
        );
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["accounts"][1]["duplicate"]["index"], 0);
        assert_eq!(json["accounts"][0]["primary"]["lamports"], 1);
        assert_eq!(json["program_id"], "1".repeat(32));

        let back: Params = serde_json::from_value(json).unwrap();
        assert_eq!(back, params);
    }
}
