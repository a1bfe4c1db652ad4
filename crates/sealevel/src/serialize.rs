//! Building the VM input block.

use crate::error::{ParamsError, Result};
use crate::params::{
    realloc_padding, AccountParam, Params, DUPLICATE_RECORD_LEN, NON_DUP_MARKER,
    PRIMARY_HEADER_LEN,
};
use svmcodec_core::PUBKEY_BYTES;
use tracing::{debug, trace};

impl Params {
    /// Exact size of the block [`serialize`](Self::serialize) will produce.
    pub fn serialized_len(&self) -> usize {
        let mut size = 8;
        for account in &self.accounts {
            size += match account {
                AccountParam::Duplicate { .. } => DUPLICATE_RECORD_LEN,
                AccountParam::Primary(info) => {
                    let data_end = size + PRIMARY_HEADER_LEN + info.data.len();
                    PRIMARY_HEADER_LEN + info.data.len() + realloc_padding(data_end) + 8
                }
            };
        }
        size + 8 + self.instruction_data.len() + PUBKEY_BYTES
    }

    /// Check that every duplicate refers to an earlier position.
    pub fn validate(&self) -> Result<()> {
        for (index, account) in self.accounts.iter().enumerate() {
            if let AccountParam::Duplicate { index: target } = account {
                if *target == NON_DUP_MARKER || *target as usize >= index {
                    debug!(index, duplicate_of = *target, "invalid duplicate reference");
                    return Err(ParamsError::InvalidDuplicateIndex {
                        index,
                        duplicate_of: *target,
                    });
                }
            }
        }
        Ok(())
    }

    /// Lay out the accounts, instruction data and program id for the VM.
    ///
    /// Records each primary account's realloc padding, which
    /// [`update`](Self::update) needs to find the fields after the data.
    pub fn serialize(&mut self) -> Result<Vec<u8>> {
        self.validate()?;

        let mut buf = Vec::with_capacity(self.serialized_len());
        buf.extend_from_slice(&(self.accounts.len() as u64).to_le_bytes());

        for (index, account) in self.accounts.iter_mut().enumerate() {
            match account {
                AccountParam::Duplicate { index: target } => {
                    trace!(index, duplicate_of = *target, "serializing duplicate account");
                    buf.push(*target);
                    buf.extend_from_slice(&[0u8; 7]);
                }
                AccountParam::Primary(info) => {
                    buf.push(NON_DUP_MARKER);
                    buf.push(info.is_signer as u8);
                    buf.push(info.is_writable as u8);
                    buf.push(info.is_executable as u8);
                    buf.extend_from_slice(&[0u8; 4]);
                    buf.extend_from_slice(info.key.as_ref());
                    buf.extend_from_slice(info.owner.as_ref());
                    buf.extend_from_slice(&info.lamports.to_le_bytes());
                    buf.extend_from_slice(&(info.data.len() as u64).to_le_bytes());
                    buf.extend_from_slice(&info.data);

                    let padding = realloc_padding(buf.len());
                    buf.resize(buf.len() + padding, 0);
                    info.padding = Some(padding);

                    buf.extend_from_slice(&info.rent_epoch.to_le_bytes());
                    trace!(
                        index,
                        key = %info.key,
                        data_len = info.data.len(),
                        padding,
                        "serialized account"
                    );
                }
            }
        }

        buf.extend_from_slice(&(self.instruction_data.len() as u64).to_le_bytes());
        buf.extend_from_slice(&self.instruction_data);
        buf.extend_from_slice(self.program_id.as_ref());

        debug!(
            accounts = self.accounts.len(),
            len = buf.len(),
            "serialized invocation params"
        );
        Ok(buf)
    }
}
