//! Reading a block the VM has mutated back into [`Params`].

use crate::error::{ParamsError, Result};
use crate::params::{AccountParam, Params, NON_DUP_MARKER, REALLOC_SPACE};
use crate::reader::ByteReader;
use svmcodec_core::Pubkey;
use tracing::{debug, trace};

impl Params {
    /// Apply the account changes a program wrote into `block`.
    ///
    /// `self` must be the params `block` was serialized from: account order,
    /// duplicate topology, original data lengths, recorded padding and the
    /// instruction data length are all taken from it, not from the block.
    /// Params with no recorded padding, i.e. never serialized or already
    /// updated from their last block, are rejected with
    /// [`ParamsError::NotSerialized`] before anything is changed.
    ///
    /// Changes are applied while reading. On error the accounts before the
    /// failing one have already been updated, and the failing account itself
    /// may have new flags, key, owner and lamports; clone beforehand if the
    /// previous state is needed. The recorded padding of every account read
    /// is consumed either way, so serialize again before the next update.
    ///
    /// Whether the program was allowed to make these changes is not checked.
    pub fn update(&mut self, block: &[u8]) -> Result<()> {
        let result = self.apply(&mut ByteReader::new(block));
        if let Err(err) = &result {
            debug!(%err, "failed to apply VM output");
        }
        result
    }

    fn apply(&mut self, reader: &mut ByteReader<'_>) -> Result<()> {
        for (index, account) in self.accounts.iter().enumerate() {
            if let AccountParam::Primary(info) = account {
                if info.padding.is_none() {
                    return Err(ParamsError::NotSerialized { index });
                }
            }
        }

        let count = reader.read_u64()?;
        if count != self.accounts.len() as u64 {
            return Err(ParamsError::AccountSetChanged {
                expected: self.accounts.len(),
                found: count,
            });
        }

        for (index, account) in self.accounts.iter_mut().enumerate() {
            let expected = account.marker();
            let found = reader.read_u8()?;
            if found != expected {
                return Err(ParamsError::AccountOrderChanged {
                    index,
                    expected,
                    found,
                });
            }

            let info = match account {
                AccountParam::Duplicate { .. } => {
                    reader.skip(7)?;
                    continue;
                }
                AccountParam::Primary(info) => info,
            };
            debug_assert_eq!(found, NON_DUP_MARKER);
            let padding = info
                .padding
                .take()
                .ok_or(ParamsError::NotSerialized { index })?;

            info.is_signer = reader.read_bool()?;
            info.is_writable = reader.read_bool()?;
            info.is_executable = reader.read_bool()?;
            reader.skip(4)?;
            info.key = Pubkey(reader.read_array()?);
            info.owner = Pubkey(reader.read_array()?);
            info.lamports = reader.read_u64()?;

            let old_len = info.data.len() as u64;
            let new_len = reader.read_u64()?;
            if new_len < old_len {
                return Err(ParamsError::ShrinkNotAllowed {
                    index,
                    old_len,
                    new_len,
                });
            }
            if new_len - old_len > REALLOC_SPACE as u64 {
                return Err(ParamsError::GrowthExceeded {
                    index,
                    old_len,
                    new_len,
                });
            }

            // Bounded by REALLOC_SPACE above, so the cast cannot truncate.
            let growth = (new_len - old_len) as usize;
            let new_data = reader.read_bytes(info.data.len() + growth)?;
            info.data.clear();
            info.data.extend_from_slice(new_data);

            // The block layout is fixed at serialize time: whatever the data
            // did not grow into is still padding, even with zero growth.
            reader.skip(padding.saturating_sub(growth))?;
            info.rent_epoch = reader.read_u64()?;

            trace!(
                index,
                key = %info.key,
                old_len,
                new_len,
                lamports = info.lamports,
                "updated account"
            );
        }

        reader.skip(8 + self.instruction_data.len())?;
        self.program_id = Pubkey(reader.read_array()?);
        Ok(())
    }
}
