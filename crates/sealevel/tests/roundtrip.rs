use rand::{Rng, RngCore};
use svmcodec_core::Pubkey;
use svmcodec_sealevel::{
    AccountInfo, AccountParam, Params, ParamsError, DUPLICATE_RECORD_LEN, PRIMARY_HEADER_LEN,
    REALLOC_SPACE,
};

/// Offset of the record for account `index` in a freshly serialized block.
fn record_offset(params: &Params, index: usize) -> usize {
    let mut offset = 8;
    for account in &params.accounts[..index] {
        offset += match account {
            AccountParam::Duplicate { .. } => DUPLICATE_RECORD_LEN,
            AccountParam::Primary(info) => {
                PRIMARY_HEADER_LEN + info.data.len() + info.padding().unwrap() + 8
            }
        };
    }
    offset
}

/// Rewrite the data of primary account `index` inside `block`.
fn write_data(block: &mut [u8], params: &Params, index: usize, data: &[u8]) {
    let start = record_offset(params, index);
    let len_at = start + PRIMARY_HEADER_LEN - 8;
    block[len_at..len_at + 8].copy_from_slice(&(data.len() as u64).to_le_bytes());
    let data_at = start + PRIMARY_HEADER_LEN;
    block[data_at..data_at + data.len()].copy_from_slice(data);
}

fn random_account(rng: &mut impl RngCore) -> AccountInfo {
    let mut key = [0u8; 32];
    let mut owner = [0u8; 32];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut owner);
    let mut data = vec![0u8; rng.gen_range(0..64)];
    rng.fill_bytes(&mut data);

    let mut info = AccountInfo::new(Pubkey(key), Pubkey(owner), rng.gen(), data)
        .with_rent_epoch(rng.gen());
    info.is_signer = rng.gen();
    info.is_writable = rng.gen();
    info.is_executable = rng.gen();
    info
}

fn random_params(rng: &mut impl RngCore) -> Params {
    let count = rng.gen_range(1..8);
    let mut accounts: Vec<AccountParam> = Vec::with_capacity(count);
    accounts.push(random_account(rng).into());
    for position in 1..count {
        if rng.gen_bool(0.3) {
            accounts.push(AccountParam::Duplicate {
                index: rng.gen_range(0..position) as u8,
            });
        } else {
            accounts.push(random_account(rng).into());
        }
    }
    let mut instruction_data = vec![0u8; rng.gen_range(0..40)];
    rng.fill_bytes(&mut instruction_data);
    let mut program_id = [0u8; 32];
    rng.fill_bytes(&mut program_id);

    Params::new(accounts, instruction_data, Pubkey(program_id))
}

fn three_accounts() -> Params {
    Params::new(
        vec![
            AccountInfo::new(Pubkey([1; 32]), Pubkey([9; 32]), 10, vec![1, 2, 3])
                .signer()
                .writable()
                .into(),
            AccountInfo::new(Pubkey([2; 32]), Pubkey([9; 32]), 20, vec![4; 13])
                .writable()
                .with_rent_epoch(7)
                .into(),
            AccountParam::Duplicate { index: 0 },
        ],
        b"transfer".to_vec(),
        Pubkey([5; 32]),
    )
}

#[test]
fn test_random_unchanged_roundtrip() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let mut params = random_params(&mut rng);
        let before = params.clone();
        let block = params.serialize().unwrap();
        assert_eq!(block.len(), params.serialized_len());

        params.update(&block).unwrap();
        assert_eq!(params, before);
    }
}

#[test]
fn test_grow_by_full_budget() {
    let mut params = three_accounts();
    let mut block = params.serialize().unwrap();

    let grown: Vec<u8> = (0..3 + REALLOC_SPACE).map(|i| i as u8).collect();
    write_data(&mut block, &params, 0, &grown);

    params.update(&block).unwrap();
    assert_eq!(params.accounts[0].as_primary().unwrap().data, grown);

    // Accounts after the grown one are still found at their fixed offsets.
    let second = params.accounts[1].as_primary().unwrap();
    assert_eq!(second.data, vec![4; 13]);
    assert_eq!(second.rent_epoch, 7);
    assert_eq!(params.resolve(2).unwrap().data, grown);
    assert_eq!(params.program_id, Pubkey([5; 32]));
}

#[test]
fn test_grow_past_budget() {
    let mut params = three_accounts();
    let mut block = params.serialize().unwrap();

    let start = record_offset(&params, 1) + PRIMARY_HEADER_LEN - 8;
    let too_long = 13 + REALLOC_SPACE as u64 + 1;
    block[start..start + 8].copy_from_slice(&too_long.to_le_bytes());

    assert_eq!(
        params.update(&block).unwrap_err(),
        ParamsError::GrowthExceeded {
            index: 1,
            old_len: 13,
            new_len: too_long
        }
    );
}

#[test]
fn test_shrink_rejected() {
    for new_len in [0u64, 12] {
        let mut params = three_accounts();
        let mut block = params.serialize().unwrap();

        let start = record_offset(&params, 1) + PRIMARY_HEADER_LEN - 8;
        block[start..start + 8].copy_from_slice(&new_len.to_le_bytes());

        assert_eq!(
            params.update(&block).unwrap_err(),
            ParamsError::ShrinkNotAllowed {
                index: 1,
                old_len: 13,
                new_len
            }
        );
    }
}

#[test]
fn test_grow_then_read_back_second_time() {
    // A second invocation starts from the grown state with a fresh budget.
    let mut params = three_accounts();
    let mut block = params.serialize().unwrap();
    write_data(&mut block, &params, 1, &[8; 100]);
    params.update(&block).unwrap();

    let mut block = params.serialize().unwrap();
    write_data(&mut block, &params, 1, &vec![6; 100 + REALLOC_SPACE]);
    params.update(&block).unwrap();
    assert_eq!(params.accounts[1].as_primary().unwrap().data.len(), 100 + REALLOC_SPACE);
}

#[test]
fn test_reordered_accounts_rejected() {
    let mut original = three_accounts();
    let block = original.serialize().unwrap();

    // The block holds [primary, primary, duplicate]; expect the duplicate
    // first instead.
    let mut reordered = three_accounts();
    reordered.accounts.swap(1, 2);
    reordered.serialize().unwrap();

    assert_eq!(
        reordered.update(&block).unwrap_err(),
        ParamsError::AccountOrderChanged {
            index: 1,
            expected: 0,
            found: 0xFF
        }
    );
}

#[test]
fn test_changed_duplicate_index_rejected() {
    let mut params = three_accounts();
    let mut block = params.serialize().unwrap();

    let dup = record_offset(&params, 2);
    assert_eq!(block[dup], 0);
    block[dup] = 1;

    assert_eq!(
        params.update(&block).unwrap_err(),
        ParamsError::AccountOrderChanged {
            index: 2,
            expected: 0,
            found: 1
        }
    );
}

#[test]
fn test_duplicate_turned_primary_rejected() {
    let mut params = three_accounts();
    let mut block = params.serialize().unwrap();
    let dup = record_offset(&params, 2);
    block[dup] = 0xFF;

    assert!(matches!(
        params.update(&block),
        Err(ParamsError::AccountOrderChanged { index: 2, .. })
    ));
}

#[test]
fn test_extra_account_rejected() {
    let mut params = three_accounts();
    let mut block = params.serialize().unwrap();
    block[..8].copy_from_slice(&4u64.to_le_bytes());

    assert!(matches!(
        params.update(&block),
        Err(ParamsError::AccountSetChanged {
            expected: 3,
            found: 4
        })
    ));
}

#[test]
fn test_truncated_inside_padding() {
    let mut params = three_accounts();
    let block = params.serialize().unwrap();
    let cut = record_offset(&params, 0) + PRIMARY_HEADER_LEN + 3 + 100;

    assert!(matches!(
        params.update(&block[..cut]),
        Err(ParamsError::TruncatedInput { .. })
    ));
}

#[test]
fn test_instruction_data_length_not_reread() {
    let mut params = three_accounts();
    let mut block = params.serialize().unwrap();

    // The instruction data length is authoritative from the original params.
    let instr_len_at = block.len() - 32 - 8 - 8;
    block[instr_len_at..instr_len_at + 8].copy_from_slice(&1_000u64.to_le_bytes());
    let id_at = block.len() - 32;
    block[id_at..].copy_from_slice(&[0x42; 32]);

    params.update(&block).unwrap();
    assert_eq!(params.instruction_data, b"transfer".to_vec());
    assert_eq!(params.program_id, Pubkey([0x42; 32]));
}

#[test]
fn test_json_params_roundtrip() {
    let mut params = three_accounts();
    let json = serde_json::to_string_pretty(&params).unwrap();
    let mut parsed: Params = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.serialize().unwrap(), params.serialize().unwrap());
}

#[test]
fn test_json_reloaded_params_need_serialize() {
    let mut params = three_accounts();
    let block = params.serialize().unwrap();

    // The recorded layout does not travel through JSON.
    let json = serde_json::to_string(&params).unwrap();
    let mut reloaded: Params = serde_json::from_str(&json).unwrap();
    assert_eq!(
        reloaded.update(&block).unwrap_err(),
        ParamsError::NotSerialized { index: 0 }
    );

    reloaded.serialize().unwrap();
    reloaded.update(&block).unwrap();
    assert_eq!(reloaded.accounts[1].as_primary().unwrap().rent_epoch, 7);
    assert_eq!(reloaded.program_id, Pubkey([5; 32]));
}
