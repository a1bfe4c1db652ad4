//! Binary to base58.

use crate::alphabet::symbol;
use crate::tables::{
    ENC_TABLE_32, ENC_TABLE_64, INTER_32, INTER_64, LIMBS_32, LIMBS_64, R1_DIV, RAW_32, RAW_64,
};

/// Longest base58 encoding of 32 bytes.
pub const MAX_ENCODED_LEN_32: usize = 44;
/// Longest base58 encoding of 64 bytes.
pub const MAX_ENCODED_LEN_64: usize = 88;

/// Encode 32 bytes into `out`, returning the number of characters written.
pub fn encode_32_into(input: &[u8; 32], out: &mut [u8; MAX_ENCODED_LEN_32]) -> usize {
    let in_leading_zeros = leading_zero_bytes(input);
    let limbs: [u32; LIMBS_32] = to_limbs(input);

    // X = sum_i intermediate[i] * 58^(5*(INTER_32-1-i)), entries not yet
    // reduced below 58^5. The worst case is limbs[7] = 2^32-1, which puts
    // intermediate[8] just over 2^63.
    let mut intermediate = [0u64; INTER_32];
    for (limb, row) in limbs.iter().zip(ENC_TABLE_32.iter()) {
        accumulate(&mut intermediate, *limb, row);
    }

    // intermediate[7] is at most about 2^62.6 here; the carry from
    // intermediate[8] is below 2^64 / 58^5 and does not move it much.
    carry_normalize(&mut intermediate);

    let mut raw = [0u8; RAW_32];
    expand_raw(&intermediate, &mut raw);

    write_symbols(&raw, in_leading_zeros, out)
}

/// Encode 64 bytes into `out`, returning the number of characters written.
pub fn encode_64_into(input: &[u8; 64], out: &mut [u8; MAX_ENCODED_LEN_64]) -> usize {
    let in_leading_zeros = leading_zero_bytes(input);
    let limbs: [u32; LIMBS_64] = to_limbs(input);

    let mut intermediate = [0u64; INTER_64];

    // Folding all 16 limbs at once can overflow intermediate[16]. After the
    // first 8 limbs it is at most 2^63.87; reducing it there keeps it below
    // 2^63.1 once the remaining limbs are in. intermediate[15] sits at
    // 2^63.05 before the mini-reduction and ends below 2^63.69.
    let (first, second) = ENC_TABLE_64.split_at(LIMBS_64 / 2);
    let (first_limbs, second_limbs) = limbs.split_at(LIMBS_64 / 2);
    for (limb, row) in first_limbs.iter().zip(first.iter()) {
        accumulate(&mut intermediate, *limb, row);
    }

    intermediate[INTER_64 - 3] += intermediate[INTER_64 - 2] / R1_DIV;
    intermediate[INTER_64 - 2] %= R1_DIV;

    for (limb, row) in second_limbs.iter().zip(second.iter()) {
        accumulate(&mut intermediate, *limb, row);
    }

    carry_normalize(&mut intermediate);

    let mut raw = [0u8; RAW_64];
    expand_raw(&intermediate, &mut raw);

    // RAW_64 is 90, two more than the output buffer. The skip below is
    // always at least 2 (see write_symbols), so the tail fits.
    write_symbols(&raw, in_leading_zeros, out)
}

/// Encode 32 bytes as a base58 string.
pub fn encode_32(input: &[u8; 32]) -> String {
    let mut out = [0u8; MAX_ENCODED_LEN_32];
    let len = encode_32_into(input, &mut out);
    ascii_string(&out[..len])
}

/// Encode 64 bytes as a base58 string.
pub fn encode_64(input: &[u8; 64]) -> String {
    let mut out = [0u8; MAX_ENCODED_LEN_64];
    let len = encode_64_into(input, &mut out);
    ascii_string(&out[..len])
}

pub(crate) fn leading_zero_bytes(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|&&b| b == 0).count()
}

fn to_limbs<const N: usize, const L: usize>(input: &[u8; N]) -> [u32; L] {
    let mut limbs = [0u32; L];
    for (limb, chunk) in limbs.iter_mut().zip(input.chunks_exact(4)) {
        *limb = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    limbs
}

/// `intermediate[k + 1] += limb * row[k]`. Entry 0 only ever receives carries.
#[inline]
fn accumulate(intermediate: &mut [u64], limb: u32, row: &[u32]) {
    for (acc, &weight) in intermediate[1..].iter_mut().zip(row.iter()) {
        *acc += limb as u64 * weight as u64;
    }
}

/// Reduce every entry below 58^5, carrying into the preceding entry.
fn carry_normalize(intermediate: &mut [u64]) {
    for i in (1..intermediate.len()).rev() {
        intermediate[i - 1] += intermediate[i] / R1_DIV;
        intermediate[i] %= R1_DIV;
    }
}

/// Split each intermediate digit into five base58 digits.
fn expand_raw(intermediate: &[u64], raw: &mut [u8]) {
    for (&value, digits) in intermediate.iter().zip(raw.chunks_exact_mut(5)) {
        // Every entry is below 58^5 < 2^32 after normalization.
        let v = value as u32;
        digits[4] = (v % 58) as u8;
        digits[3] = ((v / 58) % 58) as u8;
        digits[2] = ((v / 3_364) % 58) as u8;
        digits[1] = ((v / 195_112) % 58) as u8;
        digits[0] = (v / 11_316_496) as u8;
    }
}

/// Drop the raw leading zeros that do not correspond to leading zero bytes
/// and map the rest through the alphabet.
///
/// In base b, X has floor(log_b X)+1 digits, so
/// `raw_zeros - in_zeros >= RAW-N-1 + log_256(X) - log_58(X)`, which is
/// smallest at X = 256^N-1: 0.29 for N=32 (RAW=45) and 1.59 for N=64
/// (RAW=90). The skip is therefore never negative.
fn write_symbols(raw: &[u8], in_leading_zeros: usize, out: &mut [u8]) -> usize {
    let raw_leading_zeros = raw.iter().take_while(|&&d| d == 0).count();
    let skip = raw_leading_zeros - in_leading_zeros;
    let digits = &raw[skip..];
    for (c, &d) in out.iter_mut().zip(digits.iter()) {
        *c = symbol(d);
    }
    digits.len()
}

fn ascii_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
