//! Base58 to binary.

use crate::alphabet::digit;
use crate::encode::leading_zero_bytes;
use crate::error::{Base58Error, Result};
use crate::tables::{
    DEC_TABLE_32, DEC_TABLE_64, INTER_32, INTER_64, LIMBS_32, LIMBS_64, RAW_32, RAW_64,
};
use crate::Width;
use tracing::debug;

/// Decode a base58 string into exactly 32 bytes.
pub fn decode_32(text: &str) -> Result<[u8; 32]> {
    let mut raw = [0u8; RAW_32];
    load_raw(text, Width::W32, &mut raw)?;

    let mut intermediate = [0u64; INTER_32];
    group_raw(&raw, &mut intermediate);

    // Even with every intermediate at 58^5-1 the largest accumulator,
    // binary[7], stays below 2^63, which leaves plenty of headroom for the
    // carries.
    let mut binary = [0u64; LIMBS_32];
    for (j, acc) in binary.iter_mut().enumerate() {
        *acc = intermediate
            .iter()
            .zip(DEC_TABLE_32.iter())
            .map(|(&v, row)| v * row[j] as u64)
            .sum();
    }

    let mut out = [0u8; 32];
    pack(&mut binary, Width::W32, &mut out)?;
    check_canonical(text, &out)?;
    Ok(out)
}

/// Decode a base58 string into exactly 64 bytes.
pub fn decode_64(text: &str) -> Result<[u8; 64]> {
    let mut raw = [0u8; RAW_64];
    load_raw(text, Width::W64, &mut raw)?;

    let mut intermediate = [0u64; INTER_64];
    group_raw(&raw, &mut intermediate);

    // The largest accumulator is binary[13], which stays below 2^63.998 for
    // any input. Adding a 2^32 carry to it still fits.
    let mut binary = [0u64; LIMBS_64];
    for (j, acc) in binary.iter_mut().enumerate() {
        *acc = intermediate
            .iter()
            .zip(DEC_TABLE_64.iter())
            .map(|(&v, row)| v * row[j] as u64)
            .sum();
    }

    let mut out = [0u8; 64];
    pack(&mut binary, Width::W64, &mut out)?;
    check_canonical(text, &out)?;
    Ok(out)
}

/// Validate `text` and write its digits right-aligned into `raw`, leaving
/// the leading positions as zero digits.
fn load_raw(text: &str, width: Width, raw: &mut [u8]) -> Result<()> {
    let len = text.len();
    if len < width.min_encoded_len() || len > width.max_encoded_len() {
        debug!(len, ?width, "rejecting base58 input with bad length");
        return Err(Base58Error::InvalidLength { len, width });
    }

    let prepend = raw.len() - len;
    for (index, ch) in text.char_indices() {
        match digit(ch) {
            Some(d) => raw[prepend + index] = d,
            None => {
                debug!(index, ?ch, "rejecting base58 input with bad character");
                return Err(Base58Error::InvalidCharacter { ch, index });
            }
        }
    }
    Ok(())
}

/// X = sum_i intermediate[i] * 58^(5*(INTER-1-i))
fn group_raw(raw: &[u8], intermediate: &mut [u64]) {
    for (acc, d) in intermediate.iter_mut().zip(raw.chunks_exact(5)) {
        *acc = d[0] as u64 * 11_316_496
            + d[1] as u64 * 195_112
            + d[2] as u64 * 3_364
            + d[3] as u64 * 58
            + d[4] as u64;
    }
}

/// Reduce the overcomplete base 2^32 accumulators and write them big-endian.
fn pack(binary: &mut [u64], width: Width, out: &mut [u8]) -> Result<()> {
    for i in (1..binary.len()).rev() {
        binary[i - 1] += binary[i] >> 32;
        binary[i] &= 0xFFFF_FFFF;
    }

    // Anything left above 32 bits in the top limb means the value needs more
    // than N bytes, e.g. a maximum-length string of 'z's.
    if binary[0] > u32::MAX as u64 {
        debug!(?width, "decoded base58 value overflows");
        return Err(Base58Error::NumericOverflow(width));
    }

    for (limb, chunk) in binary.iter().zip(out.chunks_exact_mut(4)) {
        chunk.copy_from_slice(&(*limb as u32).to_be_bytes());
    }
    Ok(())
}

/// Leading '1's in the text must match leading zero bytes in the output
/// exactly, so that each value has a single valid spelling.
fn check_canonical(text: &str, out: &[u8]) -> Result<()> {
    let zeros = leading_zero_bytes(out);
    let ones = text.bytes().take_while(|&c| c == b'1').count();
    if zeros != ones {
        debug!(zeros, ones, "rejecting non-canonical base58 input");
        return Err(Base58Error::NonCanonical);
    }
    Ok(())
}
