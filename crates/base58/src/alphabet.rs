//! The base58 alphabet and its inverse lookup table.

/// Maps a digit in `[0, 58)` to its character.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Marks a character that is not part of the alphabet.
const INVALID: u8 = 0xFF;

/// First character covered by [`INVERSE`].
const INVERSE_OFFSET: u32 = b'1' as u32;

/// Index of the trailing sentinel slot. Anything past `'z'` clamps here.
const INVERSE_SENTINEL: usize = (b'z' - b'1' + 1) as usize;

/// Maps `c - '1'` to the digit value of `c`, or [`INVALID`].
///
/// `0`, `I`, `O` and `l` are excluded from the alphabet, as are the
/// punctuation characters between the digit and letter ranges.
const INVERSE: [u8; INVERSE_SENTINEL + 1] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, //
    0x08, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, //
    0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F, 0x10, //
    0xFF, 0x11, 0x12, 0x13, 0x14, 0x15, 0xFF, 0x16, //
    0x17, 0x18, 0x19, 0x1A, 0x1B, 0x1C, 0x1D, 0x1E, //
    0x1F, 0x20, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, //
    0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x27, 0x28, //
    0x29, 0x2A, 0x2B, 0xFF, 0x2C, 0x2D, 0x2E, 0x2F, //
    0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, //
    0x38, 0x39, 0xFF,
];

/// Look up the digit value of `c`.
///
/// Characters below `'1'` wrap around to a huge index, so a single clamp
/// covers both ends of the table.
#[inline]
pub fn digit(c: char) -> Option<u8> {
    let idx = (c as u32).wrapping_sub(INVERSE_OFFSET) as usize;
    match INVERSE[idx.min(INVERSE_SENTINEL)] {
        INVALID => None,
        d => Some(d),
    }
}

/// Map a digit in `[0, 58)` to its character byte.
#[inline]
pub fn symbol(digit: u8) -> u8 {
    ALPHABET[digit as usize]
}
