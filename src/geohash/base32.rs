//! Geohash base32 codec.
//!
//! The alphabet drops `a`, `i`, `l` and `o` to avoid visual confusion with
//! digits. Each character carries 5 bits, most significant first.

use crate::error::{GeocryptError, Result};

/// The geohash base32 alphabet.
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Number of digits produced by [`encode`].
///
/// 60 bits is the largest multiple of both 4 and 5 that fits in a `u64`.
pub const DIGITS: usize = 12;

const INVALID: u8 = 0xff;

static DECODE: [u8; 256] = decode_table();

#[allow(clippy::cast_possible_truncation)]
const fn decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Encodes the low 60 bits of `x` as 12 base32 digits.
///
/// Callers take a prefix of the result to select a precision.
///
/// # Examples
///
/// ```
/// use geocrypt::geohash::base32;
///
/// assert_eq!(&base32::encode(0), b"000000000000");
/// assert_eq!(&base32::encode(31), b"00000000000z");
/// ```
#[must_use]
pub fn encode(mut x: u64) -> [u8; DIGITS] {
    let mut out = [0u8; DIGITS];
    for digit in out.iter_mut().rev() {
        #[allow(clippy::cast_possible_truncation)]
        let index = (x & 0x1f) as usize;
        *digit = ALPHABET[index];
        x >>= 5;
    }
    out
}

/// Decodes base32 digits into a right-aligned integer.
///
/// Input longer than [`DIGITS`] characters overflows silently; callers bound
/// the length before decoding.
///
/// # Errors
///
/// Returns [`GeocryptError::InvalidBase32`] for any byte outside the
/// alphabet, including the excluded `a`, `i`, `l` and `o`.
pub fn decode(text: &[u8]) -> Result<u64> {
    text.iter().try_fold(0u64, |acc, &b| {
        let v = DECODE[usize::from(b)];
        if v == INVALID {
            return Err(GeocryptError::InvalidBase32(b));
        }
        Ok((acc << 5) | u64::from(v))
    })
}
