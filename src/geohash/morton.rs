//! Bit-interleaved (Morton) encoding of latitude and longitude.
//!
//! Latitude and longitude are normalized into `[0, 1)`, scaled to 32-bit
//! fixed point and interleaved into a single `u64`. Even bit positions hold
//! latitude, odd bit positions hold longitude, so any prefix of the code
//! names a rectangular cell that contains every longer code sharing it.

/// 2^32 as an `f64`, the fixed-point scale of each axis.
const SCALE: f64 = 4_294_967_296.0;

/// Encodes a point as a 64-bit Morton code.
///
/// Inputs outside `[-90, 90)` and `[-180, 180)` saturate to the nearest edge
/// of the fixed-point range.
///
/// # Examples
///
/// ```
/// use geocrypt::geohash::morton;
///
/// assert_eq!(morton::encode(-90.0, -180.0), 0);
/// assert_eq!(morton::encode(0.0, 0.0), 0xc000_0000_0000_0000);
/// ```
#[must_use]
pub fn encode(lat: f64, long: f64) -> u64 {
    let (lat32, long32) = to_fixed(lat, long);
    zip(lat32, long32)
}

/// Decodes the top `bits` bits of `code` back to a point.
///
/// `code` holds a right-aligned prefix of `bits` bits, as produced by the
/// base32 decoder. Bits below the prefix are zero filled, so the result is
/// the south-west corner of the cell the prefix names.
#[must_use]
pub fn decode(code: u64, bits: u32) -> (f64, f64) {
    let aligned = code.checked_shl(64 - bits.min(64)).unwrap_or(0);
    let (lat32, long32) = unzip(aligned);
    from_fixed(lat32, long32)
}

/// Zeroes every bit of `code` below the top `bits` bits.
#[must_use]
pub fn truncate(code: u64, bits: u32) -> u64 {
    code & u64::MAX.checked_shl(64 - bits.min(64)).unwrap_or(0)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_fixed(lat: f64, long: f64) -> (u32, u32) {
    (
        ((lat + 90.0) / 180.0 * SCALE) as u32,
        ((long + 180.0) / 360.0 * SCALE) as u32,
    )
}

fn from_fixed(lat32: u32, long32: u32) -> (f64, f64) {
    (
        f64::from(lat32) * 180.0 / SCALE - 90.0,
        f64::from(long32) * 360.0 / SCALE - 180.0,
    )
}

fn zip(x: u32, y: u32) -> u64 {
    spread(x) | (spread(y) << 1)
}

fn unzip(v: u64) -> (u32, u32) {
    (squash(v), squash(v >> 1))
}

// Interleave by binary magic numbers; see
// http://graphics.stanford.edu/~seander/bithacks.html#InterleaveBMN
fn spread(x: u32) -> u64 {
    let mut x = u64::from(x);
    x = (x | (x << 16)) & 0x0000_ffff_0000_ffff;
    x = (x | (x << 8)) & 0x00ff_00ff_00ff_00ff;
    x = (x | (x << 4)) & 0x0f0f_0f0f_0f0f_0f0f;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    x = (x | (x << 1)) & 0x5555_5555_5555_5555;
    x
}

#[allow(clippy::cast_possible_truncation)]
const fn squash(x: u64) -> u32 {
    let mut x = x & 0x5555_5555_5555_5555;
    x = (x | (x >> 1)) & 0x3333_3333_3333_3333;
    x = (x | (x >> 2)) & 0x0f0f_0f0f_0f0f_0f0f;
    x = (x | (x >> 4)) & 0x00ff_00ff_00ff_00ff;
    x = (x | (x >> 8)) & 0x0000_ffff_0000_ffff;
    (x | (x >> 16)) as u32
}
