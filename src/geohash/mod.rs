//! Geohash text for locations.
//!
//! Provides the textual side of the spatial encoding:
//! - [`morton`]: bit-interleaving of latitude and longitude into a `u64`
//! - [`base32`]: the geohash base32 alphabet and codec
//! - [`geohash`] / [`location`]: point to text and back at a chosen bit count
//!
//! # Example Usage
//!
//! ```
//! use geocrypt::geohash::{geohash, location};
//! use geocrypt::precision::error;
//!
//! let text = geohash(41.903_816_3, 12.447_683_8, 40).unwrap();
//! assert_eq!(text.len(), 8);
//!
//! let (lat, long, bits) = location(&text).unwrap();
//! let (lat_err, long_err) = error(bits);
//! assert_eq!(bits, 40);
//! assert!((lat - 41.903_816_3).abs() <= lat_err);
//! assert!((long - 12.447_683_8).abs() <= long_err);
//! ```

pub mod base32;
pub mod morton;

use crate::error::{GeocryptError, Result};

/// Smallest bit count accepted by [`geohash`], one base32 character.
pub const MIN_BITS: u32 = 5;

/// Largest bit count accepted by [`geohash`].
pub const MAX_BITS: u32 = 60;

/// Returns the geohash of a point at the given bit precision.
///
/// The result has `bits / 5` characters; bit counts that are not a multiple
/// of five round down to the previous character boundary.
///
/// # Errors
///
/// Returns [`GeocryptError::InvalidBitCount`] if `bits` is outside
/// `MIN_BITS..=MAX_BITS`.
pub fn geohash(lat: f64, long: f64, bits: u32) -> Result<String> {
    if !(MIN_BITS..=MAX_BITS).contains(&bits) {
        return Err(GeocryptError::InvalidBitCount(bits));
    }
    // The low 4 bits are dropped so that 12 digits hold the top 60 bits.
    let digits = base32::encode(morton::encode(lat, long) >> 4);
    let len = (bits / 5) as usize;
    Ok(digits[..len].iter().map(|&b| char::from(b)).collect())
}

/// Returns the south-west corner of the cell named by a geohash, along with
/// the bit precision of the geohash.
///
/// # Errors
///
/// Returns [`GeocryptError::InvalidBitCount`] for empty text or text longer
/// than [`base32::DIGITS`] characters, and [`GeocryptError::InvalidBase32`]
/// if the text contains a byte outside the geohash alphabet.
pub fn location(text: &str) -> Result<(f64, f64, u32)> {
    let len = text.len();
    if len == 0 || len > base32::DIGITS {
        return Err(GeocryptError::InvalidBitCount(
            u32::try_from(len.saturating_mul(5)).unwrap_or(u32::MAX),
        ));
    }
    #[allow(clippy::cast_possible_truncation)]
    let bits = 5 * len as u32;
    let code = base32::decode(text.as_bytes())?;
    let (lat, long) = morton::decode(code, bits);
    Ok((lat, long, bits))
}
