//! Precision levels, geohash bit counts and their error bounds.
//!
//! A precision level is a small integer chosen by the caller. It maps
//! linearly to the number of Morton code bits kept, and inversely to the
//! work factor handed to the adaptive hash primitive: a coarse location has
//! few candidate cells, so each guess must cost more.
//!
//! | Precision | Bits | Cost | Latitude error | Longitude error |
//! |-----------|------|------|----------------|-----------------|
//! | 1         | 28   | 38   | ±1.1e-02°      | ±2.2e-02°       |
//! | 5         | 44   | 22   | ±4.3e-05°      | ±8.6e-05°       |
//! | 7         | 52   | 14   | ±2.7e-06°      | ±5.4e-06°       |
//! | 9         | 60   | 6    | ±1.7e-07°      | ±3.4e-07°       |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GeocryptError;

/// The minimum precision level accepted by [`crate::hash`].
pub const MIN_PRECISION: u8 = 1;

/// The maximum precision level accepted by [`crate::hash`].
pub const MAX_PRECISION: u8 = 9;

/// Corresponds to approximately one diagonal metre at the equator.
pub const DEFAULT_PRECISION: u8 = 7;

/// Sum of a tier's bit count and its hash cost.
pub const COST_OFFSET: u32 = 66;

/// Mean Earth radius used for ground distances, in metres.
const EARTH_RADIUS_M: f64 = 6_371e3;

/// Returns the geohash bit count for a precision level.
///
/// # Examples
///
/// ```
/// use geocrypt::precision::{bits, prec};
///
/// assert_eq!(bits(6), 48);
/// assert_eq!(prec(48), 6);
/// ```
#[must_use]
pub const fn bits(prec: u8) -> u32 {
    4 * (prec as u32 + 6)
}

/// Returns the precision level for a geohash bit count.
///
/// This is the exact inverse of [`bits`] for levels in
/// `MIN_PRECISION..=MAX_PRECISION`. Bit counts below 24 give negative
/// levels.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub const fn prec(bits: u32) -> i32 {
    (bits / 4) as i32 - 6
}

/// Returns the hash cost used for a tier of `bits` bits.
///
/// Bit counts above [`COST_OFFSET`] have no cost and give zero.
#[must_use]
pub const fn cost(bits: u32) -> u32 {
    COST_OFFSET.saturating_sub(bits)
}

/// Returns the bit count encoded by a hash cost, if it names a usable
/// truncation width.
#[must_use]
pub fn bits_for_cost(cost: u32) -> Option<u32> {
    COST_OFFSET
        .checked_sub(cost)
        .filter(|bits| (1..=64).contains(bits))
}

/// Returns the maximum latitude and longitude deviation, in degrees,
/// introduced by truncating a Morton code to `bits` bits.
///
/// Returns `(NaN, NaN)` when `bits` is outside `1..=60`.
///
/// # Examples
///
/// ```
/// use geocrypt::precision::error;
///
/// let (lat, long) = error(48);
/// assert!((lat - 1.07e-5).abs() < 1e-7);
/// assert!((long - 2.15e-5).abs() < 1e-7);
/// assert!(error(61).0.is_nan());
/// ```
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn error(bits: u32) -> (f64, f64) {
    if !(1..=60).contains(&bits) {
        return (f64::NAN, f64::NAN);
    }
    let lat_bits = bits / 2;
    let long_bits = bits - lat_bits;
    (
        180.0 * 2f64.powi(-(lat_bits as i32)),
        360.0 * 2f64.powi(-(long_bits as i32)),
    )
}

/// Returns the ground distance in metres across the diagonal of the error
/// box centred on a point.
///
/// This is a rough guide to what a bit count means on the ground; it shrinks
/// towards the poles as meridians converge. Returns NaN for bit counts that
/// [`error`] rejects.
#[must_use]
pub fn diagonal_error_metres(lat: f64, long: f64, bits: u32) -> f64 {
    let (lat_err, long_err) = error(bits);
    haversine(lat - lat_err, long - long_err, lat + lat_err, long + long_err)
}

fn haversine(lat1: f64, long1: f64, lat2: f64, long2: f64) -> f64 {
    let sd_lat = ((lat2 - lat1).to_radians() / 2.0).sin();
    let sd_long = ((long2 - long1).to_radians() / 2.0).sin();
    let a = sd_lat.mul_add(
        sd_lat,
        lat1.to_radians().cos() * lat2.to_radians().cos() * sd_long * sd_long,
    );
    2.0 * EARTH_RADIUS_M * a.sqrt().asin()
}

/// A validated precision level.
///
/// # Example
///
/// ```
/// use geocrypt::precision::Precision;
///
/// let p = Precision::try_from(6).unwrap();
/// assert_eq!(p.bits(), 48);
/// assert_eq!(p.cost(), 18);
/// assert!(Precision::try_from(10).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Precision(u8);

impl Precision {
    /// The precision used when none is given.
    pub const DEFAULT: Self = Self(DEFAULT_PRECISION);

    /// Returns the level, or `None` if it is outside
    /// `MIN_PRECISION..=MAX_PRECISION`.
    #[must_use]
    pub const fn new(level: u8) -> Option<Self> {
        if level < MIN_PRECISION || level > MAX_PRECISION {
            None
        } else {
            Some(Self(level))
        }
    }

    /// Returns the raw level.
    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Returns the geohash bit count for this level.
    #[must_use]
    pub const fn bits(self) -> u32 {
        bits(self.0)
    }

    /// Returns the hash cost for this level.
    #[must_use]
    pub const fn cost(self) -> u32 {
        cost(self.bits())
    }

    /// Returns the latitude and longitude error bound for this level.
    #[must_use]
    pub fn error(self) -> (f64, f64) {
        error(self.bits())
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Precision {
    type Error = GeocryptError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level).ok_or(GeocryptError::InvalidPrecision {
            position: 0,
            precision: level,
        })
    }
}

impl From<Precision> for u8 {
    fn from(p: Precision) -> Self {
        p.0
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_prec_are_inverse() {
        for p in MIN_PRECISION..=MAX_PRECISION {
            assert_eq!(prec(bits(p)), i32::from(p));
        }
    }

    #[test]
    fn bits_range() {
        assert_eq!(bits(MIN_PRECISION), 28);
        assert_eq!(bits(DEFAULT_PRECISION), 52);
        assert_eq!(bits(MAX_PRECISION), 60);
    }

    #[test]
    fn prec_of_small_bits_is_negative() {
        assert_eq!(prec(0), -6);
        assert_eq!(prec(23), -1);
    }

    #[test]
    fn cost_is_inverse_of_bits() {
        assert_eq!(cost(60), 6);
        assert_eq!(cost(48), 18);
        assert_eq!(cost(28), 38);
        assert_eq!(cost(70), 0);
    }

    #[test]
    fn bits_for_cost_bounds() {
        assert_eq!(bits_for_cost(18), Some(48));
        assert_eq!(bits_for_cost(2), Some(64));
        assert_eq!(bits_for_cost(1), None);
        assert_eq!(bits_for_cost(65), Some(1));
        assert_eq!(bits_for_cost(66), None);
        assert_eq!(bits_for_cost(100), None);
    }

    #[test]
    fn error_splits_odd_bits_towards_longitude() {
        let (lat, long) = error(5);
        assert!((lat - 45.0).abs() < f64::EPSILON);
        assert!((long - 45.0).abs() < f64::EPSILON);

        let (lat, long) = error(1);
        assert!((lat - 180.0).abs() < f64::EPSILON);
        assert!((long - 180.0).abs() < f64::EPSILON);
    }

    #[test]
    fn error_is_nan_outside_range() {
        for b in [0, 61, 64, 1000] {
            let (lat, long) = error(b);
            assert!(lat.is_nan());
            assert!(long.is_nan());
        }
    }

    #[test]
    fn error_kryptos_precision() {
        let (lat, long) = error(bits(6));
        assert_eq!(format!("{lat:.2e}"), "1.07e-5");
        assert_eq!(format!("{long:.2e}"), "2.15e-5");
    }

    #[test]
    fn default_precision_is_about_a_metre() {
        let d = diagonal_error_metres(0.0, 0.0, bits(DEFAULT_PRECISION));
        assert!(d > 0.5 && d < 2.0, "diagonal was {d}m");
    }

    #[test]
    fn diagonal_error_shrinks_with_precision() {
        let coarse = diagonal_error_metres(41.9, 12.4, bits(5));
        let fine = diagonal_error_metres(41.9, 12.4, bits(9));
        assert!(coarse > fine);
    }

    #[test]
    fn diagonal_error_is_nan_for_invalid_bits() {
        assert!(diagonal_error_metres(0.0, 0.0, 0).is_nan());
    }

    #[test]
    fn precision_validates() {
        assert!(Precision::new(0).is_none());
        assert!(Precision::new(10).is_none());
        assert_eq!(Precision::new(9).map(Precision::bits), Some(60));
        assert_eq!(Precision::default().level(), DEFAULT_PRECISION);
    }

    #[test]
    fn precision_try_from_reports_value() {
        assert_eq!(
            Precision::try_from(0),
            Err(GeocryptError::InvalidPrecision {
                position: 0,
                precision: 0
            })
        );
    }

    #[test]
    fn precision_serde_rejects_out_of_range() {
        let p: Precision = serde_json::from_str("5").unwrap();
        assert_eq!(p.level(), 5);
        assert_eq!(serde_json::to_string(&p).unwrap(), "5");
        assert!(serde_json::from_str::<Precision>("12").is_err());
    }
}
