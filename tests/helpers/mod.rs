//! Reusable helpers for verifier integration tests.
//!
//! These helpers pick candidate points relative to the cells a verifier
//! tier covers, so tests can aim inside or outside a given precision
//! without hard-coding coordinates.

#![allow(dead_code)]

use geocrypt::geohash::morton;
use geocrypt::precision::error;

/// Locations used across the integration tests.
pub const LOCATIONS: [(f64, f64); 3] = [
    (-36.752_221_4, 141.825_967_4),
    (41.903_816_3, 12.447_683_8),
    (38.952_180_8, -77.145_813_7),
];

/// Returns the centre of the cell of `bits` bits containing the point.
pub fn cell_centre(lat: f64, long: f64, bits: u32) -> (f64, f64) {
    let prefix = morton::truncate(morton::encode(lat, long), bits) >> (64 - bits);
    let (corner_lat, corner_long) = morton::decode(prefix, bits);
    let (lat_err, long_err) = error(bits);
    (corner_lat + lat_err / 2.0, corner_long + long_err / 2.0)
}

/// Returns whether two points fall in the same cell of `bits` bits.
pub fn same_cell(a: (f64, f64), b: (f64, f64), bits: u32) -> bool {
    morton::truncate(morton::encode(a.0, a.1), bits)
        == morton::truncate(morton::encode(b.0, b.1), bits)
}

/// Returns a point two cells north-east of the point at `bits` bits, which
/// never shares that cell.
pub fn two_cells_away(lat: f64, long: f64, bits: u32) -> (f64, f64) {
    let (lat_err, long_err) = error(bits);
    (lat + 2.0 * lat_err, long + 2.0 * long_err)
}
