//! Geocrypt Library
//!
//! One-way, privacy-preserving verifiers for geographic locations.
//!
//! A verifier binds a location, and optionally a short note, at one or more
//! precision levels. It can later confirm that a candidate location lies in
//! the same cell at some stored precision without revealing the original
//! coordinates.
//!
//! # Example Usage
//!
//! ```
//! use geocrypt::{bits, compare, error, hash, GeocryptError};
//!
//! let blob = hash(38.952_180_8, -77.145_813_7, "Kryptos", &[9]).unwrap();
//!
//! // The note is part of the secret.
//! assert_eq!(
//!     compare(&blob, 38.952_180_8, -77.145_813_7, ""),
//!     Err(GeocryptError::MismatchedHashAndLocation)
//! );
//! assert_eq!(compare(&blob, 38.952_180_8, -77.145_813_7, "Kryptos"), Ok(bits(9)));
//!
//! let (lat_err, long_err) = error(bits(9));
//! assert!(lat_err < 1e-6 && long_err < 1e-6);
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![deny(unsafe_code)]

mod api;
pub mod error;
pub mod geohash;
pub mod precision;
mod settings;
pub mod verifier;

pub use api::Geocrypt;
pub use error::{GeocryptError, Result};
pub use geohash::{geohash, location};
pub use precision::{
    bits, diagonal_error_metres, error, prec, Precision, DEFAULT_PRECISION, MAX_PRECISION,
    MIN_PRECISION,
};
pub use settings::VerifierSettings;
pub use verifier::{AdaptiveHasher, Bcrypt, VerifierBlob, MAX_TEXT_LEN};

/// Returns a bcrypt verifier for the location and note text at each of the
/// given precision levels.
///
/// If no precision is given, [`DEFAULT_PRECISION`] is used. When more than
/// one is given, tiers are joined with `:` in order of descending precision.
///
/// # Errors
///
/// Returns [`GeocryptError::TextTooLong`] for notes over [`MAX_TEXT_LEN`]
/// bytes, [`GeocryptError::InvalidPrecision`] for levels outside
/// `MIN_PRECISION..=MAX_PRECISION`, and [`GeocryptError::Hasher`] if bcrypt
/// refuses a tier's cost (precision levels 1 and 2).
pub fn hash(lat: f64, long: f64, text: &str, precisions: &[u8]) -> Result<String> {
    verifier::hash_with(&Bcrypt, lat, long, text, precisions)
}

/// Compares a bcrypt verifier with the location and note text, returning
/// the bit precision of the finest matching tier.
///
/// # Errors
///
/// Returns [`GeocryptError::TextTooLong`] for notes over [`MAX_TEXT_LEN`]
/// bytes and [`GeocryptError::MismatchedHashAndLocation`] if no tier
/// matches.
pub fn compare(blob: &str, lat: f64, long: f64, text: &str) -> Result<u32> {
    verifier::compare_with(&Bcrypt, blob, lat, long, text)
}
