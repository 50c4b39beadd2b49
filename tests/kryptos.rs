//! End-to-end tests against bcrypt.
//!
//! The Kryptos sculpture at CIA headquarters, with its name as the note,
//! hashed at precision 6 (48 bits). A candidate rounded to five decimal
//! places still lies in the same cell, so it verifies only when the note
//! is supplied.

mod helpers;

use geocrypt::verifier::{compare_with, hash_with, DigestHasher};
use geocrypt::{bits, compare, error, geohash, hash, location, Geocrypt, GeocryptError, Precision};
use geocrypt::{diagonal_error_metres, VerifierSettings};

use helpers::{cell_centre, LOCATIONS};

const LAT: f64 = 38.952_180_8;
const LONG: f64 = -77.145_813_7;
const TEXT: &str = "Kryptos";
const PREC: u8 = 6;

const NEAR_LAT: f64 = 38.952_18;
const NEAR_LONG: f64 = -77.145_81;

#[test]
fn kryptos_precision_model() {
    let bits = bits(PREC);
    let (lat_err, long_err) = error(bits);
    assert_eq!(bits, 48);
    assert_eq!(format!("{lat_err:.2e}"), "1.07e-5");
    assert_eq!(format!("{long_err:.2e}"), "2.15e-5");
}

/// Same scenario with the digest hasher, so the cell arithmetic is checked
/// on every run without paying for bcrypt cost 18.
#[test]
fn kryptos_with_digest_hasher() {
    let h = hash_with(&DigestHasher, LAT, LONG, TEXT, &[PREC]).unwrap();
    assert_eq!(
        compare_with(&DigestHasher, &h, NEAR_LAT, NEAR_LONG, ""),
        Err(GeocryptError::MismatchedHashAndLocation)
    );
    assert_eq!(compare_with(&DigestHasher, &h, NEAR_LAT, NEAR_LONG, TEXT), Ok(48));
}

#[test]
#[ignore = "bcrypt cost 18 takes tens of seconds"]
fn kryptos_with_bcrypt() {
    let h = hash(LAT, LONG, TEXT, &[PREC]).unwrap();
    assert_eq!(
        compare(&h, NEAR_LAT, NEAR_LONG, ""),
        Err(GeocryptError::MismatchedHashAndLocation)
    );
    assert_eq!(compare(&h, NEAR_LAT, NEAR_LONG, TEXT), Ok(48));
}

#[test]
fn bcrypt_fine_tiers_roundtrip() {
    for (lat, long) in LOCATIONS {
        let h = hash(lat, long, "", &[9, 8]).unwrap();
        assert_eq!(compare(&h, lat, long, ""), Ok(60));

        let (c_lat, c_long) = cell_centre(lat, long, bits(8));
        let got = compare(&h, c_lat, c_long, "").unwrap();
        assert!(got == 56 || got == 60, "matched {got} bits");
    }
}

#[test]
fn bcrypt_refuses_coarsest_precisions() {
    for prec in [1, 2] {
        assert!(matches!(
            hash(LAT, LONG, "", &[prec]),
            Err(GeocryptError::Hasher(_))
        ));
    }
}

#[test]
fn facade_with_settings() {
    let settings = VerifierSettings::with_precisions([
        Precision::try_from(9).unwrap(),
        Precision::try_from(8).unwrap(),
    ]);
    let geocrypt = Geocrypt::new().with_settings(settings);
    let blob = geocrypt.hash_default(LAT, LONG, TEXT).unwrap();
    assert_eq!(geocrypt.tier_bits(&blob), vec![Some(60), Some(56)]);
    assert_eq!(geocrypt.compare(&blob, LAT, LONG, TEXT), Ok(60));
    assert_eq!(
        geocrypt.compare(&blob, LAT, LONG, ""),
        Err(GeocryptError::MismatchedHashAndLocation)
    );
}

#[test]
fn facade_with_digest_hasher() {
    let geocrypt = Geocrypt::with_hasher(DigestHasher);
    let blob = geocrypt.hash(LAT, LONG, TEXT, &[1, 2]).unwrap();
    assert_eq!(geocrypt.compare(blob.as_str(), LAT, LONG, TEXT), Ok(32));
}

#[test]
fn kryptos_geohash() {
    let text = geohash(LAT, LONG, bits(PREC)).unwrap();
    assert_eq!(text.len(), 9);
    let (lat, long, got_bits) = location(&text).unwrap();
    let (lat_err, long_err) = error(45);
    assert_eq!(got_bits, 45);
    assert!((lat - LAT).abs() <= lat_err);
    assert!((long - LONG).abs() <= long_err);
}

#[test]
fn kryptos_cell_is_a_few_metres() {
    let d = diagonal_error_metres(LAT, LONG, bits(PREC));
    assert!(d > 1.0 && d < 10.0, "diagonal was {d}m");
}
