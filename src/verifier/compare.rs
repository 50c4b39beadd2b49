//! Checking candidate locations against verifiers.

use tracing::trace;

use super::primitive::AdaptiveHasher;
use super::{check_text, hash_input, SEPARATOR};
use crate::error::{GeocryptError, Result};
use crate::geohash::morton;
use crate::precision;

/// Compares a verifier with the location and note text, returning the bit
/// precision of the first tier that matches.
///
/// Tiers are tried in stored order, which for verifiers built by
/// [`super::hash_with`] is finest first. A tier that is malformed, or whose
/// cost names no usable bit count, counts as a non-match for that tier only.
///
/// # Errors
///
/// Returns [`GeocryptError::TextTooLong`] if `text` is longer than
/// [`super::MAX_TEXT_LEN`] bytes, and
/// [`GeocryptError::MismatchedHashAndLocation`] if no tier matches.
pub fn compare_with<H>(hasher: &H, blob: &str, lat: f64, long: f64, text: &str) -> Result<u32>
where
    H: AdaptiveHasher + ?Sized,
{
    check_text(text)?;
    let code = morton::encode(lat, long);
    for (segment, tier) in blob.split(SEPARATOR).enumerate() {
        match compare_tier(hasher, tier, code, text) {
            Ok(Some(bits)) => {
                trace!(segment, bits, "verifier tier matched");
                return Ok(bits);
            }
            Ok(None) => trace!(segment, "verifier tier did not match"),
            Err(e) => trace!(segment, error = %e, "skipping malformed verifier tier"),
        }
    }
    Err(GeocryptError::MismatchedHashAndLocation)
}

fn compare_tier<H>(hasher: &H, tier: &str, code: u64, text: &str) -> Result<Option<u32>>
where
    H: AdaptiveHasher + ?Sized,
{
    let cost = hasher.cost(tier)?;
    let bits = precision::bits_for_cost(cost)
        .ok_or_else(|| GeocryptError::Hasher(format!("cost {cost} names no bit count")))?;
    let input = hash_input(morton::truncate(code, bits), text);
    Ok(hasher.verify(&input, tier)?.then_some(bits))
}
