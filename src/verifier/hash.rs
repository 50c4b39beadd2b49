//! Building location verifiers.

use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::primitive::AdaptiveHasher;
use super::{check_text, hash_input, SEPARATOR};
use crate::error::{GeocryptError, Result};
use crate::geohash::morton;
use crate::precision::{self, DEFAULT_PRECISION, MAX_PRECISION, MIN_PRECISION};

/// Returns a verifier for the location and note text at each of the given
/// precision levels.
///
/// If no precision is given, [`DEFAULT_PRECISION`] is used. Repeated levels
/// produce a single tier, and tiers are joined with `:` in order of
/// descending precision.
///
/// # Errors
///
/// Returns [`GeocryptError::TextTooLong`] if `text` is longer than
/// [`super::MAX_TEXT_LEN`] bytes, [`GeocryptError::InvalidPrecision`] naming
/// the first level outside `MIN_PRECISION..=MAX_PRECISION`, or whatever the
/// hasher reports for a tier.
pub fn hash_with<H>(
    hasher: &H,
    lat: f64,
    long: f64,
    text: &str,
    precisions: &[u8],
) -> Result<String>
where
    H: AdaptiveHasher + ?Sized,
{
    check_text(text)?;
    let precs = normalize_precisions(precisions)?;
    debug!(tiers = precs.len(), "building location verifier");

    let code = morton::encode(lat, long);

    let mut blob = String::new();
    for (i, &prec) in precs.iter().enumerate() {
        let bits = precision::bits(prec);
        let cost = precision::cost(bits);
        trace!(prec, bits, cost, "hashing verifier tier");

        let input: Zeroizing<Vec<u8>> = hash_input(morton::truncate(code, bits), text);
        let tier = hasher.hash(&input, cost)?;
        if i != 0 {
            blob.push(SEPARATOR);
        }
        blob.push_str(&tier);
    }
    Ok(blob)
}

/// Validates precision levels and returns them in descending order with
/// duplicates removed.
///
/// An empty list yields `[DEFAULT_PRECISION]`.
///
/// # Errors
///
/// Returns [`GeocryptError::InvalidPrecision`] with the position of the
/// first out-of-range level.
pub fn normalize_precisions(precisions: &[u8]) -> Result<Vec<u8>> {
    if let Some(position) = precisions
        .iter()
        .position(|p| !(MIN_PRECISION..=MAX_PRECISION).contains(p))
    {
        return Err(GeocryptError::InvalidPrecision {
            position,
            precision: precisions[position],
        });
    }
    if precisions.is_empty() {
        return Ok(vec![DEFAULT_PRECISION]);
    }
    let mut precs = precisions.to_vec();
    precs.sort_by(|a, b| b.cmp(a));
    precs.dedup();
    Ok(precs)
}
