//! The stored form of a verifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::primitive::AdaptiveHasher;
use super::SEPARATOR;
use crate::error::{GeocryptError, Result};
use crate::precision;

/// A verifier as stored by callers: the colon-joined tier hashes.
///
/// Serializes as a plain string, so it can sit in any JSON document
/// alongside the data it protects.
///
/// # Example
///
/// ```
/// use geocrypt::verifier::{hash_with, Bcrypt, VerifierBlob};
///
/// let blob: VerifierBlob = hash_with(&Bcrypt, 0.0, 0.0, "", &[9, 8])
///     .unwrap()
///     .parse()
///     .unwrap();
/// assert_eq!(blob.tiers().count(), 2);
/// assert_eq!(blob.tier_bits(&Bcrypt), vec![Some(60), Some(56)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerifierBlob(String);

impl VerifierBlob {
    /// Returns the tier hashes in stored order.
    pub fn tiers(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR)
    }

    /// Returns the bit precision of each tier, or `None` for tiers the
    /// hasher cannot read.
    #[must_use]
    pub fn tier_bits<H: AdaptiveHasher + ?Sized>(&self, hasher: &H) -> Vec<Option<u32>> {
        self.tiers()
            .map(|tier| {
                hasher
                    .cost(tier)
                    .ok()
                    .and_then(precision::bits_for_cost)
            })
            .collect()
    }

    /// Returns the verifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the verifier, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for VerifierBlob {
    type Err = GeocryptError;

    /// Accepts any non-empty text; tiers are only interpreted on comparison.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(GeocryptError::MalformedVerifier("empty verifier".into()));
        }
        Ok(Self(s.to_owned()))
    }
}

impl From<VerifierBlob> for String {
    fn from(blob: VerifierBlob) -> Self {
        blob.0
    }
}

impl AsRef<str> for VerifierBlob {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VerifierBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
