//! A fast salted SHA-256 stand-in for bcrypt.
//!
//! Only compiled with the `test-utils` feature. It follows the
//! [`AdaptiveHasher`] contract so the verifier protocol can be exercised
//! at every precision level without paying bcrypt's work factor. The cost
//! is recorded but not spent.
//!
//! Format: `$gcd$<cost>$<salt hex>$<digest hex>`.
//!
//! **DO NOT use in production.**

use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use super::primitive::AdaptiveHasher;
use crate::error::{GeocryptError, Result};

const PREFIX: &str = "gcd";
const SALT_LEN: usize = 16;

/// Largest cost the digest hasher accepts.
pub const MAX_COST: u32 = 63;

/// Insecure, fast [`AdaptiveHasher`] for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigestHasher;

impl DigestHasher {
    fn digest(salt: &[u8], cost: u32, input: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(salt);
        hasher.update(cost.to_be_bytes());
        hasher.update(input);
        hasher.finalize().into()
    }

    fn parse(hashed: &str) -> Result<(u32, Vec<u8>, Vec<u8>)> {
        let malformed = || GeocryptError::Hasher(format!("malformed digest hash: {hashed:?}"));
        let mut fields = hashed.split('$');
        if fields.next() != Some("") || fields.next() != Some(PREFIX) {
            return Err(malformed());
        }
        let cost = fields
            .next()
            .and_then(|c| c.parse::<u32>().ok())
            .ok_or_else(malformed)?;
        let salt = fields
            .next()
            .and_then(|s| hex::decode(s).ok())
            .filter(|s| s.len() == SALT_LEN)
            .ok_or_else(malformed)?;
        let digest = fields
            .next()
            .and_then(|d| hex::decode(d).ok())
            .filter(|d| d.len() == 32)
            .ok_or_else(malformed)?;
        if fields.next().is_some() {
            return Err(malformed());
        }
        Ok((cost, salt, digest))
    }
}

impl AdaptiveHasher for DigestHasher {
    fn hash(&self, input: &[u8], cost: u32) -> Result<String> {
        if cost > MAX_COST {
            return Err(GeocryptError::Hasher(format!("cost {cost} not allowed")));
        }
        let mut salt = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        let digest = Self::digest(&salt, cost, input);
        Ok(format!(
            "${PREFIX}${cost:02}${}${}",
            hex::encode(salt),
            hex::encode(digest)
        ))
    }

    fn verify(&self, input: &[u8], hashed: &str) -> Result<bool> {
        let (cost, salt, digest) = Self::parse(hashed)?;
        let computed = Self::digest(&salt, cost, input);
        Ok(computed.as_slice().ct_eq(digest.as_slice()).into())
    }

    fn cost(&self, hashed: &str) -> Result<u32> {
        Self::parse(hashed).map(|(cost, _, _)| cost)
    }
}
