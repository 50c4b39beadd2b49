//! The adaptive one-way hash primitive behind location verifiers.
//!
//! Verifiers only need three things from the primitive: hash some bytes at a
//! given work factor, check bytes against a stored hash, and read the work
//! factor back out of a stored hash. [`AdaptiveHasher`] captures exactly
//! that, and [`Bcrypt`] is the production implementation.

use crate::error::Result;

/// A salted, self-describing password-hashing primitive with a tunable
/// work factor.
///
/// Stored hashes must not contain `:`, which separates verifier tiers.
pub trait AdaptiveHasher: Send + Sync {
    /// Hashes `input` at the given cost, returning the serialized hash.
    ///
    /// # Errors
    ///
    /// Returns an error if the cost is not supported.
    fn hash(&self, input: &[u8], cost: u32) -> Result<String>;

    /// Returns whether `input` is the preimage of `hashed`.
    ///
    /// # Errors
    ///
    /// Returns an error if `hashed` is malformed.
    fn verify(&self, input: &[u8], hashed: &str) -> Result<bool>;

    /// Returns the cost embedded in `hashed`.
    ///
    /// # Errors
    ///
    /// Returns an error if `hashed` is malformed.
    fn cost(&self, hashed: &str) -> Result<u32>;
}

/// bcrypt as the adaptive hash primitive.
///
/// bcrypt accepts costs `4..=31`, so the two coarsest precision levels
/// (costs 38 and 34) are refused. Inputs are truncated to 72 bytes by
/// bcrypt itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bcrypt;

impl AdaptiveHasher for Bcrypt {
    fn hash(&self, input: &[u8], cost: u32) -> Result<String> {
        Ok(bcrypt::hash(input, cost)?)
    }

    fn verify(&self, input: &[u8], hashed: &str) -> Result<bool> {
        Ok(bcrypt::verify(input, hashed)?)
    }

    fn cost(&self, hashed: &str) -> Result<u32> {
        let parts: bcrypt::HashParts = hashed.parse()?;
        Ok(parts.get_cost())
    }
}

impl<H: AdaptiveHasher + ?Sized> AdaptiveHasher for &H {
    fn hash(&self, input: &[u8], cost: u32) -> Result<String> {
        (**self).hash(input, cost)
    }

    fn verify(&self, input: &[u8], hashed: &str) -> Result<bool> {
        (**self).verify(input, hashed)
    }

    fn cost(&self, hashed: &str) -> Result<u32> {
        (**self).cost(hashed)
    }
}
