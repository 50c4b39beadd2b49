//! Location verifiers.
//!
//! A verifier is a set of adaptive hashes of a location, one per precision
//! tier, joined with `:`. Each tier hashes the location's Morton code
//! truncated to the tier's bit count, followed by the note text:
//!
//! ```text
//! +----------------------------+------------------+
//! | truncated code (8 bytes BE)| note (<= 64 B)   |
//! +----------------------------+------------------+
//! ```
//!
//! The hash cost of a tier is `66 - bits`, so coarse tiers are the most
//! expensive to brute force. A stored verifier reveals neither the location
//! nor the note, and checking a candidate succeeds if any tier matches.
//!
//! # Example Usage
//!
//! ```
//! use geocrypt::verifier::{compare_with, hash_with, Bcrypt};
//!
//! let blob = hash_with(&Bcrypt, 41.903_816_3, 12.447_683_8, "fountain", &[9]).unwrap();
//! assert_eq!(compare_with(&Bcrypt, &blob, 41.903_816_3, 12.447_683_8, "fountain"), Ok(60));
//! assert!(compare_with(&Bcrypt, &blob, 41.903_816_3, 12.447_683_8, "").is_err());
//! ```

mod blob;
pub mod compare;
#[cfg(feature = "test-utils")]
pub mod digest;
pub mod hash;
pub mod primitive;

use zeroize::Zeroizing;

use crate::error::{GeocryptError, Result};

pub use blob::VerifierBlob;
pub use compare::compare_with;
#[cfg(feature = "test-utils")]
pub use digest::DigestHasher;
pub use hash::{hash_with, normalize_precisions};
pub use primitive::{AdaptiveHasher, Bcrypt};

/// Maximum length of note text, in bytes.
pub const MAX_TEXT_LEN: usize = 64;

/// Separates tiers in a verifier.
pub const SEPARATOR: char = ':';

fn check_text(text: &str) -> Result<()> {
    if text.len() > MAX_TEXT_LEN {
        return Err(GeocryptError::TextTooLong(text.len()));
    }
    Ok(())
}

/// Lays out the hash input for one tier. The buffer is wiped on drop since
/// it holds the truncated location in the clear.
fn hash_input(code: u64, text: &str) -> Zeroizing<Vec<u8>> {
    let mut input = Zeroizing::new(Vec::with_capacity(8 + MAX_TEXT_LEN));
    input.extend_from_slice(&code.to_be_bytes());
    input.extend_from_slice(text.as_bytes());
    input
}
