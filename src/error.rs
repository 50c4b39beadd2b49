//! Error types for geocrypt operations.
//!
//! Every fallible operation in the crate returns [`GeocryptError`]. Failures
//! reported by the adaptive hash primitive are passed through as
//! [`GeocryptError::Hasher`] with the primitive's own message.

use thiserror::Error;

/// Errors that can occur while encoding locations or building and checking
/// verifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeocryptError {
    /// A precision level outside `MIN_PRECISION..=MAX_PRECISION`.
    #[error("location precision out of range: position {position}: {precision}")]
    InvalidPrecision {
        /// Index of the offending value in the caller's precision list.
        position: usize,
        /// The rejected precision level.
        precision: u8,
    },

    /// A geohash bit count outside the range the operation supports.
    #[error("geohash bit count out of range: {0}")]
    InvalidBitCount(u32),

    /// Note text longer than `MAX_TEXT_LEN` bytes.
    #[error("note text is too long: {0} bytes")]
    TextTooLong(usize),

    /// A byte outside the geohash base32 alphabet.
    #[error("invalid base32 byte: {0:#04x}")]
    InvalidBase32(u8),

    /// No tier of the verifier matched the candidate location and note.
    #[error("hashed location is not the hash of the given location")]
    MismatchedHashAndLocation,

    /// Verifier text that cannot hold any tier.
    #[error("malformed verifier: {0}")]
    MalformedVerifier(String),

    /// The adaptive hash primitive refused the input or the stored hash.
    #[error("hasher error: {0}")]
    Hasher(String),
}

/// Result type alias for geocrypt operations.
pub type Result<T> = std::result::Result<T, GeocryptError>;

impl From<bcrypt::BcryptError> for GeocryptError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::Hasher(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_precision_error_display() {
        let err = GeocryptError::InvalidPrecision {
            position: 2,
            precision: 12,
        };
        assert_eq!(
            err.to_string(),
            "location precision out of range: position 2: 12"
        );
    }

    #[test]
    fn invalid_bit_count_error_display() {
        let err = GeocryptError::InvalidBitCount(61);
        assert_eq!(err.to_string(), "geohash bit count out of range: 61");
    }

    #[test]
    fn text_too_long_error_display() {
        let err = GeocryptError::TextTooLong(65);
        assert_eq!(err.to_string(), "note text is too long: 65 bytes");
    }

    #[test]
    fn invalid_base32_error_display() {
        let err = GeocryptError::InvalidBase32(b'a');
        assert_eq!(err.to_string(), "invalid base32 byte: 0x61");
    }

    #[test]
    fn mismatched_error_display() {
        let err = GeocryptError::MismatchedHashAndLocation;
        assert_eq!(
            err.to_string(),
            "hashed location is not the hash of the given location"
        );
    }

    #[test]
    fn malformed_verifier_error_display() {
        let err = GeocryptError::MalformedVerifier("empty verifier".to_string());
        assert_eq!(err.to_string(), "malformed verifier: empty verifier");
    }

    #[test]
    fn bcrypt_error_converts_to_hasher() {
        let err: GeocryptError = bcrypt::BcryptError::CostNotAllowed(38).into();
        assert!(matches!(err, GeocryptError::Hasher(_)));
        assert!(err.to_string().starts_with("hasher error: "));
    }

    #[test]
    fn error_debug_format() {
        let err = GeocryptError::MismatchedHashAndLocation;
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("MismatchedHashAndLocation"));
    }
}
