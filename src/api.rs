//! Entry point bundling a hasher with verifier settings.

use crate::error::Result;
use crate::settings::VerifierSettings;
use crate::verifier::{compare_with, hash_with, AdaptiveHasher, Bcrypt, VerifierBlob};

/// Core interface for geocrypt functionality.
///
/// Owns the adaptive hash primitive and the default precision tiers, so
/// callers building many verifiers configure them once.
#[derive(Debug, Default, Clone)]
pub struct Geocrypt<H = Bcrypt> {
    hasher: H,
    settings: VerifierSettings,
}

impl Geocrypt<Bcrypt> {
    /// Creates a `Geocrypt` backed by bcrypt with default settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use geocrypt::Geocrypt;
    ///
    /// let geocrypt = Geocrypt::new();
    /// assert_eq!(geocrypt.settings().precision_levels(), vec![7]);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: AdaptiveHasher> Geocrypt<H> {
    /// Creates a `Geocrypt` backed by the given hasher with default
    /// settings.
    #[must_use]
    pub fn with_hasher(hasher: H) -> Self {
        Self {
            hasher,
            settings: VerifierSettings::default(),
        }
    }

    /// Replaces the settings.
    #[must_use]
    pub fn with_settings(mut self, settings: VerifierSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the current settings.
    #[must_use]
    pub fn settings(&self) -> &VerifierSettings {
        &self.settings
    }

    /// Returns the hasher.
    #[must_use]
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Builds a verifier at the given precision levels.
    ///
    /// # Errors
    ///
    /// See [`crate::hash`].
    pub fn hash(&self, lat: f64, long: f64, text: &str, precisions: &[u8]) -> Result<VerifierBlob> {
        hash_with(&self.hasher, lat, long, text, precisions)?.parse()
    }

    /// Builds a verifier at the configured precision tiers.
    ///
    /// # Errors
    ///
    /// See [`crate::hash`].
    pub fn hash_default(&self, lat: f64, long: f64, text: &str) -> Result<VerifierBlob> {
        self.hash(lat, long, text, &self.settings.precision_levels())
    }

    /// Compares a verifier with a candidate location and note.
    ///
    /// # Errors
    ///
    /// See [`crate::compare`].
    pub fn compare(&self, blob: impl AsRef<str>, lat: f64, long: f64, text: &str) -> Result<u32> {
        compare_with(&self.hasher, blob.as_ref(), lat, long, text)
    }

    /// Returns the bit precision of each tier of a verifier.
    #[must_use]
    pub fn tier_bits(&self, blob: &VerifierBlob) -> Vec<Option<u32>> {
        blob.tier_bits(&self.hasher)
    }
}
