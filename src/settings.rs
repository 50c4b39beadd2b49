//! Verifier settings.

use serde::{Deserialize, Serialize};

use crate::precision::Precision;

/// Settings for building verifiers.
///
/// These settings choose which precision tiers a verifier carries when the
/// caller does not name any.
///
/// # Example
///
/// ```
/// use geocrypt::VerifierSettings;
///
/// let settings = VerifierSettings::from_json(r#"{"precisions":[9,5]}"#).unwrap();
/// assert_eq!(settings.precision_levels(), vec![9, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierSettings {
    /// Precision tiers built by default. An empty list means the default
    /// precision only.
    #[serde(default)]
    pub precisions: Vec<Precision>,
}

impl VerifierSettings {
    /// Creates settings with the given tiers.
    #[must_use]
    pub fn with_precisions(precisions: impl IntoIterator<Item = Precision>) -> Self {
        Self {
            precisions: precisions.into_iter().collect(),
        }
    }

    /// Returns the configured tiers as raw levels.
    #[must_use]
    pub fn precision_levels(&self) -> Vec<u8> {
        self.precisions.iter().map(|p| p.level()).collect()
    }

    /// Creates `VerifierSettings` from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or names a precision outside
    /// the valid range.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Converts these settings to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (extremely rare).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for VerifierSettings {
    fn default() -> Self {
        Self::with_precisions([Precision::DEFAULT])
    }
}
