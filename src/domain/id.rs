use serde::{Deserialize, Serialize};
use std::fmt;

/// Error raised when a string fails the identifier format check
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The identifier was absent or empty
    #[error("identifier is required")]
    Missing,
    /// The identifier contains characters outside the allowed set
    #[error("identifier is malformed")]
    Malformed,
}

/// Opaque entity identifier value object
///
/// Names a channel, subscriber, user, playlist, or video. Validity is a
/// format check only; it says nothing about existence in storage.
///
/// # Invariants
/// - Non-empty, at most 64 bytes
/// - ASCII alphanumerics, `-` and `_` only
/// - Immutable after construction
///
/// # Example
/// ```
/// use videotube_api::domain::Id;
///
/// let id = Id::parse("validChannelId").expect("valid id");
/// assert_eq!(id.as_str(), "validChannelId");
/// assert!(Id::parse("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Id(String);

impl Id {
    const MAX_LEN: usize = 64;

    /// Parses and validates an identifier string
    pub fn parse(raw: impl Into<String>) -> Result<Self, IdError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(IdError::Missing);
        }
        if !Self::is_valid(&raw) {
            return Err(IdError::Malformed);
        }
        Ok(Id(raw))
    }

    /// Validates an identifier string
    ///
    /// # Validation Rules
    /// - Non-empty and at most 64 bytes
    /// - ASCII alphanumerics, `-` and `_` only
    pub fn is_valid(raw: &str) -> bool {
        !raw.is_empty()
            && raw.len() <= Self::MAX_LEN
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    /// Generates a fresh identifier for a new record
    pub fn generate() -> Self {
        Id(uuid::Uuid::new_v4().simple().to_string())
    }

    /// The shared identity under which unauthenticated subscription
    /// requests are recorded
    pub fn anonymous() -> Self {
        Id("anonymous".to_string())
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reconstructs an Id from persistence layer data
    ///
    /// Bypasses format validation since the data was validated before it
    /// was stored. Only to be used by repository implementations.
    pub fn from_persistence(raw: String) -> Self {
        Id(raw)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
