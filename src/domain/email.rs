//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Something, `@`, something, `.`, something. Unanchored: a match anywhere
/// in the input is enough. "Something" is non-space in the sense of
/// `super::is_blank`: U+FEFF is space, U+0085 is not.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    let part = r"(?:[^\s\x{FEFF}]|\x{85})+";
    Regex::new(&format!(r"{part}@{part}\.{part}", part = part))
        .expect("e-mail shape pattern is valid")
});

/// A type-safe wrapper for e-mail addresses.
///
/// The check is a minimal shape check, not RFC 5322 validation. The value is
/// kept exactly as entered (untrimmed).
///
/// # Example
///
/// ```
/// use contact_book::domain::EmailAddress;
///
/// let email = EmailAddress::new("ana@example.com").unwrap();
/// assert_eq!(email.as_str(), "ana@example.com");
/// assert!(EmailAddress::new("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the shape.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if no part of the input looks
    /// like `local@domain.tld`.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Shape check without constructing a value.
    pub fn is_valid(email: &str) -> bool {
        EMAIL_SHAPE.is_match(email)
    }

    /// Get the e-mail address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
