//! Domain validation errors.

use std::fmt;

/// Errors raised while validating form input.
///
/// The `Display` output is the message shown beneath the entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A field is blank after trimming whitespace.
    EmptyField,

    /// The e-mail field fails the shape check.
    InvalidEmail(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField => write!(f, "Please fill in all fields!"),
            Self::InvalidEmail(_) => write!(f, "Please enter a valid e-mail!"),
        }
    }
}

impl std::error::Error for ValidationError {}
