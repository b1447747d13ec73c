//! Contact model: a validated name/e-mail pair captured through the form.

use crate::domain::{is_blank, ContactName, EmailAddress, ValidationError};
use serde::{Deserialize, Serialize};

/// A contact captured during the session.
///
/// Both fields are validated value objects, so a `Contact` is only ever
/// built from input that passed every form rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Name as typed (untrimmed)
    pub name: ContactName,

    /// E-mail as typed (untrimmed)
    pub email: EmailAddress,
}

impl Contact {
    /// Build a contact from raw form fields.
    ///
    /// Rules are checked in order and the first failure wins:
    /// 1. either field blank after trimming -> `EmptyField`
    /// 2. e-mail fails the shape check -> `InvalidEmail`
    pub fn from_fields(name: &str, email: &str) -> Result<Self, ValidationError> {
        if is_blank(name) || is_blank(email) {
            return Err(ValidationError::EmptyField);
        }

        Ok(Self {
            name: ContactName::new(name)?,
            email: EmailAddress::new(email)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_valid() {
        let contact = Contact::from_fields("Ana Silva", "ana@example.com").unwrap();
        assert_eq!(contact.name.as_str(), "Ana Silva");
        assert_eq!(contact.email.as_str(), "ana@example.com");
    }

    #[test]
    fn test_empty_field_wins_over_invalid_email() {
        // Blank name with a malformed e-mail still reports the blank field.
        assert_eq!(
            Contact::from_fields("  ", "not-an-email"),
            Err(ValidationError::EmptyField)
        );
        assert_eq!(
            Contact::from_fields("Bob", " "),
            Err(ValidationError::EmptyField)
        );
    }

    #[test]
    fn test_byte_order_mark_counts_as_blank() {
        assert_eq!(
            Contact::from_fields("\u{FEFF}", "ana@example.com"),
            Err(ValidationError::EmptyField)
        );
        assert_eq!(
            Contact::from_fields("Ana", "\u{FEFF} "),
            Err(ValidationError::EmptyField)
        );
    }

    #[test]
    fn test_next_line_is_not_blank() {
        // U+0085 is text, not whitespace, so the name passes.
        assert!(Contact::from_fields("\u{85}", "ana@example.com").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert_eq!(
            Contact::from_fields("Bob", "not-an-email"),
            Err(ValidationError::InvalidEmail("not-an-email".to_string()))
        );
    }

    #[test]
    fn test_raw_values_are_kept() {
        let contact = Contact::from_fields(" Ana ", "ana@example.com ").unwrap();
        assert_eq!(contact.name.as_str(), " Ana ");
        assert_eq!(contact.email.as_str(), "ana@example.com ");
    }

    #[test]
    fn test_contact_serialization() {
        let contact = Contact::from_fields("Ana Silva", "ana@example.com").unwrap();
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Ana Silva", "email": "ana@example.com"})
        );
    }

    #[test]
    fn test_contact_deserialization_validates() {
        let result: Result<Contact, _> =
            serde_json::from_str(r#"{"name": "Bob", "email": "not-an-email"}"#);
        assert!(result.is_err());
    }
}
