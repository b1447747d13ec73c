//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the two fields a contact is
//! made of. These value objects validate at construction time so an invalid
//! name or e-mail can never be represented in the store.

pub mod email;
pub mod errors;
pub mod name;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use name::ContactName;

/// Whether a field counts as empty: nothing but whitespace.
///
/// Whitespace here is the browser set: Unicode `White_Space` plus U+FEFF,
/// without U+0085.
pub fn is_blank(value: &str) -> bool {
    value.chars().all(is_space)
}

fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}
