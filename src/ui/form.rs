//! Entry form.
//!
//! Two bound text fields and a submit action. Validation errors are handled
//! here and never leave the form: they are kept for display until the next
//! submit attempt.

use crate::domain::ValidationError;
use crate::models::Contact;
use crate::store::ContactStore;
use crate::ui::text;
use std::sync::Arc;
use tracing::{debug, info};

pub const NAME_PLACEHOLDER: &str = "Full name";
pub const EMAIL_PLACEHOLDER: &str = "E-mail";
pub const SUCCESS_MESSAGE: &str = "Contact added successfully!";

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The contact was appended and the fields were cleared.
    Added(Contact),

    /// Nothing was stored; the error is now displayed under the form.
    Rejected(ValidationError),
}

impl SubmitOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, SubmitOutcome::Added(_))
    }
}

/// The contact entry form.
pub struct EntryForm {
    store: Arc<dyn ContactStore>,
    name: String,
    email: String,
    error: Option<ValidationError>,
}

impl EntryForm {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self {
            store,
            name: String::new(),
            email: String::new(),
            error: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Error from the last rejected submit, if any.
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Validate the fields and, on success, append a contact to the store.
    ///
    /// On failure the fields are left untouched and the first failing rule
    /// replaces any previously displayed error.
    pub fn submit(&mut self) -> SubmitOutcome {
        match Contact::from_fields(&self.name, &self.email) {
            Ok(contact) => {
                self.store.append(contact.clone());
                self.name.clear();
                self.email.clear();
                self.error = None;
                info!(total = self.store.len(), "Contact submitted");
                SubmitOutcome::Added(contact)
            }
            Err(err) => {
                debug!(error = ?err, "Contact submission rejected");
                self.error = Some(err.clone());
                SubmitOutcome::Rejected(err)
            }
        }
    }

    /// Drop field contents and any error, as when the form is left.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.error = None;
    }

    /// Draw the form screen.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("Contact Form\n\n");
        out.push_str(&format!(
            "  Name  : {}\n",
            Self::field(&self.name, NAME_PLACEHOLDER)
        ));
        out.push_str(&format!(
            "  E-mail: {}\n",
            Self::field(&self.email, EMAIL_PLACEHOLDER)
        ));
        out.push_str("\n  [ Add ]  (type `submit`)\n");

        if let Some(err) = &self.error {
            out.push_str(&format!("\n  ! {}\n", err));
        }

        out
    }

    fn field(value: &str, placeholder: &str) -> String {
        if value.is_empty() {
            format!("<{}>", placeholder)
        } else {
            text::sanitize(value)
        }
    }
}
