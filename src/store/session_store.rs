use super::{ContactStore, StoreSubscription};
use crate::models::Contact;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::watch;

/// In-memory store living for one session.
///
/// Cloning yields another handle on the same contacts.
#[derive(Debug, Clone)]
pub struct SessionStore {
    contacts: Arc<RwLock<Vec<Contact>>>,
    revision: Arc<watch::Sender<u64>>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            contacts: Arc::new(RwLock::new(Vec::new())),
            revision: Arc::new(revision),
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for SessionStore {
    fn append(&self, contact: Contact) {
        let count = {
            let mut contacts = self
                .contacts
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            contacts.push(contact);
            contacts.len()
        };

        // Notify after the write guard is released so observers can read.
        self.revision.send_modify(|rev| *rev += 1);
        tracing::debug!(count = count, "Contact appended to session store");
    }

    fn list(&self) -> Vec<Contact> {
        self.contacts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn len(&self) -> usize {
        self.contacts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn subscribe(&self) -> StoreSubscription {
        StoreSubscription::new(self.revision.subscribe())
    }
}
