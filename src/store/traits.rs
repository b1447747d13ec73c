use super::StoreSubscription;
use crate::models::Contact;

/// Append-only, ordered collection of contacts.
///
/// Insertion order is display order. Duplicates are allowed.
pub trait ContactStore: Send + Sync {
    /// Add a contact to the end of the sequence.
    fn append(&self, contact: Contact);

    /// Current contents in insertion order.
    fn list(&self) -> Vec<Contact>;

    /// Number of stored contacts.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Observe future appends.
    fn subscribe(&self) -> StoreSubscription;
}
