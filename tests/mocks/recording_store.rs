use contact_book::models::Contact;
use contact_book::store::{ContactStore, SessionStore, StoreSubscription};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact store for testing.
///
/// Delegates to a real `SessionStore` and tracks method calls so tests can
/// verify how the form and gallery use the store.
#[allow(dead_code)]
#[derive(Clone)]
pub struct RecordingStore {
    inner: SessionStore,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl RecordingStore {
    /// Create a new empty RecordingStore.
    pub fn new() -> Self {
        Self {
            inner: SessionStore::new(),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Seed contacts without counting the appends.
    pub fn seed(&self, contacts: Vec<Contact>) {
        for contact in contacts {
            self.inner.append(contact);
        }
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for RecordingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for RecordingStore {
    fn append(&self, contact: Contact) {
        self.track_call("append");
        self.inner.append(contact);
    }

    fn list(&self) -> Vec<Contact> {
        self.track_call("list");
        self.inner.list()
    }

    fn len(&self) -> usize {
        self.track_call("len");
        self.inner.len()
    }

    fn subscribe(&self) -> StoreSubscription {
        self.track_call("subscribe");
        self.inner.subscribe()
    }
}
