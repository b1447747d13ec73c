use tokio::sync::watch;

/// Observer handle on a store's revision counter.
///
/// The counter is bumped on every append. A fresh subscription starts with
/// the current revision already seen.
#[derive(Debug, Clone)]
pub struct StoreSubscription {
    revision: watch::Receiver<u64>,
}

impl StoreSubscription {
    pub fn new(revision: watch::Receiver<u64>) -> Self {
        Self { revision }
    }

    /// Whether the store changed since the last `mark_seen`.
    ///
    /// A dropped store can no longer change, so this is `false` once the
    /// sender is gone.
    pub fn has_changed(&self) -> bool {
        self.revision.has_changed().unwrap_or(false)
    }

    /// Acknowledge the current revision and return it.
    pub fn mark_seen(&mut self) -> u64 {
        *self.revision.borrow_and_update()
    }

    /// Latest revision without acknowledging it.
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Wait for the next append. Returns `false` if the store was dropped.
    #[cfg(test)]
    pub(crate) async fn changed(&mut self) -> bool {
        self.revision.changed().await.is_ok()
    }
}
