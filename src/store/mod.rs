//! Contact store.
//!
//! The store is the single piece of shared state in a session. It is owned
//! by whoever builds the session and handed to the entry form and the
//! gallery as an `Arc<dyn ContactStore>`.

mod session_store;
mod subscription;
mod traits;

pub use session_store::SessionStore;
pub use subscription::StoreSubscription;
pub use traits::ContactStore;
