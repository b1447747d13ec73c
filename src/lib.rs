//! Contact Book - capture, validate and browse contacts for one session.
//!
//! A small library behind an interactive terminal shell. Contacts typed into
//! the entry form are validated, appended to an in-memory store, and shown as
//! cards in the gallery. Nothing is persisted: the store lives as long as
//! the session.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (`ContactName`, `EmailAddress`)
//! - **models**: the `Contact` record
//! - **store**: the shared, append-only `ContactStore` and its subscriptions
//! - **ui**: entry form, contact gallery and the view switch
//! - **shell**: line-based event loop driving a `Session`
//! - **config** / **error**: environment configuration and its errors

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod shell;
pub mod store;
pub mod ui;

pub use config::Config;
pub use domain::{ContactName, EmailAddress, ValidationError};
pub use error::ConfigError;
pub use models::Contact;
pub use shell::{Command, Session};
pub use store::{ContactStore, SessionStore, StoreSubscription};
pub use ui::{ContactGallery, EntryForm, SubmitOutcome, View};
