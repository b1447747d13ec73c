//! Screens of the contact book.
//!
//! - **view**: the Form / Contact List switch and the navigation bar
//! - **form**: the entry form that validates input and appends to the store
//! - **gallery**: the read-only card grid over the store
//! - **text**: helpers for putting user text into fixed-width cells

pub mod form;
pub mod gallery;
pub mod text;
pub mod view;

pub use form::{EntryForm, SubmitOutcome};
pub use gallery::{Card, CardLayout, ContactGallery, EMPTY_GALLERY_MESSAGE};
pub use view::{View, ViewSwitch};
