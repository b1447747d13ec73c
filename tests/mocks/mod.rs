//! Test doubles for the contact book.

pub mod recording_store;

pub use recording_store::RecordingStore;
