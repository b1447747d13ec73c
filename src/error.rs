//! Error types for the contact book.
//!
//! Form validation errors live with the domain values
//! (`crate::domain::ValidationError`); this module holds the errors that can
//! stop the program from starting.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
