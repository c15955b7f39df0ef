//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A runner setting has an unusable value.
    #[error("invalid setting `{name}`: {message}")]
    InvalidSetting {
        /// Name of the setting (environment variable or field).
        name: String,
        /// What is wrong with it.
        message: String,
    },
}

impl DomainError {
    /// Creates an `InvalidSetting` error.
    #[must_use]
    pub fn invalid_setting(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSetting {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
