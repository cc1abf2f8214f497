//! Shared Error Types
//!
//! This module defines error types that are shared between the backend and the
//! desktop client. These errors represent common failure cases that can occur in
//! both contexts.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON serialization/deserialization failures
//! - `ValidationError` - Input validation failures, tied to a field
//!
//! # Usage
//!
//! ```rust
//! use authdesk::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "Email must be a valid address");
//! ```
use thiserror::Error;

use crate::shared::validation::FieldError;

/// Shared error types that can occur in both client and backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

impl From<FieldError> for SharedError {
    fn from(err: FieldError) -> Self {
        Self::validation(err.field, err.message)
    }
}
