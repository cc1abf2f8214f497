/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the backend server. Every handler
 * returns `Result<_, BackendError>`, and each variant maps to exactly one HTTP
 * status code.
 *
 * # Error Categories
 *
 * ## Authentication
 *
 * - `InvalidCredentials` - unknown email or wrong password (401)
 * - `AccountDeactivated` - the account exists but is inactive (401)
 * - `InvalidToken` / `ExpiredToken` - bearer token rejected (401)
 * - `Unauthorized` - no usable bearer token on a protected route (401)
 *
 * ## Request
 *
 * - `Validation` - malformed request body, reported per field (400)
 * - `DuplicateEmail` - another account already uses the email (409)
 * - `NotFound` - unknown account id (404)
 *
 * ## Infrastructure
 *
 * - `Database`, `PasswordHash`, `TokenIssue`, `Internal` - internal failures (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::accounts::StoreError;
use crate::shared::{FieldError, SharedError};

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Login attempted on an inactive account
    ///
    /// Reported separately from `InvalidCredentials` so administrators get an
    /// actionable message. This reveals that the account exists.
    #[error("Account is deactivated. Please contact an administrator.")]
    AccountDeactivated,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token has expired")]
    ExpiredToken,

    #[error("Missing or malformed Authorization header")]
    Unauthorized,

    /// Request body failed validation
    #[error("{}", validation_summary(.0))]
    Validation(Vec<FieldError>),

    #[error("An account with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("User with id {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("Token signing error: {0}")]
    TokenIssue(jsonwebtoken::errors::Error),

    /// Server-side fault with no more specific variant, such as a stored
    /// row that no longer decodes or a token lifetime out of range
    #[error("Internal error: {0}")]
    Internal(String),
}

fn validation_summary(errors: &[FieldError]) -> String {
    match errors.first() {
        Some(first) => first.message.clone(),
        None => "Validation failed".to_string(),
    }
}

impl BackendError {
    /// Create a validation error for a single field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldError::new(field, message)])
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - authentication and token failures - 401 Unauthorized
    /// - `Validation` - 400 Bad Request
    /// - `DuplicateEmail` - 409 Conflict
    /// - `NotFound` - 404 Not Found
    /// - infrastructure failures - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials
            | Self::AccountDeactivated
            | Self::InvalidToken
            | Self::ExpiredToken
            | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateEmail(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_)
            | Self::PasswordHash(_)
            | Self::TokenIssue(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message sent to the client
    ///
    /// Infrastructure failures are reported generically; their details only
    /// go to the log.
    pub fn message(&self) -> String {
        match self {
            Self::Database(_)
            | Self::PasswordHash(_)
            | Self::TokenIssue(_)
            | Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }

    /// Per-field details, present only for validation errors
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<Vec<FieldError>> for BackendError {
    fn from(errors: Vec<FieldError>) -> Self {
        Self::Validation(errors)
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { field, message } => Self::validation(field, message),
            SharedError::SerializationError { message } => Self::validation("body", message),
        }
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail(email) => Self::DuplicateEmail(email),
            StoreError::Database(e) => Self::Database(e),
            StoreError::Corrupt(e) => Self::Internal(format!("Corrupt account row: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(BackendError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(BackendError::AccountDeactivated.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(BackendError::ExpiredToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            BackendError::validation("email", "bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            BackendError::DuplicateEmail("a@b.co".to_string()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(BackendError::NotFound(5).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            BackendError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_message_uses_first_field() {
        let error = BackendError::Validation(vec![
            FieldError::new("email", "Email must be a valid address"),
            FieldError::new("password", "Password is required"),
        ]);
        assert_eq!(error.message(), "Email must be a valid address");
        assert_eq!(error.field_errors().map(|f| f.len()), Some(2));
    }

    #[test]
    fn test_corrupt_row_is_server_fault() {
        let error = BackendError::from(StoreError::Corrupt(SharedError::validation(
            "role",
            "Unknown role 'owner'",
        )));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message(), "Internal server error");
        assert!(error.field_errors().is_none());
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let error = BackendError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(error.message(), "Internal server error");
    }

    #[test]
    fn test_from_store_error() {
        let error: BackendError = StoreError::DuplicateEmail("x@y.io".to_string()).into();
        assert!(matches!(error, BackendError::DuplicateEmail(email) if email == "x@y.io"));
    }

    #[test]
    fn test_from_shared_error() {
        let error: BackendError = SharedError::validation("role", "Unknown role").into();
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }
}
