/**
 * Error Conversion
 *
 * This module converts backend errors into HTTP responses so handlers can
 * return `Result<_, BackendError>` directly.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "error": "Email must be a valid address",
 *   "status": 400,
 *   "fields": [{ "field": "email", "message": "Email must be a valid address" }]
 * }
 * ```
 *
 * `fields` is only present for validation failures. Bodies that fail to
 * deserialize are reported as a validation failure of the field `body`;
 * path parameters that fail to parse, of the field `id`.
 */

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::backend::error::types::BackendError;
use crate::shared::FieldError;

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<&'a [FieldError]>,
}

impl IntoResponse for BackendError {
    /// Convert a backend error into an HTTP response
    ///
    /// Internal failures are logged here with their full detail; the client
    /// only sees a generic message.
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {}", self);
        }

        let body = ErrorBody {
            error: self.message(),
            status: status.as_u16(),
            fields: self.field_errors(),
        };

        (status, Json(body)).into_response()
    }
}

/// Malformed or mistyped request bodies are validation errors
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        BackendError::validation("body", rejection.body_text())
    }
}

/// Unparseable path parameters are validation errors
impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        tracing::warn!("Rejected path parameter: {}", rejection.body_text());
        BackendError::validation("id", rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_body_includes_fields() {
        let error = BackendError::validation("email", "Email must be a valid address");
        let body = ErrorBody {
            error: error.message(),
            status: error.status_code().as_u16(),
            fields: error.field_errors(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], 400);
        assert_eq!(json["fields"][0]["field"], "email");
    }

    #[test]
    fn test_not_found_response_status() {
        let error = BackendError::NotFound(3);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
