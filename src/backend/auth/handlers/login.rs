/**
 * Login Handler
 *
 * This module implements the authentication handler for POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Validate the request body (well-formed email, non-empty password)
 * 2. Delegate to `AuthService::login`
 * 3. Return the token and the public view of the account
 *
 * # Security
 *
 * - Unknown email and wrong password both return 401 "Invalid credentials"
 * - A deactivated account returns 401 with its own message
 * - Passwords and tokens are never logged
 */

use axum::{extract::rejection::JsonRejection, extract::State, response::Json};
use std::sync::Arc;

use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::shared::{validate_login, LoginRequest, LoginResponse};

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - malformed body or failed validation
/// * `401 Unauthorized` - invalid credentials or deactivated account
/// * `500 Internal Server Error` - store, hashing or signing failure
///
/// # Example Request
///
/// ```http
/// POST /auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "admin@example.com",
///   "password": "Admin@2024#Secure!"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "user": { "id": 1, "email": "admin@example.com", "role": "admin", ... }
/// }
/// ```
pub async fn login(
    State(auth): State<Arc<AuthService>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, BackendError> {
    let Json(request) = body?;
    validate_login(&request)?;

    let response = auth.login(&request.email, &request.password).await?;
    Ok(Json(response))
}
