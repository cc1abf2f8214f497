/**
 * Authentication Middleware
 *
 * This module provides the request guard for protected routes. It extracts
 * the bearer token from the Authorization header, verifies it, and attaches
 * the token's identity to the request before any handler runs.
 *
 * The guard trusts the token alone and never consults the account store.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::Claims;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::UserRole;

/// Authenticated user data extracted from the session token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
            role: claims.role,
            first_name: claims.first_name,
            last_name: claims.last_name,
        }
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, BackendError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::Unauthorized
        })?;

    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            BackendError::Unauthorized
        })
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Attaches an `AuthenticatedUser` to the request extensions
///
/// Responds 401 if the token is missing, invalid or expired.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers())?;

    let claims = app_state.auth.tokens().verify(token).map_err(|e| {
        tracing::warn!("Rejected token: {}", e);
        e
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser::from(claims));

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only usable on routes behind `auth_middleware`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::Unauthorized
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extracted() {
        let headers = headers("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            bearer_token(&HeaderMap::new()),
            Err(BackendError::Unauthorized)
        ));
    }

    #[test]
    fn test_wrong_scheme() {
        assert!(matches!(
            bearer_token(&headers("Basic dXNlcjpwYXNz")),
            Err(BackendError::Unauthorized)
        ));
        assert!(matches!(
            bearer_token(&headers("Bearer ")),
            Err(BackendError::Unauthorized)
        ));
    }

    #[test]
    fn test_authenticated_user_from_claims() {
        let claims = Claims {
            sub: 3,
            email: "jane@example.com".to_string(),
            role: UserRole::Admin,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            iat: 0,
            exp: 10,
        };
        let user = AuthenticatedUser::from(claims);
        assert_eq!(user.id, 3);
        assert_eq!(user.role, UserRole::Admin);
    }
}
