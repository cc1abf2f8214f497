/**
 * Profile Handler
 *
 * POST /auth/profile resolves the bearer token into the current public user.
 * The client uses it on startup to check a stored token before trusting it.
 */

use axum::{extract::State, response::Json};

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::PublicUser;

/// Profile handler
///
/// Runs behind the auth middleware, so the token is already verified.
///
/// # Errors
///
/// * `401 Unauthorized` - missing, invalid or expired token (from the guard)
/// * `404 Not Found` - the account was deleted after the token was issued
pub async fn profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<PublicUser>, BackendError> {
    let account = state.accounts.find_by_id(user.id).await?.ok_or_else(|| {
        tracing::warn!("Profile requested for missing account {}", user.id);
        BackendError::NotFound(user.id)
    })?;

    Ok(Json(state.auth.get_profile(&account)))
}
