/**
 * User Management Handlers
 *
 * CRUD over accounts. All routes sit behind the auth middleware; any
 * authenticated user may call them.
 *
 * # Routes
 *
 * - `GET /users` - all accounts, ordered by id
 * - `GET /users/{id}` - one account
 * - `POST /users` - create (201)
 * - `PATCH /users/{id}` - partial update
 * - `DELETE /users/{id}` - delete (204)
 *
 * Emails are normalized before storage. Passwords are hashed here, so the
 * store only ever receives hashes.
 */

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};

use crate::backend::accounts::{AccountChanges, NewAccount};
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::{
    normalize_email, validate_create_user, validate_update_user, CreateUserRequest, PublicUser,
    UpdateUserRequest,
};

/// List all accounts
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<PublicUser>>, BackendError> {
    let accounts = state.accounts.list().await?;
    Ok(Json(accounts.iter().map(|a| a.to_public()).collect()))
}

/// Fetch one account
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<PublicUser>, BackendError> {
    let Path(id) = path?;
    let account = state
        .accounts
        .find_by_id(id)
        .await?
        .ok_or(BackendError::NotFound(id))?;
    Ok(Json(account.to_public()))
}

/// Create an account
///
/// # Errors
///
/// * `400 Bad Request` - failed validation
/// * `409 Conflict` - the email is already taken
pub async fn create_user(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PublicUser>), BackendError> {
    let Json(request) = body?;
    validate_create_user(&request)?;

    let password_hash = state.auth.hasher().hash(&request.password)?;
    let account = state
        .accounts
        .create(NewAccount {
            email: normalize_email(&request.email),
            first_name: request.first_name.trim().to_string(),
            last_name: request.last_name.trim().to_string(),
            password_hash,
            role: request.role.unwrap_or_default(),
            is_active: request.is_active.unwrap_or(true),
        })
        .await?;

    tracing::info!(
        "User {} created account {} ({})",
        actor.id,
        account.id,
        account.email
    );
    Ok((StatusCode::CREATED, Json(account.to_public())))
}

/// Partially update an account
///
/// Absent fields are left unchanged; a new password is hashed before
/// storage.
///
/// # Errors
///
/// * `400 Bad Request` - failed validation
/// * `404 Not Found` - unknown id
/// * `409 Conflict` - the new email belongs to another account
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<PublicUser>, BackendError> {
    let Path(id) = path?;
    let Json(request) = body?;
    validate_update_user(&request)?;

    let password_hash = request
        .password
        .as_deref()
        .map(|password| state.auth.hasher().hash(password))
        .transpose()?;

    let changes = AccountChanges {
        email: request.email.as_deref().map(normalize_email),
        first_name: request.first_name.map(|name| name.trim().to_string()),
        last_name: request.last_name.map(|name| name.trim().to_string()),
        password_hash,
        role: request.role,
        is_active: request.is_active,
    };

    let account = state
        .accounts
        .update(id, changes)
        .await?
        .ok_or(BackendError::NotFound(id))?;

    tracing::info!("User {} updated account {}", actor.id, account.id);
    Ok(Json(account.to_public()))
}

/// Delete an account
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, BackendError> {
    let Path(id) = path?;
    if !state.accounts.delete(id).await? {
        return Err(BackendError::NotFound(id));
    }

    tracing::info!("User {} deleted account {}", actor.id, id);
    Ok(StatusCode::NO_CONTENT)
}
