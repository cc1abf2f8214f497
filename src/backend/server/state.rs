/**
 * Application State Management
 *
 * This module defines the application state shared by every handler and
 * the `FromRef` implementations for Axum state extraction.
 *
 * # Thread Safety
 *
 * - the account store is an `Arc<dyn AccountStore>`; implementations handle
 *   their own synchronization (connection pool or `RwLock`)
 * - `AuthService` is immutable after startup and shared through an `Arc`
 *
 * # Example
 *
 * ```rust,ignore
 * use axum::extract::State;
 * use authdesk::backend::server::state::AppState;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let accounts = state.accounts.list().await;
 * }
 * ```
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::accounts::{AccountStore, MemoryAccountStore};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::server::config::ServerConfig;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Account persistence
    pub accounts: Arc<dyn AccountStore>,

    /// Credential checks and token issuing/verification
    pub auth: Arc<AuthService>,
}

impl AppState {
    /// Build the state around an account store
    pub fn new(accounts: Arc<dyn AccountStore>, config: &ServerConfig) -> Self {
        let auth = AuthService::new(
            accounts.clone(),
            PasswordHasher::new(config.bcrypt_cost),
            TokenIssuer::new(&config.jwt_secret, config.jwt_expires_in),
        );

        Self {
            accounts,
            auth: Arc::new(auth),
        }
    }

    /// State backed by an in-memory store holding the seeded administrator
    pub fn in_memory(config: &ServerConfig) -> Self {
        Self::new(Arc::new(MemoryAccountStore::seeded()), config)
    }
}

impl FromRef<AppState> for Arc<dyn AccountStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.accounts.clone()
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
