/**
 * Server Initialization
 *
 * This module assembles the application: it picks the account store,
 * builds the shared state and configures the router.
 *
 * # Initialization Process
 *
 * 1. Connect to PostgreSQL if `DATABASE_URL` is configured (migrations run
 *    on connect and seed the administrator account)
 * 2. Otherwise use the in-memory store, seeded with the same administrator
 * 3. Build `AppState` (password hasher, token issuer, auth service)
 * 4. Create the router with CORS and request tracing
 */

use axum::Router;
use std::sync::Arc;

use crate::backend::accounts::{AccountStore, PgAccountStore};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Router<()> {
    tracing::info!("Initializing authdesk backend server");

    let app_state = match load_database(config.database_url.as_deref()).await {
        Some(pool) => {
            tracing::info!("Using PostgreSQL account store");
            let accounts: Arc<dyn AccountStore> = Arc::new(PgAccountStore::new(pool));
            AppState::new(accounts, config)
        }
        None => {
            tracing::info!("Using in-memory account store");
            AppState::in_memory(config)
        }
    };

    tracing::info!(
        "Tokens expire after {}s; bcrypt cost {}",
        config.jwt_expires_in.as_secs(),
        config.bcrypt_cost
    );

    create_router(app_state, &config.cors_origins)
}
