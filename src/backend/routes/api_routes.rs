/**
 * API Routes
 *
 * # Routes
 *
 * ## Public
 * - `POST /auth/login` - exchange credentials for a token
 * - `GET /health` - liveness check
 *
 * ## Protected (bearer token required)
 * - `POST /auth/profile` - current user
 * - `GET /users`, `POST /users`
 * - `GET /users/{id}`, `PATCH /users/{id}`, `DELETE /users/{id}`
 */

use axum::{
    middleware::from_fn_with_state,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};

use crate::backend::auth::{login, profile};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;
use crate::backend::users::{create_user, delete_user, get_user, list_users, update_user};

/// Liveness check
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Configure public routes
pub fn configure_public_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/auth/login", post(login))
        .route("/health", get(health))
}

/// Configure protected routes
///
/// The auth middleware is added with `route_layer`, so it only runs for
/// requests that match one of these routes; unknown paths still get 404.
pub fn configure_protected_routes(app_state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/auth/profile", post(profile))
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).patch(update_user).delete(delete_user),
        )
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware))
}
