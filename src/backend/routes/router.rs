/**
 * Router Configuration
 *
 * Combines the public and protected routes into a single Axum router and
 * adds the cross-cutting layers.
 *
 * # Layers
 *
 * - `TraceLayer` - one tracing span per request
 * - `CorsLayer` - allows the configured client origins
 */

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::routes::api_routes::{configure_protected_routes, configure_public_routes};
use crate::backend::server::state::AppState;

/// Build the CORS layer for the given origins
///
/// Origins that are not valid header values are skipped with a warning.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - account store and auth service
/// * `cors_origins` - origins allowed to call the API from a browser
pub fn create_router(app_state: AppState, cors_origins: &[String]) -> Router<()> {
    let router = configure_public_routes(Router::new());
    let router = router.merge(configure_protected_routes(&app_state));

    router
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
