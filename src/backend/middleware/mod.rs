//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - bearer token guard for protected routes, plus the
//!   `AuthUser` extractor handlers use to read the authenticated identity
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use authdesk::backend::middleware::auth_middleware;
//!
//! let protected = Router::new()
//!     .route("/users", get(list_users))
//!     .route_layer(from_fn_with_state(state.clone(), auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
