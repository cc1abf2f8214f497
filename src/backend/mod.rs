//! Backend Module
//!
//! All server-side code for authdesk: an Axum REST API for logging in and
//! administering user accounts, authenticated with JSON Web Tokens.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - configuration, application state, initialization
//! - **`routes`** - route tables and router assembly
//! - **`accounts`** - `AccountStore` trait with PostgreSQL and in-memory stores
//! - **`auth`** - password hashing, session tokens, `AuthService`, auth handlers
//! - **`users`** - account CRUD handlers
//! - **`middleware`** - bearer token guard
//! - **`error`** - `BackendError` and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - authdesk-server entry point
//! ├── server/         - Configuration, state, initialization
//! ├── routes/         - Route configuration
//! ├── accounts/       - Account persistence
//! ├── auth/           - Authentication
//! ├── users/          - Account CRUD
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! 1. `POST /auth/login` checks credentials through `AuthService` and returns
//!    a signed token
//! 2. Every other API route runs `auth_middleware` first, which verifies the
//!    token and attaches an `AuthenticatedUser` to the request
//! 3. Handlers read and write accounts through `AppState::accounts`
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`; the error converts itself into
//! a JSON body with the matching status code.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Account persistence
pub mod accounts;

/// Authentication
pub mod auth;

/// Account CRUD handlers
pub mod users;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
