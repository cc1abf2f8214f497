//! Route Configuration Module
//!
//! Configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router assembly, CORS and tracing layers
//! └── api_routes.rs   - Public and protected route tables
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use authdesk::backend::routes::create_router;
//! use authdesk::backend::server::{AppState, ServerConfig};
//!
//! let config = ServerConfig::default();
//! let router = create_router(AppState::in_memory(&config), &config.cors_origins);
//! ```

/// Router assembly
pub mod router;

/// API route tables
pub mod api_routes;

pub use router::create_router;
