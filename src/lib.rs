//! authdesk - Main Library
//!
//! authdesk is a small user-management application: a REST API that issues
//! JSON Web Tokens and administers user accounts, and a native desktop client
//! for logging in and managing those accounts.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between client and server
//!   - Account wire types (`PublicUser`, request bodies)
//!   - Input validation rules
//!   - Error and configuration types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server and route guard
//!   - Auth service, password hashing, session tokens
//!   - Account storage (PostgreSQL or in-memory)
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Session store (pure reducer over events)
//!   - Command dispatcher running HTTP calls in the background
//!   - Login screen and user administration dashboard
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend modules (on by default)
//!
//! # Usage
//!
//! ## Server
//!
//! ```rust,no_run
//! use authdesk::backend::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Native Desktop App
//!
//! ```text
//! cargo run --bin authdesk_app
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for wire and validation errors
//! - `backend::BackendError` for HTTP handlers (converted to JSON responses)
//! - `egui_app::ClientError` for the desktop client's API calls

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
