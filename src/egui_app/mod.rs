//! egui Native Desktop App Module
//!
//! This module provides the authdesk desktop client: a login screen and a
//! user administration dashboard talking to the Axum backend.
//!
//! # Architecture
//!
//! - **`config`** - Server URL configuration
//! - **`api`** - Async HTTP client for the REST API
//! - **`token_store`** - Session token persistence on disk
//! - **`session`** - Session state and its pure reducer
//! - **`commands`** - Commands, their side effects, and the dispatcher
//! - **`guard`** - Route guard for protected views
//! - **`types`** - Views and navigation outcomes
//! - **`state`** - UI state shared across views
//! - **`views`** / **`theme`** - egui rendering
//!
//! # Data Flow
//!
//! ```text
//! view --Command--> Dispatcher --requested Event--> reduce
//!                        |
//!                        +--> handler (HTTP, token store) --Event--> reduce
//! ```

pub mod api;
pub mod commands;
pub mod config;
pub mod guard;
pub mod session;
pub mod state;
pub mod theme;
pub mod token_store;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use api::{ApiClient, ClientError};
pub use commands::{Command, Dispatcher};
pub use config::Config;
pub use guard::authorize;
pub use session::{reduce, Event, SessionState};
pub use state::{AppState, UserForm};
pub use token_store::TokenStore;
pub use types::{Navigation, View};
