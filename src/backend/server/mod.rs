//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! - **`config`** - `ServerConfig` from environment variables, database loading
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`init`** - application assembly
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs     - Module exports and documentation
//! ├── config.rs  - Environment configuration and database loading
//! ├── state.rs   - AppState and FromRef implementations
//! └── init.rs    - Application assembly
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use authdesk::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await;
//! # Ok(())
//! # }
//! ```

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
