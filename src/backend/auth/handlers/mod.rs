//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── login.rs    - POST /auth/login
//! └── profile.rs  - POST /auth/profile
//! ```
//!
//! # Handlers
//!
//! - **`login`** - public; exchanges credentials for a session token
//! - **`profile`** - protected; returns the account behind the token

/// Login handler
pub mod login;

/// Current user handler
pub mod profile;

pub use login::login;
pub use profile::profile;
