//! Authentication Module
//!
//! Password hashing, session tokens, credential checking and the HTTP
//! handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - bcrypt password hasher
//! ├── sessions.rs     - JWT issuing and verification
//! ├── service.rs      - AuthService (login, credential checks, profile)
//! └── handlers/       - HTTP handlers
//!     ├── login.rs    - POST /auth/login
//!     └── profile.rs  - POST /auth/profile
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: email and password → credentials verified → token returned
//! 2. **Requests**: token in `Authorization: Bearer` → verified by the guard
//! 3. **Profile**: token → current account returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are HS256 JWTs, valid for 24 hours by default
//! - Unknown email and wrong password are indistinguishable (401)

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Authentication service
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, profile};
pub use password::PasswordHasher;
pub use service::AuthService;
pub use sessions::{Claims, TokenIdentity, TokenIssuer};
