//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the desktop client and the backend. These types define the JSON bodies of the
//! REST API, the input validation rules both sides apply, and common errors.
//!
//! # Overview
//!
//! The shared module is platform-agnostic: nothing in here touches the network,
//! the database or the UI.

/// Account wire types (public user view, request bodies)
pub mod account;

/// Input validation rule lists
pub mod validation;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use account::{
    normalize_email, CreateUserRequest, LoginRequest, LoginResponse, PublicUser,
    UpdateUserRequest, UserRole,
};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
pub use validation::{validate_create_user, validate_login, validate_update_user, FieldError};
