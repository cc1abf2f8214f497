/**
 * Account Wire Types
 *
 * This module defines the account representations exchanged between the
 * backend and the desktop client. None of these types carry a password hash;
 * the only place a plaintext password appears is in request bodies.
 *
 * # Wire Format
 *
 * Field names follow the camelCase JSON convention used by the REST API:
 *
 * ```json
 * {
 *   "id": 1,
 *   "email": "admin@example.com",
 *   "firstName": "Admin",
 *   "lastName": "User",
 *   "role": "admin",
 *   "isActive": true,
 *   "createdAt": "2024-07-08T00:00:00Z",
 *   "updatedAt": "2024-07-08T00:00:00Z"
 * }
 * ```
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::SharedError;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Administrator, may manage every account
    Admin,
    /// Standard user
    #[default]
    User,
}

impl UserRole {
    /// Wire/database representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            other => Err(SharedError::validation(
                "role",
                format!("Unknown role '{}'", other),
            )),
        }
    }
}

/// Public view of an account
///
/// This is the only account shape that ever leaves the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PublicUser {
    /// "First Last" for display
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Login request body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed bearer token
    pub access_token: String,
    /// Public view of the authenticated account
    pub user: PublicUser,
}

/// Body of `POST /users`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    /// Defaults to [`UserRole::User`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    /// Defaults to `true`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Body of `PATCH /users/{id}`
///
/// Every field is optional; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UpdateUserRequest {
    /// True when the request would not change anything
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Normalize an email for storage and lookup
///
/// Emails are compared case-insensitively, so both sides of every comparison
/// go through this function.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
