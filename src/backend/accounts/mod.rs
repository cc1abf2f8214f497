//! Account Storage
//!
//! This module owns the persisted account model and the `AccountStore`
//! abstraction the rest of the backend talks to.
//!
//! # Implementations
//!
//! - **`postgres`** - `PgAccountStore`, backed by the `users` table
//! - **`memory`** - `MemoryAccountStore`, used when no database is configured
//!   and by the test suite
//!
//! Both implementations store emails normalized (trimmed, lowercased) and
//! report a clash on the unique email column as `StoreError::DuplicateEmail`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

use crate::shared::{PublicUser, SharedError, UserRole};

/// PostgreSQL account store
pub mod postgres;

/// In-memory account store
pub mod memory;

pub use memory::MemoryAccountStore;
pub use postgres::PgAccountStore;

/// Email of the administrator account created on first start
pub const SEED_ADMIN_EMAIL: &str = "admin@example.com";

/// bcrypt hash of the seeded administrator's password
///
/// Matches the row inserted by the initial migration.
pub const SEED_ADMIN_PASSWORD_HASH: &str =
    "$2b$10$qzpzXs.jB3VEeiqd/PwJAeH5.mInRYlKyr4Kz42a/YMpnSsUntoDO";

/// A stored account, including its password hash
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Public view of the account, without the password hash
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            role: self.role,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

// The hash stays out of logs.
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("is_active", &self.is_active)
            .finish_non_exhaustive()
    }
}

/// Data for a new account
///
/// The password is already hashed; stores never see plaintext.
#[derive(Clone)]
pub struct NewAccount {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub role: UserRole,
    pub is_active: bool,
}

/// A partial update; `None` leaves the column unchanged
#[derive(Clone, Default)]
pub struct AccountChanges {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}

/// Account store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email '{0}' is already taken")]
    DuplicateEmail(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored row could not be mapped back to an `Account`
    #[error("corrupt account row: {0}")]
    Corrupt(#[from] SharedError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Account persistence
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Find an account by id
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Account>>;

    /// Find an account by normalized email
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Account>>;

    /// All accounts, ordered by id
    async fn list(&self) -> StoreResult<Vec<Account>>;

    /// Insert a new account
    async fn create(&self, account: NewAccount) -> StoreResult<Account>;

    /// Apply a partial update; `None` when the id is unknown
    async fn update(&self, id: i64, changes: AccountChanges) -> StoreResult<Option<Account>>;

    /// Remove an account; `false` when the id is unknown
    async fn delete(&self, id: i64) -> StoreResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_password_hash() {
        let now = Utc::now();
        let account = Account {
            id: 1,
            email: SEED_ADMIN_EMAIL.to_string(),
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
            password_hash: SEED_ADMIN_PASSWORD_HASH.to_string(),
            role: UserRole::Admin,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        let debug = format!("{:?}", account);
        assert!(!debug.contains("$2b$"));
        assert!(debug.contains("admin@example.com"));
        assert_eq!(account.to_public().email, SEED_ADMIN_EMAIL);
    }
}
