/**
 * In-Memory Account Store
 *
 * Keeps accounts in a `BTreeMap` behind a `tokio::sync::RwLock`, so listing
 * is naturally ordered by id. Ids are assigned from a counter and never
 * reused, like a `BIGSERIAL` column.
 *
 * Used when the server starts without `DATABASE_URL`, and by tests.
 */

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::{
    Account, AccountChanges, AccountStore, NewAccount, StoreError, StoreResult,
    SEED_ADMIN_EMAIL, SEED_ADMIN_PASSWORD_HASH,
};
use crate::shared::UserRole;

#[derive(Default)]
struct Inner {
    accounts: BTreeMap<i64, Account>,
    last_id: i64,
}

impl Inner {
    fn email_taken(&self, email: &str, except: Option<i64>) -> bool {
        self.accounts
            .values()
            .any(|a| a.email == email && Some(a.id) != except)
    }

    fn insert(&mut self, account: NewAccount) -> Account {
        self.last_id += 1;
        let now = Utc::now();
        let stored = Account {
            id: self.last_id,
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
            password_hash: account.password_hash,
            role: account.role,
            is_active: account.is_active,
            created_at: now,
            updated_at: now,
        };
        self.accounts.insert(stored.id, stored.clone());
        stored
    }
}

/// In-memory account store
#[derive(Default)]
pub struct MemoryAccountStore {
    inner: RwLock<Inner>,
}

impl MemoryAccountStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store containing only the seeded administrator account (id 1)
    pub fn seeded() -> Self {
        let mut inner = Inner::default();
        inner.insert(NewAccount {
            email: SEED_ADMIN_EMAIL.to_string(),
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
            password_hash: SEED_ADMIN_PASSWORD_HASH.to_string(),
            role: UserRole::Admin,
            is_active: true,
        });
        Self {
            inner: RwLock::new(inner),
        }
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Account>> {
        Ok(self.inner.read().await.accounts.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Account>> {
        let inner = self.inner.read().await;
        Ok(inner.accounts.values().find(|a| a.email == email).cloned())
    }

    async fn list(&self) -> StoreResult<Vec<Account>> {
        Ok(self.inner.read().await.accounts.values().cloned().collect())
    }

    async fn create(&self, account: NewAccount) -> StoreResult<Account> {
        let mut inner = self.inner.write().await;
        if inner.email_taken(&account.email, None) {
            return Err(StoreError::DuplicateEmail(account.email));
        }
        Ok(inner.insert(account))
    }

    async fn update(&self, id: i64, changes: AccountChanges) -> StoreResult<Option<Account>> {
        let mut inner = self.inner.write().await;
        if let Some(email) = &changes.email {
            if inner.email_taken(email, Some(id)) {
                return Err(StoreError::DuplicateEmail(email.clone()));
            }
        }

        let Some(account) = inner.accounts.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(email) = changes.email {
            account.email = email;
        }
        if let Some(first_name) = changes.first_name {
            account.first_name = first_name;
        }
        if let Some(last_name) = changes.last_name {
            account.last_name = last_name;
        }
        if let Some(password_hash) = changes.password_hash {
            account.password_hash = password_hash;
        }
        if let Some(role) = changes.role {
            account.role = role;
        }
        if let Some(is_active) = changes.is_active {
            account.is_active = is_active;
        }
        account.updated_at = Utc::now();

        Ok(Some(account.clone()))
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        Ok(self.inner.write().await.accounts.remove(&id).is_some())
    }
}
