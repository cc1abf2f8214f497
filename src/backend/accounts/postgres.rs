/**
 * PostgreSQL Account Store
 *
 * Stores accounts in the `users` table created by the migrations in
 * `migrations/`. Roles are stored as text and parsed back on read.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::{Account, AccountChanges, AccountStore, NewAccount, StoreError, StoreResult};

const ACCOUNT_COLUMNS: &str =
    "id, email, first_name, last_name, password_hash, role, is_active, created_at, updated_at";

/// Raw row of the `users` table
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: i64,
    email: String,
    first_name: String,
    last_name: String,
    password_hash: String,
    role: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = StoreError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(Account {
            id: row.id,
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
            password_hash: row.password_hash,
            role: row.role.parse()?,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Map a unique violation on `users.email` to `DuplicateEmail`
fn map_write_error(err: sqlx::Error, email: Option<&str>) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StoreError::DuplicateEmail(email.unwrap_or_default().to_string())
        }
        _ => StoreError::Database(err),
    }
}

/// PostgreSQL account store
#[derive(Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Account::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Account::try_from).transpose()
    }

    async fn list(&self) -> StoreResult<Vec<Account>> {
        let rows = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM users ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Account::try_from).collect()
    }

    async fn create(&self, account: NewAccount) -> StoreResult<Account> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            r#"
            INSERT INTO users (email, first_name, last_name, password_hash, role, is_active)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {ACCOUNT_COLUMNS}
            "#
        ))
        .bind(&account.email)
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(&account.password_hash)
        .bind(account.role.as_str())
        .bind(account.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, Some(&account.email)))?;

        Account::try_from(row)
    }

    async fn update(&self, id: i64, changes: AccountChanges) -> StoreResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            r#"
            UPDATE users
            SET email = COALESCE($1, email),
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                password_hash = COALESCE($4, password_hash),
                role = COALESCE($5, role),
                is_active = COALESCE($6, is_active),
                updated_at = NOW()
            WHERE id = $7
            RETURNING {ACCOUNT_COLUMNS}
            "#
        ))
        .bind(changes.email.as_deref())
        .bind(changes.first_name.as_deref())
        .bind(changes.last_name.as_deref())
        .bind(changes.password_hash.as_deref())
        .bind(changes.role.map(|role| role.as_str()))
        .bind(changes.is_active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, changes.email.as_deref()))?;

        row.map(Account::try_from).transpose()
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::UserRole;

    fn row(role: &str) -> AccountRow {
        AccountRow {
            id: 4,
            email: "jane@example.com".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            password_hash: "hash".to_string(),
            role: role.to_string(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_conversion_parses_role() {
        let account = Account::try_from(row("admin")).unwrap();
        assert_eq!(account.role, UserRole::Admin);
        assert_eq!(account.id, 4);
    }

    #[test]
    fn test_row_conversion_rejects_unknown_role() {
        assert!(matches!(
            Account::try_from(row("superuser")),
            Err(StoreError::Corrupt(_))
        ));
    }

    #[test]
    fn test_non_unique_errors_pass_through() {
        let err = map_write_error(sqlx::Error::RowNotFound, Some("a@b.co"));
        assert!(matches!(err, StoreError::Database(_)));
    }
}
