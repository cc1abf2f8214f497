/**
 * Auth Service
 *
 * Credential checking and token issuance, independent of HTTP.
 *
 * # Login Outcomes
 *
 * | Account | Password | Result |
 * |---|---|---|
 * | absent | any | `InvalidCredentials` |
 * | inactive | any | `AccountDeactivated` |
 * | active | wrong | `InvalidCredentials` |
 * | active | right | token + public user |
 *
 * The deactivated check runs before the password check, so it reveals that
 * the account exists. Logging in never modifies the account.
 */

use std::sync::Arc;

use crate::backend::accounts::{Account, AccountStore};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::{TokenIdentity, TokenIssuer};
use crate::backend::error::BackendError;
use crate::shared::{normalize_email, LoginResponse, PublicUser};

/// Why a credential check failed
enum CredentialCheck {
    Valid(Account),
    UnknownAccount,
    Deactivated,
    WrongPassword,
}

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    accounts: Arc<dyn AccountStore>,
    hasher: PasswordHasher,
    tokens: TokenIssuer,
}

impl AuthService {
    pub fn new(accounts: Arc<dyn AccountStore>, hasher: PasswordHasher, tokens: TokenIssuer) -> Self {
        Self {
            accounts,
            hasher,
            tokens,
        }
    }

    pub fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }

    pub fn hasher(&self) -> &PasswordHasher {
        &self.hasher
    }

    async fn check(&self, email: &str, password: &str) -> Result<CredentialCheck, BackendError> {
        let email = normalize_email(email);
        let Some(account) = self.accounts.find_by_email(&email).await? else {
            return Ok(CredentialCheck::UnknownAccount);
        };

        if !account.is_active {
            return Ok(CredentialCheck::Deactivated);
        }

        if self.hasher.verify(password, &account.password_hash)? {
            Ok(CredentialCheck::Valid(account))
        } else {
            Ok(CredentialCheck::WrongPassword)
        }
    }

    /// Authenticate and issue a session token
    ///
    /// # Errors
    ///
    /// * `InvalidCredentials` - unknown email or wrong password
    /// * `AccountDeactivated` - the account is inactive
    /// * infrastructure errors from the store, hasher or token signer
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, BackendError> {
        match self.check(email, password).await? {
            CredentialCheck::Valid(account) => {
                let access_token = self.tokens.issue(&TokenIdentity::from(&account))?;
                tracing::info!("User logged in: {} (id {})", account.email, account.id);
                Ok(LoginResponse {
                    access_token,
                    user: account.to_public(),
                })
            }
            CredentialCheck::UnknownAccount => {
                tracing::warn!("Login failed: no account for {}", normalize_email(email));
                Err(BackendError::InvalidCredentials)
            }
            CredentialCheck::Deactivated => {
                tracing::warn!("Login refused: account {} is deactivated", normalize_email(email));
                Err(BackendError::AccountDeactivated)
            }
            CredentialCheck::WrongPassword => {
                tracing::warn!("Login failed: wrong password for {}", normalize_email(email));
                Err(BackendError::InvalidCredentials)
            }
        }
    }

    /// Check credentials without issuing a token
    ///
    /// Returns `None` for any credential failure, without saying which.
    pub async fn validate_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<PublicUser>, BackendError> {
        match self.check(email, password).await? {
            CredentialCheck::Valid(account) => Ok(Some(account.to_public())),
            _ => Ok(None),
        }
    }

    /// Public projection of an account
    pub fn get_profile(&self, account: &Account) -> PublicUser {
        account.to_public()
    }
}
