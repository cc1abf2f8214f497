/**
 * Session Tokens
 *
 * This module issues and verifies the HS256 JSON Web Tokens that carry a
 * session. A token embeds the account id, email, role and names, so the
 * request guard never has to touch the account store.
 *
 * # Claims
 *
 * ```json
 * {
 *   "sub": 1,
 *   "email": "admin@example.com",
 *   "role": "admin",
 *   "firstName": "Admin",
 *   "lastName": "User",
 *   "iat": 1720455000,
 *   "exp": 1720541400
 * }
 * ```
 *
 * # Revocation
 *
 * There is none. A token stays valid until `exp` even if the account is
 * deactivated or deleted afterwards.
 */

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::backend::accounts::Account;
use crate::backend::error::BackendError;
use crate::shared::UserRole;

/// Default token lifetime (24 hours)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Account id
    pub sub: i64,
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// The identity a token is issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenIdentity {
    pub id: i64,
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
}

impl From<&Account> for TokenIdentity {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            role: account.role,
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
        }
    }
}

impl Claims {
    pub fn identity(&self) -> TokenIdentity {
        TokenIdentity {
            id: self.sub,
            email: self.email.clone(),
            role: self.role,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Issues and verifies session tokens with a server-held secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer for the given secret and token lifetime
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token valid from now
    pub fn issue(&self, identity: &TokenIdentity) -> Result<String, BackendError> {
        self.issue_at(identity, Utc::now())
    }

    /// Issue a token as if it had been created at `issued_at`
    pub fn issue_at(
        &self,
        identity: &TokenIdentity,
        issued_at: DateTime<Utc>,
    ) -> Result<String, BackendError> {
        let iat = issued_at.timestamp();
        let exp = i64::try_from(self.ttl.as_secs())
            .ok()
            .and_then(|ttl| iat.checked_add(ttl))
            .ok_or_else(|| {
                tracing::error!("Token lifetime of {}s is out of range", self.ttl.as_secs());
                BackendError::Internal("Token lifetime out of range".to_string())
            })?;

        let claims = Claims {
            sub: identity.id,
            email: identity.email.clone(),
            role: identity.role,
            first_name: identity.first_name.clone(),
            last_name: identity.last_name.clone(),
            iat,
            exp,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign token: {:?}", e);
            BackendError::TokenIssue(e)
        })
    }

    /// Verify a token's signature and expiry and return its claims
    ///
    /// # Errors
    ///
    /// * `ExpiredToken` - the token is past `exp` (no leeway)
    /// * `InvalidToken` - anything else: bad signature, malformed token,
    ///   unexpected algorithm, missing claims
    pub fn verify(&self, token: &str) -> Result<Claims, BackendError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => BackendError::ExpiredToken,
                _ => BackendError::InvalidToken,
            })
    }
}
