/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables and
 * opens the optional PostgreSQL database.
 *
 * # Variables
 *
 * | Variable | Default |
 * |---|---|
 * | `SERVER_PORT` | `3000` |
 * | `DATABASE_URL` | unset: in-memory store |
 * | `JWT_SECRET` | development fallback, logged as a warning |
 * | `JWT_EXPIRES_IN` | `24h` (`s`, `m`, `h`, `d` suffixes or bare seconds) |
 * | `BCRYPT_COST` | `bcrypt::DEFAULT_COST` |
 * | `CORS_ORIGINS` | `http://localhost:4200` (comma separated) |
 *
 * # Error Handling
 *
 * Malformed values are configuration errors and stop startup. A database
 * that cannot be reached is logged and the server continues on the
 * in-memory store.
 */

use sqlx::PgPool;
use std::time::Duration;

use crate::backend::auth::sessions::DEFAULT_TOKEN_TTL;
use crate::shared::ConfigError;

/// Secret used when `JWT_SECRET` is not set
const FALLBACK_JWT_SECRET: &str = "authdesk-development-secret-change-me";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:4200";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub jwt_expires_in: Duration,
    pub bcrypt_cost: u32,
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            jwt_secret: FALLBACK_JWT_SECRET.to_string(),
            jwt_expires_in: DEFAULT_TOKEN_TTL,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let port = match var("SERVER_PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "SERVER_PORT",
                value,
            })?,
            None => defaults.port,
        };

        let jwt_secret = var("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET not set. Using an insecure development secret.");
            defaults.jwt_secret.clone()
        });

        let jwt_expires_in = match var("JWT_EXPIRES_IN") {
            Some(value) => parse_duration(&value).ok_or(ConfigError::InvalidValue {
                name: "JWT_EXPIRES_IN",
                value,
            })?,
            None => defaults.jwt_expires_in,
        };

        let bcrypt_cost = match var("BCRYPT_COST") {
            Some(value) => value
                .parse::<u32>()
                .ok()
                .filter(|cost| (4..=31).contains(cost))
                .ok_or(ConfigError::InvalidValue {
                    name: "BCRYPT_COST",
                    value,
                })?,
            None => defaults.bcrypt_cost,
        };

        let cors_origins = match var("CORS_ORIGINS") {
            Some(value) => value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => defaults.cors_origins,
        };

        Ok(Self {
            port,
            database_url: var("DATABASE_URL"),
            jwt_secret,
            jwt_expires_in,
            bcrypt_cost,
            cors_origins,
        })
    }
}

/// Longest accepted duration: ten years
///
/// Token expiry is `iat + ttl` in signed seconds, so the lifetime has to stay
/// well inside `i64`.
pub const MAX_DURATION_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// Parse a duration such as `90`, `30s`, `15m`, `24h` or `7d`
///
/// Bare numbers are seconds. Zero and anything above `MAX_DURATION_SECS`
/// are rejected.
pub fn parse_duration(value: &str) -> Option<Duration> {
    let value = value.trim();
    let (digits, multiplier) = match value.chars().last()? {
        's' => (&value[..value.len() - 1], 1),
        'm' => (&value[..value.len() - 1], 60),
        'h' => (&value[..value.len() - 1], 60 * 60),
        'd' => (&value[..value.len() - 1], 24 * 60 * 60),
        c if c.is_ascii_digit() => (value, 1),
        _ => return None,
    };

    let amount: u64 = digits.trim().parse().ok()?;
    if amount == 0 {
        return None;
    }
    amount
        .checked_mul(multiplier)
        .filter(|secs| *secs <= MAX_DURATION_SECS)
        .map(Duration::from_secs)
}

/// Connect to PostgreSQL and run migrations
///
/// # Returns
///
/// - `Some(PgPool)` if the database is reachable
/// - `None` if `database_url` is `None` or the connection fails
///
/// Migration failures are logged; the pool is still returned.
pub async fn load_database(database_url: Option<&str>) -> Option<PgPool> {
    let Some(database_url) = database_url else {
        tracing::warn!("DATABASE_URL not set. Accounts will be kept in memory.");
        return None;
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Falling back to the in-memory account store.");
            return None;
        }
    };

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed successfully"),
        Err(e) => tracing::error!("Failed to run database migrations: {}", e),
    }

    Some(pool)
}
