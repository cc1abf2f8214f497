//! Application configuration module
//!
//! Provides the client-facing configuration types shared by the desktop app.

use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Base URL of the authdesk API server
    pub server_url: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.server_url.as_deref() {
            Some(url) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                Err(ConfigError::InvalidUrl(url.to_string()))
            }
            _ => Ok(()),
        }
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
}

impl AppConfigBuilder {
    /// Set the server URL
    ///
    /// A trailing slash is dropped so paths can be appended directly.
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        let url: String = url.into();
        self.server_url = Some(url.trim_end_matches('/').to_string());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            server_url: self.server_url,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_trims_trailing_slash() {
        let config = AppConfig::builder()
            .server_url("http://localhost:3000/")
            .build()
            .unwrap();
        assert_eq!(config.server_url.as_deref(), Some("http://localhost:3000"));
    }

    #[test]
    fn test_rejects_non_http_url() {
        let result = AppConfig::builder().server_url("ftp://example.com").build();
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_empty_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
