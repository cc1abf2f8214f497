use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Client configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig {
                server_url: Some(DEFAULT_SERVER_URL.to_string()),
            },
        }
    }
}

impl Config {
    /// Create a configuration pointing at the default local server
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `CLIENT_API_URL`, falling back to the default server
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var("CLIENT_API_URL") {
            Ok(url) if !url.trim().is_empty() => {
                Self::with_builder(AppConfig::builder().server_url(url.trim()))
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.server_url(), "http://127.0.0.1:3000");
    }

    #[test]
    fn test_api_url() {
        let config = Config::new();
        assert_eq!(config.api_url("/auth/login"), "http://127.0.0.1:3000/auth/login");
    }

    #[test]
    fn test_with_builder_trims_slash() {
        let config =
            Config::with_builder(AppConfig::builder().server_url("https://api.example.com/"))
                .unwrap();
        assert_eq!(config.api_url("/users"), "https://api.example.com/users");
    }

    #[test]
    fn test_with_builder_rejects_bad_url() {
        assert!(Config::with_builder(AppConfig::builder().server_url("localhost:3000")).is_err());
    }
}
