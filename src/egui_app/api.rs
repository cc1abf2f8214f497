/**
 * API Client
 *
 * Async HTTP client for the authdesk REST API. Every protected call takes
 * the session token explicitly; the client itself holds no session.
 *
 * Non-success responses are decoded from the server's JSON error body
 * (`{"error": ..., "status": ...}`) into `ClientError::Api`.
 */

use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

use crate::egui_app::config::Config;
use crate::shared::{
    CreateUserRequest, LoginRequest, LoginResponse, PublicUser, UpdateUserRequest,
};

/// Client-side API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The server could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with an error status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The response body was not what the client expected
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Server error body
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the authdesk API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.server_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder, token: &str) -> RequestBuilder {
        request.bearer_auth(token)
    }

    async fn send(request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => body.error,
            Err(_) if !text.trim().is_empty() => text,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string(),
        };

        tracing::warn!("API request failed with {}: {}", status.as_u16(), message);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
        Self::send(request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// POST /auth/login
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        Self::json(self.http.post(self.url("/auth/login")).json(request)).await
    }

    /// POST /auth/profile
    pub async fn profile(&self, token: &str) -> Result<PublicUser, ClientError> {
        let request = self.authorized(self.http.post(self.url("/auth/profile")), token);
        Self::json(request).await
    }

    /// GET /users
    pub async fn list_users(&self, token: &str) -> Result<Vec<PublicUser>, ClientError> {
        let request = self.authorized(self.http.get(self.url("/users")), token);
        Self::json(request).await
    }

    /// POST /users
    pub async fn create_user(
        &self,
        token: &str,
        user: &CreateUserRequest,
    ) -> Result<PublicUser, ClientError> {
        let request = self.authorized(self.http.post(self.url("/users")), token).json(user);
        Self::json(request).await
    }

    /// PATCH /users/{id}
    pub async fn update_user(
        &self,
        token: &str,
        id: i64,
        changes: &UpdateUserRequest,
    ) -> Result<PublicUser, ClientError> {
        let request = self
            .authorized(self.http.patch(self.url(&format!("/users/{}", id))), token)
            .json(changes);
        Self::json(request).await
    }

    /// DELETE /users/{id}
    pub async fn delete_user(&self, token: &str, id: i64) -> Result<(), ClientError> {
        let request = self.authorized(self.http.delete(self.url(&format!("/users/{}", id))), token);
        Self::send(request).await.map(|_| ())
    }
}
