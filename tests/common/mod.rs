//! Common test utilities and helpers
//!
//! Builds an in-memory backend (seeded administrator, cheap bcrypt cost)
//! behind an axum-test `TestServer`, plus login helpers.

#![allow(dead_code)]

use axum::http::{header::AUTHORIZATION, HeaderValue};
use axum_test::{TestRequest, TestServer};
use serde_json::json;

use authdesk::backend::routes::router::create_router;
use authdesk::backend::{AppState, ServerConfig};
use authdesk::shared::LoginResponse;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "Admin@2024#Secure!";

pub fn test_config() -> ServerConfig {
    ServerConfig {
        jwt_secret: "integration-test-secret".to_string(),
        bcrypt_cost: 4,
        ..ServerConfig::default()
    }
}

/// A running test server and the state behind it
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

pub fn spawn_app() -> TestApp {
    let config = test_config();
    let state = AppState::in_memory(&config);
    let router = create_router(state.clone(), &config.cors_origins);
    let server = TestServer::new(router).expect("Failed to start test server");
    TestApp { server, state }
}

/// Create authorization header value
pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).expect("Invalid token characters")
}

pub fn authorized(request: TestRequest, token: &str) -> TestRequest {
    request.add_header(AUTHORIZATION, bearer(token))
}

impl TestApp {
    pub async fn login(&self, email: &str, password: &str) -> LoginResponse {
        let response = self
            .server
            .post("/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .await;
        response.assert_status_ok();
        response.json::<LoginResponse>()
    }

    pub async fn admin_token(&self) -> String {
        self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.access_token
    }
}
