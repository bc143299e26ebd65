//! Common test utilities for integration tests
//!
//! Provides a `TestApp` wrapper that drives the full router in-process
//! against a real database. Tests that use it are `#[ignore]`d by default;
//! run them with `cargo test -- --ignored` and a reachable Postgres at
//! `TEST_DATABASE_URL` (or the default development URL).

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use babysafety_backend::{config::AppConfig, routes, state::AppState};
use sqlx::PgPool;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub pool: PgPool,
}

impl TestApp {
    /// Create a new test application with a real database
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        if let Ok(url) = std::env::var("TEST_DATABASE_URL") {
            config.database.url = url;
        }

        let pool = PgPool::connect(&config.database.url)
            .await
            .expect("Failed to connect to test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        let state = AppState::new(pool.clone(), config);
        let app = routes::create_router(state);

        Self { app, pool }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        self.request("GET", path, None, None).await
    }

    /// Make an authenticated GET request
    pub async fn get_auth(&self, path: &str, token: &str) -> (StatusCode, String) {
        self.request("GET", path, Some(token), None).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        self.request("POST", path, None, Some(body)).await
    }

    /// Make an authenticated POST request with JSON body
    pub async fn post_auth(&self, path: &str, token: &str, body: &str) -> (StatusCode, String) {
        self.request("POST", path, Some(token), Some(body)).await
    }

    /// Make an authenticated PUT request with JSON body
    pub async fn put_auth(&self, path: &str, token: &str, body: &str) -> (StatusCode, String) {
        self.request("PUT", path, Some(token), Some(body)).await
    }

    /// Make an authenticated DELETE request
    pub async fn delete_auth(&self, path: &str, token: &str) -> (StatusCode, String) {
        self.request("DELETE", path, Some(token), None).await
    }

    async fn request(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: Option<&str>,
    ) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(bytes.to_vec()).unwrap();

        (status, body_str)
    }

    /// Sign up and log in a fresh user, returning (token, user_id, email).
    ///
    /// Usernames and emails are salted with a random suffix so repeated
    /// test runs against the same database don't collide.
    pub async fn signup_and_login(&self, name_hint: &str) -> (String, String, String) {
        let suffix = &uuid::Uuid::new_v4().simple().to_string()[..8];
        let username = format!("{}{}", name_hint, suffix);
        let email = format!("{}@test.local", username);

        let signup = format!(
            r#"{{"username":"{}","email":"{}","password":"secret1","mobileNumber":"1234567890"}}"#,
            username, email
        );
        let (status, body) = self.post("/api/auth/signup", &signup).await;
        assert_eq!(status, StatusCode::OK, "signup failed: {}", body);

        let login = format!(r#"{{"email":"{}","password":"secret1"}}"#, email);
        let (status, body) = self.post("/api/auth/login", &login).await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", body);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let token = json["token"].as_str().unwrap().to_string();
        let user_id = json["id"].as_str().unwrap().to_string();

        (token, user_id, email)
    }
}
