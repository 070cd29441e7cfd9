#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use drama_backend::app::create_app;
use drama_backend::config::settings::{AppConfig, GenerationConfig, PasswordConfig};
use drama_backend::state::AppState;
use drama_backend::workers::simulator::OutcomePolicy;

pub const ADMIN_EMAIL: &str = "admin@drama.com";
pub const ADMIN_PASSWORD: &str = "123456";
pub const RESULT_URL: &str = "https://media.test/generated.mp4";

/// Config with the cheapest argon2 parameters and a fixed signing secret.
pub fn test_config(daily_limit: u32, seed_demo_catalog: bool) -> AppConfig {
    AppConfig {
        server_port: 0,
        jwt_secret: "integration-test-secret".to_string(),
        jwt_ttl_seconds: 3600,
        admin_email: ADMIN_EMAIL.to_string(),
        admin_password: ADMIN_PASSWORD.to_string(),
        password: PasswordConfig {
            memory_kib: 8,
            iterations: 1,
        },
        generation: GenerationConfig {
            daily_limit,
            failure_rate: 0.0,
            result_url: RESULT_URL.to_string(),
        },
        seed_demo_catalog,
    }
}

/// Build the full router the binary serves, plus a handle on its state so
/// tests can inspect the store directly.
pub fn build_test_app(config: AppConfig, policy: Arc<dyn OutcomePolicy>) -> (Router, AppState) {
    let state = AppState::bootstrap(config, policy).expect("bootstrap should succeed");
    (create_app(state.clone()), state)
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(builder.body(body).expect("request should build"))
        .await
        .expect("router is infallible")
}

pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> Response<Body> {
    send(app, Method::GET, uri, token, None).await
}

pub async fn post_json(app: &Router, uri: &str, token: Option<&str>, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, token, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, token: Option<&str>, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, token, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str, token: Option<&str>) -> Response<Body> {
    send(app, Method::DELETE, uri, token, None).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Assert the status and return the envelope's `data`.
pub async fn expect_data(response: Response<Body>, status: StatusCode) -> Value {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    json["data"].clone()
}

/// Assert the status and return the envelope's machine error code.
pub async fn expect_error(response: Response<Body>, status: StatusCode) -> String {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    json["error"].as_str().unwrap_or_default().to_string()
}

pub async fn login(app: &Router, email: &str, password: &str) -> String {
    let response = post_json(
        app,
        "/api/v1/auth/login",
        None,
        serde_json::json!({ "email": email, "password": password }),
    )
    .await;
    let data = expect_data(response, StatusCode::OK).await;
    data["access_token"].as_str().expect("token in response").to_string()
}

pub async fn login_admin(app: &Router) -> String {
    login(app, ADMIN_EMAIL, ADMIN_PASSWORD).await
}

/// Register a regular account and log it in.
pub async fn login_user(app: &Router, username: &str) -> String {
    let email = format!("{username}@test.com");
    let response = post_json(
        app,
        "/api/v1/auth/register",
        None,
        serde_json::json!({
            "username": username,
            "email": email,
            "password": "secret123",
            "full_name": "Test User",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    login(app, &email, "secret123").await
}

/// Advance paused tokio time.
pub async fn advance(duration: Duration) {
    tokio::time::sleep(duration).await;
}
