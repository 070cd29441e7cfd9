use super::dto::{AuthResponse, LoginRequest, RegisterRequest, TokenClaims, UserResponse};
use super::service::AuthService;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered and signed in", body = ApiResponse<AuthResponse>),
        (status = 400, description = "Validation error")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> impl IntoResponse {
    match AuthService::register(state, req).await {
        Ok(user) => ApiSuccess(ApiResponse::success(user, "User registered successfully"), StatusCode::CREATED).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Log in and receive an access token
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<AuthResponse>),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    match AuthService::login(state, req).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Login successful"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Current user
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "Current user", body = ApiResponse<UserResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Auth",
    security(("bearer_auth" = []))
)]
pub async fn get_me(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
) -> impl IntoResponse {
    match AuthService::get_me(state, claims.sub).await {
        Ok(user) => ApiSuccess(ApiResponse::success(user, "User retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}
