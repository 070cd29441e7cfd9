use super::dto::*;
use super::service::NarrativeService;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::modules::auth::dto::TokenClaims;
use crate::state::AppState;
use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Start an interactive story session on a drama
#[utoipa::path(
    post,
    path = "/api/v1/narrative",
    request_body = StartNarrativeRequest,
    responses(
        (status = 201, description = "Session started at the root branch", body = ApiResponse<NarrativeView>),
        (status = 404, description = "Content not found")
    ),
    tag = "Narrative",
    security(("bearer_auth" = []))
)]
pub async fn start_narrative(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    Json(req): Json<StartNarrativeRequest>,
) -> impl IntoResponse {
    match NarrativeService::start(state, claims.sub, req).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Narrative started"), StatusCode::CREATED).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/narrative/{session_id}",
    params(("session_id" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Current position", body = ApiResponse<NarrativeView>),
        (status = 404, description = "Session not found")
    ),
    tag = "Narrative",
    security(("bearer_auth" = []))
)]
pub async fn get_narrative(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    match NarrativeService::get(state, claims.sub, &session_id).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Narrative retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/narrative/{session_id}/choices",
    params(("session_id" = String, Path, description = "Session ID")),
    request_body = MakeChoiceRequest,
    responses(
        (status = 200, description = "Moved to the chosen branch", body = ApiResponse<NarrativeView>),
        (status = 400, description = "Choice index out of range"),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Story already ended")
    ),
    tag = "Narrative",
    security(("bearer_auth" = []))
)]
pub async fn make_choice(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    Path(session_id): Path<String>,
    Json(req): Json<MakeChoiceRequest>,
) -> impl IntoResponse {
    match NarrativeService::choose(state, claims.sub, &session_id, req).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Choice recorded"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/narrative/{session_id}/reset",
    params(("session_id" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Back at the root branch", body = ApiResponse<NarrativeView>),
        (status = 404, description = "Session not found")
    ),
    tag = "Narrative",
    security(("bearer_auth" = []))
)]
pub async fn reset_narrative(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    match NarrativeService::reset(state, claims.sub, &session_id).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Narrative reset"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}
