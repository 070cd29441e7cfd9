use super::dto::*;
use super::model::Report;
use super::service::EngagementService;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::modules::auth::dto::TokenClaims;
use crate::modules::content::model::ContentItem;
use crate::state::AppState;
use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Like or unlike a drama
#[utoipa::path(
    post,
    path = "/api/v1/contents/{id}/like",
    params(("id" = i64, Path, description = "Content ID")),
    request_body = LikeRequest,
    responses(
        (status = 200, description = "Like state updated", body = ApiResponse<LikeResponse>),
        (status = 404, description = "Content not found")
    ),
    tag = "Engagement",
    security(("bearer_auth" = []))
)]
pub async fn like_content(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    Path(id): Path<i64>,
    Json(req): Json<LikeRequest>,
) -> impl IntoResponse {
    match EngagementService::like(state, claims.sub, id, req).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Like updated"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/contents/{id}/favorite",
    params(("id" = i64, Path, description = "Content ID")),
    request_body = FavoriteRequest,
    responses(
        (status = 200, description = "Favorite state updated", body = ApiResponse<FavoriteResponse>),
        (status = 404, description = "Content not found")
    ),
    tag = "Engagement",
    security(("bearer_auth" = []))
)]
pub async fn favorite_content(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    Path(id): Path<i64>,
    Json(req): Json<FavoriteRequest>,
) -> impl IntoResponse {
    match EngagementService::favorite(state, claims.sub, id, req).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Favorite updated"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Rate a drama from 1 to 5
#[utoipa::path(
    post,
    path = "/api/v1/contents/{id}/rating",
    params(("id" = i64, Path, description = "Content ID")),
    request_body = RateRequest,
    responses(
        (status = 200, description = "Rating recorded", body = ApiResponse<RatingResponse>),
        (status = 400, description = "Score out of range"),
        (status = 404, description = "Content not found")
    ),
    tag = "Engagement",
    security(("bearer_auth" = []))
)]
pub async fn rate_content(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    Path(id): Path<i64>,
    Json(req): Json<RateRequest>,
) -> impl IntoResponse {
    match EngagementService::rate(state, claims.sub, id, req).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Rating recorded"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/contents/{id}/report",
    params(("id" = i64, Path, description = "Content ID")),
    request_body = ReportRequest,
    responses(
        (status = 201, description = "Report filed", body = ApiResponse<ReportAccepted>),
        (status = 404, description = "Content not found")
    ),
    tag = "Engagement",
    security(("bearer_auth" = []))
)]
pub async fn report_content(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    Path(id): Path<i64>,
    Json(req): Json<ReportRequest>,
) -> impl IntoResponse {
    match EngagementService::report(state, claims.sub, id, req).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Report submitted"), StatusCode::CREATED).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/contents/{id}/recommendations",
    params(("id" = i64, Path, description = "Content ID")),
    responses(
        (status = 200, description = "Up to three related dramas", body = ApiResponse<Vec<Recommendation>>),
        (status = 404, description = "Content not found")
    ),
    tag = "Engagement"
)]
pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match EngagementService::recommendations(state, id).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Recommendations retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/favorites",
    responses(
        (status = 200, description = "Caller's favorite dramas", body = ApiResponse<Vec<ContentItem>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Engagement",
    security(("bearer_auth" = []))
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
) -> impl IntoResponse {
    match EngagementService::favorites(state, claims.sub).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Favorites retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List content reports (Admin only)
#[utoipa::path(
    get,
    path = "/api/v1/reports",
    responses(
        (status = 200, description = "Reports, newest first", body = ApiResponse<Vec<Report>>),
        (status = 403, description = "Forbidden")
    ),
    tag = "Engagement",
    security(("bearer_auth" = []))
)]
pub async fn list_reports(State(state): State<AppState>) -> impl IntoResponse {
    match EngagementService::list_reports(state).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Reports retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}
