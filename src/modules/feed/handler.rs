use super::dto::*;
use super::service::FeedService;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::modules::auth::dto::TokenClaims;
use crate::state::AppState;
use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Page through the vertical short-video feed
#[utoipa::path(
    get,
    path = "/api/v1/feed",
    params(FeedQuery),
    responses(
        (status = 200, description = "One feed page", body = ApiResponse<FeedPage>),
        (status = 400, description = "Bad Request")
    ),
    tag = "Feed",
    security(("bearer_auth" = []))
)]
pub async fn get_feed(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    Query(query): Query<FeedQuery>,
) -> impl IntoResponse {
    match FeedService::page(state, claims.sub, query).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Feed retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/feed/{id}/like",
    params(("id" = u64, Path, description = "Video ID")),
    request_body = VideoLikeRequest,
    responses(
        (status = 200, description = "Like state updated", body = ApiResponse<VideoLikeResponse>),
        (status = 404, description = "Video not found")
    ),
    tag = "Feed",
    security(("bearer_auth" = []))
)]
pub async fn like_video(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    Path(id): Path<u64>,
    Json(req): Json<VideoLikeRequest>,
) -> impl IntoResponse {
    match FeedService::like(state, claims.sub, id, req).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Like updated"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/feed/{id}/favorite",
    params(("id" = u64, Path, description = "Video ID")),
    request_body = VideoFavoriteRequest,
    responses(
        (status = 200, description = "Favorite state updated", body = ApiResponse<VideoFavoriteResponse>),
        (status = 404, description = "Video not found")
    ),
    tag = "Feed",
    security(("bearer_auth" = []))
)]
pub async fn favorite_video(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    Path(id): Path<u64>,
    Json(req): Json<VideoFavoriteRequest>,
) -> impl IntoResponse {
    match FeedService::favorite(state, claims.sub, id, req).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Favorite updated"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}
