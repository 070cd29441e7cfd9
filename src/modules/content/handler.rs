use crate::common::response::{Ack, ApiResponse, ApiSuccess};
use crate::modules::auth::dto::TokenClaims;
use crate::modules::content::dto::*;
use crate::modules::content::model::ContentItem;
use crate::modules::content::service::ContentService;
use crate::state::AppState;
use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

#[utoipa::path(
    post,
    path = "/api/v1/contents",
    request_body = CreateContentRequest,
    responses(
        (status = 201, description = "Content Created", body = ApiResponse<ContentItem>),
        (status = 400, description = "Bad Request"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Content",
    security(("bearer_auth" = []))
)]
pub async fn create_content(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    Json(req): Json<CreateContentRequest>,
) -> impl IntoResponse {
    match ContentService::create(state, claims.sub, req).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Content created successfully"), StatusCode::CREATED).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/contents",
    params(ListContentQuery),
    responses(
        (status = 200, description = "List Content", body = ApiResponse<ContentListResponse>),
        (status = 400, description = "Bad Request")
    ),
    tag = "Content"
)]
pub async fn list_contents(
    State(state): State<AppState>,
    Query(query): Query<ListContentQuery>,
) -> impl IntoResponse {
    match ContentService::list(state, query).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Contents retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/contents/{id}",
    params(
        ("id" = i64, Path, description = "Content ID")
    ),
    responses(
        (status = 200, description = "Get Content", body = ApiResponse<ContentItem>),
        (status = 404, description = "Content Not Found")
    ),
    tag = "Content"
)]
pub async fn get_content(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match ContentService::get(state, id).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Content retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/contents/{id}",
    params(
        ("id" = i64, Path, description = "Content ID")
    ),
    request_body = UpdateContentRequest,
    responses(
        (status = 200, description = "Content Updated", body = ApiResponse<ContentItem>),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Content Not Found")
    ),
    tag = "Content",
    security(("bearer_auth" = []))
)]
pub async fn update_content(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateContentRequest>,
) -> impl IntoResponse {
    match ContentService::update(state, id, req).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Content updated successfully"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/contents/{id}",
    params(
        ("id" = i64, Path, description = "Content ID")
    ),
    responses(
        (status = 200, description = "Content Deleted", body = ApiResponse<Ack>)
    ),
    tag = "Content",
    security(("bearer_auth" = []))
)]
pub async fn delete_content(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match ContentService::delete(state, id).await {
        Ok(_) => ApiSuccess(ApiResponse::success(Ack::ok(), "Content deleted successfully"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/contents/{id}/season",
    params(
        ("id" = i64, Path, description = "Content ID")
    ),
    responses(
        (status = 200, description = "Season lineup", body = ApiResponse<SeasonResponse>),
        (status = 404, description = "Content Not Found")
    ),
    tag = "Content"
)]
pub async fn get_season(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match ContentService::get_season(state, id).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Season retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/contents/{id}/episodes/{episode}/video",
    params(
        ("id" = i64, Path, description = "Content ID"),
        ("episode" = u32, Path, description = "Episode number")
    ),
    request_body = UpdateEpisodeVideoRequest,
    responses(
        (status = 200, description = "Episode video updated", body = ApiResponse<ContentItem>),
        (status = 404, description = "Content or Episode Not Found")
    ),
    tag = "Content",
    security(("bearer_auth" = []))
)]
pub async fn update_episode_video(
    State(state): State<AppState>,
    Path((id, episode)): Path<(i64, u32)>,
    Json(req): Json<UpdateEpisodeVideoRequest>,
) -> impl IntoResponse {
    match ContentService::update_episode_video(state, id, episode, req).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Episode video updated successfully"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Queue a transcode for one episode
/// The episode's video URL is replaced with its CDN address once the
/// transcode finishes.
#[utoipa::path(
    post,
    path = "/api/v1/contents/{id}/episodes/{episode}/transcode",
    params(
        ("id" = i64, Path, description = "Content ID"),
        ("episode" = u32, Path, description = "Episode number")
    ),
    request_body = TranscodeRequest,
    responses(
        (status = 202, description = "Transcode queued", body = ApiResponse<TranscodeAccepted>),
        (status = 404, description = "Content or Episode Not Found")
    ),
    tag = "Content",
    security(("bearer_auth" = []))
)]
pub async fn request_transcode(
    State(state): State<AppState>,
    Path((id, episode)): Path<(i64, u32)>,
    Json(req): Json<TranscodeRequest>,
) -> impl IntoResponse {
    match ContentService::request_transcode(state, id, episode, req).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Transcode queued"), StatusCode::ACCEPTED).into_response(),
        Err(e) => e.into_response(),
    }
}
