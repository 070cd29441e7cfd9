use super::dto::*;
use super::service::AiService;
use crate::common::response::{ApiResponse, ApiSuccess};
use axum::{http::StatusCode, response::IntoResponse, Json};

#[utoipa::path(
    post,
    path = "/api/v1/ai/script",
    request_body = ScriptRequest,
    responses(
        (status = 200, description = "Generated script", body = ApiResponse<ScriptResponse>),
        (status = 400, description = "Bad Request")
    ),
    tag = "AI",
    security(("bearer_auth" = []))
)]
pub async fn generate_script(Json(req): Json<ScriptRequest>) -> impl IntoResponse {
    match AiService::generate_script(req) {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Script generated"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/ai/outline",
    request_body = TopicRequest,
    responses(
        (status = 200, description = "Generated outline", body = ApiResponse<OutlineResponse>)
    ),
    tag = "AI",
    security(("bearer_auth" = []))
)]
pub async fn generate_outline(Json(req): Json<TopicRequest>) -> impl IntoResponse {
    ApiSuccess(ApiResponse::success(AiService::generate_outline(req), "Outline generated"), StatusCode::OK)
}

#[utoipa::path(
    post,
    path = "/api/v1/ai/cover-title",
    request_body = TopicRequest,
    responses(
        (status = 200, description = "Title and cover prompt", body = ApiResponse<CoverTitleResponse>)
    ),
    tag = "AI",
    security(("bearer_auth" = []))
)]
pub async fn generate_cover_title(Json(req): Json<TopicRequest>) -> impl IntoResponse {
    ApiSuccess(ApiResponse::success(AiService::generate_cover_title(req), "Cover title generated"), StatusCode::OK)
}

#[utoipa::path(
    post,
    path = "/api/v1/ai/suggestions",
    request_body = SuggestionRequest,
    responses(
        (status = 200, description = "Writing suggestions", body = ApiResponse<SuggestionResponse>)
    ),
    tag = "AI",
    security(("bearer_auth" = []))
)]
pub async fn get_suggestions(Json(req): Json<SuggestionRequest>) -> impl IntoResponse {
    ApiSuccess(ApiResponse::success(AiService::suggestions(req), "Suggestions retrieved"), StatusCode::OK)
}

#[utoipa::path(
    post,
    path = "/api/v1/ai/shotlist",
    request_body = ShotlistRequest,
    responses(
        (status = 200, description = "Shot list", body = ApiResponse<ShotlistResponse>)
    ),
    tag = "AI",
    security(("bearer_auth" = []))
)]
pub async fn generate_shotlist(Json(req): Json<ShotlistRequest>) -> impl IntoResponse {
    ApiSuccess(ApiResponse::success(AiService::generate_shotlist(req), "Shot list generated"), StatusCode::OK)
}

#[utoipa::path(
    post,
    path = "/api/v1/ai/audio-hints",
    request_body = AudioHintsRequest,
    responses(
        (status = 200, description = "Music, sound and subtitle hints", body = ApiResponse<AudioHintsResponse>)
    ),
    tag = "AI",
    security(("bearer_auth" = []))
)]
pub async fn generate_audio_hints(Json(req): Json<AudioHintsRequest>) -> impl IntoResponse {
    ApiSuccess(ApiResponse::success(AiService::generate_audio_hints(req), "Audio hints generated"), StatusCode::OK)
}

#[utoipa::path(
    post,
    path = "/api/v1/ai/character",
    request_body = CharacterRequest,
    responses(
        (status = 200, description = "Character profile", body = ApiResponse<CharacterResponse>),
        (status = 400, description = "Bad Request")
    ),
    tag = "AI",
    security(("bearer_auth" = []))
)]
pub async fn generate_character(Json(req): Json<CharacterRequest>) -> impl IntoResponse {
    match AiService::generate_character(req) {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Character generated"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/ai/scene",
    request_body = SceneRequest,
    responses(
        (status = 200, description = "Scene description", body = ApiResponse<SceneResponse>),
        (status = 400, description = "Bad Request")
    ),
    tag = "AI",
    security(("bearer_auth" = []))
)]
pub async fn generate_scene(Json(req): Json<SceneRequest>) -> impl IntoResponse {
    match AiService::generate_scene(req) {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Scene generated"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/ai/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply", body = ApiResponse<ChatResponse>),
        (status = 400, description = "Bad Request")
    ),
    tag = "AI",
    security(("bearer_auth" = []))
)]
pub async fn chat(Json(req): Json<ChatRequest>) -> impl IntoResponse {
    match AiService::chat(req) {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Reply generated"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}
