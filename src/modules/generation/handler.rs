use super::dto::{JobListResponse, ListJobsQuery, SubmitJobRequest, SubmitJobResponse};
use super::model::{GenerationJob, QuotaState};
use super::service::GenerationService;
use crate::common::response::{Ack, ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Submit a video generation task
/// Returns immediately; poll the task to follow its progress.
#[utoipa::path(
    post,
    path = "/api/v1/generation/tasks",
    request_body = SubmitJobRequest,
    responses(
        (status = 202, description = "Task accepted", body = ApiResponse<SubmitJobResponse>),
        (status = 400, description = "Bad Request"),
        (status = 429, description = "Daily quota exhausted")
    ),
    tag = "Generation",
    security(("bearer_auth" = []))
)]
pub async fn submit_task(
    State(state): State<AppState>,
    Json(req): Json<SubmitJobRequest>,
) -> impl IntoResponse {
    match GenerationService::submit(state, req).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Task submitted"), StatusCode::ACCEPTED).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/generation/tasks",
    params(ListJobsQuery),
    responses(
        (status = 200, description = "Tasks, newest first", body = ApiResponse<JobListResponse>)
    ),
    tag = "Generation",
    security(("bearer_auth" = []))
)]
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListJobsQuery>,
) -> impl IntoResponse {
    match GenerationService::list(state, query).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Tasks retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/generation/tasks/{task_id}",
    params(
        ("task_id" = String, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task snapshot", body = ApiResponse<GenerationJob>),
        (status = 404, description = "Task Not Found")
    ),
    tag = "Generation",
    security(("bearer_auth" = []))
)]
pub async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> impl IntoResponse {
    match GenerationService::get(state, &task_id).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Task retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/generation/tasks/{task_id}/retry",
    params(
        ("task_id" = String, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task re-queued", body = ApiResponse<Ack>),
        (status = 404, description = "Task Not Found"),
        (status = 409, description = "Task is not in FAILED state")
    ),
    tag = "Generation",
    security(("bearer_auth" = []))
)]
pub async fn retry_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> impl IntoResponse {
    match GenerationService::retry(state, &task_id).await {
        Ok(_) => ApiSuccess(ApiResponse::success(Ack::ok(), "Task re-queued"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/generation/quota",
    responses(
        (status = 200, description = "Daily quota", body = ApiResponse<QuotaState>)
    ),
    tag = "Generation",
    security(("bearer_auth" = []))
)]
pub async fn get_quota(State(state): State<AppState>) -> impl IntoResponse {
    match GenerationService::quota(state).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Quota retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}
