use super::dto::*;
use super::service::DashboardService;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

/// Catalog and earnings totals (Admin only)
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/stats",
    responses(
        (status = 200, description = "Dashboard totals", body = ApiResponse<DashboardStats>),
        (status = 403, description = "Forbidden")
    ),
    tag = "Dashboard",
    security(("bearer_auth" = []))
)]
pub async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    match DashboardService::stats(state).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Stats retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Purchase KPIs (Admin only)
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/kpi",
    responses(
        (status = 200, description = "Revenue and purchase KPIs", body = ApiResponse<KpiResponse>),
        (status = 403, description = "Forbidden")
    ),
    tag = "Dashboard",
    security(("bearer_auth" = []))
)]
pub async fn get_kpi(State(state): State<AppState>) -> impl IntoResponse {
    match DashboardService::kpi(state).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "KPIs retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}
