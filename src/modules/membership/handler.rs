use super::dto::*;
use super::model::Membership;
use super::service::MembershipService;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::modules::auth::dto::TokenClaims;
use crate::state::AppState;
use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

#[utoipa::path(
    get,
    path = "/api/v1/membership",
    responses(
        (status = 200, description = "Caller's membership", body = ApiResponse<Membership>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Membership",
    security(("bearer_auth" = []))
)]
pub async fn get_membership(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
) -> impl IntoResponse {
    match MembershipService::get_membership(state, claims.sub).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Membership retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Buy a PRO membership
/// The term is 30 days from now whatever the plan name.
#[utoipa::path(
    post,
    path = "/api/v1/membership/purchase",
    request_body = PurchaseMembershipRequest,
    responses(
        (status = 200, description = "Membership activated", body = ApiResponse<Membership>),
        (status = 400, description = "Bad Request")
    ),
    tag = "Membership",
    security(("bearer_auth" = []))
)]
pub async fn purchase_membership(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    Json(req): Json<PurchaseMembershipRequest>,
) -> impl IntoResponse {
    match MembershipService::purchase_membership(state, claims.sub, req).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Membership activated"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/membership/features",
    responses(
        (status = 200, description = "PRO features and pricing", body = ApiResponse<ProFeaturesResponse>)
    ),
    tag = "Membership"
)]
pub async fn get_pro_features() -> impl IntoResponse {
    ApiSuccess(ApiResponse::success(MembershipService::pro_features(), "Features retrieved successfully"), StatusCode::OK)
}

#[utoipa::path(
    get,
    path = "/api/v1/membership/purchases",
    responses(
        (status = 200, description = "Caller's purchases, oldest first", body = ApiResponse<PurchaseListResponse>)
    ),
    tag = "Membership",
    security(("bearer_auth" = []))
)]
pub async fn list_purchases(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
) -> impl IntoResponse {
    match MembershipService::list_purchases(state, claims.sub).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Purchases retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/contents/{id}/purchase",
    params(
        ("id" = i64, Path, description = "Content ID")
    ),
    responses(
        (status = 200, description = "Season purchased", body = ApiResponse<SeasonPurchaseResponse>),
        (status = 404, description = "Content Not Found"),
        (status = 409, description = "Season already purchased")
    ),
    tag = "Membership",
    security(("bearer_auth" = []))
)]
pub async fn purchase_season(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match MembershipService::purchase_season(state, claims.sub, id).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Season purchased"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/contents/{id}/episodes/{episode}/purchase",
    params(
        ("id" = i64, Path, description = "Content ID"),
        ("episode" = u32, Path, description = "Episode number")
    ),
    responses(
        (status = 200, description = "Episode purchased", body = ApiResponse<EpisodePurchaseResponse>),
        (status = 404, description = "Content or Episode Not Found"),
        (status = 409, description = "Episode is free or already unlocked")
    ),
    tag = "Membership",
    security(("bearer_auth" = []))
)]
pub async fn purchase_episode(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    Path((id, episode)): Path<(i64, u32)>,
) -> impl IntoResponse {
    match MembershipService::purchase_episode(state, claims.sub, id, episode).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Episode purchased"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/contents/{id}/episodes/{episode}/access",
    params(
        ("id" = i64, Path, description = "Content ID"),
        ("episode" = u32, Path, description = "Episode number")
    ),
    responses(
        (status = 200, description = "Whether the caller may watch the episode", body = ApiResponse<EpisodeAccessResponse>),
        (status = 404, description = "Content or Episode Not Found")
    ),
    tag = "Membership",
    security(("bearer_auth" = []))
)]
pub async fn episode_access(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    Path((id, episode)): Path<(i64, u32)>,
) -> impl IntoResponse {
    match MembershipService::episode_access(state, claims.sub, id, episode).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Access checked"), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}
