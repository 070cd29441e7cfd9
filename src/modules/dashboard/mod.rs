use axum::Router;
use axum::routing::get;
use crate::state::AppState;
use axum::middleware;

pub mod dto;
pub mod handler;
pub mod service;

pub fn router(state: AppState) -> axum::Router<AppState> {
    Router::new()
        .route("/stats", get(handler::get_stats))
        .route("/kpi", get(handler::get_kpi))
        .route_layer(middleware::from_fn(crate::middleware::role::admin_guard))
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::middleware::auth::auth_middleware
        ))
}
