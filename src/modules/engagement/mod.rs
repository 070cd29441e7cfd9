use axum::Router;
use axum::routing::{get, post};
use crate::state::AppState;
use axum::middleware;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

/// Reaction routes that live under `/contents`.
pub fn router(state: AppState) -> axum::Router<AppState> {
    let public_routes = Router::new()
        .route("/{id}/recommendations", get(handler::get_recommendations));

    let protected_routes = Router::new()
        .route("/{id}/like", post(handler::like_content))
        .route("/{id}/favorite", post(handler::favorite_content))
        .route("/{id}/rating", post(handler::rate_content))
        .route("/{id}/report", post(handler::report_content))
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::middleware::auth::auth_middleware
        ));

    public_routes.merge(protected_routes)
}

pub fn favorites_router(state: AppState) -> axum::Router<AppState> {
    Router::new()
        .route("/", get(handler::list_favorites))
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::middleware::auth::auth_middleware
        ))
}

pub fn reports_router(state: AppState) -> axum::Router<AppState> {
    Router::new()
        .route("/", get(handler::list_reports))
        .route_layer(middleware::from_fn(crate::middleware::role::admin_guard))
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::middleware::auth::auth_middleware
        ))
}
