use axum::Router;
use axum::routing::{get, post};
use crate::state::AppState;
use axum::middleware;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router(state: AppState) -> axum::Router<AppState> {
    let public_routes = Router::new()
        .route("/features", get(handler::get_pro_features));

    let protected_routes = Router::new()
        .route("/", get(handler::get_membership))
        .route("/purchase", post(handler::purchase_membership))
        .route("/purchases", get(handler::list_purchases))
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::middleware::auth::auth_middleware
        ));

    public_routes.merge(protected_routes)
}

/// Purchase routes that live under `/contents`.
pub fn content_routes(state: AppState) -> axum::Router<AppState> {
    Router::new()
        .route("/{id}/purchase", post(handler::purchase_season))
        .route("/{id}/episodes/{episode}/purchase", post(handler::purchase_episode))
        .route("/{id}/episodes/{episode}/access", get(handler::episode_access))
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::middleware::auth::auth_middleware
        ))
}
