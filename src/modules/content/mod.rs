use axum::Router;
use axum::routing::{get, post, put};
use crate::state::AppState;
use axum::middleware;

pub mod handler;
pub mod events;
pub mod dto;
pub mod model;
pub mod repository;
pub mod service;

pub fn router(state: AppState) -> axum::Router<AppState> {
    let public_routes = Router::new()
        .route("/", get(handler::list_contents))
        .route("/{id}", get(handler::get_content))
        .route("/{id}/season", get(handler::get_season));

    let protected_routes = Router::new()
        .route("/", post(handler::create_content))
        .route("/{id}", put(handler::update_content).delete(handler::delete_content))
        .route("/{id}/episodes/{episode}/video", put(handler::update_episode_video))
        .route("/{id}/episodes/{episode}/transcode", post(handler::request_transcode))
        .route_layer(middleware::from_fn(crate::middleware::role::admin_guard))
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::middleware::auth::auth_middleware
        ));

    public_routes.merge(protected_routes)
}
