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
    Router::new()
        .route("/", post(handler::start_narrative))
        .route("/{session_id}", get(handler::get_narrative))
        .route("/{session_id}/choices", post(handler::make_choice))
        .route("/{session_id}/reset", post(handler::reset_narrative))
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::middleware::auth::auth_middleware
        ))
}
