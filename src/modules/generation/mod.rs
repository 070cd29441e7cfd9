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
        .route("/tasks", post(handler::submit_task).get(handler::list_tasks))
        .route("/tasks/{task_id}", get(handler::get_task))
        .route("/tasks/{task_id}/retry", post(handler::retry_task))
        .route("/quota", get(handler::get_quota))
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::middleware::auth::auth_middleware
        ))
}
