use axum::Router;
use axum::routing::post;
use crate::state::AppState;
use axum::middleware;

pub mod dto;
pub mod handler;
pub mod service;

pub fn router(state: AppState) -> axum::Router<AppState> {
    Router::new()
        .route("/script", post(handler::generate_script))
        .route("/outline", post(handler::generate_outline))
        .route("/cover-title", post(handler::generate_cover_title))
        .route("/suggestions", post(handler::get_suggestions))
        .route("/shotlist", post(handler::generate_shotlist))
        .route("/audio-hints", post(handler::generate_audio_hints))
        .route("/character", post(handler::generate_character))
        .route("/scene", post(handler::generate_scene))
        .route("/chat", post(handler::chat))
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::middleware::auth::auth_middleware
        ))
}
