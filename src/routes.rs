use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use crate::docs::ApiDoc;
use axum::Router;
use crate::state::AppState;

use tower_http::cors::{Any, CorsLayer};

pub fn configure_routes(state: AppState) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/v1", api_routes())
        .nest("/api/v1/auth", crate::modules::auth::router(state.clone()))
        .nest("/api/v1/contents", content_routes(state.clone()))
        .nest("/api/v1/generation", crate::modules::generation::router(state.clone()))
        .nest("/api/v1/ai", crate::modules::ai::router(state.clone()))
        .nest("/api/v1/membership", crate::modules::membership::router(state.clone()))
        .nest("/api/v1/favorites", crate::modules::engagement::favorites_router(state.clone()))
        .nest("/api/v1/reports", crate::modules::engagement::reports_router(state.clone()))
        .nest("/api/v1/feed", crate::modules::feed::router(state.clone()))
        .nest("/api/v1/narrative", crate::modules::narrative::router(state.clone()))
        .nest("/api/v1/dashboard", crate::modules::dashboard::router(state))
        .layer(cors)
}

/// Catalog CRUD plus the purchase and reaction routes keyed by content id.
fn content_routes(state: AppState) -> Router<AppState> {
    crate::modules::content::router(state.clone())
        .merge(crate::modules::membership::content_routes(state.clone()))
        .merge(crate::modules::engagement::router(state))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", axum::routing::get(|| async { "ok" }))
}
