use crate::common::error::AppError;
use crate::modules::auth::dto::TokenClaims;
use crate::modules::auth::model::UserRole;
use axum::{
    extract::{Extension, Request},
    middleware::Next,
    response::Response,
};

pub async fn admin_guard(
    Extension(claims): Extension<TokenClaims>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if claims.role != UserRole::Admin.as_str() {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }

    Ok(next.run(req).await)
}
