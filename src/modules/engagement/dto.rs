use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LikeRequest {
    pub liked: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LikeResponse {
    pub content_id: i64,
    pub liked: bool,
    pub likes: u64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FavoriteRequest {
    pub favorite: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FavoriteResponse {
    pub content_id: i64,
    pub favorite: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RateRequest {
    #[validate(range(min = 1, max = 5, message = "Score must be between 1 and 5"))]
    pub score: u8,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RatingResponse {
    pub content_id: i64,
    pub average: f64,
    pub count: usize,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReportRequest {
    #[validate(length(min = 1, max = 64))]
    pub reason: String,
    #[validate(length(max = 1000))]
    pub detail: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReportAccepted {
    pub report_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Recommendation {
    pub id: i64,
    pub title: String,
    pub cover_image: String,
    pub views: u64,
}
