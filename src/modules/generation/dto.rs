use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::model::GenerationJob;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubmitJobRequest {
    pub content_id: i64,
    #[validate(range(min = 1, message = "Episode numbers start at 1"))]
    pub episode: u32,
    #[validate(length(min = 1, max = 32))]
    pub style: Option<String>,
    /// Target length of the rendered clip, in seconds.
    #[validate(range(min = 1, max = 600))]
    pub duration: Option<u32>,
    #[validate(length(min = 1, max = 32))]
    pub voice: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitJobResponse {
    pub task_id: String,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListJobsQuery {
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 100))]
    pub page_size: Option<usize>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct JobListResponse {
    pub jobs: Vec<GenerationJob>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}
