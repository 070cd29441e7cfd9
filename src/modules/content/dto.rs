use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use super::model::{ContentItem, Episode};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct EpisodeInput {
    #[validate(range(min = 1, message = "Episode numbers start at 1"))]
    pub episode: u32,
    pub title: Option<String>,
    pub duration: Option<u32>,
    #[serde(default)]
    pub is_free: bool,
    pub price: Option<f64>,
    pub video_url: Option<String>,
}

impl From<EpisodeInput> for Episode {
    fn from(input: EpisodeInput) -> Self {
        Self {
            title: input.title.unwrap_or_else(|| format!("Episode {}", input.episode)),
            episode: input.episode,
            duration: input.duration.unwrap_or(120),
            is_free: input.is_free,
            price: input.price.unwrap_or(1.0),
            video_url: input.video_url,
        }
    }
}

#[allow(clippy::ptr_arg)]
fn unique_episode_numbers(episodes: &Vec<EpisodeInput>) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    if episodes.iter().all(|e| seen.insert(e.episode)) {
        Ok(())
    } else {
        Err(ValidationError::new("duplicate_episode")
            .with_message("Episode numbers must be unique".into()))
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateContentRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub genre: String,
    #[validate(range(min = 1))]
    pub duration: Option<u32>,
    pub cover_image: Option<String>,
    pub script_content: Option<String>,
    #[serde(default)]
    pub ai_generated: bool,
    #[validate(range(min = 0.0))]
    pub season_price: Option<f64>,
    #[serde(default)]
    #[validate(nested, custom(function = "unique_episode_numbers"))]
    pub episodes: Vec<EpisodeInput>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateContentRequest {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
    #[validate(range(min = 1))]
    pub duration: Option<u32>,
    pub cover_image: Option<String>,
    pub script_content: Option<String>,
    #[validate(range(min = 0.0))]
    pub season_price: Option<f64>,
    #[validate(nested, custom(function = "unique_episode_numbers"))]
    pub episodes: Option<Vec<EpisodeInput>>,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListContentQuery {
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 100))]
    pub page_size: Option<usize>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContentListResponse {
    pub contents: Vec<ContentItem>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SeasonResponse {
    pub content_id: i64,
    pub episodes: Vec<Episode>,
    pub season_price: f64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEpisodeVideoRequest {
    #[validate(url)]
    pub video_url: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TranscodeRequest {
    #[validate(url)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub watermark: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TranscodeAccepted {
    pub task_id: String,
}
