use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;
use utoipa::ToSchema;

pub const PLACEHOLDER_COVER: &str = "https://via.placeholder.com/300x200?text=DRAMA";

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ContentItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub genre: String,
    /// Minutes per episode.
    pub duration: u32,
    pub rating: f64,
    pub views: u64,
    pub likes: u64,
    pub cover_image: String,
    pub script_content: String,
    pub creator_id: Uuid,
    pub season_price: f64,
    pub ai_generated: bool,
    pub episodes: Vec<Episode>,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
}

impl ContentItem {
    pub fn episode_mut(&mut self, number: u32) -> Option<&mut Episode> {
        self.episodes.iter_mut().find(|e| e.episode == number)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct Episode {
    pub episode: u32,
    pub title: String,
    /// Seconds.
    pub duration: u32,
    pub is_free: bool,
    pub price: f64,
    pub video_url: Option<String>,
}
