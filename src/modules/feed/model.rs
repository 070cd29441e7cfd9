use std::collections::HashSet;

use uuid::Uuid;

pub const FEED_TAGS: [&str; 3] = ["Urban", "Emotion", "Trending"];
/// Ids of the first page start here.
pub const FIRST_VIDEO_ID: u64 = 100;

/// A vertical short video. Materialised the first time its page is served
/// and kept so likes and favorites stick.
#[derive(Debug, Clone)]
pub struct ShortVideo {
    pub id: u64,
    pub title: String,
    pub cover_image: String,
    pub video_url: String,
    pub likes: u64,
    pub tag: String,
    pub duration: u32,
    pub liked_by: HashSet<Uuid>,
    pub favorited_by: HashSet<Uuid>,
}
