use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::model::ShortVideo;

pub const DEFAULT_PAGE_SIZE: usize = 12;

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FeedQuery {
    #[validate(range(min = 1, max = 10000))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 50))]
    pub page_size: Option<usize>,
}

/// A feed entry as seen by one viewer.
#[derive(Debug, Serialize, ToSchema)]
pub struct ShortVideoView {
    pub id: u64,
    pub title: String,
    pub cover_image: String,
    pub video_url: String,
    pub likes: u64,
    pub tag: String,
    pub duration: u32,
    pub liked: bool,
    pub favorite: bool,
}

impl ShortVideoView {
    pub fn for_viewer(video: &ShortVideo, viewer: uuid::Uuid) -> Self {
        Self {
            id: video.id,
            title: video.title.clone(),
            cover_image: video.cover_image.clone(),
            video_url: video.video_url.clone(),
            likes: video.likes,
            tag: video.tag.clone(),
            duration: video.duration,
            liked: video.liked_by.contains(&viewer),
            favorite: video.favorited_by.contains(&viewer),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FeedPage {
    pub videos: Vec<ShortVideoView>,
    pub page: usize,
    pub page_size: usize,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VideoLikeRequest {
    pub liked: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VideoLikeResponse {
    pub video_id: u64,
    pub liked: bool,
    pub likes: u64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VideoFavoriteRequest {
    pub favorite: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VideoFavoriteResponse {
    pub video_id: u64,
    pub favorite: bool,
}
