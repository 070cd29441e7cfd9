use uuid::Uuid;
use validator::Validate;

use super::dto::{
    FeedPage, FeedQuery, ShortVideoView, VideoFavoriteRequest, VideoFavoriteResponse, VideoLikeRequest,
    VideoLikeResponse, DEFAULT_PAGE_SIZE,
};
use super::repository::FeedRepository;
use crate::common::error::{AppError, AppResult};
use crate::state::AppState;

pub struct FeedService;

impl FeedService {
    pub async fn page(state: AppState, viewer: Uuid, query: FeedQuery) -> AppResult<FeedPage> {
        query.validate()?;
        let page = query.page.unwrap_or(1);
        let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        let mut db = state.db.lock().await;
        let videos = FeedRepository::page(&mut db, page, page_size)
            .iter()
            .map(|v| ShortVideoView::for_viewer(v, viewer))
            .collect();

        Ok(FeedPage {
            videos,
            page,
            page_size,
        })
    }

    /// Only videos that have been served can be liked.
    pub async fn like(state: AppState, viewer: Uuid, id: u64, req: VideoLikeRequest) -> AppResult<VideoLikeResponse> {
        let mut db = state.db.lock().await;
        let video = FeedRepository::get_mut(&mut db, id)
            .ok_or_else(|| AppError::NotFound("Video".to_string()))?;

        let changed = if req.liked {
            video.liked_by.insert(viewer)
        } else {
            video.liked_by.remove(&viewer)
        };
        if changed {
            video.likes = if req.liked {
                video.likes.saturating_add(1)
            } else {
                video.likes.saturating_sub(1)
            };
        }

        Ok(VideoLikeResponse {
            video_id: id,
            liked: req.liked,
            likes: video.likes,
        })
    }

    pub async fn favorite(
        state: AppState,
        viewer: Uuid,
        id: u64,
        req: VideoFavoriteRequest,
    ) -> AppResult<VideoFavoriteResponse> {
        let mut db = state.db.lock().await;
        let video = FeedRepository::get_mut(&mut db, id)
            .ok_or_else(|| AppError::NotFound("Video".to_string()))?;

        if req.favorite {
            video.favorited_by.insert(viewer);
        } else {
            video.favorited_by.remove(&viewer);
        }

        Ok(VideoFavoriteResponse {
            video_id: id,
            favorite: req.favorite,
        })
    }
}
