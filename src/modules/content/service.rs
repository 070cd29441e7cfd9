use rand::Rng;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use super::dto::{
    ContentListResponse, CreateContentRequest, ListContentQuery, SeasonResponse, TranscodeAccepted,
    TranscodeRequest, UpdateContentRequest, UpdateEpisodeVideoRequest,
};
use super::events::TranscodeJob;
use super::model::{ContentItem, Episode};
use super::repository::{ContentRepository, EpisodePatch};
use crate::common::error::{AppError, AppResult};
use crate::config::settings::SAMPLE_VIDEO_URL;
use crate::state::AppState;

const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_SEASON_LENGTH: u32 = 12;
const FREE_EPISODES: u32 = 3;

pub struct ContentService;

impl ContentService {
    pub async fn create(state: AppState, creator_id: Uuid, req: CreateContentRequest) -> AppResult<ContentItem> {
        req.validate()?;
        let mut db = state.db.lock().await;
        let item = ContentRepository::create(&mut db, creator_id, req);
        info!("Created content {} ({})", item.id, item.title);
        Ok(item)
    }

    pub async fn list(state: AppState, query: ListContentQuery) -> AppResult<ContentListResponse> {
        query.validate()?;
        let page = query.page.unwrap_or(1);
        let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        let db = state.db.lock().await;
        let (contents, total) = ContentRepository::list(&db, (page - 1).saturating_mul(page_size), page_size);

        Ok(ContentListResponse {
            contents,
            total,
            page,
            page_size,
        })
    }

    pub async fn get(state: AppState, id: i64) -> AppResult<ContentItem> {
        let db = state.db.lock().await;
        ContentRepository::get_by_id(&db, id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Content".to_string()))
    }

    pub async fn update(state: AppState, id: i64, req: UpdateContentRequest) -> AppResult<ContentItem> {
        req.validate()?;
        let mut db = state.db.lock().await;
        ContentRepository::update(&mut db, id, req).ok_or_else(|| AppError::NotFound("Content".to_string()))
    }

    /// Idempotent; generation jobs that target the item are left running.
    pub async fn delete(state: AppState, id: i64) -> AppResult<()> {
        let mut db = state.db.lock().await;
        if ContentRepository::delete(&mut db, id) {
            info!("Deleted content {}", id);
        }
        Ok(())
    }

    /// Falls back to a default lineup, not persisted, for items without
    /// episodes.
    pub async fn get_season(state: AppState, id: i64) -> AppResult<SeasonResponse> {
        let db = state.db.lock().await;
        let item = ContentRepository::get_by_id(&db, id).ok_or_else(|| AppError::NotFound("Content".to_string()))?;

        Ok(SeasonResponse {
            content_id: item.id,
            episodes: season_lineup(item),
            season_price: item.season_price,
        })
    }

    pub async fn update_episode_video(
        state: AppState,
        id: i64,
        episode: u32,
        req: UpdateEpisodeVideoRequest,
    ) -> AppResult<ContentItem> {
        req.validate()?;
        let mut db = state.db.lock().await;
        match ContentRepository::set_episode_video(&mut db, id, episode, &req.video_url) {
            EpisodePatch::Patched => ContentRepository::get_by_id(&db, id)
                .cloned()
                .ok_or_else(|| AppError::NotFound("Content".to_string())),
            EpisodePatch::MissingContent => Err(AppError::NotFound("Content".to_string())),
            EpisodePatch::MissingEpisode => Err(AppError::NotFound("Episode".to_string())),
        }
    }

    pub async fn request_transcode(
        state: AppState,
        id: i64,
        episode: u32,
        req: TranscodeRequest,
    ) -> AppResult<TranscodeAccepted> {
        req.validate()?;
        {
            let db = state.db.lock().await;
            let item = ContentRepository::get_by_id(&db, id).ok_or_else(|| AppError::NotFound("Content".to_string()))?;
            if !item.episodes.iter().any(|e| e.episode == episode) {
                return Err(AppError::NotFound("Episode".to_string()));
            }
        }

        let task_id = format!("trans_{}", Uuid::new_v4().simple());
        state.transcoder.enqueue(TranscodeJob {
            task_id: task_id.clone(),
            content_id: id,
            episode,
            source_url: req.video_url.unwrap_or_else(|| SAMPLE_VIDEO_URL.to_string()),
            watermark: req.watermark,
        });

        Ok(TranscodeAccepted { task_id })
    }
}

/// The item's own episodes, or the default lineup when it has none.
pub fn season_lineup(item: &ContentItem) -> Vec<Episode> {
    if item.episodes.is_empty() {
        default_lineup()
    } else {
        item.episodes.clone()
    }
}

fn default_lineup() -> Vec<Episode> {
    let mut rng = rand::rng();
    (1..=DEFAULT_SEASON_LENGTH)
        .map(|n| Episode {
            episode: n,
            title: format!("Episode {}", n),
            duration: rng.random_range(120..240),
            is_free: n <= FREE_EPISODES,
            price: 1.0,
            video_url: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lineup_shape() {
        let lineup = default_lineup();
        assert_eq!(lineup.len(), 12);
        assert_eq!(lineup.iter().filter(|e| e.is_free).count(), 3);
        assert!(lineup.iter().all(|e| (120..240).contains(&e.duration)));
        assert_eq!(lineup[11].episode, 12);
    }
}
