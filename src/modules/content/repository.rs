use time::OffsetDateTime;
use uuid::Uuid;

use super::dto::{CreateContentRequest, UpdateContentRequest};
use super::model::{ContentItem, Episode, PLACEHOLDER_COVER};
use crate::infrastructure::memory::store::MemoryDb;

#[derive(Debug, PartialEq, Eq)]
pub enum EpisodePatch {
    Patched,
    MissingContent,
    MissingEpisode,
}

pub struct ContentRepository;

impl ContentRepository {
    pub fn create(db: &mut MemoryDb, creator_id: Uuid, req: CreateContentRequest) -> ContentItem {
        let id = db.next_content_id;
        db.next_content_id += 1;

        let item = ContentItem {
            id,
            title: req.title,
            description: req.description,
            genre: req.genre,
            duration: req.duration.unwrap_or(10),
            rating: 0.0,
            views: 0,
            likes: 0,
            cover_image: req.cover_image.unwrap_or_else(|| PLACEHOLDER_COVER.to_string()),
            script_content: req.script_content.unwrap_or_default(),
            creator_id,
            season_price: req.season_price.unwrap_or(8.0),
            ai_generated: req.ai_generated,
            episodes: req.episodes.into_iter().map(Episode::from).collect(),
            created_at: OffsetDateTime::now_utc(),
        };

        // Newest first.
        db.contents.insert(0, item.clone());
        item
    }

    pub fn get_by_id(db: &MemoryDb, id: i64) -> Option<&ContentItem> {
        db.contents.iter().find(|c| c.id == id)
    }

    pub fn get_by_id_mut(db: &mut MemoryDb, id: i64) -> Option<&mut ContentItem> {
        db.contents.iter_mut().find(|c| c.id == id)
    }

    pub fn list(db: &MemoryDb, offset: usize, limit: usize) -> (Vec<ContentItem>, usize) {
        let page = db.contents.iter().skip(offset).take(limit).cloned().collect();
        (page, db.contents.len())
    }

    pub fn update(db: &mut MemoryDb, id: i64, req: UpdateContentRequest) -> Option<ContentItem> {
        let item = Self::get_by_id_mut(db, id)?;

        if let Some(title) = req.title {
            item.title = title;
        }
        if let Some(description) = req.description {
            item.description = description;
        }
        if let Some(genre) = req.genre {
            item.genre = genre;
        }
        if let Some(duration) = req.duration {
            item.duration = duration;
        }
        if let Some(cover_image) = req.cover_image {
            item.cover_image = cover_image;
        }
        if let Some(script_content) = req.script_content {
            item.script_content = script_content;
        }
        if let Some(season_price) = req.season_price {
            item.season_price = season_price;
        }
        if let Some(episodes) = req.episodes {
            item.episodes = episodes.into_iter().map(Episode::from).collect();
        }

        Some(item.clone())
    }

    pub fn delete(db: &mut MemoryDb, id: i64) -> bool {
        let before = db.contents.len();
        db.contents.retain(|c| c.id != id);
        db.contents.len() != before
    }

    pub fn set_episode_video(db: &mut MemoryDb, id: i64, episode: u32, video_url: &str) -> EpisodePatch {
        let Some(item) = Self::get_by_id_mut(db, id) else {
            return EpisodePatch::MissingContent;
        };
        match item.episode_mut(episode) {
            Some(ep) => {
                ep.video_url = Some(video_url.to_string());
                EpisodePatch::Patched
            }
            None => EpisodePatch::MissingEpisode,
        }
    }

    /// Two demo dramas with fixed low ids, below the API counter.
    pub fn seed_demo_catalog(db: &mut MemoryDb, creator_id: Uuid) {
        let now = OffsetDateTime::now_utc();
        let pilot_episodes = (1..=3)
            .map(|n| Episode {
                episode: n,
                title: format!("Episode {}", n),
                duration: 150,
                is_free: n == 1,
                price: 1.0,
                video_url: None,
            })
            .collect();

        db.contents.push(ContentItem {
            id: 1,
            title: "City Romance".to_string(),
            description: "A warm short drama about love in a modern city".to_string(),
            genre: "Romance".to_string(),
            duration: 15,
            rating: 4.8,
            views: 12500,
            likes: 890,
            cover_image: "https://via.placeholder.com/300x200?text=City+Romance".to_string(),
            script_content: "Scene 1: Coffee shop\nHe walks in and sees her reading...".to_string(),
            creator_id,
            season_price: 8.0,
            ai_generated: false,
            episodes: pilot_episodes,
            created_at: now,
        });
        db.contents.push(ContentItem {
            id: 2,
            title: "Ancient Legend".to_string(),
            description: "A fantasy adventure after travelling back in time".to_string(),
            genre: "Fantasy".to_string(),
            duration: 20,
            rating: 4.6,
            views: 8900,
            likes: 567,
            cover_image: "https://via.placeholder.com/300x200?text=Ancient+Legend".to_string(),
            script_content: "Scene 1: Palace hall\nThe emperor summons his ministers...".to_string(),
            creator_id,
            season_price: 8.0,
            ai_generated: false,
            episodes: Vec::new(),
            created_at: now,
        });
    }
}
