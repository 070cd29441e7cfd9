use std::collections::HashSet;

use rand::Rng;

use super::model::{ShortVideo, FEED_TAGS, FIRST_VIDEO_ID};
use crate::config::settings::SAMPLE_VIDEO_URL;
use crate::infrastructure::memory::store::MemoryDb;

pub struct FeedRepository;

impl FeedRepository {
    /// Returns the page, creating any videos that have not been served yet.
    pub fn page(db: &mut MemoryDb, page: usize, page_size: usize) -> Vec<ShortVideo> {
        let start = FIRST_VIDEO_ID + ((page - 1) * page_size) as u64;
        let mut rng = rand::rng();

        (0..page_size as u64)
            .map(|i| {
                let id = start + i;
                db.short_videos
                    .entry(id)
                    .or_insert_with(|| ShortVideo {
                        id,
                        title: format!("Short video #{}", id),
                        cover_image: format!("https://via.placeholder.com/400x700?text=Short+{}", id),
                        video_url: SAMPLE_VIDEO_URL.to_string(),
                        likes: rng.random_range(0..5000),
                        tag: FEED_TAGS[(id % FEED_TAGS.len() as u64) as usize].to_string(),
                        duration: rng.random_range(30..90),
                        liked_by: HashSet::new(),
                        favorited_by: HashSet::new(),
                    })
                    .clone()
            })
            .collect()
    }

    pub fn get_mut(db: &mut MemoryDb, id: u64) -> Option<&mut ShortVideo> {
        db.short_videos.get_mut(&id)
    }
}
