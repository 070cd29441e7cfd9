use std::time::Duration;

use tracing::{info, warn};

use crate::infrastructure::memory::store::MemoryPool;
use crate::modules::content::events::TranscodeJob;
use crate::modules::content::repository::{ContentRepository, EpisodePatch};

pub const TRANSCODE_DELAY: Duration = Duration::from_secs(2);

/// Rewrites a source URL to the address it is served from after
/// transcoding.
pub fn cdn_url(source_url: &str) -> String {
    source_url.replacen("https://", "https://cdn.", 1)
}

#[derive(Clone)]
pub struct TranscodeWorker {
    db: MemoryPool,
}

impl TranscodeWorker {
    pub fn new(db: MemoryPool) -> Self {
        Self { db }
    }

    pub fn enqueue(&self, job: TranscodeJob) {
        info!(
            "📦 Queued transcode {} for content {} episode {} (watermark: {})",
            job.task_id, job.content_id, job.episode, job.watermark
        );
        let worker = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(TRANSCODE_DELAY).await;
            worker.process_job(&job).await;
        });
    }

    async fn process_job(&self, job: &TranscodeJob) {
        let target = cdn_url(&job.source_url);
        let mut db = self.db.lock().await;

        match ContentRepository::set_episode_video(&mut db, job.content_id, job.episode, &target) {
            EpisodePatch::Patched => info!("✅ Transcode {} published at {}", job.task_id, target),
            outcome => warn!("Transcode {} dropped: {:?}", job.task_id, outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdn_url_only_rewrites_https_prefix() {
        assert_eq!(cdn_url("https://media.example/a.mp4"), "https://cdn.media.example/a.mp4");
        assert_eq!(cdn_url("http://media.example/a.mp4"), "http://media.example/a.mp4");
    }
}
