use time::OffsetDateTime;

use super::dto::SubmitJobRequest;
use super::model::{GenerationJob, JobStatus, QuotaState};
use crate::infrastructure::memory::store::MemoryDb;

pub struct GenerationRepository;

impl GenerationRepository {
    /// Inserts a PENDING job. Quota admission is the caller's job.
    pub fn insert(db: &mut MemoryDb, req: SubmitJobRequest) -> GenerationJob {
        let seq = db.next_job_seq;
        db.next_job_seq += 1;

        let job = GenerationJob {
            seq,
            task_id: GenerationJob::task_id_for(seq),
            content_id: req.content_id,
            episode: req.episode,
            status: JobStatus::Pending,
            progress: 0,
            style: req.style.unwrap_or_else(|| "urban".to_string()),
            duration: req.duration.unwrap_or(60),
            voice: req.voice.unwrap_or_else(|| "female".to_string()),
            started_at: OffsetDateTime::now_utc(),
            completed_at: None,
            video_url: None,
            error: None,
        };

        db.jobs.insert(job.task_id.clone(), job.clone());
        job
    }

    pub fn find(db: &MemoryDb, task_id: &str) -> Option<GenerationJob> {
        db.jobs.get(task_id).cloned()
    }

    pub fn find_mut<'a>(db: &'a mut MemoryDb, task_id: &str) -> Option<&'a mut GenerationJob> {
        db.jobs.get_mut(task_id)
    }

    /// Most recent first, then sliced.
    pub fn list(db: &MemoryDb, offset: usize, limit: usize) -> (Vec<GenerationJob>, usize) {
        let mut all: Vec<&GenerationJob> = db.jobs.values().collect();
        all.sort_by(|a, b| b.started_at.cmp(&a.started_at).then(b.seq.cmp(&a.seq)));

        let page = all.into_iter().skip(offset).take(limit).cloned().collect();
        (page, db.jobs.len())
    }

    pub fn quota(db: &MemoryDb) -> QuotaState {
        db.quota.clone()
    }
}
