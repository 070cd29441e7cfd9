use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use time::OffsetDateTime;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, warn};

use crate::infrastructure::memory::store::{MemoryDb, MemoryPool};
use crate::modules::content::repository::{ContentRepository, EpisodePatch};
use crate::modules::generation::model::JobStatus;
use crate::modules::generation::repository::GenerationRepository;

pub const GENERATION_ERROR: &str = "Generation failed, please retry";

/// Decides how a job that reaches the end of its schedule resolves.
pub trait OutcomePolicy: Send + Sync {
    fn should_fail(&self) -> bool;
}

/// Fails each job independently with a fixed probability.
pub struct RandomFailure {
    probability: f64,
}

impl RandomFailure {
    pub fn new(probability: f64) -> Self {
        let probability = if probability.is_finite() {
            probability.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { probability }
    }
}

impl OutcomePolicy for RandomFailure {
    fn should_fail(&self) -> bool {
        rand::rng().random_bool(self.probability)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedOutcome {
    Succeed,
    Fail,
}

impl OutcomePolicy for FixedOutcome {
    fn should_fail(&self) -> bool {
        matches!(self, FixedOutcome::Fail)
    }
}

/// Offsets are measured from the moment the job is armed.
#[derive(Debug, Clone, Copy)]
pub struct StageSchedule {
    pub start_after: Duration,
    pub start_progress: u8,
    pub milestones: &'static [(Duration, u8)],
    pub resolve_after: Duration,
}

pub const FIRST_RUN: StageSchedule = StageSchedule {
    start_after: Duration::from_millis(400),
    start_progress: 10,
    milestones: &[
        (Duration::from_millis(2000), 55),
        (Duration::from_millis(4000), 85),
    ],
    resolve_after: Duration::from_millis(6500),
};

pub const RETRY_RUN: StageSchedule = StageSchedule {
    start_after: Duration::from_millis(400),
    start_progress: 10,
    milestones: &[(Duration::from_millis(2000), 60)],
    resolve_after: Duration::from_millis(5000),
};

#[derive(Debug, Clone, Copy)]
enum Stage {
    Start(u8),
    Progress(u8),
    Resolve { failed: bool },
}

/// Drives generation jobs through PENDING → RUNNING → DONE | FAILED on
/// timers. Each stage re-reads the job by task id, so a job that is gone
/// or no longer in the expected state is left alone.
#[derive(Clone)]
pub struct JobSimulator {
    db: MemoryPool,
    policy: Arc<dyn OutcomePolicy>,
    result_url: String,
}

impl JobSimulator {
    pub fn new(db: MemoryPool, policy: Arc<dyn OutcomePolicy>, result_url: String) -> Self {
        Self { db, policy, result_url }
    }

    /// Fire-and-forget: there is no handle to cancel an armed job.
    pub fn arm(&self, task_id: String, schedule: StageSchedule) {
        let simulator = self.clone();
        tokio::spawn(async move {
            simulator.run(task_id, schedule).await;
        });
    }

    async fn run(&self, task_id: String, schedule: StageSchedule) {
        let armed_at = Instant::now();

        sleep_until(armed_at + schedule.start_after).await;
        self.apply(&task_id, Stage::Start(schedule.start_progress)).await;

        for &(offset, progress) in schedule.milestones {
            sleep_until(armed_at + offset).await;
            self.apply(&task_id, Stage::Progress(progress)).await;
        }

        sleep_until(armed_at + schedule.resolve_after).await;
        let failed = self.policy.should_fail();
        self.apply(&task_id, Stage::Resolve { failed }).await;
    }

    async fn apply(&self, task_id: &str, stage: Stage) {
        let mut db = self.db.lock().await;
        apply_stage(&mut db, task_id, stage, &self.result_url);
    }
}

fn apply_stage(db: &mut MemoryDb, task_id: &str, stage: Stage, result_url: &str) {
    let Some(job) = GenerationRepository::find_mut(db, task_id) else {
        debug!("Job {} vanished before stage {:?}", task_id, stage);
        return;
    };

    match stage {
        Stage::Start(progress) => {
            if job.status != JobStatus::Pending {
                return;
            }
            job.status = JobStatus::Running;
            job.progress = progress;
            debug!("Job {} running", task_id);
        }
        Stage::Progress(progress) => {
            if job.status != JobStatus::Running {
                return;
            }
            job.progress = job.progress.max(progress);
            debug!("Job {} at {}%", task_id, job.progress);
        }
        Stage::Resolve { failed: true } => {
            if job.status != JobStatus::Running {
                return;
            }
            job.status = JobStatus::Failed;
            job.error = Some(GENERATION_ERROR.to_string());
            job.completed_at = Some(OffsetDateTime::now_utc());
            warn!("Job {} failed", task_id);
        }
        Stage::Resolve { failed: false } => {
            if job.status != JobStatus::Running {
                return;
            }
            job.status = JobStatus::Done;
            job.progress = 100;
            job.video_url = Some(result_url.to_string());
            job.completed_at = Some(OffsetDateTime::now_utc());
            let (content_id, episode) = (job.content_id, job.episode);

            db.quota.record_success();

            match ContentRepository::set_episode_video(db, content_id, episode, result_url) {
                EpisodePatch::Patched => {
                    info!("Job {} done, episode {} of content {} updated", task_id, episode, content_id)
                }
                outcome => info!("Job {} done, no patch-back ({:?})", task_id, outcome),
            }
        }
    }
}
