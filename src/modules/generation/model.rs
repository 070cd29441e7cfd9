use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Pending,
    Running,
    Done,
    Failed,
}

impl JobStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Done | JobStatus::Failed)
    }
}

/// A simulated rendering task for one episode of one content item. Also the
/// snapshot callers poll.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct GenerationJob {
    #[serde(skip)]
    pub seq: u64,
    pub task_id: String,
    pub content_id: i64,
    pub episode: u32,
    pub status: JobStatus,
    pub progress: u8,
    pub style: String,
    pub duration: u32,
    pub voice: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none", default)]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub completed_at: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationJob {
    pub fn task_id_for(seq: u64) -> String {
        format!("task_{}", seq)
    }

    /// Puts a FAILED job back at the start of the pipeline.
    pub fn reset_for_retry(&mut self) {
        self.status = JobStatus::Pending;
        self.progress = 0;
        self.error = None;
        self.video_url = None;
        self.completed_at = None;
    }
}

#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct QuotaState {
    pub daily_limit: u32,
    pub used_today: u32,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub reset_at: OffsetDateTime,
}

impl QuotaState {
    pub fn new(daily_limit: u32, now: OffsetDateTime) -> Self {
        Self {
            daily_limit,
            used_today: 0,
            reset_at: now + Duration::days(1),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.used_today >= self.daily_limit
    }

    /// Counts one DONE job, never past the ceiling.
    pub fn record_success(&mut self) {
        self.used_today = self.used_today.saturating_add(1).min(self.daily_limit);
    }
}
