use tracing::{info, warn};
use validator::Validate;

use super::dto::{JobListResponse, ListJobsQuery, SubmitJobRequest, SubmitJobResponse};
use super::model::{GenerationJob, JobStatus, QuotaState};
use super::repository::GenerationRepository;
use crate::common::error::{AppError, AppResult};
use crate::state::AppState;
use crate::workers::simulator::{FIRST_RUN, RETRY_RUN};

const DEFAULT_PAGE_SIZE: usize = 10;

pub struct GenerationService;

impl GenerationService {
    /// Admits the job against the daily quota and returns without waiting
    /// for the pipeline. Quota is charged only when a job finishes DONE.
    pub async fn submit(state: AppState, req: SubmitJobRequest) -> AppResult<SubmitJobResponse> {
        req.validate()?;

        let job = {
            let mut db = state.db.lock().await;
            if db.quota.is_exhausted() {
                warn!(
                    "Rejected generation for content {} episode {}: quota {}/{}",
                    req.content_id, req.episode, db.quota.used_today, db.quota.daily_limit
                );
                return Err(AppError::QuotaExceeded);
            }
            GenerationRepository::insert(&mut db, req)
        };

        info!("Submitted {} for content {} episode {}", job.task_id, job.content_id, job.episode);
        state.simulator.arm(job.task_id.clone(), FIRST_RUN);

        Ok(SubmitJobResponse { task_id: job.task_id })
    }

    pub async fn get(state: AppState, task_id: &str) -> AppResult<GenerationJob> {
        let db = state.db.lock().await;
        GenerationRepository::find(&db, task_id).ok_or_else(|| AppError::NotFound("Task".to_string()))
    }

    pub async fn retry(state: AppState, task_id: &str) -> AppResult<()> {
        {
            let mut db = state.db.lock().await;
            let job = GenerationRepository::find_mut(&mut db, task_id)
                .ok_or_else(|| AppError::NotFound("Task".to_string()))?;

            if job.status != JobStatus::Failed {
                return Err(AppError::InvalidState(format!(
                    "Only failed tasks can be retried, {} is {:?}",
                    task_id, job.status
                )));
            }
            job.reset_for_retry();
        }

        info!("Retrying {}", task_id);
        state.simulator.arm(task_id.to_string(), RETRY_RUN);
        Ok(())
    }

    pub async fn list(state: AppState, query: ListJobsQuery) -> AppResult<JobListResponse> {
        query.validate()?;
        let page = query.page.unwrap_or(1);
        let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        let db = state.db.lock().await;
        let (jobs, total) = GenerationRepository::list(&db, (page - 1).saturating_mul(page_size), page_size);

        Ok(JobListResponse {
            jobs,
            total,
            page,
            page_size,
        })
    }

    pub async fn quota(state: AppState) -> AppResult<QuotaState> {
        let db = state.db.lock().await;
        Ok(GenerationRepository::quota(&db))
    }
}
