use tracing::info;
use uuid::Uuid;

use super::dto::{MakeChoiceRequest, NarrativeView, StartNarrativeRequest};
use super::model::{branch, NarrativeSession, ROOT_BRANCH};
use super::repository::NarrativeRepository;
use crate::common::error::{AppError, AppResult};
use crate::modules::content::repository::ContentRepository;
use crate::state::AppState;

pub struct NarrativeService;

impl NarrativeService {
    pub async fn start(state: AppState, owner: Uuid, req: StartNarrativeRequest) -> AppResult<NarrativeView> {
        let mut db = state.db.lock().await;
        ContentRepository::get_by_id(&db, req.content_id)
            .ok_or_else(|| AppError::NotFound("Content".to_string()))?;

        let session = NarrativeSession {
            session_id: format!("sess_{}", Uuid::new_v4().simple()),
            owner,
            content_id: req.content_id,
            current_branch_id: ROOT_BRANCH,
            total_choices_made: 0,
        };
        let view = NarrativeView::from(&session);
        info!("Narrative {} started on content {}", session.session_id, req.content_id);
        NarrativeRepository::insert(&mut db, session);

        Ok(view)
    }

    pub async fn get(state: AppState, owner: Uuid, session_id: &str) -> AppResult<NarrativeView> {
        let mut db = state.db.lock().await;
        let session = NarrativeRepository::find_owned(&mut db, session_id, owner)
            .ok_or_else(|| AppError::NotFound("Session".to_string()))?;
        Ok(NarrativeView::from(&*session))
    }

    pub async fn choose(
        state: AppState,
        owner: Uuid,
        session_id: &str,
        req: MakeChoiceRequest,
    ) -> AppResult<NarrativeView> {
        let mut db = state.db.lock().await;
        let session = NarrativeRepository::find_owned(&mut db, session_id, owner)
            .ok_or_else(|| AppError::NotFound("Session".to_string()))?;

        let choices = branch(session.current_branch_id)
            .map(|b| b.choices)
            .unwrap_or_default();
        if choices.is_empty() {
            return Err(AppError::InvalidState("The story has already ended".to_string()));
        }
        let next = choices.get(req.choice_index).ok_or_else(|| {
            AppError::Validation(format!("choice_index must be below {}", choices.len()))
        })?;

        session.current_branch_id = next.branch_id;
        session.total_choices_made += 1;
        Ok(NarrativeView::from(&*session))
    }

    pub async fn reset(state: AppState, owner: Uuid, session_id: &str) -> AppResult<NarrativeView> {
        let mut db = state.db.lock().await;
        let session = NarrativeRepository::find_owned(&mut db, session_id, owner)
            .ok_or_else(|| AppError::NotFound("Session".to_string()))?;

        session.current_branch_id = ROOT_BRANCH;
        session.total_choices_made = 0;
        Ok(NarrativeView::from(&*session))
    }
}
