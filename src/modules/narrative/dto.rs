use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::model::{branch, NarrativeSession};

#[derive(Debug, Deserialize, ToSchema)]
pub struct StartNarrativeRequest {
    pub content_id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MakeChoiceRequest {
    pub choice_index: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChoiceView {
    pub branch_id: u32,
    pub choice_text: String,
    pub popularity_score: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NarrativeView {
    pub session_id: String,
    pub content_id: i64,
    pub current_branch_id: u32,
    pub current_scene_content: String,
    pub is_ending: bool,
    pub total_choices_made: u32,
    pub available_choices: Vec<ChoiceView>,
}

impl From<&NarrativeSession> for NarrativeView {
    fn from(session: &NarrativeSession) -> Self {
        let (scene, choices) = branch(session.current_branch_id)
            .map(|b| (b.scene, b.choices))
            .unwrap_or_default();

        Self {
            session_id: session.session_id.clone(),
            content_id: session.content_id,
            current_branch_id: session.current_branch_id,
            current_scene_content: scene.to_string(),
            is_ending: choices.is_empty(),
            total_choices_made: session.total_choices_made,
            available_choices: choices
                .iter()
                .map(|c| ChoiceView {
                    branch_id: c.branch_id,
                    choice_text: c.text.to_string(),
                    popularity_score: c.popularity_score,
                })
                .collect(),
        }
    }
}
