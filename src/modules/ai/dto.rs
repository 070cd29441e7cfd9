use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ScriptRequest {
    #[validate(length(min = 1, max = 500))]
    pub prompt: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub characters: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScriptMetadata {
    pub word_count: usize,
    /// Minutes.
    pub estimated_duration: u32,
    pub generated_at: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScriptResponse {
    pub script: String,
    pub metadata: ScriptMetadata,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TopicRequest {
    pub topic: Option<String>,
    pub genre: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OutlineResponse {
    pub outline: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CoverTitleResponse {
    pub title: String,
    pub cover_prompt: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SuggestionRequest {
    #[serde(default)]
    pub context: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SuggestionResponse {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ShotlistRequest {
    #[serde(default)]
    pub scene_prompt: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ShotlistResponse {
    pub shotlist: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AudioHintsRequest {
    pub mood: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AudioHintsResponse {
    pub hints: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CharacterRequest {
    #[validate(length(min = 1, max = 500))]
    pub description: String,
    #[serde(default)]
    pub personality: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CharacterProfile {
    pub name: String,
    pub description: String,
    pub personality: String,
    pub background: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CharacterResponse {
    pub character: CharacterProfile,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SceneRequest {
    #[validate(length(min = 1, max = 200))]
    pub setting: String,
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub characters: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SceneResponse {
    pub scene: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, ToSchema)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
    /// Earlier turns; accepted for shape compatibility, replies do not depend on them.
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
    pub timestamp: String,
}
