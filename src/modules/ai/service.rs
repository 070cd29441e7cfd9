use anyhow::anyhow;
use rand::seq::IndexedRandom;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use validator::Validate;

use super::dto::{
    AudioHintsRequest, AudioHintsResponse, CharacterProfile, CharacterRequest, CharacterResponse,
    ChatRequest, ChatResponse, CoverTitleResponse, OutlineResponse, SceneRequest, SceneResponse,
    ScriptMetadata, ScriptRequest, ScriptResponse, ShotlistRequest, ShotlistResponse,
    SuggestionRequest, SuggestionResponse, TopicRequest,
};
use crate::common::error::{AppError, AppResult};

const TITLE_MAX_CHARS: usize = 14;
const WORDS_PER_MINUTE: usize = 12;

const CHAT_REPLIES: [&str; 5] = [
    "That's an interesting idea! Let me help you develop this plot further.",
    "From what you describe, adding some emotional conflict here would make the story more gripping.",
    "Great character concept! Consider giving them a distinctive backstory.",
    "Plot-wise, this is a good place for a turning point that keeps viewers hooked.",
    "Love the creativity! Let's work through the details of this story together.",
];

fn now_rfc3339() -> AppResult<String> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| AppError::Internal(anyhow!("Failed to format timestamp: {}", e)))
}

/// Template-backed stand-ins for the writing assistant; no model is called.
pub struct AiService;

impl AiService {
    pub fn generate_script(req: ScriptRequest) -> AppResult<ScriptResponse> {
        req.validate()?;

        let romance = req.genre.eq_ignore_ascii_case("romance");
        let (setting, ending) = if romance {
            ("romantic", "heart-warming")
        } else {
            ("mysterious", "unexpected")
        };

        let script = format!(
            "Theme: {prompt}\nGenre: {genre}\nMain characters: {chars}\n\n\
             Scene 1: Opening\n{chars} appear in a {setting} setting...\n\n\
             Scene 2: Conflict\nThe story takes a turn nobody saw coming...\n\n\
             Scene 3: Climax\n{chars} face a decision that changes everything...\n\n\
             Scene 4: Ending\nThe story closes on a {ending} note.",
            prompt = req.prompt,
            genre = req.genre,
            chars = req.characters,
        );

        let word_count = script.split_whitespace().count();
        let generated_at = now_rfc3339()?;

        Ok(ScriptResponse {
            metadata: ScriptMetadata {
                word_count,
                estimated_duration: word_count.div_ceil(WORDS_PER_MINUTE) as u32,
                generated_at,
            },
            script,
        })
    }

    pub fn generate_outline(req: TopicRequest) -> OutlineResponse {
        let genre = req.genre.filter(|g| !g.is_empty()).unwrap_or_else(|| "General".to_string());
        let outline = format!(
            "[Episode outline · {}]\n\
             1. Setup: world and conflict introduced\n\
             2. Development: relationships advance, obstacles appear\n\
             3. Twist: a key event forces a choice\n\
             4. Climax: the conflict erupts and turns\n\
             5. Resolution: character arcs close and the theme answers back",
            genre
        );
        OutlineResponse { outline }
    }

    pub fn generate_cover_title(req: TopicRequest) -> CoverTitleResponse {
        let topic = req.topic.filter(|t| !t.is_empty()).unwrap_or_else(|| "Heartbeat Moment".to_string());
        let genre = req.genre.filter(|g| !g.is_empty()).unwrap_or_else(|| "Urban".to_string());

        CoverTitleResponse {
            title: topic.chars().take(TITLE_MAX_CHARS).collect(),
            cover_prompt: format!(
                "[Cover · {}] high-contrast palette, character close-up, one emotional prop, large legible title",
                genre
            ),
        }
    }

    pub fn generate_shotlist(_req: ShotlistRequest) -> ShotlistResponse {
        ShotlistResponse {
            shotlist: "[Shot list]\n\
                       - Wide: establish the location and atmosphere\n\
                       - Medium: character interaction and blocking\n\
                       - Close-up: emotion or the key prop\n\
                       - Moving camera: tracking, push-in or pull-out\n\
                       - Transition: fade in/out or freeze frame"
                .to_string(),
        }
    }

    pub fn generate_audio_hints(req: AudioHintsRequest) -> AudioHintsResponse {
        let mood = req.mood.filter(|m| !m.is_empty()).unwrap_or_else(|| "warm".to_string());
        AudioHintsResponse {
            hints: format!(
                "[Music / SFX / Subtitles]\n\
                 - Music: {} pop instrumental, 90 BPM\n\
                 - SFX: ambient room tone, footsteps, page turns\n\
                 - Subtitles: at most 2 lines, 24px, outlined",
                mood
            ),
        }
    }

    pub fn generate_character(req: CharacterRequest) -> AppResult<CharacterResponse> {
        req.validate()?;
        Ok(CharacterResponse {
            character: CharacterProfile {
                name: "AI Character".to_string(),
                description: req.description,
                personality: req.personality,
                background: "A generated backstory with layers and room to grow.".to_string(),
            },
        })
    }

    pub fn generate_scene(req: SceneRequest) -> AppResult<SceneResponse> {
        req.validate()?;
        Ok(SceneResponse {
            scene: format!(
                "Setting: {}.\nMood: {}.\nCharacters: {}.\n\
                 Plot: in this atmosphere, something subtle begins to shift between the characters...",
                req.setting, req.mood, req.characters
            ),
        })
    }

    /// Replies come from a fixed pool.
    pub fn chat(req: ChatRequest) -> AppResult<ChatResponse> {
        req.validate()?;
        let response = CHAT_REPLIES
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(CHAT_REPLIES[0]);

        Ok(ChatResponse {
            response: response.to_string(),
            timestamp: now_rfc3339()?,
        })
    }

    pub fn suggestions(_req: SuggestionRequest) -> SuggestionResponse {
        SuggestionResponse {
            suggestions: vec![
                "Add a small twist to raise the suspense".to_string(),
                "Sharpen the lead's motivation so viewers buy in".to_string(),
                "Give a supporting character their own thread".to_string(),
                "Plant the key clue before the climax".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_mentions_inputs_and_counts_words() {
        let res = AiService::generate_script(ScriptRequest {
            prompt: "A chance meeting".into(),
            genre: "Romance".into(),
            characters: "Lin and Zhou".into(),
        })
        .unwrap();

        assert!(res.script.contains("A chance meeting"));
        assert!(res.script.contains("romantic"));
        assert_eq!(res.metadata.word_count, res.script.split_whitespace().count());
        assert!(res.metadata.estimated_duration >= 1);
    }

    #[test]
    fn empty_prompt_is_rejected() {
        let res = AiService::generate_script(ScriptRequest {
            prompt: String::new(),
            genre: String::new(),
            characters: String::new(),
        });
        assert!(res.is_err());
    }

    #[test]
    fn cover_title_is_truncated_by_characters() {
        let res = AiService::generate_cover_title(TopicRequest {
            topic: Some("都市情缘之咖啡馆里的偶遇与重逢故事".into()),
            genre: None,
        });
        assert_eq!(res.title.chars().count(), 14);
        assert!(res.cover_prompt.contains("Urban"));
    }

    #[test]
    fn audio_hints_default_to_warm() {
        let res = AiService::generate_audio_hints(AudioHintsRequest { mood: None });
        assert!(res.hints.contains("warm pop"));

        let res = AiService::generate_audio_hints(AudioHintsRequest { mood: Some("tense".into()) });
        assert!(res.hints.contains("tense pop"));
    }

    #[test]
    fn character_echoes_inputs() {
        let res = AiService::generate_character(CharacterRequest {
            description: "A street violinist".into(),
            personality: "stubborn".into(),
        })
        .unwrap();
        assert_eq!(res.character.description, "A street violinist");
        assert_eq!(res.character.personality, "stubborn");
        assert_eq!(res.character.name, "AI Character");
    }

    #[test]
    fn scene_requires_a_setting() {
        let res = AiService::generate_scene(SceneRequest {
            setting: String::new(),
            mood: "calm".into(),
            characters: String::new(),
        });
        assert!(res.is_err());
    }

    #[test]
    fn chat_reply_comes_from_the_pool() {
        for _ in 0..20 {
            let res = AiService::chat(ChatRequest {
                message: "What next?".into(),
                history: Vec::new(),
            })
            .unwrap();
            assert!(CHAT_REPLIES.contains(&res.response.as_str()));
        }
    }

    #[test]
    fn cover_title_defaults() {
        let res = AiService::generate_cover_title(TopicRequest { topic: None, genre: None });
        assert_eq!(res.title, "Heartbeat Mome");
    }
}
