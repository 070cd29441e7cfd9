use utoipa::OpenApi;
use crate::common::response::Ack;
use crate::modules::ai::dto::*;
use crate::modules::auth::dto::*;
use crate::modules::content::dto::*;
use crate::modules::content::model::{ContentItem, Episode};
use crate::modules::generation::dto::*;
use crate::modules::generation::model::{GenerationJob, JobStatus, QuotaState};
use crate::modules::membership::dto::{
    EpisodeAccessResponse, EpisodePurchaseResponse, PlanPrice, Pricing, ProFeature, ProFeaturesResponse,
    PurchaseListResponse, PurchaseMembershipRequest, SeasonPurchaseResponse,
};
use crate::modules::membership::model::{AccessReason, Membership, MembershipTier, Purchase, PurchaseKind};
use crate::modules::engagement::dto::{
    FavoriteRequest, FavoriteResponse, LikeRequest, LikeResponse, RateRequest, RatingResponse, Recommendation,
    ReportAccepted, ReportRequest,
};
use crate::modules::engagement::model::Report;
use crate::modules::feed::dto::{
    FeedPage, ShortVideoView, VideoFavoriteRequest, VideoFavoriteResponse, VideoLikeRequest, VideoLikeResponse,
};
use crate::modules::narrative::dto::{ChoiceView, MakeChoiceRequest, NarrativeView, StartNarrativeRequest};
use crate::modules::dashboard::dto::{DashboardStats, KpiResponse, PurchaseBucket, RecentDrama};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::handler::register,
        crate::modules::auth::handler::login,
        crate::modules::auth::handler::get_me,
        crate::modules::content::handler::create_content,
        crate::modules::content::handler::list_contents,
        crate::modules::content::handler::get_content,
        crate::modules::content::handler::update_content,
        crate::modules::content::handler::delete_content,
        crate::modules::content::handler::get_season,
        crate::modules::content::handler::update_episode_video,
        crate::modules::content::handler::request_transcode,
        crate::modules::generation::handler::submit_task,
        crate::modules::generation::handler::list_tasks,
        crate::modules::generation::handler::get_task,
        crate::modules::generation::handler::retry_task,
        crate::modules::generation::handler::get_quota,
        crate::modules::ai::handler::generate_script,
        crate::modules::ai::handler::generate_outline,
        crate::modules::ai::handler::generate_cover_title,
        crate::modules::ai::handler::get_suggestions,
        crate::modules::ai::handler::generate_shotlist,
        crate::modules::ai::handler::generate_audio_hints,
        crate::modules::ai::handler::generate_character,
        crate::modules::ai::handler::generate_scene,
        crate::modules::ai::handler::chat,
        crate::modules::membership::handler::get_membership,
        crate::modules::membership::handler::purchase_membership,
        crate::modules::membership::handler::get_pro_features,
        crate::modules::membership::handler::list_purchases,
        crate::modules::membership::handler::purchase_season,
        crate::modules::membership::handler::purchase_episode,
        crate::modules::membership::handler::episode_access,
        crate::modules::engagement::handler::like_content,
        crate::modules::engagement::handler::favorite_content,
        crate::modules::engagement::handler::rate_content,
        crate::modules::engagement::handler::report_content,
        crate::modules::engagement::handler::get_recommendations,
        crate::modules::engagement::handler::list_favorites,
        crate::modules::engagement::handler::list_reports,
        crate::modules::feed::handler::get_feed,
        crate::modules::feed::handler::like_video,
        crate::modules::feed::handler::favorite_video,
        crate::modules::narrative::handler::start_narrative,
        crate::modules::narrative::handler::get_narrative,
        crate::modules::narrative::handler::make_choice,
        crate::modules::narrative::handler::reset_narrative,
        crate::modules::dashboard::handler::get_stats,
        crate::modules::dashboard::handler::get_kpi,
    ),
    components(
        schemas(
            Ack,
            RegisterRequest, LoginRequest, AuthResponse, UserResponse,
            ContentItem, Episode, EpisodeInput, CreateContentRequest, UpdateContentRequest,
            ContentListResponse, SeasonResponse, UpdateEpisodeVideoRequest,
            TranscodeRequest, TranscodeAccepted,
            GenerationJob, JobStatus, QuotaState, SubmitJobRequest, SubmitJobResponse,
            JobListResponse,
            ScriptRequest, ScriptMetadata, ScriptResponse, TopicRequest, OutlineResponse,
            CoverTitleResponse, SuggestionRequest, SuggestionResponse,
            ShotlistRequest, ShotlistResponse, AudioHintsRequest, AudioHintsResponse,
            CharacterRequest, CharacterProfile, CharacterResponse, SceneRequest, SceneResponse,
            ChatTurn, ChatRequest, ChatResponse,
            Membership, MembershipTier, Purchase, PurchaseKind, AccessReason,
            PurchaseMembershipRequest, EpisodePurchaseResponse, SeasonPurchaseResponse,
            EpisodeAccessResponse, PurchaseListResponse, ProFeature, PlanPrice, Pricing, ProFeaturesResponse,
            LikeRequest, LikeResponse, FavoriteRequest, FavoriteResponse, RateRequest, RatingResponse,
            ReportRequest, ReportAccepted, Report, Recommendation,
            FeedPage, ShortVideoView, VideoLikeRequest, VideoLikeResponse, VideoFavoriteRequest,
            VideoFavoriteResponse,
            StartNarrativeRequest, MakeChoiceRequest, ChoiceView, NarrativeView,
            DashboardStats, RecentDrama, KpiResponse, PurchaseBucket,
        )
    ),
    tags(
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Content", description = "Drama catalog management"),
        (name = "Generation", description = "Simulated video generation jobs and quota"),
        (name = "AI", description = "Template-based script assistant"),
        (name = "Membership", description = "PRO membership and pay-per-episode purchases"),
        (name = "Engagement", description = "Likes, favorites, ratings and reports"),
        (name = "Feed", description = "Vertical short-video feed"),
        (name = "Narrative", description = "Interactive branching stories"),
        (name = "Dashboard", description = "Admin totals and purchase KPIs")
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

use utoipa::Modify;
use utoipa::openapi::security::{SecurityScheme, HttpAuthScheme, HttpBuilder};

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
