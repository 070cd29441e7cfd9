use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;
use utoipa::ToSchema;

pub const MEMBERSHIP_TERM: Duration = Duration::days(30);
pub const DEFAULT_PLAN: &str = "SEASON";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipTier {
    Basic,
    Pro,
}

/// (id, name, description, icon)
pub const PRO_FEATURES: [(&str, &str, &str, &str); 8] = [
    ("unlimited_access", "Unlimited viewing", "Unlock every paid episode with no limits", "PlayCircleOutlined"),
    ("ad_free", "Ad-free", "Watch without any ad interruptions", "StopOutlined"),
    ("hd_quality", "HD quality", "Stream in up to 4K", "VideoCameraOutlined"),
    ("early_access", "Early access", "New episodes 24 hours before everyone else", "ClockCircleOutlined"),
    ("exclusive_content", "Exclusive content", "Behind-the-scenes extras for Pro members", "StarOutlined"),
    ("priority_support", "Priority support", "Round-the-clock priority customer support", "CustomerServiceOutlined"),
    ("advanced_ai_features", "Advanced AI", "Smarter recommendations and personalisation", "RobotOutlined"),
    ("blockchain_benefits", "Creator benefits", "Copyright protection and revenue sharing perks", "BlockOutlined"),
];

#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct Membership {
    pub active: bool,
    pub plan: Option<String>,
    #[serde(rename = "type")]
    pub tier: MembershipTier,
    #[serde(with = "time::serde::rfc3339::option")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub expires_at: Option<OffsetDateTime>,
    pub features: Vec<String>,
}

impl Membership {
    pub fn basic() -> Self {
        Self {
            active: false,
            plan: None,
            tier: MembershipTier::Basic,
            expires_at: None,
            features: Vec::new(),
        }
    }

    pub fn pro(plan: String, now: OffsetDateTime) -> Self {
        Self {
            active: true,
            plan: Some(plan),
            tier: MembershipTier::Pro,
            expires_at: Some(now + MEMBERSHIP_TERM),
            features: PRO_FEATURES.iter().map(|(id, ..)| id.to_string()).collect(),
        }
    }

    pub fn is_active_at(&self, now: OffsetDateTime) -> bool {
        self.active && self.expires_at.is_some_and(|at| at > now)
    }

    /// The record as seen at `now`: a lapsed membership reads as inactive.
    pub fn as_of(&self, now: OffsetDateTime) -> Self {
        Self {
            active: self.is_active_at(now),
            ..self.clone()
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PurchaseKind {
    Episode { episode: u32 },
    Season,
}

#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct Purchase {
    #[serde(skip)]
    pub user_id: Uuid,
    pub content_id: i64,
    #[serde(flatten)]
    pub kind: PurchaseKind,
    pub amount: f64,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub purchased_at: OffsetDateTime,
}

/// Why an episode is, or is not, watchable for a viewer.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccessReason {
    Free,
    SeasonPurchased,
    EpisodePurchased,
    Membership,
    Locked,
}
