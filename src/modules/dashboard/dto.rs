use serde::Serialize;
use time::OffsetDateTime;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct RecentDrama {
    pub id: i64,
    pub title: String,
    pub views: u64,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardStats {
    pub total_dramas: usize,
    pub total_views: u64,
    pub total_likes: u64,
    pub total_earnings: f64,
    pub recent_dramas: Vec<RecentDrama>,
}

/// Purchases bucketed by calendar day (UTC) and episode. Season
/// purchases have no episode.
#[derive(Debug, Serialize, ToSchema)]
pub struct PurchaseBucket {
    pub date: String,
    pub episode: Option<u32>,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct KpiResponse {
    pub revenue: f64,
    pub paying_users: usize,
    pub arpu: f64,
    pub repurchase_rate: f64,
    pub episode_purchases: usize,
    pub season_purchases: usize,
    pub recent_purchases: Vec<PurchaseBucket>,
}
