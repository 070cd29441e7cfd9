use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::model::{AccessReason, Purchase};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PurchaseMembershipRequest {
    #[validate(length(min = 1, max = 32))]
    pub plan: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EpisodePurchaseResponse {
    pub content_id: i64,
    pub episode: u32,
    pub amount: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SeasonPurchaseResponse {
    pub content_id: i64,
    pub amount: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EpisodeAccessResponse {
    pub content_id: i64,
    pub episode: u32,
    pub unlocked: bool,
    pub reason: AccessReason,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PurchaseListResponse {
    pub purchases: Vec<Purchase>,
    pub total_spent: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProFeature {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PlanPrice {
    pub price: u32,
    pub original_price: u32,
    /// Percent off the original price.
    pub discount: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Pricing {
    pub monthly: PlanPrice,
    pub yearly: PlanPrice,
    pub lifetime: PlanPrice,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProFeaturesResponse {
    pub features: Vec<ProFeature>,
    pub pricing: Pricing,
}
