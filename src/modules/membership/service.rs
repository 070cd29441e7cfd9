use time::OffsetDateTime;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use super::dto::{
    EpisodeAccessResponse, EpisodePurchaseResponse, PlanPrice, Pricing, ProFeature,
    ProFeaturesResponse, PurchaseListResponse, PurchaseMembershipRequest, SeasonPurchaseResponse,
};
use super::model::{
    AccessReason, Membership, Purchase, PurchaseKind, DEFAULT_PLAN, PRO_FEATURES,
};
use super::repository::{MembershipRepository, PurchaseRepository};
use crate::common::error::{AppError, AppResult};
use crate::infrastructure::memory::store::MemoryDb;
use crate::modules::content::model::Episode;
use crate::modules::content::repository::ContentRepository;
use crate::modules::content::service::season_lineup;
use crate::state::AppState;

pub struct MembershipService;

impl MembershipService {
    pub async fn get_membership(state: AppState, user_id: Uuid) -> AppResult<Membership> {
        let db = state.db.lock().await;
        let now = OffsetDateTime::now_utc();
        Ok(MembershipRepository::find(&db, user_id)
            .map(|m| m.as_of(now))
            .unwrap_or_else(Membership::basic))
    }

    /// Starts (or restarts) a 30-day PRO term from now.
    pub async fn purchase_membership(
        state: AppState,
        user_id: Uuid,
        req: PurchaseMembershipRequest,
    ) -> AppResult<Membership> {
        req.validate()?;
        let plan = req.plan.unwrap_or_else(|| DEFAULT_PLAN.to_string());
        let membership = Membership::pro(plan, OffsetDateTime::now_utc());

        let mut db = state.db.lock().await;
        MembershipRepository::upsert(&mut db, user_id, membership.clone());
        info!("User {} is now PRO ({:?})", user_id, membership.plan);

        Ok(membership)
    }

    pub fn pro_features() -> ProFeaturesResponse {
        ProFeaturesResponse {
            features: PRO_FEATURES
                .iter()
                .map(|(id, name, description, icon)| ProFeature {
                    id: id.to_string(),
                    name: name.to_string(),
                    description: description.to_string(),
                    icon: icon.to_string(),
                })
                .collect(),
            pricing: Pricing {
                monthly: PlanPrice { price: 29, original_price: 39, discount: 25 },
                yearly: PlanPrice { price: 299, original_price: 468, discount: 36 },
                lifetime: PlanPrice { price: 999, original_price: 1999, discount: 50 },
            },
        }
    }

    pub async fn purchase_episode(
        state: AppState,
        user_id: Uuid,
        content_id: i64,
        episode: u32,
    ) -> AppResult<EpisodePurchaseResponse> {
        let mut db = state.db.lock().await;
        let target = find_episode(&db, content_id, episode)?;

        if target.is_free {
            return Err(AppError::InvalidState(format!("Episode {} is free", episode)));
        }
        if PurchaseRepository::owns_season(&db, user_id, content_id)
            || PurchaseRepository::owns_episode(&db, user_id, content_id, episode)
        {
            warn!("User {} already owns content {} episode {}", user_id, content_id, episode);
            return Err(AppError::InvalidState("Episode already unlocked".to_string()));
        }

        PurchaseRepository::record(
            &mut db,
            Purchase {
                user_id,
                content_id,
                kind: PurchaseKind::Episode { episode },
                amount: target.price,
                purchased_at: OffsetDateTime::now_utc(),
            },
        );

        Ok(EpisodePurchaseResponse {
            content_id,
            episode,
            amount: target.price,
        })
    }

    pub async fn purchase_season(
        state: AppState,
        user_id: Uuid,
        content_id: i64,
    ) -> AppResult<SeasonPurchaseResponse> {
        let mut db = state.db.lock().await;
        let amount = ContentRepository::get_by_id(&db, content_id)
            .map(|item| item.season_price)
            .ok_or_else(|| AppError::NotFound("Content".to_string()))?;

        if PurchaseRepository::owns_season(&db, user_id, content_id) {
            return Err(AppError::InvalidState("Season already purchased".to_string()));
        }

        PurchaseRepository::record(
            &mut db,
            Purchase {
                user_id,
                content_id,
                kind: PurchaseKind::Season,
                amount,
                purchased_at: OffsetDateTime::now_utc(),
            },
        );
        info!("User {} bought the season of content {}", user_id, content_id);

        Ok(SeasonPurchaseResponse { content_id, amount })
    }

    pub async fn episode_access(
        state: AppState,
        user_id: Uuid,
        content_id: i64,
        episode: u32,
    ) -> AppResult<EpisodeAccessResponse> {
        let db = state.db.lock().await;
        let target = find_episode(&db, content_id, episode)?;
        let now = OffsetDateTime::now_utc();

        let reason = if target.is_free {
            AccessReason::Free
        } else if PurchaseRepository::owns_season(&db, user_id, content_id) {
            AccessReason::SeasonPurchased
        } else if PurchaseRepository::owns_episode(&db, user_id, content_id, episode) {
            AccessReason::EpisodePurchased
        } else if MembershipRepository::find(&db, user_id).is_some_and(|m| m.is_active_at(now)) {
            AccessReason::Membership
        } else {
            AccessReason::Locked
        };

        Ok(EpisodeAccessResponse {
            content_id,
            episode,
            unlocked: reason != AccessReason::Locked,
            reason,
        })
    }

    pub async fn list_purchases(state: AppState, user_id: Uuid) -> AppResult<PurchaseListResponse> {
        let db = state.db.lock().await;
        let purchases = PurchaseRepository::list_for_user(&db, user_id);
        let total_spent = purchases.iter().map(|p| p.amount).sum();
        Ok(PurchaseListResponse { purchases, total_spent })
    }
}

fn find_episode(db: &MemoryDb, content_id: i64, episode: u32) -> AppResult<Episode> {
    let item = ContentRepository::get_by_id(db, content_id)
        .ok_or_else(|| AppError::NotFound("Content".to_string()))?;
    season_lineup(item)
        .into_iter()
        .find(|e| e.episode == episode)
        .ok_or_else(|| AppError::NotFound("Episode".to_string()))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::state::testing::state;

    #[tokio::test]
    async fn season_covers_every_paid_episode() {
        let state = state();
        let viewer = Uuid::new_v4();

        let access = MembershipService::episode_access(state.clone(), viewer, 1, 2).await.unwrap();
        assert_eq!(access.reason, AccessReason::Locked);

        let bought = MembershipService::purchase_season(state.clone(), viewer, 1).await.unwrap();
        assert_eq!(bought.amount, 8.0);

        let access = MembershipService::episode_access(state.clone(), viewer, 1, 2).await.unwrap();
        assert_eq!(access.reason, AccessReason::SeasonPurchased);

        let err = MembershipService::purchase_episode(state.clone(), viewer, 1, 3).await.unwrap_err();
        assert_matches!(err, AppError::InvalidState(_));

        let err = MembershipService::purchase_season(state, viewer, 1).await.unwrap_err();
        assert_matches!(err, AppError::InvalidState(_));
    }

    #[tokio::test]
    async fn free_and_unknown_episodes_cannot_be_bought() {
        let state = state();
        let viewer = Uuid::new_v4();

        let err = MembershipService::purchase_episode(state.clone(), viewer, 1, 1).await.unwrap_err();
        assert_matches!(err, AppError::InvalidState(_));

        let err = MembershipService::purchase_episode(state.clone(), viewer, 1, 9).await.unwrap_err();
        assert_matches!(err, AppError::NotFound(_));

        let err = MembershipService::purchase_episode(state, viewer, 77, 1).await.unwrap_err();
        assert_matches!(err, AppError::NotFound(_));
    }

    #[tokio::test]
    async fn default_lineup_episodes_are_priced() {
        let state = state();
        let viewer = Uuid::new_v4();

        // Item 2 has no stored episodes.
        let bought = MembershipService::purchase_episode(state.clone(), viewer, 2, 7).await.unwrap();
        assert_eq!(bought.amount, 1.0);

        let listed = MembershipService::list_purchases(state, viewer).await.unwrap();
        assert_eq!(listed.purchases.len(), 1);
        assert_eq!(listed.total_spent, 1.0);
    }
}
