use std::collections::{BTreeMap, HashMap};

use uuid::Uuid;

use super::dto::{DashboardStats, KpiResponse, PurchaseBucket, RecentDrama};
use crate::common::error::AppResult;
use crate::modules::membership::model::{Purchase, PurchaseKind};
use crate::state::AppState;

const RECENT_DRAMAS: usize = 5;

pub struct DashboardService;

impl DashboardService {
    pub async fn stats(state: AppState) -> AppResult<DashboardStats> {
        let db = state.db.lock().await;

        Ok(DashboardStats {
            total_dramas: db.contents.len(),
            total_views: db.contents.iter().map(|c| c.views).sum(),
            total_likes: db.contents.iter().map(|c| c.likes).sum(),
            total_earnings: round2(db.purchases.iter().map(|p| p.amount).sum()),
            recent_dramas: db
                .contents
                .iter()
                .take(RECENT_DRAMAS)
                .map(|c| RecentDrama {
                    id: c.id,
                    title: c.title.clone(),
                    views: c.views,
                    created_at: c.created_at,
                })
                .collect(),
        })
    }

    pub async fn kpi(state: AppState) -> AppResult<KpiResponse> {
        let db = state.db.lock().await;
        Ok(kpi_from(&db.purchases))
    }
}

fn kpi_from(purchases: &[Purchase]) -> KpiResponse {
    let revenue: f64 = purchases.iter().map(|p| p.amount).sum();

    let mut per_user: HashMap<Uuid, usize> = HashMap::new();
    for p in purchases {
        *per_user.entry(p.user_id).or_default() += 1;
    }
    let paying_users = per_user.len();
    let repeat_buyers = per_user.values().filter(|&&n| n >= 2).count();

    let episode_purchases = purchases
        .iter()
        .filter(|p| matches!(p.kind, PurchaseKind::Episode { .. }))
        .count();

    let mut buckets: BTreeMap<(String, Option<u32>), usize> = BTreeMap::new();
    for p in purchases {
        let episode = match p.kind {
            PurchaseKind::Episode { episode } => Some(episode),
            PurchaseKind::Season => None,
        };
        *buckets.entry((p.purchased_at.date().to_string(), episode)).or_default() += 1;
    }

    let ratio = |num: f64, den: usize| if den == 0 { 0.0 } else { num / den as f64 };

    KpiResponse {
        revenue: round2(revenue),
        paying_users,
        arpu: round2(ratio(revenue, paying_users)),
        repurchase_rate: round2(ratio(repeat_buyers as f64, paying_users)),
        episode_purchases,
        season_purchases: purchases.len() - episode_purchases,
        recent_purchases: buckets
            .into_iter()
            .rev()
            .map(|((date, episode), count)| PurchaseBucket { date, episode, count })
            .collect(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn purchase(user_id: Uuid, kind: PurchaseKind, amount: f64, at: time::OffsetDateTime) -> Purchase {
        Purchase {
            user_id,
            content_id: 1,
            kind,
            amount,
            purchased_at: at,
        }
    }

    #[test]
    fn kpi_with_no_purchases_is_zeroed() {
        let kpi = kpi_from(&[]);
        assert_eq!((kpi.revenue, kpi.arpu, kpi.repurchase_rate), (0.0, 0.0, 0.0));
        assert!(kpi.recent_purchases.is_empty());
    }

    #[test]
    fn kpi_groups_by_day_and_episode() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let day1 = datetime!(2026-03-01 10:00 UTC);
        let day2 = datetime!(2026-03-02 09:30 UTC);
        let purchases = vec![
            purchase(a, PurchaseKind::Episode { episode: 2 }, 1.0, day1),
            purchase(a, PurchaseKind::Episode { episode: 2 }, 1.0, day1),
            purchase(b, PurchaseKind::Season, 8.0, day2),
        ];

        let kpi = kpi_from(&purchases);
        assert_eq!(kpi.revenue, 10.0);
        assert_eq!(kpi.paying_users, 2);
        assert_eq!(kpi.arpu, 5.0);
        assert_eq!(kpi.repurchase_rate, 0.5);
        assert_eq!((kpi.episode_purchases, kpi.season_purchases), (2, 1));

        assert_eq!(kpi.recent_purchases.len(), 2);
        assert_eq!(kpi.recent_purchases[0].date, "2026-03-02");
        assert_eq!(kpi.recent_purchases[0].episode, None);
        assert_eq!(kpi.recent_purchases[1].episode, Some(2));
        assert_eq!(kpi.recent_purchases[1].count, 2);
    }
}
