use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use super::dto::{
    FavoriteRequest, FavoriteResponse, LikeRequest, LikeResponse, RateRequest, RatingResponse,
    Recommendation, ReportAccepted, ReportRequest,
};
use super::model::Report;
use super::repository::EngagementRepository;
use crate::common::error::{AppError, AppResult};
use crate::infrastructure::memory::store::MemoryDb;
use crate::modules::content::model::ContentItem;
use crate::modules::content::repository::ContentRepository;
use crate::state::AppState;

const RECOMMENDATION_COUNT: usize = 3;

pub struct EngagementService;

impl EngagementService {
    /// Likes are counted once per viewer; repeating the same state is a no-op.
    pub async fn like(state: AppState, user_id: Uuid, id: i64, req: LikeRequest) -> AppResult<LikeResponse> {
        let mut db = state.db.lock().await;
        ensure_exists(&db, id)?;

        let changed = EngagementRepository::set_like(&mut db, id, user_id, req.liked);
        let item = ContentRepository::get_by_id_mut(&mut db, id)
            .ok_or_else(|| AppError::NotFound("Content".to_string()))?;
        if changed {
            item.likes = if req.liked {
                item.likes.saturating_add(1)
            } else {
                item.likes.saturating_sub(1)
            };
        }

        Ok(LikeResponse {
            content_id: id,
            liked: req.liked,
            likes: item.likes,
        })
    }

    pub async fn favorite(
        state: AppState,
        user_id: Uuid,
        id: i64,
        req: FavoriteRequest,
    ) -> AppResult<FavoriteResponse> {
        let mut db = state.db.lock().await;
        ensure_exists(&db, id)?;
        EngagementRepository::set_favorite(&mut db, id, user_id, req.favorite);

        Ok(FavoriteResponse {
            content_id: id,
            favorite: req.favorite,
        })
    }

    /// The item's `rating` becomes the mean of viewer scores, replacing the
    /// seeded figure on the first rating.
    pub async fn rate(state: AppState, user_id: Uuid, id: i64, req: RateRequest) -> AppResult<RatingResponse> {
        req.validate()?;
        let mut db = state.db.lock().await;
        ensure_exists(&db, id)?;

        let (average, count) = EngagementRepository::rate(&mut db, id, user_id, req.score);
        if let Some(item) = ContentRepository::get_by_id_mut(&mut db, id) {
            item.rating = average;
        }

        Ok(RatingResponse {
            content_id: id,
            average,
            count,
        })
    }

    pub async fn report(state: AppState, user_id: Uuid, id: i64, req: ReportRequest) -> AppResult<ReportAccepted> {
        req.validate()?;
        let mut db = state.db.lock().await;
        ensure_exists(&db, id)?;

        let report_id = format!("rep_{}", Uuid::new_v4().simple());
        EngagementRepository::add_report(
            &mut db,
            Report {
                report_id: report_id.clone(),
                content_id: id,
                reporter_id: user_id,
                reason: req.reason,
                detail: req.detail,
                created_at: OffsetDateTime::now_utc(),
            },
        );
        info!("Content {} reported ({})", id, report_id);

        Ok(ReportAccepted { report_id })
    }

    pub async fn list_reports(state: AppState) -> AppResult<Vec<Report>> {
        let db = state.db.lock().await;
        Ok(EngagementRepository::reports(&db))
    }

    /// Same-genre items first, then by views.
    pub async fn recommendations(state: AppState, id: i64) -> AppResult<Vec<Recommendation>> {
        let db = state.db.lock().await;
        let source = ContentRepository::get_by_id(&db, id)
            .ok_or_else(|| AppError::NotFound("Content".to_string()))?;

        let mut candidates: Vec<&ContentItem> = db.contents.iter().filter(|c| c.id != id).collect();
        candidates.sort_by(|a, b| {
            let a_other = a.genre != source.genre;
            let b_other = b.genre != source.genre;
            a_other.cmp(&b_other).then(b.views.cmp(&a.views))
        });

        Ok(candidates
            .into_iter()
            .take(RECOMMENDATION_COUNT)
            .map(|c| Recommendation {
                id: c.id,
                title: c.title.clone(),
                cover_image: c.cover_image.clone(),
                views: c.views,
            })
            .collect())
    }

    /// Collection order.
    pub async fn favorites(state: AppState, user_id: Uuid) -> AppResult<Vec<ContentItem>> {
        let db = state.db.lock().await;
        Ok(db
            .contents
            .iter()
            .filter(|c| EngagementRepository::is_favorite(&db, c.id, user_id))
            .cloned()
            .collect())
    }
}

fn ensure_exists(db: &MemoryDb, id: i64) -> AppResult<()> {
    ContentRepository::get_by_id(db, id)
        .map(|_| ())
        .ok_or_else(|| AppError::NotFound("Content".to_string()))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::state::testing::state;

    #[tokio::test]
    async fn repeated_like_counts_once() {
        let state = state();
        let viewer = Uuid::new_v4();

        let first = EngagementService::like(state.clone(), viewer, 1, LikeRequest { liked: true }).await.unwrap();
        assert_eq!(first.likes, 891);
        let again = EngagementService::like(state.clone(), viewer, 1, LikeRequest { liked: true }).await.unwrap();
        assert_eq!(again.likes, 891);

        let undone = EngagementService::like(state.clone(), viewer, 1, LikeRequest { liked: false }).await.unwrap();
        assert_eq!(undone.likes, 890);

        let err = EngagementService::like(state, viewer, 404, LikeRequest { liked: true }).await.unwrap_err();
        assert_matches!(err, AppError::NotFound(_));
    }

    #[tokio::test]
    async fn rating_replaces_seeded_figure() {
        let state = state();

        let res = EngagementService::rate(state.clone(), Uuid::new_v4(), 2, RateRequest { score: 3 }).await.unwrap();
        assert_eq!((res.average, res.count), (3.0, 1));

        let favs = EngagementService::favorites(state.clone(), Uuid::new_v4()).await.unwrap();
        assert!(favs.is_empty());

        let db = state.db.lock().await;
        assert_eq!(ContentRepository::get_by_id(&db, 2).unwrap().rating, 3.0);
    }

    #[tokio::test]
    async fn out_of_range_score_is_rejected() {
        let err = EngagementService::rate(state(), Uuid::new_v4(), 1, RateRequest { score: 6 }).await.unwrap_err();
        assert_matches!(err, AppError::Validation(_));
    }

    #[tokio::test]
    async fn recommendations_exclude_the_source_item() {
        let recs = EngagementService::recommendations(state(), 1).await.unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].id, 2);
    }
}
