use uuid::Uuid;

use super::model::Report;
use crate::infrastructure::memory::store::MemoryDb;

pub struct EngagementRepository;

impl EngagementRepository {
    /// Returns whether the set changed.
    pub fn set_like(db: &mut MemoryDb, content_id: i64, user_id: Uuid, liked: bool) -> bool {
        let key = (content_id, user_id);
        if liked {
            db.engagement.likes.insert(key)
        } else {
            db.engagement.likes.remove(&key)
        }
    }

    pub fn set_favorite(db: &mut MemoryDb, content_id: i64, user_id: Uuid, favorite: bool) {
        let key = (content_id, user_id);
        if favorite {
            db.engagement.favorites.insert(key);
        } else {
            db.engagement.favorites.remove(&key);
        }
    }

    pub fn is_favorite(db: &MemoryDb, content_id: i64, user_id: Uuid) -> bool {
        db.engagement.favorites.contains(&(content_id, user_id))
    }

    /// Records or replaces the viewer's score and returns (average, count).
    pub fn rate(db: &mut MemoryDb, content_id: i64, user_id: Uuid, score: u8) -> (f64, usize) {
        let scores = db.engagement.ratings.entry(content_id).or_default();
        scores.insert(user_id, score);

        let total: u32 = scores.values().map(|&s| u32::from(s)).sum();
        let average = f64::from(total) / scores.len() as f64;
        ((average * 10.0).round() / 10.0, scores.len())
    }

    pub fn add_report(db: &mut MemoryDb, report: Report) {
        db.engagement.reports.push(report);
    }

    /// Newest first.
    pub fn reports(db: &MemoryDb) -> Vec<Report> {
        db.engagement.reports.iter().rev().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_like_returns_true_only_on_change() {
        let mut db = MemoryDb::new(20);
        let user = Uuid::new_v4();

        assert!(EngagementRepository::set_like(&mut db, 1, user, true));
        assert!(!EngagementRepository::set_like(&mut db, 1, user, true));
        assert!(EngagementRepository::set_like(&mut db, 1, user, false));
        assert!(!EngagementRepository::set_like(&mut db, 1, user, false));
    }

    #[test]
    fn rerating_replaces_the_previous_score() {
        let mut db = MemoryDb::new(20);
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        assert_eq!(EngagementRepository::rate(&mut db, 1, a, 5), (5.0, 1));
        assert_eq!(EngagementRepository::rate(&mut db, 1, b, 2), (3.5, 2));
        assert_eq!(EngagementRepository::rate(&mut db, 1, a, 3), (2.5, 2));
        // 4 + 4 + 3 = 3.666..
        let c = Uuid::new_v4();
        EngagementRepository::rate(&mut db, 1, a, 4);
        EngagementRepository::rate(&mut db, 1, b, 4);
        assert_eq!(EngagementRepository::rate(&mut db, 1, c, 3), (3.7, 3));
    }
}
