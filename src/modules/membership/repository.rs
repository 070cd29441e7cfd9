use uuid::Uuid;

use super::model::{Membership, Purchase, PurchaseKind};
use crate::infrastructure::memory::store::MemoryDb;

pub struct MembershipRepository;

impl MembershipRepository {
    pub fn find(db: &MemoryDb, user_id: Uuid) -> Option<Membership> {
        db.memberships.get(&user_id).cloned()
    }

    pub fn upsert(db: &mut MemoryDb, user_id: Uuid, membership: Membership) {
        db.memberships.insert(user_id, membership);
    }
}

pub struct PurchaseRepository;

impl PurchaseRepository {
    pub fn record(db: &mut MemoryDb, purchase: Purchase) {
        db.purchases.push(purchase);
    }

    pub fn owns_season(db: &MemoryDb, user_id: Uuid, content_id: i64) -> bool {
        db.purchases
            .iter()
            .any(|p| p.user_id == user_id && p.content_id == content_id && p.kind == PurchaseKind::Season)
    }

    pub fn owns_episode(db: &MemoryDb, user_id: Uuid, content_id: i64, episode: u32) -> bool {
        db.purchases.iter().any(|p| {
            p.user_id == user_id
                && p.content_id == content_id
                && p.kind == PurchaseKind::Episode { episode }
        })
    }

    /// Oldest first.
    pub fn list_for_user(db: &MemoryDb, user_id: Uuid) -> Vec<Purchase> {
        db.purchases.iter().filter(|p| p.user_id == user_id).cloned().collect()
    }
}
