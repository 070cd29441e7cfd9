use uuid::Uuid;

use super::model::NarrativeSession;
use crate::infrastructure::memory::store::MemoryDb;

pub struct NarrativeRepository;

impl NarrativeRepository {
    pub fn insert(db: &mut MemoryDb, session: NarrativeSession) {
        db.narratives.insert(session.session_id.clone(), session);
    }

    /// Sessions owned by someone else are invisible.
    pub fn find_owned<'a>(db: &'a mut MemoryDb, session_id: &str, owner: Uuid) -> Option<&'a mut NarrativeSession> {
        db.narratives
            .get_mut(session_id)
            .filter(|s| s.owner == owner)
    }
}
