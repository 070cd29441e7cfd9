use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::info;

use uuid::Uuid;

use crate::modules::auth::model::User;
use crate::modules::content::model::ContentItem;
use crate::modules::engagement::model::EngagementLedger;
use crate::modules::feed::model::ShortVideo;
use crate::modules::generation::model::{GenerationJob, QuotaState};
use crate::modules::membership::model::{Membership, Purchase};
use crate::modules::narrative::model::NarrativeSession;

/// Id handed to the first content item created through the API. Seeded
/// demo items sit below it.
pub const FIRST_CONTENT_ID: i64 = 1000;

/// Process-wide state. Every read and write, including the simulator's
/// scheduled stages, goes through the single lock on [`MemoryPool`], so a
/// job's terminal transition and its patch-back land atomically.
pub struct MemoryDb {
    pub contents: Vec<ContentItem>,
    pub next_content_id: i64,
    pub jobs: HashMap<String, GenerationJob>,
    pub next_job_seq: u64,
    pub quota: QuotaState,
    pub users: Vec<User>,
    pub engagement: EngagementLedger,
    pub memberships: HashMap<Uuid, Membership>,
    pub purchases: Vec<Purchase>,
    pub short_videos: BTreeMap<u64, ShortVideo>,
    pub narratives: HashMap<String, NarrativeSession>,
}

impl MemoryDb {
    pub fn new(daily_limit: u32) -> Self {
        Self {
            contents: Vec::new(),
            next_content_id: FIRST_CONTENT_ID,
            jobs: HashMap::new(),
            next_job_seq: 1,
            quota: QuotaState::new(daily_limit, OffsetDateTime::now_utc()),
            users: Vec::new(),
            engagement: EngagementLedger::default(),
            memberships: HashMap::new(),
            purchases: Vec::new(),
            short_videos: BTreeMap::new(),
            narratives: HashMap::new(),
        }
    }
}

pub type MemoryPool = Arc<Mutex<MemoryDb>>;

pub fn open_pool(daily_limit: u32) -> MemoryPool {
    info!("✅ In-memory store ready (daily generation limit {})", daily_limit);
    Arc::new(Mutex::new(MemoryDb::new(daily_limit)))
}
