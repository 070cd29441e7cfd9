use std::collections::{HashMap, HashSet};

use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;
use utoipa::ToSchema;

/// Per-viewer reactions to catalog items. Entries for deleted items are
/// left behind and ignored on read.
#[derive(Debug, Default)]
pub struct EngagementLedger {
    pub likes: HashSet<(i64, Uuid)>,
    pub favorites: HashSet<(i64, Uuid)>,
    pub ratings: HashMap<i64, HashMap<Uuid, u8>>,
    pub reports: Vec<Report>,
}

#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct Report {
    pub report_id: String,
    pub content_id: i64,
    pub reporter_id: Uuid,
    pub reason: String,
    pub detail: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
}
