use neo4j_query_types::{Counters, ProfiledPlan};

/// The decoded terminal metadata bundle of a response: bookmarks, update
/// counters, the query plan (with or without profiling data), and any
/// notifications the server attached.
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    pub bookmark: Vec<String>,
    pub stats: Counters,
    pub profile: Option<ProfiledPlan>,
    pub plan: Option<ProfiledPlan>,
    pub notifications: Option<serde_json::Value>,
}
