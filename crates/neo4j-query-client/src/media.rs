/// Single JSON document response: `{data, counters, …}` or `{errors}`.
pub const MEDIA_TYPE_BUFFERED: &str = "application/vnd.neo4j.query";
/// Line-delimited JSON response, one event object per line.
pub const MEDIA_TYPE_STREAMING: &str = "application/vnd.neo4j.query+jsonl;version=1.0";
/// Generic fallback, treated as buffered.
pub const MEDIA_TYPE_JSON: &str = "application/json";

/// `Content-Type` header values are matched by prefix (a server may append
/// a `; charset=` parameter), so routing compares against this rather than
/// the full versioned constant.
pub const MEDIA_TYPE_STREAMING_PREFIX: &str = "application/vnd.neo4j.query+jsonl";

/// The `Accept` preference list this client sends: streaming preferred,
/// buffered next, generic JSON as a last resort.
pub fn accept_header() -> String {
    format!("{MEDIA_TYPE_STREAMING}, {MEDIA_TYPE_BUFFERED}, {MEDIA_TYPE_JSON}")
}
