use serde::Deserialize;

use crate::wire::TaggedValue;
use crate::plan::RawProfiledPlan;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeaderBody {
    pub fields: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryBody {
    #[serde(default)]
    pub bookmarks: Vec<String>,
    pub counters: Option<crate::stats::RawCounters>,
    pub profiled_query_plan: Option<RawProfiledPlan>,
    pub query_plan: Option<RawProfiledPlan>,
    pub notifications: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Failure {
    pub code: Option<String>,
    pub message: String,
    /// Fallback source for `code` on servers that still emit the
    /// now-deprecated `error` field instead.
    pub error: Option<String>,
}

impl Failure {
    /// `code`, falling back to `error`. A documented workaround for a
    /// still-unfixed server bug; remove once the server contract
    /// stabilizes and always sends `code`.
    pub fn resolved_code(&self) -> &str {
        self.code
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub failures: Vec<Failure>,
}

/// One line of the streaming response: `{"$event": ..., "_body": ...}`.
///
/// Adjacently tagged so serde enforces the envelope shape (a string
/// `$event` plus a non-null `_body` whose own shape matches the event kind)
/// in one deserialization call; an unrecognized `$event` or malformed
/// `_body` simply fails to parse.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "$event", content = "_body")]
pub enum Event {
    Header(HeaderBody),
    Record(Vec<TaggedValue>),
    Summary(SummaryBody),
    Error(ErrorBody),
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::Header(_) => "Header",
            Event::Record(_) => "Record",
            Event::Summary(_) => "Summary",
            Event::Error(_) => "Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_event() {
        let line = r#"{"$event":"Header","_body":{"fields":["a","b"]}}"#;
        let event: Event = serde_json::from_str(line).unwrap();
        match event {
            Event::Header(h) => assert_eq!(h.fields, Some(vec!["a".into(), "b".into()])),
            other => panic!("expected Header, got {:?}", other.name()),
        }
    }

    #[test]
    fn parses_record_event_with_bare_array_body() {
        let line = r#"{"$event":"Record","_body":[{"$type":"Integer","_value":"1"},{"$type":"String","_value":"x"}]}"#;
        let event: Event = serde_json::from_str(line).unwrap();
        match event {
            Event::Record(row) => assert_eq!(row.len(), 2),
            other => panic!("expected Record, got {:?}", other.name()),
        }
    }

    #[test]
    fn unrecognized_event_name_fails() {
        let line = r#"{"$event":"Ping","_body":{}}"#;
        assert!(serde_json::from_str::<Event>(line).is_err());
    }

    #[test]
    fn failure_code_falls_back_to_error_field() {
        let failure: Failure =
            serde_json::from_str(r#"{"message":"boom","error":"Neo.ClientError.X"}"#).unwrap();
        assert_eq!(failure.resolved_code(), "Neo.ClientError.X");
    }
}
