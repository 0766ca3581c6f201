use neo4j_query_codec::{decode_profile, decode_stats, decode_value};
use neo4j_query_types::{
    DocumentBody, Error, ErrorDocument, IntegerPolicy, RawCounters, Result, TaggedValue, Value,
};

use crate::meta::ResponseMeta;

enum State {
    Ready { fields: Vec<String>, rows: std::vec::IntoIter<Vec<TaggedValue>>, summary: neo4j_query_types::SummaryBody, meta: Option<ResponseMeta> },
    Failed(Error),
}

/// Wraps a fully materialized success (or error) document. `stream()` is a
/// destructive, single-pass row iterator; `meta()` is computed once and
/// cached. A failed construction (bad Content-Type upstream, or a server
/// `{errors: […]}` document) makes every accessor re-raise the same error.
pub struct BufferedResponseReader {
    policy: IntegerPolicy,
    state: State,
}

impl BufferedResponseReader {
    /// Builds the reader from an already-parsed JSON document body. Never
    /// fails outright: a malformed or error document simply produces a
    /// reader whose accessors all return the same error.
    pub fn from_json(value: serde_json::Value, policy: IntegerPolicy) -> Self {
        if value.get("errors").is_some() {
            return Self { policy, state: State::Failed(Self::error_from_document(value)) };
        }
        match serde_json::from_value::<DocumentBody>(value) {
            Ok(doc) => Self {
                policy,
                state: State::Ready {
                    fields: doc.data.fields,
                    rows: doc.data.values.into_iter(),
                    summary: doc.summary,
                    meta: None,
                },
            },
            Err(err) => Self { policy, state: State::Failed(Error::protocol(err.to_string())) },
        }
    }

    fn error_from_document(value: serde_json::Value) -> Error {
        match serde_json::from_value::<ErrorDocument>(value) {
            Ok(doc) => match doc.errors.into_iter().next() {
                Some(first) => Error::server(first.resolved_code().to_string(), first.message),
                None => Error::protocol("Server replied an empty error response"),
            },
            Err(err) => Error::protocol(err.to_string()),
        }
    }

    pub fn keys(&self) -> Result<&[String]> {
        match &self.state {
            State::Ready { fields, .. } => Ok(fields),
            State::Failed(err) => Err(err.clone()),
        }
    }

    /// Destructive, single-pass: rows already yielded are gone.
    pub fn stream(&mut self) -> Box<dyn Iterator<Item = Result<Vec<Value>>> + '_> {
        let policy = self.policy;
        match &mut self.state {
            State::Ready { rows, .. } => Box::new(rows.map(move |row| {
                row.iter().map(|tv| decode_value(tv, policy)).collect::<Result<Vec<_>>>()
            })),
            State::Failed(err) => {
                let err = err.clone();
                Box::new(std::iter::once(Err(err)))
            }
        }
    }

    pub fn meta(&mut self) -> Result<&ResponseMeta> {
        let policy = self.policy;
        match &mut self.state {
            State::Failed(err) => Err(err.clone()),
            State::Ready { summary, meta, .. } => {
                if meta.is_none() {
                    *meta = Some(Self::build_meta(summary, policy)?);
                }
                Ok(meta.as_ref().expect("just populated"))
            }
        }
    }

    fn build_meta(summary: &neo4j_query_types::SummaryBody, policy: IntegerPolicy) -> Result<ResponseMeta> {
        let stats = summary
            .counters
            .clone()
            .map(|raw| decode_stats(&raw, policy))
            .unwrap_or_else(|| decode_stats(&RawCounters::default(), policy));
        let profile = summary.profiled_query_plan.as_ref().map(|p| decode_profile(p, policy)).transpose()?;
        let plan = summary.query_plan.as_ref().map(|p| decode_profile(p, policy)).transpose()?;
        Ok(ResponseMeta {
            bookmark: summary.bookmarks.clone(),
            stats,
            profile,
            plan,
            notifications: summary.notifications.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo4j_query_types::IntegerValue;
    use serde_json::json;

    fn success_document() -> serde_json::Value {
        json!({
            "data": {
                "fields": ["a", "b"],
                "values": [[{"$type":"Integer","_value":"1"}, {"$type":"String","_value":"x"}]],
            },
            "bookmarks": ["bm1"],
            "counters": {"nodesCreated": 3},
        })
    }

    #[test]
    fn keys_returns_fields() {
        let reader = BufferedResponseReader::from_json(success_document(), IntegerPolicy::LosslessInteger);
        assert_eq!(reader.keys().unwrap(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn stream_decodes_rows_once() {
        let mut reader = BufferedResponseReader::from_json(success_document(), IntegerPolicy::LosslessInteger);
        let rows: Vec<_> = reader.stream().collect();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_ok());
        let remaining: Vec<_> = reader.stream().collect();
        assert!(remaining.is_empty());
    }

    #[test]
    fn meta_is_idempotent() {
        let mut reader = BufferedResponseReader::from_json(success_document(), IntegerPolicy::LosslessInteger);
        let first = reader.meta().unwrap().bookmark.clone();
        let second = reader.meta().unwrap().bookmark.clone();
        assert_eq!(first, second);
        assert_eq!(first, vec!["bm1".to_string()]);
        assert_eq!(
            reader.meta().unwrap().stats.nodes_created,
            IntegerValue::Lossless(3)
        );
    }

    #[test]
    fn error_document_poisons_every_accessor() {
        let doc = json!({"errors": [{"code": "Neo.ClientError.Statement.SyntaxError", "message": "bad syntax"}]});
        let mut reader = BufferedResponseReader::from_json(doc, IntegerPolicy::LosslessInteger);
        assert!(reader.keys().is_err());
        assert!(reader.meta().is_err());
        assert!(reader.stream().next().unwrap().is_err());
    }

    #[test]
    fn empty_error_list_is_a_protocol_error() {
        let doc = json!({"errors": []});
        let reader = BufferedResponseReader::from_json(doc, IntegerPolicy::LosslessInteger);
        let err = reader.keys().unwrap_err();
        assert_eq!(err.code(), "PROTOCOL_ERROR");
    }

    #[test]
    fn error_code_falls_back_to_error_field() {
        let doc = json!({"errors": [{"message": "boom", "error": "Neo.ClientError.X"}]});
        let reader = BufferedResponseReader::from_json(doc, IntegerPolicy::LosslessInteger);
        let err = reader.keys().unwrap_err();
        assert_eq!(err.code(), "Neo.ClientError.X");
    }
}
