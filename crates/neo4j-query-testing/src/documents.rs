use serde_json::{json, Value};

/// A minimal buffered success document: two fields, one row, one bookmark,
/// one non-zero counter. Reused across the codec, stream, and client test
/// suites so a document shape only needs to be written once.
pub fn success_document() -> Value {
    json!({
        "data": {
            "fields": ["a", "b"],
            "values": [[
                {"$type": "Integer", "_value": "1"},
                {"$type": "String", "_value": "x"}
            ]]
        },
        "bookmarks": ["bm1"],
        "counters": {"nodesCreated": 3}
    })
}

/// A buffered error document carrying exactly one server failure.
pub fn error_document(code: &str, message: &str) -> Value {
    json!({"errors": [{"code": code, "message": message}]})
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo4j_query_types::{DocumentBody, ErrorDocument};

    #[test]
    fn success_document_matches_the_wire_shape() {
        let doc: DocumentBody = serde_json::from_value(success_document()).unwrap();
        assert_eq!(doc.data.fields, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(doc.summary.counters.unwrap().nodes_created, 3);
    }

    #[test]
    fn error_document_matches_the_wire_shape() {
        let doc: ErrorDocument = serde_json::from_value(error_document("Neo.ClientError.X", "boom")).unwrap();
        assert_eq!(doc.errors[0].resolved_code(), "Neo.ClientError.X");
    }
}
