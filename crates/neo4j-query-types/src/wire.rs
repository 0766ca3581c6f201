use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The wire's `{$type, _value}` tagged value, deserialized generically
/// before the codec's scalar parsers and graph constructors run.
///
/// Modeled as an adjacently-tagged enum so serde itself enforces that the
/// tag set is closed (an unrecognized `$type` fails to deserialize) and
/// that each tag's payload has the expected shape.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "$type", content = "_value")]
pub enum TaggedValue {
    Null,
    Boolean(bool),
    Integer(String),
    Float(String),
    String(String),
    Time(String),
    Date(String),
    LocalTime(String),
    ZonedDateTime(String),
    OffsetDateTime(String),
    LocalDateTime(String),
    Duration(String),
    Point(String),
    Base64(String),
    Map(HashMap<String, TaggedValue>),
    List(Vec<TaggedValue>),
    Node(WireNode),
    Relationship(WireRelationship),
    /// Alternating `N0, R0, N1, …, Nk` sequence; length must be odd and >= 1.
    Path(Vec<TaggedValue>),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WireNode {
    pub element_id: String,
    pub labels: Vec<String>,
    #[serde(default)]
    pub properties: Option<HashMap<String, TaggedValue>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WireRelationship {
    pub element_id: String,
    pub start_node_element_id: String,
    pub end_node_element_id: String,
    #[serde(rename = "type")]
    pub rel_type: String,
    #[serde(default)]
    pub properties: Option<HashMap<String, TaggedValue>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_scalar_envelope() {
        let json = r#"{"$type":"Integer","_value":"42"}"#;
        let v: TaggedValue = serde_json::from_str(json).unwrap();
        assert_eq!(v, TaggedValue::Integer("42".into()));
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let json = r#"{"$type":"Vector","_value":"[1,2,3]"}"#;
        assert!(serde_json::from_str::<TaggedValue>(json).is_err());
    }

    #[test]
    fn node_payload_parses() {
        let json = r#"{"$type":"Node","_value":{"element_id":"4:abc:1","labels":["Person"],"properties":{"name":{"$type":"String","_value":"Alice"}}}}"#;
        let v: TaggedValue = serde_json::from_str(json).unwrap();
        match v {
            TaggedValue::Node(n) => {
                assert_eq!(n.element_id, "4:abc:1");
                assert_eq!(n.labels, vec!["Person".to_string()]);
            }
            other => panic!("expected Node, got {other:?}"),
        }
    }
}
