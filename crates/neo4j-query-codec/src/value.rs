use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use num_bigint::BigInt;

use neo4j_query_types::{
    DurationValue, Error, GraphPath, IntegerPolicy, Node, PathSegment, PointValue,
    Relationship, Result, TaggedValue, Value, WireNode, WireRelationship,
};

use crate::duration::{format_duration, parse_duration};
use crate::numeric::{format_float, parse_float, parse_integer};
use crate::point::{format_point, parse_point};
use crate::temporal::{
    parse_date, parse_local_date_time, parse_local_time, parse_offset_date_time, parse_time,
    parse_zoned_date_time, ParsedOffsetDateTime, ParsedTime,
};

/// Decodes one wire value into its rich, caller-facing form.
///
/// Dispatches purely on the tag; `Map`/`List`/`Node`/`Relationship`/`Path`
/// recurse into this same function for their nested wire values.
pub fn decode_value(tagged: &TaggedValue, policy: IntegerPolicy) -> Result<Value> {
    match tagged {
        TaggedValue::Null => Ok(Value::Null),
        TaggedValue::Boolean(b) => Ok(Value::Boolean(*b)),
        TaggedValue::Integer(text) => Ok(Value::Integer(parse_integer(text, policy)?)),
        TaggedValue::Float(text) => Ok(Value::Float(parse_float(text)?)),
        TaggedValue::String(text) => Ok(Value::String(text.clone())),
        TaggedValue::Date(text) => Ok(Value::Date(parse_date(text, policy)?)),
        TaggedValue::LocalTime(text) => Ok(Value::LocalTime(parse_local_time(text, policy)?)),
        TaggedValue::Time(text) => match parse_time(text, policy)? {
            ParsedTime::WithOffset(t) => Ok(Value::Time(t)),
            ParsedTime::Local(t) => Ok(Value::LocalTime(t)),
        },
        TaggedValue::LocalDateTime(text) => {
            Ok(Value::LocalDateTime(parse_local_date_time(text, policy)?))
        }
        TaggedValue::OffsetDateTime(text) => match parse_offset_date_time(text, policy)? {
            ParsedOffsetDateTime::WithOffset(dt) => Ok(Value::DateTime(dt)),
            ParsedOffsetDateTime::Local(dt) => Ok(Value::LocalDateTime(dt)),
        },
        TaggedValue::ZonedDateTime(text) => Ok(Value::DateTime(parse_zoned_date_time(text, policy)?)),
        TaggedValue::Duration(text) => Ok(Value::Duration(parse_duration(text)?)),
        TaggedValue::Point(text) => Ok(Value::Point(parse_point(text))),
        TaggedValue::Base64(text) => {
            let bytes = STANDARD
                .decode(text)
                .map_err(|e| Error::protocol(format!("invalid Base64 payload: {e}")))?;
            Ok(Value::Bytes(bytes))
        }
        TaggedValue::Map(map) => {
            let mut out = HashMap::with_capacity(map.len());
            for (key, value) in map {
                out.insert(key.clone(), decode_value(value, policy)?);
            }
            Ok(Value::Map(out))
        }
        TaggedValue::List(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(decode_value(item, policy)?);
            }
            Ok(Value::List(out))
        }
        TaggedValue::Node(node) => Ok(Value::Node(decode_node(node, policy)?)),
        TaggedValue::Relationship(rel) => Ok(Value::Relationship(decode_relationship(rel, policy)?)),
        TaggedValue::Path(sequence) => Ok(Value::Path(decode_path(sequence, policy)?)),
    }
}

fn decode_properties(
    properties: &Option<HashMap<String, TaggedValue>>,
    policy: IntegerPolicy,
) -> Result<HashMap<String, Value>> {
    match properties {
        None => Ok(HashMap::new()),
        Some(props) => {
            let mut out = HashMap::with_capacity(props.len());
            for (key, value) in props {
                out.insert(key.clone(), decode_value(value, policy)?);
            }
            Ok(out)
        }
    }
}

fn decode_node(node: &WireNode, policy: IntegerPolicy) -> Result<Node> {
    Ok(Node {
        element_id: node.element_id.clone(),
        labels: node.labels.clone(),
        properties: decode_properties(&node.properties, policy)?,
    })
}

fn decode_relationship(rel: &WireRelationship, policy: IntegerPolicy) -> Result<Relationship> {
    Ok(Relationship {
        element_id: rel.element_id.clone(),
        start_node_element_id: rel.start_node_element_id.clone(),
        end_node_element_id: rel.end_node_element_id.clone(),
        rel_type: rel.rel_type.clone(),
        properties: decode_properties(&rel.properties, policy)?,
    })
}

/// Folds an alternating `N0, R0, N1, …, Nk` wire sequence into a start
/// node, end node, and the ordered `(start, relationship, end)` segments
/// between them.
fn decode_path(sequence: &[TaggedValue], policy: IntegerPolicy) -> Result<GraphPath> {
    if sequence.is_empty() || sequence.len() % 2 == 0 {
        return Err(Error::protocol("Path payload length must be odd and >= 1"));
    }

    let mut nodes = Vec::with_capacity(sequence.len() / 2 + 1);
    let mut relationships = Vec::with_capacity(sequence.len() / 2);
    for (i, element) in sequence.iter().enumerate() {
        if i % 2 == 0 {
            match element {
                TaggedValue::Node(node) => nodes.push(decode_node(node, policy)?),
                other => {
                    return Err(Error::protocol(format!(
                        "expected Node at position {i} of Path sequence, found {other:?}"
                    )))
                }
            }
        } else {
            match element {
                TaggedValue::Relationship(rel) => relationships.push(decode_relationship(rel, policy)?),
                other => {
                    return Err(Error::protocol(format!(
                        "expected Relationship at position {i} of Path sequence, found {other:?}"
                    )))
                }
            }
        }
    }

    let start = nodes[0].clone();
    let end = nodes[nodes.len() - 1].clone();
    let segments = (0..relationships.len())
        .map(|i| PathSegment {
            start: nodes[i].clone(),
            relationship: relationships[i].clone(),
            end: nodes[i + 1].clone(),
        })
        .collect();

    Ok(GraphPath { start, end, segments })
}

/// A plain calendar date, as supplied by the caller when encoding a
/// temporal parameter.
#[derive(Debug, Clone, Copy)]
pub struct CallerDate {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct CallerLocalTime {
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
    pub nanosecond: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct CallerLocalDateTime {
    pub date: CallerDate,
    pub time: CallerLocalTime,
}

#[derive(Debug, Clone)]
pub struct CallerDateTime {
    pub date: CallerDate,
    pub time: CallerLocalTime,
    /// `None` is rejected by the encoder: an offset-less `DateTime` is
    /// ambiguous on the wire.
    pub offset_seconds: Option<i64>,
    pub zone_id: Option<String>,
}

/// The caller-supplied shape of a value to encode as a query parameter.
///
/// Mirrors the decoder's priority chain in spirit (null, boolean, number,
/// string, bigint, lossless integer, byte buffer, sequence, point,
/// duration, temporal) but as a closed Rust enum rather than runtime type
/// discrimination: the compiler enforces exhaustiveness instead of an
/// ordered predicate chain.
#[derive(Debug, Clone)]
pub enum CallerValue {
    Null,
    Boolean(bool),
    /// Plain numeric literal, always encoded as `Float`, never silently
    /// promoted to `Integer`.
    Number(f64),
    String(String),
    BigInt(BigInt),
    /// An explicit lossless 64-bit integer, encoded as `Integer`.
    Integer(i64),
    Bytes(Vec<u8>),
    List(Vec<CallerValue>),
    Map(HashMap<String, CallerValue>),
    Point { srid: i64, x: f64, y: f64, z: Option<f64> },
    Duration(DurationValue),
    Date(CallerDate),
    LocalTime(CallerLocalTime),
    Time { time: CallerLocalTime, offset_seconds: i64 },
    LocalDateTime(CallerLocalDateTime),
    DateTime(CallerDateTime),
}

fn format_date(d: &CallerDate) -> String {
    format!("{:04}-{:02}-{:02}", d.year, d.month, d.day)
}

fn format_local_time(t: &CallerLocalTime) -> String {
    if t.nanosecond == 0 {
        format!("{:02}:{:02}:{:02}", t.hour, t.minute, t.second)
    } else {
        format!("{:02}:{:02}:{:02}.{:09}", t.hour, t.minute, t.second, t.nanosecond)
    }
}

fn format_offset(offset_seconds: i64) -> String {
    if offset_seconds == 0 {
        return "Z".to_string();
    }
    let sign = if offset_seconds < 0 { "-" } else { "+" };
    let magnitude = offset_seconds.abs();
    format!("{sign}{:02}:{:02}", magnitude / 3600, (magnitude % 3600) / 60)
}

fn format_time_with_offset(t: &CallerLocalTime, offset_seconds: i64) -> String {
    format!("{}{}", format_local_time(t), format_offset(offset_seconds))
}

/// Encodes a caller value into its wire tagged form.
pub fn encode_value(value: &CallerValue) -> Result<TaggedValue> {
    match value {
        CallerValue::Null => Ok(TaggedValue::Null),
        CallerValue::Boolean(b) => Ok(TaggedValue::Boolean(*b)),
        CallerValue::Number(n) => Ok(TaggedValue::Float(format_float(*n))),
        CallerValue::String(s) => Ok(TaggedValue::String(s.clone())),
        CallerValue::BigInt(b) => Ok(TaggedValue::Integer(b.to_string())),
        CallerValue::Integer(i) => Ok(TaggedValue::Integer(i.to_string())),
        CallerValue::Bytes(bytes) => Ok(TaggedValue::Base64(STANDARD.encode(bytes))),
        CallerValue::List(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(encode_value(item)?);
            }
            Ok(TaggedValue::List(out))
        }
        CallerValue::Map(map) => {
            let mut out = HashMap::with_capacity(map.len());
            for (key, value) in map {
                out.insert(key.clone(), encode_value(value)?);
            }
            Ok(TaggedValue::Map(out))
        }
        CallerValue::Point { srid, x, y, z } => Ok(TaggedValue::Point(format_point(&PointValue {
            srid: *srid,
            x: *x,
            y: *y,
            z: *z,
        }))),
        CallerValue::Duration(d) => Ok(TaggedValue::Duration(format_duration(d))),
        CallerValue::Date(d) => Ok(TaggedValue::Date(format_date(d))),
        CallerValue::LocalTime(t) => Ok(TaggedValue::LocalTime(format_local_time(t))),
        CallerValue::Time { time, offset_seconds } => {
            Ok(TaggedValue::Time(format_time_with_offset(time, *offset_seconds)))
        }
        CallerValue::LocalDateTime(dt) => Ok(TaggedValue::LocalDateTime(format!(
            "{}T{}",
            format_date(&dt.date),
            format_local_time(&dt.time)
        ))),
        CallerValue::DateTime(dt) => {
            let offset_seconds = dt
                .offset_seconds
                .ok_or_else(|| Error::caller("DateTime requires an explicit UTC offset"))?;
            let body = format!(
                "{}T{}",
                format_date(&dt.date),
                format_time_with_offset(&dt.time, offset_seconds)
            );
            match &dt.zone_id {
                Some(zone) => Ok(TaggedValue::ZonedDateTime(format!("{body}[{zone}]"))),
                None => Ok(TaggedValue::OffsetDateTime(body)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo4j_query_types::IntegerValue;

    #[test]
    fn decode_encode_round_trips_primitives() {
        let tagged = TaggedValue::String("hi".into());
        let decoded = decode_value(&tagged, IntegerPolicy::LosslessInteger).unwrap();
        assert_eq!(decoded, Value::String("hi".into()));
        let re_encoded = encode_value(&CallerValue::String("hi".into())).unwrap();
        assert_eq!(re_encoded, tagged);
    }

    #[test]
    fn number_is_encoded_as_float_not_integer() {
        let tagged = encode_value(&CallerValue::Number(42.0)).unwrap();
        assert_eq!(tagged, TaggedValue::Float("42.0".into()));
    }

    #[test]
    fn bytes_round_trip_through_base64() {
        let tagged = encode_value(&CallerValue::Bytes(vec![1, 2, 3])).unwrap();
        assert_eq!(tagged, TaggedValue::Base64("AQID".into()));
        let decoded = decode_value(&tagged, IntegerPolicy::LosslessInteger).unwrap();
        assert_eq!(decoded, Value::Bytes(vec![1, 2, 3]));
    }

    #[test]
    fn decode_integer_respects_policy() {
        let tagged = TaggedValue::Integer("42".into());
        let decoded = decode_value(&tagged, IntegerPolicy::LosslessInteger).unwrap();
        assert_eq!(decoded, Value::Integer(IntegerValue::Lossless(42)));
    }

    #[test]
    fn datetime_without_offset_is_rejected() {
        let dt = CallerDateTime {
            date: CallerDate { year: 2024, month: 1, day: 1 },
            time: CallerLocalTime { hour: 0, minute: 0, second: 0, nanosecond: 0 },
            offset_seconds: None,
            zone_id: None,
        };
        assert!(encode_value(&CallerValue::DateTime(dt)).is_err());
    }

    #[test]
    fn zoned_date_time_emits_bracketed_zone() {
        let dt = CallerDateTime {
            date: CallerDate { year: 2015, month: 6, day: 24 },
            time: CallerLocalTime { hour: 12, minute: 50, second: 35, nanosecond: 0 },
            offset_seconds: Some(7200),
            zone_id: Some("Europe/Berlin".into()),
        };
        let tagged = encode_value(&CallerValue::DateTime(dt)).unwrap();
        match tagged {
            TaggedValue::ZonedDateTime(s) => assert!(s.ends_with("[Europe/Berlin]")),
            other => panic!("expected ZonedDateTime, got {other:?}"),
        }
    }

    #[test]
    fn path_of_length_three_decodes_one_segment() {
        let n0 = WireNode { element_id: "n0".into(), labels: vec![], properties: None };
        let n1 = WireNode { element_id: "n1".into(), labels: vec![], properties: None };
        let r0 = WireRelationship {
            element_id: "r0".into(),
            start_node_element_id: "n0".into(),
            end_node_element_id: "n1".into(),
            rel_type: "KNOWS".into(),
            properties: None,
        };
        let sequence = vec![
            TaggedValue::Node(n0),
            TaggedValue::Relationship(r0),
            TaggedValue::Node(n1),
        ];
        let path = decode_path(&sequence, IntegerPolicy::LosslessInteger).unwrap();
        assert_eq!(path.segments.len(), 1);
        assert_eq!(path.segments[0].start.element_id, "n0");
        assert_eq!(path.segments[0].end.element_id, "n1");
    }

    #[test]
    fn even_length_path_is_rejected() {
        let n0 = WireNode { element_id: "n0".into(), labels: vec![], properties: None };
        let r0 = WireRelationship {
            element_id: "r0".into(),
            start_node_element_id: "n0".into(),
            end_node_element_id: "n0".into(),
            rel_type: "SELF".into(),
            properties: None,
        };
        let sequence = vec![TaggedValue::Node(n0), TaggedValue::Relationship(r0)];
        assert!(decode_path(&sequence, IntegerPolicy::LosslessInteger).is_err());
    }
}
