use std::collections::HashMap;

use crate::duration::DurationValue;
use crate::graph::{GraphPath, Node, Relationship};
use crate::integer::IntegerValue;
use crate::point::DecodedPoint;
use crate::temporal::{DateTimeValue, LocalDateTimeValue, LocalDateValue, LocalTimeValue, TimeValue};

/// The fully decoded, caller-facing form of a wire value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(IntegerValue),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    Date(LocalDateValue),
    LocalTime(LocalTimeValue),
    Time(TimeValue),
    LocalDateTime(LocalDateTimeValue),
    DateTime(DateTimeValue),
    Duration(DurationValue),
    Point(DecodedPoint),
    List(Vec<Value>),
    Map(HashMap<String, Value>),
    Node(Node),
    Relationship(Relationship),
    Path(GraphPath),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}
