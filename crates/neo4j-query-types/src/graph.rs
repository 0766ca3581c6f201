use std::collections::HashMap;

use crate::value::Value;

/// A decoded graph node. Internal numeric identity is left unset by the
/// codec; only the element id the server handed back is carried.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub element_id: String,
    pub labels: Vec<String>,
    pub properties: HashMap<String, Value>,
}

/// A decoded graph relationship.
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    pub element_id: String,
    pub start_node_element_id: String,
    pub end_node_element_id: String,
    pub rel_type: String,
    pub properties: HashMap<String, Value>,
}

/// One `(start, relationship, end)` hop of a decoded path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    pub start: Node,
    pub relationship: Relationship,
    pub end: Node,
}

/// A decoded path: its endpoints plus the ordered hops between them.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphPath {
    pub start: Node,
    pub end: Node,
    pub segments: Vec<PathSegment>,
}
