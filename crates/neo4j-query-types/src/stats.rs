use serde::Deserialize;

use crate::integer::IntegerValue;

/// The wire shape of a response's update counters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawCounters {
    pub nodes_created: i64,
    pub nodes_deleted: i64,
    pub relationships_created: i64,
    pub relationships_deleted: i64,
    pub properties_set: i64,
    pub labels_added: i64,
    pub labels_removed: i64,
    pub indexes_added: i64,
    pub indexes_removed: i64,
    pub constraints_added: i64,
    pub constraints_removed: i64,
    pub system_updates: i64,
    pub contains_updates: bool,
    pub contains_system_updates: bool,
}

/// Decoded update counters: every numeric field routed through the same
/// [`crate::integer::IntegerPolicy`] so they all present the same numeric
/// type.
#[derive(Debug, Clone, PartialEq)]
pub struct Counters {
    pub nodes_created: IntegerValue,
    pub nodes_deleted: IntegerValue,
    pub relationships_created: IntegerValue,
    pub relationships_deleted: IntegerValue,
    pub properties_set: IntegerValue,
    pub labels_added: IntegerValue,
    pub labels_removed: IntegerValue,
    pub indexes_added: IntegerValue,
    pub indexes_removed: IntegerValue,
    pub constraints_added: IntegerValue,
    pub constraints_removed: IntegerValue,
    pub system_updates: IntegerValue,
    pub contains_updates: bool,
    pub contains_system_updates: bool,
}
