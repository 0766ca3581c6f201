use std::collections::HashMap;

use serde::Deserialize;

use crate::integer::IntegerValue;
use crate::value::Value;
use crate::wire::TaggedValue;

/// The wire shape of a profiled (or plain) query plan node.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProfiledPlan {
    #[serde(default)]
    pub db_hits: i64,
    #[serde(default)]
    pub records: i64,
    #[serde(default)]
    pub has_page_cache_stats: bool,
    #[serde(default)]
    pub page_cache_hits: i64,
    #[serde(default)]
    pub page_cache_misses: i64,
    #[serde(default)]
    pub page_cache_hit_ratio: f64,
    #[serde(default)]
    pub time: i64,
    pub operator_type: String,
    #[serde(default)]
    pub arguments: HashMap<String, TaggedValue>,
    #[serde(default)]
    pub identifiers: Vec<String>,
    #[serde(default)]
    pub children: Vec<RawProfiledPlan>,
}

/// A decoded plan tree. `records` is surfaced as `rows` and `arguments` as
/// `args`; `children` recurses and every `args` value has already passed
/// through the value decoder.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfiledPlan {
    pub db_hits: IntegerValue,
    pub rows: IntegerValue,
    pub has_page_cache_stats: bool,
    pub page_cache_hits: IntegerValue,
    pub page_cache_misses: IntegerValue,
    pub page_cache_hit_ratio: f64,
    pub time: IntegerValue,
    pub operator_type: String,
    pub args: HashMap<String, Value>,
    pub identifiers: Vec<String>,
    pub children: Vec<ProfiledPlan>,
}
