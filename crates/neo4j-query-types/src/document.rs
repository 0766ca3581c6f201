use serde::Deserialize;

use crate::event::{Failure, SummaryBody};
use crate::wire::TaggedValue;

#[derive(Debug, Clone, Deserialize)]
pub struct DataBody {
    pub fields: Vec<String>,
    pub values: Vec<Vec<TaggedValue>>,
}

/// A fully materialized buffered success document:
/// `{data: {fields, values}, counters, bookmarks, profiledQueryPlan?, queryPlan?, notifications?}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentBody {
    pub data: DataBody,
    #[serde(flatten)]
    pub summary: SummaryBody,
}

/// A buffered error document: `{errors: [{code, message, error?}]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDocument {
    pub errors: Vec<Failure>,
}
