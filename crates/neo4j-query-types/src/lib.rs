//! Wire and rich-value data model shared by the codec, stream, and client
//! crates: the tagged wire value, the decoded rich value, graph entities,
//! temporal/duration/point types, response summaries, and the streaming
//! event envelope.

pub mod document;
pub mod duration;
pub mod error;
pub mod event;
pub mod graph;
pub mod integer;
pub mod plan;
pub mod point;
pub mod stats;
pub mod temporal;
pub mod value;
pub mod wire;

pub use document::{DataBody, DocumentBody, ErrorDocument};
pub use duration::DurationValue;
pub use error::{Error, Result};
pub use event::{ErrorBody, Event, Failure, HeaderBody, SummaryBody};
pub use graph::{GraphPath, Node, PathSegment, Relationship};
pub use integer::{IntegerPolicy, IntegerValue};
pub use plan::{ProfiledPlan, RawProfiledPlan};
pub use point::{DecodedPoint, PointValue};
pub use stats::{Counters, RawCounters};
pub use temporal::{DateTimeValue, LocalDateTimeValue, LocalDateValue, LocalTimeValue, TimeValue};
pub use value::Value;
pub use wire::{TaggedValue, WireNode, WireRelationship};
