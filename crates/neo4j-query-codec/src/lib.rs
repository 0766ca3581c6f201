//! Textual codec for the wire value model: parsers and formatters for
//! scalar tags, plus recursive decode/encode over the full value tree,
//! graph entities, update counters, and profiled plans.

pub mod duration;
pub mod numeric;
pub mod plan;
pub mod point;
pub mod stats;
pub mod temporal;
pub mod value;

pub use duration::{format_duration, parse_duration};
pub use numeric::{format_float, parse_float, parse_integer};
pub use plan::decode_profile;
pub use point::{format_point, parse_point};
pub use stats::decode_stats;
pub use temporal::{
    parse_date, parse_local_date_time, parse_local_time, parse_offset_date_time, parse_time,
    parse_zoned_date_time, ParsedOffsetDateTime, ParsedTime,
};
pub use value::{
    decode_value, encode_value, CallerDate, CallerDateTime, CallerLocalDateTime, CallerLocalTime,
    CallerValue,
};
