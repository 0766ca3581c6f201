//! Byte-to-event streaming pipeline: a stateful line framer plus the
//! stateless event parser that together turn a chunked byte stream into
//! an ordered sequence of `Header`/`Record`/`Summary`/`Error` events.

pub mod events;
pub mod line_framer;

pub use events::{event_stream, parse_event_line};
pub use line_framer::Utf8LineFramer;
