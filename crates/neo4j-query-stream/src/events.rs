use futures::{Stream, StreamExt};
use neo4j_query_types::{Error, Event};

use crate::line_framer::Utf8LineFramer;

/// Parses one JSONL line into an [`Event`].
///
/// Accepted iff the line is a JSON object with a string `$event` and a
/// non-null `_body` matching one of the four known event shapes; the
/// adjacently-tagged enum enforces both in one deserialize call. The
/// parser itself carries no state across lines, so a malformed line never
/// prevents the next one from being attempted.
pub fn parse_event_line(line: &str) -> Result<Event, Error> {
    serde_json::from_str(line).map_err(|e| Error::protocol(format!("malformed event line: {e}")))
}

/// Wires bytes -> UTF-8 text -> whole lines -> parsed events end to end.
///
/// Each stage holds only the state it needs: the framer its buffered
/// tail, the event parser nothing. A transport error on the byte stream
/// or a malformed line both surface as an item in the output stream
/// rather than unwinding the pipeline, so callers observe failures in
/// the same order they occurred.
pub fn event_stream<S, E>(bytes: S) -> impl Stream<Item = Result<Event, Error>>
where
    S: Stream<Item = Result<bytes::Bytes, E>>,
    E: std::fmt::Display,
{
    async_stream::try_stream! {
        let mut framer = Utf8LineFramer::new();
        futures::pin_mut!(bytes);
        while let Some(chunk) = bytes.next().await {
            let chunk = chunk.map_err(|e| Error::service(e.to_string(), None))?;
            for line in framer.feed(&chunk) {
                yield parse_event_line(&line)?;
            }
        }
    }
}
