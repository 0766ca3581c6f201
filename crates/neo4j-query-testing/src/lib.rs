//! Shared wire-document and event-line fixtures for the codec, stream, and
//! client test suites. Internal to this workspace; not published.

pub mod documents;
pub mod events;

pub use documents::{error_document, success_document};
pub use events::{error_event_line, header_event_line, record_event_line, streaming_session, summary_event_line};
