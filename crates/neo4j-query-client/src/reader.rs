use std::pin::Pin;

use futures::Stream;
use neo4j_query_types::{Event, Result, Value};

use crate::buffered::BufferedResponseReader;
use crate::meta::ResponseMeta;
use crate::streaming::StreamingResponseReader;

/// The event stream type backing a [`ResponseReader::Streaming`] built by
/// the dispatcher: boxed and pinned so it can carry whichever concrete
/// pipeline (`reqwest` body bytes, a test fixture, …) produced it.
pub type BoxedEventStream = Pin<Box<dyn Stream<Item = Result<Event>> + Send>>;

/// Either response shape the dispatcher can hand back, exposing the same
/// `keys`/`stream`/`meta` surface regardless of which one a given request
/// resolved to.
pub enum ResponseReader {
    Buffered(BufferedResponseReader),
    Streaming(StreamingResponseReader<BoxedEventStream>),
}

impl ResponseReader {
    pub async fn keys(&mut self) -> Result<Vec<String>> {
        match self {
            ResponseReader::Buffered(r) => r.keys().map(|k| k.to_vec()),
            ResponseReader::Streaming(r) => r.keys().await,
        }
    }

    pub async fn meta(&mut self) -> Result<ResponseMeta> {
        match self {
            ResponseReader::Buffered(r) => r.meta().map(|m| m.clone()),
            ResponseReader::Streaming(r) => r.meta().await,
        }
    }

    /// Buffered rows are already materialized; streaming rows are yielded
    /// as they arrive. Both directions are collected eagerly here for a
    /// uniform return type. A caller that wants to stay on the streaming
    /// reader's lazy `Stream` directly can match on `Self::Streaming` and
    /// call its `stream()` itself.
    pub async fn rows(&mut self) -> Vec<Result<Vec<Value>>> {
        match self {
            ResponseReader::Buffered(r) => r.stream().collect(),
            ResponseReader::Streaming(r) => {
                use futures::StreamExt;
                r.stream().collect().await
            }
        }
    }
}
