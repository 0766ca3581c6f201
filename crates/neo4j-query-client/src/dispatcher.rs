use neo4j_query_types::{Error, IntegerPolicy, Result};

use crate::buffered::BufferedResponseReader;
use crate::encoder::RequestEncoder;
use crate::media::MEDIA_TYPE_STREAMING_PREFIX;
use crate::reader::ResponseReader;
use crate::streaming::StreamingResponseReader;

/// Issues the one HTTP round-trip this crate performs directly, then
/// routes the response to a buffered or streaming reader by its
/// `Content-Type`. Connection pooling, retries, and keep-alive policy are
/// the caller's concern; the dispatcher only needs *a* response to route.
pub struct Dispatcher {
    http: reqwest::Client,
}

impl Dispatcher {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    pub async fn dispatch(&self, url: &str, encoder: &RequestEncoder, policy: IntegerPolicy) -> Result<ResponseReader> {
        tracing::debug!(url, accept = %encoder.accept(), "dispatching query request");

        let body = encoder.body()?;
        let response = self
            .http
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, encoder.content_type())
            .header(reqwest::header::ACCEPT, encoder.accept())
            .header(reqwest::header::AUTHORIZATION, encoder.authorization()?)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::service(e.to_string(), Some(url.to_string())))?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if content_type.starts_with(MEDIA_TYPE_STREAMING_PREFIX) {
            tracing::debug!(url, "routing to streaming reader");
            let bytes = response.bytes_stream();
            let events: crate::reader::BoxedEventStream = Box::pin(neo4j_query_stream::event_stream(bytes));
            Ok(ResponseReader::Streaming(StreamingResponseReader::new(events, policy)))
        } else {
            tracing::debug!(url, "routing to buffered reader");
            let text = response
                .text()
                .await
                .map_err(|e| Error::service(e.to_string(), Some(url.to_string())))?;
            let text = if text.is_empty() { "{}" } else { &text };
            let json: serde_json::Value = serde_json::from_str(text)
                .map_err(|e| Error::service(e.to_string(), Some(url.to_string())))?;
            Ok(ResponseReader::Buffered(BufferedResponseReader::from_json(json, policy)))
        }
    }
}
