use futures::{Stream, StreamExt};
use neo4j_query_codec::{decode_profile, decode_stats, decode_value};
use neo4j_query_types::{Error, Event, IntegerPolicy, RawCounters, Result, SummaryBody, Value};

use crate::meta::ResponseMeta;

/// Wraps an async event iterator produced by the byte-to-event pipeline.
/// `keys()` and `meta()` are idempotent: once resolved they return the
/// cached value without pulling further events. The first terminal error
/// (a transport/parse failure on the underlying stream, or a server `Error`
/// event) is latched and re-raised from every later accessor.
pub struct StreamingResponseReader<S> {
    events: S,
    policy: IntegerPolicy,
    keys: Option<Vec<String>>,
    meta: Option<ResponseMeta>,
    done: bool,
    error: Option<Error>,
    header_seen: bool,
}

impl<S> StreamingResponseReader<S>
where
    S: Stream<Item = Result<Event>> + Unpin,
{
    pub fn new(events: S, policy: IntegerPolicy) -> Self {
        Self { events, policy, keys: None, meta: None, done: false, error: None, header_seen: false }
    }

    fn latch(&mut self, err: Error) -> Error {
        if self.error.is_none() {
            tracing::warn!(error = %err, "streaming reader latched terminal error");
            self.error = Some(err.clone());
        }
        self.done = true;
        err
    }

    async fn next_event(&mut self) -> Result<Event> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        if self.done {
            return Err(Error::protocol("Closed streaming"));
        }
        match self.events.next().await {
            Some(Ok(event)) => Ok(event),
            Some(Err(err)) => Err(self.latch(err)),
            None => {
                self.done = true;
                Err(Error::protocol("Closed streaming"))
            }
        }
    }

    fn build_meta(&self, summary: &SummaryBody) -> Result<ResponseMeta> {
        let stats = summary
            .counters
            .clone()
            .map(|raw| decode_stats(&raw, self.policy))
            .unwrap_or_else(|| decode_stats(&RawCounters::default(), self.policy));
        let profile = summary.profiled_query_plan.as_ref().map(|p| decode_profile(p, self.policy)).transpose()?;
        let plan = summary.query_plan.as_ref().map(|p| decode_profile(p, self.policy)).transpose()?;
        Ok(ResponseMeta {
            bookmark: summary.bookmarks.clone(),
            stats,
            profile,
            plan,
            notifications: summary.notifications.clone(),
        })
    }

    fn failure_from_body(&mut self, body: neo4j_query_types::ErrorBody) -> Error {
        match body.failures.into_iter().next() {
            Some(first) => self.latch(Error::server(first.resolved_code().to_string(), first.message)),
            None => self.latch(Error::protocol("Server replied an empty error response")),
        }
    }

    /// Idempotent: pulls events only until the first `Header`.
    pub async fn keys(&mut self) -> Result<Vec<String>> {
        if let Some(keys) = &self.keys {
            return Ok(keys.clone());
        }
        let event = self.next_event().await?;
        match event {
            Event::Header(h) => {
                self.header_seen = true;
                let fields = h.fields.ok_or_else(|| Error::protocol("Header event missing fields"))?;
                self.keys = Some(fields.clone());
                Ok(fields)
            }
            Event::Error(body) => Err(self.failure_from_body(body)),
            other => Err(self.latch(Error::protocol(format!("expected Header, got {}", other.name())))),
        }
    }

    /// Drains events through `Summary`, updating `keys` along the way.
    /// Idempotent once resolved.
    pub async fn meta(&mut self) -> Result<ResponseMeta> {
        if let Some(meta) = &self.meta {
            return Ok(meta.clone());
        }
        loop {
            let event = self.next_event().await?;
            match event {
                Event::Header(h) => {
                    self.header_seen = true;
                    if let Some(fields) = h.fields {
                        self.keys = Some(fields);
                    }
                }
                Event::Record(_) => {
                    // Not expected during a meta()-only drain; keep going
                    // rather than surfacing rows the caller didn't ask for.
                }
                Event::Summary(summary) => {
                    let meta = self.build_meta(&summary)?;
                    self.meta = Some(meta.clone());
                    self.done = true;
                    return Ok(meta);
                }
                Event::Error(body) => return Err(self.failure_from_body(body)),
            }
        }
    }

    /// Single-pass row stream: yields one decoded row per `Record`,
    /// updates `keys` on `Header`, and resolves `meta` on `Summary`.
    pub fn stream(&mut self) -> impl Stream<Item = Result<Vec<Value>>> + '_ {
        let policy = self.policy;
        async_stream::try_stream! {
            loop {
                let event = self.next_event().await?;
                match event {
                    Event::Header(h) => {
                        self.header_seen = true;
                        if let Some(fields) = h.fields {
                            self.keys = Some(fields);
                        }
                    }
                    Event::Record(row) => {
                        if !self.header_seen {
                            Err(self.latch(Error::protocol("Record event before Header")))?;
                        }
                        let decoded = row.iter().map(|tv| decode_value(tv, policy)).collect::<Result<Vec<_>>>()?;
                        yield decoded;
                    }
                    Event::Summary(summary) => {
                        let meta = self.build_meta(&summary)?;
                        self.meta = Some(meta);
                        self.done = true;
                        break;
                    }
                    Event::Error(body) => {
                        Err(self.failure_from_body(body))?;
                    }
                }
            }
        }
    }
}
