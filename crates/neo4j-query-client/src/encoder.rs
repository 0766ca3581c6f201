use std::collections::HashMap;
use std::sync::Arc;

use neo4j_query_codec::{encode_value, CallerValue};
use neo4j_query_types::{Error, Result};
use once_cell::sync::OnceCell;

use crate::auth::{AuthEncoder, AuthToken};
use crate::media::{accept_header, MEDIA_TYPE_BUFFERED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Read,
    Write,
}

impl AccessMode {
    fn as_wire(self) -> &'static str {
        match self {
            AccessMode::Read => "READ",
            AccessMode::Write => "WRITE",
        }
    }
}

/// Transaction timeout and metadata, analogous to a driver's `txConfig`.
#[derive(Debug, Clone, Default)]
pub struct TransactionConfig {
    pub timeout_ms: Option<i64>,
    pub metadata: Option<HashMap<String, CallerValue>>,
}

/// Optional per-request envelope fields beyond the statement and
/// parameters: bookmarks, transaction config, access mode, impersonation.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub bookmarks: Option<Vec<String>>,
    pub tx_config: Option<TransactionConfig>,
    pub mode: Option<AccessMode>,
    pub impersonated_user: Option<String>,
}

/// Builds one query request: statement, encoded parameters, transaction
/// envelope, and negotiation headers. The body is built lazily and cached,
/// built once no matter how many times the dispatcher reads it.
pub struct RequestEncoder {
    auth_token: AuthToken,
    auth_encoder: Arc<dyn AuthEncoder>,
    statement: String,
    parameters: Option<HashMap<String, CallerValue>>,
    options: RequestOptions,
    body: OnceCell<serde_json::Value>,
}

impl RequestEncoder {
    pub fn new(
        auth_token: AuthToken,
        auth_encoder: Arc<dyn AuthEncoder>,
        statement: impl Into<String>,
        parameters: Option<HashMap<String, CallerValue>>,
        options: RequestOptions,
    ) -> Self {
        Self {
            auth_token,
            auth_encoder,
            statement: statement.into(),
            parameters,
            options,
            body: OnceCell::new(),
        }
    }

    pub fn content_type(&self) -> &'static str {
        MEDIA_TYPE_BUFFERED
    }

    pub fn accept(&self) -> String {
        accept_header()
    }

    pub fn authorization(&self) -> Result<String> {
        self.auth_encoder.encode(&self.auth_token)
    }

    pub fn body(&self) -> Result<&serde_json::Value> {
        self.body.get_or_try_init(|| self.build_body())
    }

    fn build_body(&self) -> Result<serde_json::Value> {
        let mut map = serde_json::Map::new();
        map.insert("statement".into(), serde_json::Value::String(self.statement.clone()));
        map.insert("includeCounters".into(), serde_json::Value::Bool(true));

        if let Some(bookmarks) = &self.options.bookmarks {
            map.insert(
                "bookmarks".into(),
                serde_json::Value::Array(bookmarks.iter().cloned().map(serde_json::Value::String).collect()),
            );
        }
        if let Some(mode) = self.options.mode {
            map.insert("accessMode".into(), serde_json::Value::String(mode.as_wire().into()));
        }
        if let Some(user) = &self.options.impersonated_user {
            map.insert("impersonatedUser".into(), serde_json::Value::String(user.clone()));
        }
        if let Some(tx) = &self.options.tx_config {
            if let Some(timeout_ms) = tx.timeout_ms {
                map.insert("txTimeout".into(), serde_json::Value::from(timeout_ms));
            }
            if let Some(metadata) = &tx.metadata {
                map.insert("txMetadata".into(), encode_map(metadata)?);
            }
        }

        if let Some(parameters) = &self.parameters {
            if !parameters.is_empty() {
                map.insert("parameters".into(), encode_map(parameters)?);
            }
        }

        Ok(serde_json::Value::Object(map))
    }
}

fn encode_map(values: &HashMap<String, CallerValue>) -> Result<serde_json::Value> {
    let mut out = serde_json::Map::with_capacity(values.len());
    for (key, value) in values {
        let tagged = encode_value(value)?;
        let json = serde_json::to_value(tagged).map_err(Error::from)?;
        out.insert(key.clone(), json);
    }
    Ok(serde_json::Value::Object(out))
}
