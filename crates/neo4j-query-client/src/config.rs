use std::time::Duration;

use neo4j_query_types::IntegerPolicy;
use serde::{Deserialize, Serialize};

const ENV_BASE_URL: &str = "NEO4J_QUERY_BASE_URL";
const ENV_INTEGER_POLICY: &str = "NEO4J_QUERY_INTEGER_POLICY";
const ENV_REQUEST_TIMEOUT_SECS: &str = "NEO4J_QUERY_REQUEST_TIMEOUT_SECS";
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn default_request_timeout() -> Duration {
    DEFAULT_REQUEST_TIMEOUT
}

/// The client's resolved, typed configuration: base URL, default integer
/// policy, and request timeout. Captured by value once at construction,
/// the same rule as the integer policy itself, and never reloaded mid-session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: Option<String>,
    #[serde(default)]
    pub integer_policy: IntegerPolicy,
    #[serde(default = "default_request_timeout")]
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::resolve(ClientConfigOverrides::default())
    }
}

/// Explicit field overrides a caller supplies to [`ClientConfig::resolve`].
/// Any field left `None` falls through to the environment, then the
/// built-in default.
#[derive(Debug, Clone, Default)]
pub struct ClientConfigOverrides {
    pub base_url: Option<String>,
    pub integer_policy: Option<IntegerPolicy>,
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Resolves each field through the same priority chain as the
    /// workspace-path resolver this crate's sibling crates use: explicit
    /// override, then environment variable, then built-in default.
    pub fn resolve(overrides: ClientConfigOverrides) -> Self {
        let base_url = overrides.base_url.or_else(|| std::env::var(ENV_BASE_URL).ok());

        let integer_policy = overrides
            .integer_policy
            .or_else(|| std::env::var(ENV_INTEGER_POLICY).ok().and_then(|v| parse_integer_policy(&v)))
            .unwrap_or_default();

        let request_timeout = overrides
            .request_timeout
            .or_else(|| {
                std::env::var(ENV_REQUEST_TIMEOUT_SECS)
                    .ok()
                    .and_then(|v| v.parse::<u64>().ok())
                    .map(Duration::from_secs)
            })
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        Self { base_url, integer_policy, request_timeout }
    }
}

fn parse_integer_policy(text: &str) -> Option<IntegerPolicy> {
    match text {
        "lossless" | "LosslessInteger" => Some(IntegerPolicy::LosslessInteger),
        "bigint" | "BigInt" => Some(IntegerPolicy::BigInt),
        "number" | "Number" => Some(IntegerPolicy::Number),
        _ => None,
    }
}
