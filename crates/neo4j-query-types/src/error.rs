use std::fmt;

/// Result type used throughout the codec pipeline.
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for the query codec.
///
/// Kept as plain owned strings (rather than wrapping e.g. `serde_json::Error`
/// directly) so the type stays cheap to clone: the streaming reader latches
/// the first terminal error and must re-raise the same value from every
/// later accessor without consuming it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed wire payload, bad textual form, wrong Content-Type, an
    /// ordering violation, or an unknown tag/event.
    Protocol(String),
    /// Transport failure or an unreadable/unparseable response body.
    Service { message: String, url: Option<String> },
    /// Caller supplied an unsupported or ambiguous value to the encoder.
    Caller(String),
    /// The server's own `{code, message}` failure, surfaced verbatim.
    Server { code: String, message: String },
}

impl Error {
    pub fn protocol(message: impl Into<String>) -> Self {
        Error::Protocol(message.into())
    }

    pub fn caller(message: impl Into<String>) -> Self {
        Error::Caller(message.into())
    }

    pub fn service(message: impl Into<String>, url: Option<String>) -> Self {
        Error::Service {
            message: message.into(),
            url,
        }
    }

    pub fn server(code: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Server {
            code: code.into(),
            message: message.into(),
        }
    }

    /// `PROTOCOL_ERROR` / `SERVICE_UNAVAILABLE` / `CALLER_ERROR`, or the
    /// server's own code for a `Server` failure.
    pub fn code(&self) -> &str {
        match self {
            Error::Protocol(_) => "PROTOCOL_ERROR",
            Error::Service { .. } => "SERVICE_UNAVAILABLE",
            Error::Caller(_) => "CALLER_ERROR",
            Error::Server { code, .. } => code,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Protocol(message) => write!(f, "protocol error: {message}"),
            Error::Service { message, url: Some(url) } => {
                write!(f, "service unavailable ({url}): {message}")
            }
            Error::Service { message, url: None } => write!(f, "service unavailable: {message}"),
            Error::Caller(message) => write!(f, "invalid input: {message}"),
            Error::Server { code, message } => write!(f, "server error [{code}]: {message}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Protocol(err.to_string())
    }
}

impl From<std::num::ParseFloatError> for Error {
    fn from(err: std::num::ParseFloatError) -> Self {
        Error::Protocol(err.to_string())
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(err: std::num::ParseIntError) -> Self {
        Error::Protocol(err.to_string())
    }
}
