//! Request encoding, HTTP dispatch, and response readers for the Neo4j
//! Query API. Session/transaction orchestration, auth token lifecycle, and
//! the public driver façade are deliberately out of scope. This crate is
//! the thin dispatch boundary those layers sit on top of.

pub mod auth;
pub mod buffered;
pub mod config;
pub mod dispatcher;
pub mod encoder;
pub mod media;
pub mod meta;
pub mod reader;
pub mod streaming;

pub use auth::{AuthEncoder, AuthToken, BasicAuthEncoder};
pub use buffered::BufferedResponseReader;
pub use config::{ClientConfig, ClientConfigOverrides};
pub use dispatcher::Dispatcher;
pub use encoder::{AccessMode, RequestEncoder, RequestOptions, TransactionConfig};
pub use meta::ResponseMeta;
pub use reader::{BoxedEventStream, ResponseReader};
pub use streaming::StreamingResponseReader;
