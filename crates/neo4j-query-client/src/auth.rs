use base64::{engine::general_purpose::STANDARD, Engine as _};
use neo4j_query_types::{Error, Result};

/// A caller-supplied credential. Carried opaquely by the request encoder;
/// it never inspects or validates the credential itself, only hands it to
/// an [`AuthEncoder`].
#[derive(Debug, Clone)]
pub enum AuthToken {
    Basic { username: String, password: String },
    Bearer(String),
    None,
}

/// A narrow seam between the request encoder and whatever scheme produces
/// an `Authorization` header value, so a concrete auth scheme can be
/// swapped without touching the encoder itself.
pub trait AuthEncoder: Send + Sync {
    fn encode(&self, token: &AuthToken) -> Result<String>;
}

/// The default encoder: HTTP Basic for [`AuthToken::Basic`], a bearer
/// header for [`AuthToken::Bearer`]. [`AuthToken::None`] is rejected, since
/// every request this crate issues is expected to be authenticated.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicAuthEncoder;

impl AuthEncoder for BasicAuthEncoder {
    fn encode(&self, token: &AuthToken) -> Result<String> {
        match token {
            AuthToken::Basic { username, password } => {
                let raw = format!("{username}:{password}");
                Ok(format!("Basic {}", STANDARD.encode(raw)))
            }
            AuthToken::Bearer(bearer) => Ok(format!("Bearer {bearer}")),
            AuthToken::None => Err(Error::caller("no credentials supplied for Authorization header")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_basic_credentials() {
        let token = AuthToken::Basic { username: "neo4j".into(), password: "secret".into() };
        let header = BasicAuthEncoder.encode(&token).unwrap();
        assert_eq!(header, format!("Basic {}", STANDARD.encode("neo4j:secret")));
    }

    #[test]
    fn encodes_bearer_token() {
        let header = BasicAuthEncoder.encode(&AuthToken::Bearer("abc123".into())).unwrap();
        assert_eq!(header, "Bearer abc123");
    }

    #[test]
    fn rejects_missing_credentials() {
        assert!(BasicAuthEncoder.encode(&AuthToken::None).is_err());
    }
}
