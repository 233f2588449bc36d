use reqwest::StatusCode;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Errors raised by the portal client.
///
/// `BadCredentials` is the only domain-specific rejection: callers can
/// prompt for new credentials instead of retrying the transport.
#[derive(Debug)]
pub enum VeoliaError {
    Network(reqwest::Error),
    Unexpected(StatusCode),
    Json(serde_json::Error),
    Protocol(String),
    BadCredentials,
    SessionClosed,
}

impl Display for VeoliaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            VeoliaError::Network(e) => write!(f, "network error: {e}"),
            VeoliaError::Unexpected(s) => write!(f, "unexpected http status: {s}"),
            VeoliaError::Json(e) => write!(f, "json error: {e}"),
            VeoliaError::Protocol(msg) => write!(f, "protocol error: {msg}"),
            VeoliaError::BadCredentials => write!(f, "bad credentials"),
            VeoliaError::SessionClosed => write!(f, "session is closed"),
        }
    }
}

impl std::error::Error for VeoliaError {}

impl From<reqwest::Error> for VeoliaError {
    fn from(e: reqwest::Error) -> Self {
        VeoliaError::Network(e)
    }
}

impl From<serde_json::Error> for VeoliaError {
    fn from(e: serde_json::Error) -> Self {
        VeoliaError::Json(e)
    }
}
