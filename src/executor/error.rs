//! Request execution error types.
//!
//! Failures are classified at the boundary so callers can tell a server they
//! could not reach from a server that answered with something unusable.

use std::fmt;

/// Errors that can occur while talking to the services layer.
#[derive(Debug)]
pub enum RequestError {
    /// The server could not be reached: connection refused, DNS failure,
    /// reset mid-transfer and similar.
    NetworkError(String),

    /// Request timed out before completion.
    Timeout,

    /// The resolved URL could not be parsed.
    InvalidUrl(String),

    /// Only HTTP and HTTPS servers are supported.
    UnsupportedProtocol(String),

    /// The request or HTTP client could not be constructed.
    BuildError(String),

    /// The server answered with a non-success status.
    HttpStatus { code: u16, body: String },

    /// The server answered successfully but the reply broke the services
    /// contract (e.g. a `Location` header that does not point under the
    /// request URI).
    ProtocolError(String),
}

impl RequestError {
    /// True for failures to reach the server at all.
    pub fn is_network(&self) -> bool {
        matches!(self, RequestError::NetworkError(_) | RequestError::Timeout)
    }

    /// True when the server answered but the exchange failed.
    pub fn is_protocol(&self) -> bool {
        matches!(
            self,
            RequestError::HttpStatus { .. } | RequestError::ProtocolError(_)
        )
    }

    /// HTTP status code, when the server sent one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RequestError::HttpStatus { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            RequestError::Timeout => write!(f, "Request timed out"),
            RequestError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            RequestError::UnsupportedProtocol(protocol) => {
                write!(f, "Unsupported protocol: {}", protocol)
            }
            RequestError::BuildError(msg) => write!(f, "Request build error: {}", msg),
            RequestError::HttpStatus { code, .. } => {
                write!(f, "The server couldn't fulfill the request: HTTP {}", code)
            }
            RequestError::ProtocolError(msg) => write!(f, "Protocol error: {}", msg),
        }
    }
}

impl std::error::Error for RequestError {}

/// Maps reqwest's error kinds onto the classification above.
impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RequestError::Timeout
        } else if err.is_builder() {
            RequestError::BuildError(err.to_string())
        } else if let Some(status) = err.status() {
            RequestError::HttpStatus {
                code: status.as_u16(),
                body: String::new(),
            }
        } else {
            RequestError::NetworkError(err.to_string())
        }
    }
}

impl From<url::ParseError> for RequestError {
    fn from(err: url::ParseError) -> Self {
        RequestError::InvalidUrl(err.to_string())
    }
}
