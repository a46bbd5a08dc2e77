//! Result data models for calls to the services layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Outcome of a GET beyond the body itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GetStatus {
    /// The server answered with this HTTP status code.
    Code(u16),
    /// The server could not be reached; carries the failure reason.
    Reason(String),
}

impl GetStatus {
    /// HTTP status code, if the server answered at all.
    pub fn code(&self) -> Option<u16> {
        match self {
            GetStatus::Code(code) => Some(*code),
            GetStatus::Reason(_) => None,
        }
    }
}

impl fmt::Display for GetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetStatus::Code(code) => write!(f, "{}", code),
            GetStatus::Reason(reason) => write!(f, "{}", reason),
        }
    }
}

/// Result of a GET: resolved URL, body (absent on failure) and status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetResponse {
    pub url: String,

    /// Body decoded with the reply's charset; `None` for any non-2xx reply
    /// or connection failure.
    pub body: Option<String>,
    pub status: GetStatus,
}

impl GetResponse {
    /// True when a body was received.
    pub fn is_success(&self) -> bool {
        self.body.is_some()
    }

    /// Splits the response into `(url, body, status)`.
    pub fn into_parts(self) -> (String, Option<String>, GetStatus) {
        (self.url, self.body, self.status)
    }
}

/// Result of a POST or PUT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub url: String,

    /// Body decoded with the reply's charset (UTF-8 when unspecified).
    pub body: String,

    /// CSID of the created record, or empty when the reply had no `Location`.
    pub csid: String,

    pub status_code: u16,

    /// Wall time from building the request to reading the full reply.
    pub elapsed: Duration,
}

impl PostResponse {
    /// Elapsed time in fractional seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Splits the response into `(url, body, csid, elapsed_secs)`.
    pub fn into_parts(self) -> (String, String, String, f64) {
        let elapsed = self.elapsed_secs();
        (self.url, self.body, self.csid, elapsed)
    }
}
