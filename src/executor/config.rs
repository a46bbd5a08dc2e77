//! HTTP request execution configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings applied to every request a client sends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Request timeout in seconds.
    ///
    /// `None` waits indefinitely, which is also the default.
    pub timeout_secs: Option<u64>,
}

impl ExecutionConfig {
    /// Creates a configuration with the given timeout.
    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            timeout_secs: Some(timeout_secs),
        }
    }

    /// Returns the timeout as a `Duration`, if one is configured.
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
