use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Address the API is served on when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Connection settings for the remote imóvel API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiSettings {
    /// Scheme, host and port of the API, without a trailing path
    pub base_url: String,
    /// Per-request timeout; requests wait indefinitely when unset
    pub timeout_seconds: Option<u64>,
}

impl ApiSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
        }
    }
}
