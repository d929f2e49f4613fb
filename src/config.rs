/// Configuration for the embedding demo client.
///
/// Provides the remote endpoint, request timeout, and output preview width
/// with validated defaults. There is no config file: the demo runs with no
/// arguments, and tests override the endpoint directly to point at a mock
/// server.
use std::time::Duration;

use anyhow::Result;

// ── Default value functions ──────────────────────────────────────────

fn default_endpoint() -> String {
    "https://api.mulife.vip/bge/embed".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_preview_dims() -> usize {
    5
}

// ── Config struct ────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// URL of the remote embedding endpoint.
    pub endpoint: String,

    /// Connect + read timeout for the whole HTTP exchange, in seconds.
    pub timeout_secs: u64,

    /// How many leading vector dimensions the demo prints.
    pub preview_dims: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            preview_dims: default_preview_dims(),
        }
    }
}

impl ClientConfig {
    /// Request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(!self.endpoint.is_empty(), "endpoint must not be empty");
        anyhow::ensure!(
            self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://"),
            "endpoint must be an http(s) URL: {}",
            self.endpoint
        );
        anyhow::ensure!(self.timeout_secs > 0, "timeout_secs must be positive");
        anyhow::ensure!(self.preview_dims > 0, "preview_dims must be positive");
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────
