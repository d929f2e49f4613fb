/// Blocking HTTP client for the remote embedding service.
///
/// One `embed` call issues exactly one POST and blocks until the exchange
/// completes or fails. No retries, no connection-reuse guarantees.
use reqwest::StatusCode;
use reqwest::blocking::Client;
use tracing::debug;

use super::{EmbedError, EmbedRequest, EmbedResponse};
use crate::config::ClientConfig;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("bge-client/", env!("CARGO_PKG_VERSION"));

/// HTTP-backed embedder bound to a single endpoint.
pub struct RemoteEmbedder {
    http: Client,
    endpoint: String,
}

impl RemoteEmbedder {
    /// Create a new embedder from the given configuration.
    ///
    /// Builds the underlying HTTP client with the configured timeout; the
    /// timeout covers the whole exchange, so a stalled server surfaces as
    /// [`EmbedError::Transport`] rather than a hang.
    pub fn new(config: &ClientConfig) -> Result<Self, EmbedError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| EmbedError::Transport(format!("HTTP client build failed: {e}")))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Embed a single text string into a vector.
    ///
    /// Sends `{"text": ...}` as `application/json` and decodes
    /// `{"vector": [...]}` from a 200 response. Any non-200 status is a
    /// [`EmbedError::Service`]; its body is not parsed.
    pub fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        debug!("Requesting embedding for {} bytes of text", text.len());

        let resp = self
            .http
            .post(&self.endpoint)
            .json(&EmbedRequest { text })
            .send()
            .map_err(|e| EmbedError::Transport(e.to_string()))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(EmbedError::Service {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        // Read the full body before decoding so that a connection dropped
        // mid-body is reported as transport failure, not a parse failure.
        let body = resp
            .text()
            .map_err(|e| EmbedError::Transport(e.to_string()))?;

        let decoded: EmbedResponse =
            serde_json::from_str(&body).map_err(|e| EmbedError::Decode(e.to_string()))?;

        debug!("Received {}-dimensional vector", decoded.vector.len());
        Ok(decoded.vector)
    }
}
