/// Wire types and shared error taxonomy for the remote embedding service.
///
/// The service speaks plain JSON over HTTP: a request carries one `text`
/// field, a successful response carries one `vector` field.
pub mod remote;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during a single embedding call.
///
/// None of these are retried: every failure is surfaced to the caller and,
/// in the demo binary, terminates the run.
#[derive(Error, Debug)]
pub enum EmbedError {
    /// Network-level failure (DNS, TCP, TLS, timeout) before any HTTP
    /// response was obtained.
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a status other than 200. The body of an
    /// error response is not parsed.
    #[error("service error: HTTP {status} {status_text}")]
    Service { status: u16, status_text: String },

    /// The response body was not valid JSON of the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Request body for the embedding endpoint.
#[derive(Debug, Serialize)]
pub struct EmbedRequest<'a> {
    pub text: &'a str,
}

/// Response body from the embedding endpoint.
#[derive(Debug, Deserialize)]
pub struct EmbedResponse {
    pub vector: Vec<f32>,
}
