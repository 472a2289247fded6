//! Error types for the enrichment fetch.

use thiserror::Error;

/// Errors that can occur while fetching enrichment data.
///
/// Every variant is recoverable: the order form shows it as an error banner
/// and keeps rendering.
#[derive(Debug, Error)]
pub enum EnrichmentError {
    /// Connecting, sending, timing out, or reading the body failed.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The body was not valid JSON.
    #[error("invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),
}
