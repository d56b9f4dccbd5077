//! Recipe API error types.

/// Errors that can occur while querying the recipe API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },
    /// The body was not the expected JSON shape.
    #[error("unexpected response from {url}: {message}")]
    Decode { url: String, message: String },
}
