//! Error types for the HTTP transport.

use thiserror::Error;

/// A request that never produced an HTTP response.
///
/// Anything with a status code, however unwelcome, is not an `HttpError`;
/// classification of status codes happens one layer up.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// Covers DNS resolution, refused connections, TLS handshakes and
    /// failures while reading the response body.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The transport gave up waiting.
    ///
    /// Only possible when the caller configured a timeout on the
    /// underlying transport.
    #[error("Request timed out")]
    Timeout,

    /// The target URL could not be built or was rejected by the transport.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
