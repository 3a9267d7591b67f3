//! HTTP request/response values and the transport trait.

use std::borrow::Cow;

use http::header::{CONTENT_TYPE, HeaderValue};

use super::HttpError;

/// An outbound HTTP request.
///
/// A plain value: building one performs no I/O. The body is always fully
/// buffered, integration payloads are small JSON documents.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: http::Method,
    /// Target URL
    pub url: url::Url,
    /// HTTP headers to send
    pub headers: http::HeaderMap,
    /// Optional request body
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a request with no headers and no body.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Creates a POST request to the given URL.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self::new(http::Method::POST, url)
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets a JSON body and the matching `Content-Type` header.
    ///
    /// Replaces any content type set earlier.
    #[must_use]
    pub fn with_json_body(mut self, body: Vec<u8>) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.body = Some(body);
        self
    }

    /// Adds a header to the request.
    ///
    /// Existing values for the same name are kept.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

/// A completed HTTP response with its body fully buffered.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn body_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Executes HTTP requests.
///
/// # Design
///
/// The integration client only ever talks to this trait, so:
/// - tests substitute a recording mock and assert on what would have
///   been sent
/// - callers pick timeout, proxy and TLS policy by handing in their own
///   implementation (or a configured [`super::ReqwestClient`])
///
/// Implementations must not retry; one call is one attempt.
///
/// # Example
///
/// ```ignore
/// use opslevel_notify::transport::{HttpClient, HttpRequest, HttpResponse, HttpError};
///
/// struct Canned(HttpResponse);
///
/// impl HttpClient for Canned {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Sends a request and waits for the complete response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when no HTTP response was obtained:
    /// - the connection failed ([`HttpError::Connection`])
    /// - the transport timed out ([`HttpError::Timeout`])
    /// - the URL was unusable ([`HttpError::InvalidUrl`])
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
