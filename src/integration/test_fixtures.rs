//! Shared fixtures for integration client tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

use super::IntegrationClient;

pub const ACK_BODY: &str = r#"
{
    "result": "ok"
}
"#;

/// Transport that records requests and replays queued responses.
///
/// Once the queue is drained every request gets a 202 acknowledgment.
#[derive(Debug, Default)]
pub struct MockClient {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockClient {
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A transport answering one request with `status` and `body`.
    pub fn replying(status: u16, body: &str) -> Self {
        Self::new(vec![Ok(response(status, body))])
    }

    pub fn failing(error: HttpError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The JSON body of the only captured request.
    pub fn sent_json(&self) -> serde_json::Value {
        let requests = self.captured_requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        serde_json::from_slice(requests[0].body.as_deref().unwrap()).unwrap()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(response(202, ACK_BODY)))
    }
}

pub fn response(status: u16, body: &str) -> HttpResponse {
    HttpResponse::new(
        http::StatusCode::from_u16(status).unwrap(),
        http::HeaderMap::new(),
        body.as_bytes().to_vec(),
    )
}

/// A client over a transport answering with `status` and `body`.
pub fn setup(status: u16, body: &str) -> IntegrationClient<MockClient> {
    IntegrationClient::with_transport(MockClient::replying(status, body))
}

pub const BAD_REQUEST_BODY: &str = r#"
{
    "errors": [
        {"status": 400, "title": "Check Error", "detail": "param is missing or the value is empty: status"}
    ]
}
"#;

pub const UNAVAILABLE_BODY: &str = r#"
{
    "errors": [
        {"status": 503, "title": "Service Unavailable"}
    ]
}
"#;

pub const NOT_FOUND_BODY: &str = r#"
{
    "errors": [
        {"status": 422, "title": "Service Not Found", "detail": "no service with alias my_service"}
    ]
}
"#;
