//! Tests for the run module.

use std::sync::Mutex;

use http::StatusCode;

use opslevel_notify::config::{Cli, Event, ValidatedConfig};
use opslevel_notify::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

use super::*;

/// Transport answering every request with a fixed status and body.
struct StubClient {
    status: StatusCode,
    body: &'static str,
    urls: Mutex<Vec<String>>,
}

impl StubClient {
    fn new(status: u16, body: &'static str) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            body,
            urls: Mutex::new(Vec::new()),
        }
    }

    fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl HttpClient for StubClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.urls.lock().unwrap().push(req.url.to_string());
        Ok(HttpResponse::new(
            self.status,
            http::HeaderMap::new(),
            self.body.as_bytes().to_vec(),
        ))
    }
}

fn config(args: &[&str]) -> ValidatedConfig {
    let mut full_args = vec!["opslevel-notify"];
    full_args.extend(args);
    ValidatedConfig::from_raw(&Cli::parse_from_iter(full_args), None).unwrap()
}

fn check_config(status: &str) -> ValidatedConfig {
    config(&[
        "check",
        "--integration",
        "abc-123",
        "--service",
        "billing",
        "--check",
        "unit-tests",
        "--status",
        status,
    ])
}

mod run_error {
    use super::*;

    #[test]
    fn integration_error_names_event_kind() {
        let error = RunError::Integration {
            kind: "deploy",
            source: IntegrationError::ServiceNotFound,
        };

        assert_eq!(error.to_string(), "deploy event failed: Service Not Found");
        assert!(!error.is_local());
    }

    #[test]
    fn debug_format_works() {
        let error = RunError::Integration {
            kind: "check",
            source: IntegrationError::ServiceNotFound,
        };
        let debug_str = format!("{error:?}");
        assert!(debug_str.contains("ServiceNotFound"));
    }
}

mod create_client {
    use super::*;

    #[test]
    fn uses_configured_base_url() {
        let config = config(&[
            "check",
            "--integration",
            "id",
            "--service",
            "s",
            "--check",
            "c",
            "--status",
            "passed",
            "--base-url",
            "http://localhost:8080",
            "--timeout",
            "10",
        ]);

        let client = create_client(&config).unwrap();

        assert_eq!(client.base_url().as_str(), "http://localhost:8080/");
    }
}

mod send_event {
    use super::*;

    #[tokio::test]
    async fn accepted_event_succeeds() {
        let config = check_config("passed");
        let client = IntegrationClient::with_transport(StubClient::new(202, r#"{"result":"ok"}"#));

        let result = send_event(&client, &config.event, &config.integration_id).await;

        assert!(result.is_ok());
        assert_eq!(
            client.transport().urls(),
            vec!["https://app.opslevel.com/integrations/check/abc-123".to_string()]
        );
    }

    #[tokio::test]
    async fn invalid_event_is_local_failure() {
        let config = check_config("skipped");
        let client = IntegrationClient::with_transport(StubClient::new(202, "{}"));

        let error = send_event(&client, &config.event, &config.integration_id)
            .await
            .unwrap_err();

        assert!(error.is_local());
        assert!(client.transport().urls().is_empty());
    }

    #[tokio::test]
    async fn rejected_event_reports_status() {
        let config = check_config("failed");
        let client = IntegrationClient::with_transport(StubClient::new(422, ""));

        let error = send_event(&client, &config.event, &config.integration_id)
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            RunError::Integration {
                kind: "check",
                source: IntegrationError::ServiceNotFound,
            }
        ));
    }

    #[tokio::test]
    async fn payload_goes_to_payload_endpoint() {
        let config = config(&[
            "payload",
            "--integration",
            "p-1",
            "--service",
            "billing",
            "--check",
            "scan",
            "--data",
            r#"{"high":0}"#,
        ]);
        assert!(matches!(config.event, Event::Payload(_)));
        let client = IntegrationClient::with_transport(StubClient::new(202, "{}"));

        send_event(&client, &config.event, &config.integration_id)
            .await
            .unwrap();

        assert_eq!(
            client.transport().urls(),
            vec!["https://app.opslevel.com/integrations/payload/p-1".to_string()]
        );
    }
}
