use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use webhook_loadtest::config::Config;
use webhook_loadtest::LoadTestClient;

pub const AUTH_TOKEN: &str = "Bearer x";
pub const APPLICATION_ID: &str = "app1";
pub const TARGET_URL: &str = "https://hook.test";

/// A mock platform API plus a client pointed at it.
pub struct TestApi {
    pub server: MockServer,
    pub client: LoadTestClient,
}

impl TestApi {
    /// Answer subscription creation with the given status and raw body.
    pub async fn mock_subscriptions(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/api/v1/subscriptions/"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Answer event ingestion with the given status and raw body.
    pub async fn mock_events(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/api/v1/event/"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// JSON body of the only request the server received on `request_path`.
    pub async fn sent_body(&self, request_path: &str) -> Value {
        let requests = self
            .server
            .received_requests()
            .await
            .expect("request recording is enabled");
        let matching: Vec<_> = requests
            .iter()
            .filter(|r| r.url.path() == request_path)
            .collect();
        assert_eq!(matching.len(), 1, "expected one request to {request_path}");
        matching[0].body_json().expect("request body is JSON")
    }

    pub fn config(&self, application_secret: Option<&str>) -> Config {
        Config {
            base_url: self.server.uri(),
            auth_token: AUTH_TOKEN.to_string(),
            application_id: APPLICATION_ID.to_string(),
            event_types: event_types(),
            target_url: TARGET_URL.to_string(),
            application_secret: application_secret.map(|s| s.to_string()),
            timeout: Duration::from_secs(5),
            log_level: "warn".to_string(),
        }
    }
}

pub fn event_types() -> Vec<String> {
    vec!["a.b".to_string()]
}

pub fn created_body() -> String {
    json!({ "created_at": "2024-01-01T00:00:00Z", "subscription_id": "sub_123" }).to_string()
}

pub fn ingested_body() -> String {
    json!({
        "application_id": APPLICATION_ID,
        "event_id": "evt_456",
        "received_at": "2024-01-01T00:00:01Z",
    })
    .to_string()
}

/// Start a mock API on a random port.
pub async fn spawn_api() -> TestApi {
    let server = MockServer::start().await;
    let client = LoadTestClient::new(&server.uri(), AUTH_TOKEN, Duration::from_secs(5))
        .expect("Failed to build client");

    TestApi { server, client }
}
