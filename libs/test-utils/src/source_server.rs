use serde_json::Value;
use url::Url;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use crate::fixtures::{event_data, event_schema};

pub const DATA_PATH: &str = "/events/event-data.json";
pub const SCHEMA_PATH: &str = "/events/event-data.schema.json";

/// Stand-in for the remote host publishing the event data and its schema.
///
/// Each instance listens on its own random port, so tests never share
/// remote state.
pub struct TestSourceServer {
    pub server: MockServer,
}

impl TestSourceServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Start a server already publishing the fixture documents.
    pub async fn with_fixtures() -> Self {
        let instance = Self::start().await;
        instance.serve(&event_data(), &event_schema()).await;
        instance
    }

    pub fn data_url(&self) -> Url { self.url(DATA_PATH) }

    pub fn schema_url(&self) -> Url { self.url(SCHEMA_PATH) }

    fn url(&self, document_path: &str) -> Url {
        Url::parse(&format!("{}{}", self.server.uri(), document_path))
            .expect("mock server uri is a valid url")
    }

    pub async fn serve(&self, data: &Value, schema: &Value) {
        self.serve_json(DATA_PATH, data).await;
        self.serve_json(SCHEMA_PATH, schema).await;
    }

    pub async fn serve_json(&self, document_path: &str, body: &Value) {
        Mock::given(method("GET"))
            .and(path(document_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn serve_status(&self, document_path: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(document_path))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Answer the first `times` requests for `document_path` with `status`.
    /// Mocks mounted afterwards take over once these are used up.
    pub async fn fail_first(
        &self, document_path: &str, status: u16, times: u64,
    ) {
        Mock::given(method("GET"))
            .and(path(document_path))
            .respond_with(ResponseTemplate::new(status))
            .up_to_n_times(times)
            .mount(&self.server)
            .await;
    }

    /// Drop every mounted document and the request log.
    pub async fn reset(&self) { self.server.reset().await; }

    pub async fn requests_to(&self, document_path: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == document_path)
            .count()
    }
}
