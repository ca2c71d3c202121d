use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use events_http::EventServices;
use events_query_handlers::RetryPolicy;
use events_source::SourceConfig;
use memory_cache::MemoryConfig;
use test_utils::*;
use tower::ServiceExt;
use venue_events::{AppConfig, build_app, build_provider};

pub struct IntegrationTestSetup {
    pub server: TestSourceServer,
    pub app: Router,
}

impl IntegrationTestSetup {
    pub async fn new() -> anyhow::Result<Self> {
        init_test_tracing();
        let server = TestSourceServer::with_fixtures().await;

        let config = AppConfig {
            bind_addr: "127.0.0.1:0".parse()?,
            source: SourceConfig::new(server.data_url(), server.schema_url()),
            cache: MemoryConfig::default(),
            retry: RetryPolicy::new(3, Duration::from_millis(1)),
        };
        let provider = build_provider(&config)?;
        let app = build_app(EventServices::new(provider));

        Ok(Self { server, app })
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = self.get(uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }
}

#[tokio::test]
async fn test_health_check() {
    let setup = IntegrationTestSetup::new().await.unwrap();

    let (status, body) = setup.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
    assert_eq!(setup.server.requests_to(DATA_PATH).await, 0);
}

#[tokio::test]
async fn test_openapi_document_lists_event_routes() {
    let setup = IntegrationTestSetup::new().await.unwrap();

    let (status, doc) = setup.get_json("/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    let paths = doc["paths"].as_object().unwrap();
    for path in [
        "/health",
        "/api/event/events",
        "/api/event/events/{eventId}",
        "/api/event/venues",
        "/api/event/venues/{venueId}",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}

#[tokio::test]
async fn test_end_to_end_venue_lookup() {
    let setup = IntegrationTestSetup::new().await.unwrap();

    let (status, venue) = setup.get_json("/api/event/events/10033").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(venue, serde_json::to_value(observatory()).unwrap());

    let (status, _) = setup.get_json("/api/event/events/100").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_every_request_runs_its_own_cycle() {
    let setup = IntegrationTestSetup::new().await.unwrap();

    setup.get_json("/api/event/events").await;
    setup.get_json("/api/event/venues").await;
    setup.get_json("/api/event/venues/919").await;

    assert_eq!(setup.server.requests_to(DATA_PATH).await, 3);
    assert_eq!(setup.server.requests_to(SCHEMA_PATH).await, 3);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let setup = IntegrationTestSetup::new().await.unwrap();

    let (status, _) = setup.get("/api/event/unknown").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
