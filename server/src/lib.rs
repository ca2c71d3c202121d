use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use events_http::EventServices;
use events_models::Snapshot;
use events_query_handlers::{DataProvider, RetryPolicy};
use events_source::{HttpFetcher, SourceConfig};
use memory_cache::{Memory, MemoryConfig};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8880";

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub source: SourceConfig,
    pub cache: MemoryConfig,
    pub retry: RetryPolicy,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = match std::env::var("BIND_ADDR") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "Ignoring invalid BIND_ADDR");
                default_bind_addr()
            }),
            Err(_) => default_bind_addr(),
        };

        Ok(Self {
            bind_addr,
            source: SourceConfig::from_env()
                .context("Invalid EVENTS_DATA_URL or EVENTS_SCHEMA_URL")?,
            cache: MemoryConfig::from_env(),
            retry: RetryPolicy::from_env(),
        })
    }
}

fn default_bind_addr() -> SocketAddr {
    DEFAULT_BIND_ADDR
        .parse()
        .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 8880)))
}

/// Wires the fetcher, snapshot cache and retry policy together. The cache is
/// created here and owned by the provider; nothing else holds it.
pub fn build_provider(config: &AppConfig) -> anyhow::Result<DataProvider> {
    let fetcher = HttpFetcher::new(config.source.clone())
        .context("Failed to build HTTP client")?;
    let cache = Memory::<Arc<Snapshot>>::new(config.cache.clone());
    Ok(DataProvider::new(
        Arc::new(fetcher),
        Arc::new(cache),
        config.retry,
    ))
}

pub fn build_app(services: EventServices) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(events_http::event_routes(services))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/docs"))
        .route(
            "/api-docs/openapi.json",
            get(|| async { axum::Json(ApiDoc::openapi()) }),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check,
        events_http::list_events,
        events_http::get_events_by_venue,
        events_http::list_venues,
        events_http::get_venue_by_event,
    ),
    components(
        schemas(
            events_models::Event,
            events_models::Venue,
            common_errors::ApiErrorResponse,
            common_errors::ApiErrorInfo,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "events", description = "Event listing endpoints"),
        (name = "venues", description = "Venue lookup endpoints")
    ),
    info(
        title = "Venue Events API",
        description = "Read-only events and venues backed by a remote, schema-validated document",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = String)
    ),
    tag = "health"
)]
async fn health_check() -> impl IntoResponse { (StatusCode::OK, "OK") }
