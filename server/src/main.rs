use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use venue_events::{AppConfig, build_app, build_provider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    info!(
        data_url = %config.source.data_url,
        schema_url = %config.source.schema_url,
        retries = config.retry.retries,
        cache_tti_secs = config.cache.tti().as_secs(),
        "Configured event source"
    );

    let provider = build_provider(&config)?;
    let app = build_app(events_http::EventServices::new(provider));

    info!("🚀 Venue events server starting on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
