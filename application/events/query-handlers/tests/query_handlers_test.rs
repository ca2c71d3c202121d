use std::{sync::Arc, time::Duration};

use events_errors::EventError;
use events_models::Snapshot;
use events_queries::{GetEventsByVenueQuery, GetVenueByEventQuery};
use events_query_handlers::{
    DataProvider, GetEventsByVenueQueryHandler, GetVenueByEventQueryHandler,
    ListEventsQueryHandler, ListVenuesQueryHandler, RetryPolicy,
};
use events_source::{HttpFetcher, SourceConfig};
use memory_cache::Memory;
use serde_json::json;
use test_utils::*;

fn provider_for(server: &TestSourceServer) -> DataProvider {
    init_test_tracing();
    let config = SourceConfig::new(server.data_url(), server.schema_url());
    DataProvider::new(
        Arc::new(HttpFetcher::new(config).unwrap()),
        Arc::new(Memory::<Arc<Snapshot>>::default()),
        RetryPolicy::new(3, Duration::from_millis(1)),
    )
}

#[tokio::test]
async fn test_list_events_returns_all_events() {
    let server = TestSourceServer::with_fixtures().await;
    let handler = ListEventsQueryHandler::new(provider_for(&server));

    let events = handler.execute().await;

    assert!(!events.is_empty());
    assert_eq!(events, fixture_snapshot().events);
}

#[tokio::test]
async fn test_list_venues_returns_all_venues() {
    let server = TestSourceServer::with_fixtures().await;
    let handler = ListVenuesQueryHandler::new(provider_for(&server));

    let venues = handler.execute().await;

    assert_eq!(venues.len(), 4);
    assert!(venues.contains(&observatory()));
}

#[tokio::test]
async fn test_events_by_venue() {
    let server = TestSourceServer::with_fixtures().await;
    let handler = GetEventsByVenueQueryHandler::new(provider_for(&server));

    let events = handler
        .execute(GetEventsByVenueQuery { venue_id: 919 })
        .await;
    let ids: Vec<i64> = events.iter().map(|event| event.id).collect();

    assert_eq!(ids, vec![10033, 10041]);
    assert!(events.iter().all(|event| event.venue_id == 919));
}

#[tokio::test]
async fn test_events_by_unknown_venue_is_empty() {
    let server = TestSourceServer::with_fixtures().await;
    let handler = GetEventsByVenueQueryHandler::new(provider_for(&server));

    let events = handler
        .execute(GetEventsByVenueQuery { venue_id: 12345 })
        .await;

    assert!(events.is_empty());
}

#[tokio::test]
async fn test_venue_for_known_event() {
    let server = TestSourceServer::with_fixtures().await;
    let handler = GetVenueByEventQueryHandler::new(provider_for(&server));

    let venue = handler
        .execute(GetVenueByEventQuery { event_id: 10033 })
        .await
        .unwrap();

    assert_eq!(venue.id, 919);
    assert_eq!(venue.name, "The TEG Observatory");
    assert_eq!(venue.capacity, 150);
    assert_eq!(venue.location, "Auckland, New Zealand");
}

#[tokio::test]
async fn test_venue_for_unknown_event() {
    let server = TestSourceServer::with_fixtures().await;
    let handler = GetVenueByEventQueryHandler::new(provider_for(&server));

    let result = handler.execute(GetVenueByEventQuery { event_id: 100 }).await;

    match result {
        Err(EventError::EventNotFound { event_id }) => assert_eq!(event_id, 100),
        other => panic!("Expected EventNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_venue_for_event_takes_first_matches() {
    let server = TestSourceServer::start().await;
    let venue = |id: i64, name: &str| {
        json!({
            "id": id,
            "name": name,
            "capacity": 10,
            "location": "Auckland, New Zealand"
        })
    };
    server
        .serve(
            &json!({
                "events": [
                    { "id": 1, "venueId": 10 },
                    { "id": 1, "venueId": 20 }
                ],
                "venues": [
                    venue(20, "Arena"),
                    venue(10, "Hall"),
                    venue(10, "Shadow")
                ]
            }),
            &json!({ "type": "object" }),
        )
        .await;
    let handler = GetVenueByEventQueryHandler::new(provider_for(&server));

    let found = handler
        .execute(GetVenueByEventQuery { event_id: 1 })
        .await
        .unwrap();

    assert_eq!(found.id, 10);
    assert_eq!(found.name, "Hall");
}

#[tokio::test]
async fn test_venue_for_event_with_dangling_venue() {
    let server = TestSourceServer::start().await;
    server
        .serve(
            &json!({
                "events": [{ "id": 7, "venueId": 404 }],
                "venues": []
            }),
            &json!({ "type": "object" }),
        )
        .await;
    let handler = GetVenueByEventQueryHandler::new(provider_for(&server));

    let result = handler.execute(GetVenueByEventQuery { event_id: 7 }).await;

    assert!(matches!(
        result,
        Err(EventError::VenueNotFound { event_id: 7 })
    ));
}

#[tokio::test]
async fn test_handlers_share_cache_through_provider() {
    let server = TestSourceServer::with_fixtures().await;
    let provider = provider_for(&server);
    let events = ListEventsQueryHandler::new(provider.clone());
    let venues = GetVenueByEventQueryHandler::new(provider);

    assert_eq!(events.execute().await.len(), 6);

    server.reset().await;
    server.serve_status(DATA_PATH, 500).await;
    server.serve_status(SCHEMA_PATH, 500).await;

    let venue = venues
        .execute(GetVenueByEventQuery { event_id: 10033 })
        .await
        .unwrap();
    assert_eq!(venue, observatory());
    assert_eq!(server.requests_to(DATA_PATH).await, 4);
}

#[tokio::test]
async fn test_transient_errors_are_retried() {
    let server = TestSourceServer::start().await;
    server.fail_first(DATA_PATH, 503, 2).await;
    server.serve(&event_data(), &event_schema()).await;
    let handler = ListVenuesQueryHandler::new(provider_for(&server));

    let venues = handler.execute().await;

    assert_eq!(venues, fixture_snapshot().venues);
    assert_eq!(server.requests_to(DATA_PATH).await, 3);
}

#[tokio::test]
async fn test_cold_start_with_source_down_is_empty() {
    let server = TestSourceServer::start().await;
    server.serve_status(DATA_PATH, 500).await;
    server.serve_status(SCHEMA_PATH, 500).await;
    let provider = provider_for(&server);

    assert!(ListEventsQueryHandler::new(provider.clone()).execute().await.is_empty());
    assert!(ListVenuesQueryHandler::new(provider).execute().await.is_empty());
}
