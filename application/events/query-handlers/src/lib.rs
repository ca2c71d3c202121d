pub mod provider;
pub mod retry;

use events_errors::EventError;
use events_models::{Event, Venue};
use events_queries::{GetEventsByVenueQuery, GetVenueByEventQuery};
pub use provider::{
    DataOutcome, DataProvider, EVENT_DATA_CACHE_KEY, Resolved, SnapshotStore,
};
pub use retry::RetryPolicy;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct ListEventsQueryHandler {
    provider: DataProvider,
}

impl ListEventsQueryHandler {
    pub fn new(provider: DataProvider) -> Self { Self { provider } }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Vec<Event> {
        self.provider.get_data().await.events.clone()
    }
}

#[derive(Clone)]
pub struct GetEventsByVenueQueryHandler {
    provider: DataProvider,
}

impl GetEventsByVenueQueryHandler {
    pub fn new(provider: DataProvider) -> Self { Self { provider } }

    #[instrument(skip(self))]
    pub async fn execute(&self, query: GetEventsByVenueQuery) -> Vec<Event> {
        let snapshot = self.provider.get_data().await;
        let events = snapshot.events_by_venue(query.venue_id);
        debug!(
            "Found {} events for venue {}",
            events.len(),
            query.venue_id
        );
        events
    }
}

#[derive(Clone)]
pub struct ListVenuesQueryHandler {
    provider: DataProvider,
}

impl ListVenuesQueryHandler {
    pub fn new(provider: DataProvider) -> Self { Self { provider } }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Vec<Venue> {
        self.provider.get_data().await.venues.clone()
    }
}

#[derive(Clone)]
pub struct GetVenueByEventQueryHandler {
    provider: DataProvider,
}

impl GetVenueByEventQueryHandler {
    pub fn new(provider: DataProvider) -> Self { Self { provider } }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: GetVenueByEventQuery,
    ) -> Result<Venue, EventError> {
        let snapshot = self.provider.get_data().await;

        if let Some(venue) = snapshot.venue_for_event(query.event_id) {
            return Ok(venue.clone());
        }

        match snapshot.find_event(query.event_id) {
            None => Err(EventError::EventNotFound {
                event_id: query.event_id,
            }),
            Some(event) => {
                debug!(
                    "Event {} points at unknown venue {}",
                    event.id, event.venue_id
                );
                Err(EventError::VenueNotFound {
                    event_id: query.event_id,
                })
            }
        }
    }
}
