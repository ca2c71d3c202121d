use serde::{Deserialize, Serialize};

use crate::{Event, Venue};

/// The events and venues produced by one successful fetch cycle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub events: Vec<Event>,
    pub venues: Vec<Venue>,
}

impl Snapshot {
    pub fn new(events: Vec<Event>, venues: Vec<Venue>) -> Self {
        Self { events, venues }
    }

    pub fn empty() -> Self { Self::default() }

    /// Events held at `venue_id`, in source order.
    pub fn events_by_venue(&self, venue_id: i64) -> Vec<Event> {
        self.events
            .iter()
            .filter(|event| event.is_at_venue(venue_id))
            .cloned()
            .collect()
    }

    pub fn find_event(&self, event_id: i64) -> Option<&Event> {
        self.events.iter().find(|event| event.id == event_id)
    }

    pub fn find_venue(&self, venue_id: i64) -> Option<&Venue> {
        self.venues.iter().find(|venue| venue.id == venue_id)
    }

    /// Resolves the venue an event is held at. `None` when the event is
    /// unknown or its venue id dangles.
    pub fn venue_for_event(&self, event_id: i64) -> Option<&Venue> {
        let event = self.find_event(event_id)?;
        self.find_venue(event.venue_id)
    }
}
