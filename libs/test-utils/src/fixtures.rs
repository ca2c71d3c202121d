use events_models::{Event, Snapshot, Venue};
use serde_json::Value;

const EVENT_DATA: &str = include_str!("../fixtures/event-data.json");
const EVENT_SCHEMA: &str = include_str!("../fixtures/event-data.schema.json");

/// Well-formed data document with six events across four venues.
pub fn event_data() -> Value {
    serde_json::from_str(EVENT_DATA).expect("fixture data is valid JSON")
}

/// Schema the fixture data conforms to.
pub fn event_schema() -> Value {
    serde_json::from_str(EVENT_SCHEMA).expect("fixture schema is valid JSON")
}

/// Data document that breaks the fixture schema in two places.
pub fn invalid_event_data() -> Value {
    serde_json::json!({
        "events": [
            { "id": "10033", "name": "Bad id", "startDate": "2024-05-04", "venueId": 919 }
        ],
        "venues": [
            { "id": 919, "name": "The TEG Observatory", "capacity": "150", "location": "Auckland, New Zealand" }
        ]
    })
}

pub fn observatory() -> Venue {
    Venue::builder()
        .id(919)
        .name("The TEG Observatory")
        .capacity(150)
        .location("Auckland, New Zealand")
        .build()
}

/// The fixture document parsed, for comparisons against provider output.
pub fn fixture_snapshot() -> Snapshot {
    let data = event_data();
    let events: Vec<Event> = serde_json::from_value(data["events"].clone())
        .expect("fixture events parse");
    let venues: Vec<Venue> = serde_json::from_value(data["venues"].clone())
        .expect("fixture venues parse");
    Snapshot::new(events, venues)
}

/// A small snapshot unrelated to the fixture document.
pub fn alternate_snapshot() -> Snapshot {
    Snapshot::new(
        vec![Event::builder().id(1).venue_id(2).build()],
        vec![
            Venue::builder()
                .id(2)
                .name("Town Hall")
                .capacity(1500)
                .location("Wellington, New Zealand")
                .build(),
        ],
    )
}
