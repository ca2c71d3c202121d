use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use typed_builder::TypedBuilder;
use utoipa::ToSchema;

/// A single event from the remote source document.
///
/// Only `id` and `venueId` are interpreted. Every other field in the source
/// (name, dates, ...) is kept in `details` and serialized back out flat, so
/// API clients see the record exactly as the source published it.
#[derive(
    Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder, ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub venue_id: i64,
    #[serde(flatten)]
    #[builder(default)]
    #[schema(value_type = Object)]
    pub details: Map<String, Value>,
}

impl Event {
    pub fn name(&self) -> Option<&str> {
        self.details.get("name").and_then(Value::as_str)
    }

    pub fn is_at_venue(&self, venue_id: i64) -> bool {
        self.venue_id == venue_id
    }
}
