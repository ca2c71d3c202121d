use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Path)]
pub struct GetEventsByVenueQuery {
    /// Venue whose events are listed
    pub venue_id: i64,
}

#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Path)]
pub struct GetVenueByEventQuery {
    /// Event whose venue is resolved
    pub event_id: i64,
}
