use axum::{
    Router,
    extract::{Path, State, rejection::PathRejection},
    response::Json,
    routing::get,
};
use common_errors::{AppError, AppResult};
use events_errors::EventError;
use events_models::{Event, Venue};
use events_queries::{GetEventsByVenueQuery, GetVenueByEventQuery};
use events_query_handlers::{
    DataProvider, GetEventsByVenueQueryHandler, GetVenueByEventQueryHandler,
    ListEventsQueryHandler, ListVenuesQueryHandler,
};
use tracing::instrument;

#[derive(Clone)]
pub struct EventServices {
    pub list_events: ListEventsQueryHandler,
    pub get_events_by_venue: GetEventsByVenueQueryHandler,
    pub list_venues: ListVenuesQueryHandler,
    pub get_venue_by_event: GetVenueByEventQueryHandler,
}

impl EventServices {
    pub fn new(provider: DataProvider) -> Self {
        Self {
            list_events: ListEventsQueryHandler::new(provider.clone()),
            get_events_by_venue: GetEventsByVenueQueryHandler::new(
                provider.clone(),
            ),
            list_venues: ListVenuesQueryHandler::new(provider.clone()),
            get_venue_by_event: GetVenueByEventQueryHandler::new(provider),
        }
    }
}

pub struct EventHandlers;

impl EventHandlers {
    pub fn routes() -> Router<EventServices> {
        Router::new()
            .route("/events", get(list_events))
            .route("/events/{eventId}", get(get_venue_by_event))
            .route("/venues", get(list_venues))
            .route("/venues/{venueId}", get(get_events_by_venue))
    }
}

fn not_found(err: EventError) -> AppError {
    let code = match &err {
        EventError::EventNotFound { .. } => "EVENT_NOT_FOUND",
        EventError::VenueNotFound { .. } => "VENUE_NOT_FOUND",
    };
    AppError::not_found(code, &err.to_string())
}

#[utoipa::path(
    get,
    path = "/api/event/events",
    responses(
        (status = 200, description = "List of all events", body = Vec<Event>)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn list_events(
    State(services): State<EventServices>,
) -> Json<Vec<Event>> {
    Json(services.list_events.execute().await)
}

#[utoipa::path(
    get,
    path = "/api/event/venues/{venueId}",
    params(GetEventsByVenueQuery),
    responses(
        (status = 200, description = "Events held at the venue", body = Vec<Event>),
        (status = 400, description = "Venue id is not an integer", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn get_events_by_venue(
    State(services): State<EventServices>,
    path: Result<Path<GetEventsByVenueQuery>, PathRejection>,
) -> AppResult<Json<Vec<Event>>> {
    let Path(query) = path?;
    Ok(Json(services.get_events_by_venue.execute(query).await))
}

#[utoipa::path(
    get,
    path = "/api/event/venues",
    responses(
        (status = 200, description = "List of all venues", body = Vec<Venue>)
    ),
    tag = "venues"
)]
#[instrument(skip_all)]
pub async fn list_venues(
    State(services): State<EventServices>,
) -> Json<Vec<Venue>> {
    Json(services.list_venues.execute().await)
}

#[utoipa::path(
    get,
    path = "/api/event/events/{eventId}",
    params(GetVenueByEventQuery),
    responses(
        (status = 200, description = "Venue the event is held at", body = Venue),
        (status = 400, description = "Event id is not an integer", body = common_errors::ApiErrorResponse),
        (status = 404, description = "Unknown event, or its venue is unknown", body = common_errors::ApiErrorResponse)
    ),
    tag = "venues"
)]
#[instrument(skip_all)]
pub async fn get_venue_by_event(
    State(services): State<EventServices>,
    path: Result<Path<GetVenueByEventQuery>, PathRejection>,
) -> AppResult<Json<Venue>> {
    let Path(query) = path?;
    let venue = services
        .get_venue_by_event
        .execute(query)
        .await
        .map_err(not_found)?;
    Ok(Json(venue))
}
