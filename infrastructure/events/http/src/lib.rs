pub mod handlers;

use axum::Router;
pub use handlers::*;

/// All event routes mounted under `/api/event`.
pub fn event_routes(services: EventServices) -> Router {
    Router::new().nest(
        "/api/event",
        EventHandlers::routes().with_state(services),
    )
}
