pub mod events;
pub mod snapshot;
pub mod venues;

pub use events::Event;
pub use snapshot::Snapshot;
pub use venues::Venue;
