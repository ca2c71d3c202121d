use events_models::{Event, Snapshot, Venue};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;

use crate::SourceError;

/// Builds a snapshot from a validated data document.
pub fn parse_snapshot(document: &Value) -> Result<Snapshot, SourceError> {
    let events = parse_section::<Event>(document, "events")?;
    let venues = parse_section::<Venue>(document, "venues")?;
    Ok(Snapshot::new(events, venues))
}

fn parse_section<T>(
    document: &Value, section: &'static str,
) -> Result<Vec<T>, SourceError>
where
    T: DeserializeOwned,
{
    let raw = document
        .get(section)
        .ok_or(SourceError::MissingSection(section))?;
    Vec::<T>::deserialize(raw)
        .map_err(|source| SourceError::Parse { section, source })
}
