use std::sync::Arc;

use events_errors::{Document, SourceError};
use events_models::Snapshot;
use events_source::{DocumentFetcher, parse_snapshot, validate};
use memory_cache::CacheStore;
use tracing::{info, instrument, warn};

use crate::retry::RetryPolicy;

pub const EVENT_DATA_CACHE_KEY: &str = "EventData";

pub type SnapshotStore = Arc<dyn CacheStore<Value = Arc<Snapshot>>>;

/// How a `get_data` call was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOutcome {
    Fresh,
    Cached,
    Empty,
}

#[derive(Debug, Clone)]
pub struct Resolved {
    pub snapshot: Arc<Snapshot>,
    pub outcome: DataOutcome,
}

/// Produces the current events and venues.
///
/// Every call runs its own fetch, validate, parse cycle under the retry
/// policy. A successful cycle replaces the cached snapshot; when the budget
/// is spent the last cached snapshot is served, or an empty one if nothing
/// has been cached yet. Concurrent calls are not coalesced and the last
/// successful writer wins the cache.
#[derive(Clone)]
pub struct DataProvider {
    fetcher: Arc<dyn DocumentFetcher>,
    cache: SnapshotStore,
    policy: RetryPolicy,
}

impl DataProvider {
    pub fn new(
        fetcher: Arc<dyn DocumentFetcher>, cache: SnapshotStore,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            fetcher,
            cache,
            policy,
        }
    }

    /// Never fails; see [`DataProvider::resolve`] for the outcome.
    pub async fn get_data(&self) -> Arc<Snapshot> {
        self.resolve().await.snapshot
    }

    #[instrument(skip(self))]
    pub async fn resolve(&self) -> Resolved {
        match self.policy.execute(|| self.fetch_cycle()).await {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                self.cache
                    .set(EVENT_DATA_CACHE_KEY, snapshot.clone())
                    .await;
                info!(
                    events = snapshot.events.len(),
                    venues = snapshot.venues.len(),
                    "Fetched fresh event data"
                );
                Resolved {
                    snapshot,
                    outcome: DataOutcome::Fresh,
                }
            }
            Err(err) => self.fallback(&err).await,
        }
    }

    async fn fallback(&self, err: &SourceError) -> Resolved {
        if let Some(snapshot) = self.cache.get(EVENT_DATA_CACHE_KEY).await {
            warn!(
                error = %err,
                attempts = self.policy.max_attempts(),
                "Serving cached event data"
            );
            return Resolved {
                snapshot,
                outcome: DataOutcome::Cached,
            };
        }

        warn!(
            error = %err,
            attempts = self.policy.max_attempts(),
            "No cached event data, serving empty collections"
        );
        Resolved {
            snapshot: Arc::new(Snapshot::empty()),
            outcome: DataOutcome::Empty,
        }
    }

    async fn fetch_cycle(&self) -> Result<Snapshot, SourceError> {
        let data = self.fetcher.fetch(Document::Data).await?;
        let schema = self.fetcher.fetch(Document::Schema).await?;

        let data = data.ok_or(SourceError::Unavailable {
            document: Document::Data,
        })?;
        let schema = schema.ok_or(SourceError::Unavailable {
            document: Document::Schema,
        })?;

        validate(&data, &schema)?;
        parse_snapshot(&data)
    }
}
