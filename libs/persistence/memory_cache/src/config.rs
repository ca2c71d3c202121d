use std::time::Duration;

use tracing::warn;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct MemoryConfig {
    #[serde(default = "default_memory_capacity")]
    pub capacity: u64,
    /// Sliding expiration window. Every read or write of an entry restarts
    /// the window for that entry.
    #[serde(default = "default_memory_tti_millis")]
    pub tti_millis: u64,
}

fn default_memory_capacity() -> u64 { 16 }
fn default_memory_tti_millis() -> u64 { 10 * 60 * 1000 }

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_memory_capacity(),
            tti_millis: default_memory_tti_millis(),
        }
    }
}

impl MemoryConfig {
    /// Reads `CACHE_CAPACITY` and `CACHE_TTI_SECS`, keeping defaults for
    /// anything unset or unparsable.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("CACHE_CAPACITY") {
            match raw.parse() {
                Ok(capacity) => config.capacity = capacity,
                Err(_) => {
                    warn!(value = %raw, "Ignoring invalid CACHE_CAPACITY")
                }
            }
        }

        if let Ok(raw) = std::env::var("CACHE_TTI_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) => config.tti_millis = secs.saturating_mul(1000),
                Err(_) => {
                    warn!(value = %raw, "Ignoring invalid CACHE_TTI_SECS")
                }
            }
        }

        config
    }

    pub fn with_time_to_idle(mut self, tti: Duration) -> Self {
        self.tti_millis =
            u64::try_from(tti.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn tti(&self) -> Duration { Duration::from_millis(self.tti_millis) }
}
