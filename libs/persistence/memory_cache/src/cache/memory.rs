use async_trait::async_trait;
use moka::future::Cache;

use super::r#trait::CacheStore;
use crate::config::MemoryConfig;

/// In-process store with sliding expiration, backed by moka.
#[derive(Clone)]
pub struct Memory<V> {
    memory: Cache<String, V>,
}

impl<V> Memory<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(config: MemoryConfig) -> Self {
        let memory = Cache::builder()
            .max_capacity(config.capacity)
            .time_to_idle(config.tti())
            .build();
        Self { memory }
    }
}

impl<V> Default for Memory<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self { Self::new(MemoryConfig::default()) }
}

#[async_trait]
impl<V> CacheStore for Memory<V>
where
    V: Clone + Send + Sync + 'static,
{
    type Value = V;

    async fn get(&self, key: &str) -> Option<Self::Value> {
        self.memory.get(key).await
    }

    async fn set(&self, key: &str, value: Self::Value) {
        self.memory.insert(key.to_string(), value).await;
    }

    async fn remove(&self, key: &str) -> bool {
        self.memory.remove(key).await.is_some()
    }

    // Does not count as an access, so the idle window is left alone.
    async fn exists(&self, key: &str) -> bool {
        self.memory.contains_key(key)
    }
}
