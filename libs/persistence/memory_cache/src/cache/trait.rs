/// A keyed store of cloneable values.
///
/// Lookups that miss (absent or expired) yield `None`, they are not errors.
/// Each `get` and `set` is atomic with respect to other callers; concurrent
/// writers to the same key simply replace each other.
#[async_trait::async_trait]
pub trait CacheStore: Send + Sync {
    type Value: Clone + Send + Sync + 'static;

    /// Get value from cache, returning None if absent or expired
    async fn get(&self, key: &str) -> Option<Self::Value>;

    /// Set value in cache, replacing any previous entry
    async fn set(&self, key: &str, value: Self::Value);

    /// Remove key from cache
    async fn remove(&self, key: &str) -> bool;

    /// Check if key exists in cache
    async fn exists(&self, key: &str) -> bool { self.get(key).await.is_some() }
}
