use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur with cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cache miss: {0}")]
    CacheMiss(String),
}

/// In-process response cache.
///
/// Single tier, TTL-bounded: fetched rows live for the screen's cache
/// lifetime and are re-fetched afterwards. Values are stored JSON-encoded
/// so any serde-typed row set can share one cache.
pub struct FeedCache {
    entries: moka::future::Cache<String, Vec<u8>>,
}

impl FeedCache {
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let entries = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { entries }
    }

    /// Get a cached value; a miss is an error, not a default
    pub async fn get<T>(&self, key: &str) -> Result<T, CacheError>
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(bytes) = self.entries.get(key).await {
            tracing::trace!("Cache hit: {}", key);
            return Ok(serde_json::from_slice(&bytes)?);
        }

        tracing::trace!("Cache miss: {}", key);
        Err(CacheError::CacheMiss(key.to_string()))
    }

    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), CacheError>
    where
        T: Serialize,
    {
        let bytes = serde_json::to_vec(value)?;
        self.entries.insert(key.to_string(), bytes).await;

        tracing::trace!("Cache set: {}", key);
        Ok(())
    }

    pub async fn invalidate(&self, key: &str) {
        self.entries.invalidate(key).await;
    }

    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Candidate tutors fetched for a user's discovery session
    pub fn tutors(user_id: &str) -> String {
        format!("tutors:{}", user_id)
    }

    /// A user's conversation list
    pub fn conversations(user_id: &str) -> String {
        format!("conversations:{}", user_id)
    }

    /// Messages of one conversation
    pub fn messages(conversation_id: &str) -> String {
        format!("messages:{}", conversation_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cache_set_get_invalidate() {
        let cache = FeedCache::new(100, 60);

        let key = CacheKey::tutors("user123");
        let value = vec!["a".to_string(), "b".to_string()];

        cache.set(&key, &value).await.unwrap();
        let cached: Vec<String> = cache.get(&key).await.unwrap();
        assert_eq!(cached, value);

        cache.invalidate(&key).await;
        assert!(cache.get::<Vec<String>>(&key).await.is_err());
    }

    #[test]
    fn test_cache_key_builder() {
        assert_eq!(CacheKey::tutors("user123"), "tutors:user123");
        assert_eq!(CacheKey::conversations("user123"), "conversations:user123");
        assert_eq!(CacheKey::messages("conv42"), "messages:conv42");
    }
}
