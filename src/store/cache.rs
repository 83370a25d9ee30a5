use std::collections::HashMap;
use std::future::Future;
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::store::StoreError;

struct CacheEntry {
    stored_at: Instant,
    value: Value,
}

/// In-process read-through cache. Each read-through call carries its own
/// revalidation interval; entries older than the interval are refetched on
/// the next read. Listings tolerate staleness up to the interval, so there is
/// no invalidation API.
#[derive(Default)]
pub struct ReadCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl ReadCache {
    pub fn new() -> Self {
        ReadCache::default()
    }

    pub async fn get_or_fetch<T, F, Fut>(
        &self,
        key: &str,
        revalidate: Duration,
        fetch: F,
    ) -> Result<T, StoreError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, StoreError>>,
    {
        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(key) {
                if entry.stored_at.elapsed() < revalidate {
                    return serde_json::from_value(entry.value.clone()).map_err(StoreError::from);
                }
            }
        }

        let fresh = fetch().await?;
        let value = serde_json::to_value(&fresh)?;
        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            CacheEntry {
                stored_at: Instant::now(),
                value,
            },
        );
        Ok(fresh)
    }
}
