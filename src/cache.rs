//! A cache for the rendered post list.
//!
//! The list page is recomputed from storage only after a write marked it stale.
//! Every invalidation bumps a generation counter, so a load that raced
//! with a write never overwrites the newer staleness mark.

use tokio::sync::RwLock;
use std::future::Future;
use std::sync::Arc;

struct Slot<T> {
    generation: u64,
    value: Option<Arc<T>>,
}

/// A shared, invalidatable cache holding one value.
pub struct ListCache<T> {
    slot: Arc<RwLock<Slot<T>>>,
}

impl<T> ListCache<T> {
    /// Construct an empty (stale) cache.
    pub fn new() -> Self {
        Self {
            slot: Arc::new(RwLock::new(Slot {
                generation: 0,
                value: None,
            })),
        }
    }

    /// Returns the cached value, or runs `load` and caches its output.
    ///
    /// Errors from `load` are returned as is and nothing is cached.
    pub async fn get_or_load<F, Fut, E>(&self, load: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let generation = {
            let slot = self.slot.read().await;
            if let Some(value) = &slot.value {
                return Ok(value.clone());
            }
            slot.generation
        };
        let value = Arc::new(load().await?);
        let mut slot = self.slot.write().await;
        if slot.generation == generation {
            slot.value = Some(value.clone());
        }
        Ok(value)
    }

    /// Marks the cached value stale; the next read reloads it.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.write().await;
        slot.generation += 1;
        slot.value = None;
    }

    /// Whether the next read goes to storage.
    pub async fn is_stale(&self) -> bool {
        self.slot.read().await.value.is_none()
    }
}

impl<T> Clone for ListCache<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T> Default for ListCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::ListCache;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn loads_once_until_invalidated() -> Result<(), String> {
        let loads = AtomicUsize::new(0);
        let counter = &loads;
        let cache = ListCache::<Vec<i32>>::new();
        assert!(cache.is_stale().await);

        let load = move || async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<_, String>(vec![1, 2])
        };
        assert_eq!(vec![1, 2], *cache.get_or_load(load).await?);
        assert_eq!(vec![1, 2], *cache.get_or_load(load).await?);
        assert_eq!(1, loads.load(Ordering::SeqCst));
        assert!(!cache.is_stale().await);

        cache.invalidate().await;
        assert!(cache.is_stale().await);
        assert_eq!(vec![1, 2], *cache.get_or_load(load).await?);
        assert_eq!(2, loads.load(Ordering::SeqCst));
        Ok(())
    }

    #[tokio::test]
    async fn failed_load_is_not_cached() {
        let cache = ListCache::<Vec<i32>>::new();
        let result = cache
            .get_or_load(|| async { Err::<Vec<i32>, _>("connection refused") })
            .await;
        assert_eq!(Err("connection refused"), result.map(|value| value.len()));
        assert!(cache.is_stale().await);
    }

    #[tokio::test]
    async fn write_during_load_keeps_cache_stale() -> Result<(), String> {
        let cache = ListCache::<Vec<i32>>::new();
        let shared = cache.clone();
        let value = cache
            .get_or_load(|| async move {
                // a write lands while the old rows are being read
                shared.invalidate().await;
                Ok::<_, String>(vec![1])
            })
            .await?;
        assert_eq!(vec![1], *value);
        assert!(cache.is_stale().await);
        Ok(())
    }
}
