//! Generate-or-reuse with per-key single flight.
//!
//! A lookup that misses takes the key's lock, looks again, and only then
//! generates. Callers that queued behind the winner find its stored record on
//! their second lookup, so a key is generated at most once at a time.

use dashmap::DashMap;
use neethub_ai::GenerationError;
use neethub_core::NeetHubError;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum CacheError {
    #[error(transparent)]
    Store(#[from] NeetHubError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

pub struct ContentCache {
    locks: DashMap<String, Arc<Mutex<()>>>,
    generation_timeout: Duration,
}

/// Removes the key's lock entry once the last holder lets go, including when
/// the request future is dropped mid-flight.
struct KeySlot<'a> {
    locks: &'a DashMap<String, Arc<Mutex<()>>>,
    key: &'a str,
    lock: Option<Arc<Mutex<()>>>,
}

impl<'a> KeySlot<'a> {
    fn acquire(locks: &'a DashMap<String, Arc<Mutex<()>>>, key: &'a str) -> Self {
        let lock = locks
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        Self {
            locks,
            key,
            lock: Some(lock),
        }
    }

    fn handle(&self) -> Arc<Mutex<()>> {
        self.lock
            .clone()
            .unwrap_or_else(|| Arc::new(Mutex::new(())))
    }
}

impl Drop for KeySlot<'_> {
    fn drop(&mut self) {
        self.lock.take();
        self.locks
            .remove_if(self.key, |_, lock| Arc::strong_count(lock) == 1);
    }
}

impl ContentCache {
    pub fn new(generation_timeout: Duration) -> Self {
        Self {
            locks: DashMap::new(),
            generation_timeout,
        }
    }

    /// Keys with a lock currently held or awaited.
    pub fn in_flight(&self) -> usize {
        self.locks.len()
    }

    /// Run `work` while holding the lock for `key`.
    pub async fn with_key_lock<T, W, Fut>(&self, key: &str, work: W) -> T
    where
        W: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let slot = KeySlot::acquire(&self.locks, key);
        let _guard = slot.handle().lock_owned().await;
        work().await
    }

    /// Return the stored value for `key`, generating and persisting it on a
    /// miss. `generate` runs under the key lock and is bounded by the
    /// generation timeout.
    pub async fn get_or_generate<T, L, LFut, G, GFut>(
        &self,
        key: &str,
        lookup: L,
        generate: G,
    ) -> Result<T, CacheError>
    where
        L: Fn() -> LFut,
        LFut: Future<Output = neethub_core::Result<Option<T>>>,
        G: FnOnce() -> GFut,
        GFut: Future<Output = Result<T, CacheError>>,
    {
        if let Some(hit) = lookup().await? {
            debug!(key, "cache hit");
            return Ok(hit);
        }

        self.with_key_lock(key, || self.fill(key, lookup, generate))
            .await
    }

    async fn fill<T, L, LFut, G, GFut>(
        &self,
        key: &str,
        lookup: L,
        generate: G,
    ) -> Result<T, CacheError>
    where
        L: Fn() -> LFut,
        LFut: Future<Output = neethub_core::Result<Option<T>>>,
        G: FnOnce() -> GFut,
        GFut: Future<Output = Result<T, CacheError>>,
    {
        if let Some(hit) = lookup().await? {
            debug!(key, "cache filled while waiting");
            return Ok(hit);
        }

        debug!(key, "cache miss, generating");
        match tokio::time::timeout(self.generation_timeout, generate()).await {
            Ok(result) => result,
            Err(_) => {
                warn!(key, timeout = ?self.generation_timeout, "generation timed out");
                Err(GenerationError::Upstream(format!(
                    "generation timed out after {}s",
                    self.generation_timeout.as_secs()
                ))
                .into())
            }
        }
    }
}
