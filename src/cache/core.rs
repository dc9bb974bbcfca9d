use crate::cache::config::CacheConfig;
use crate::cache::metrics::{CacheMetrics, CacheMetricsSnapshot};
use crate::errors::ExportError;
use crate::types::QueryKey;
use chrono::{DateTime, Utc};
use lru::LruCache;
use parking_lot::{Condvar, Mutex, RwLock};
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

/// Observable state of a cached query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// No entry and no fetch in flight.
    Absent,
    /// A fetch is in flight.
    Pending,
    /// The last fetch succeeded and its data is resident.
    Success,
    /// The last fetch failed; the failure is recorded, not the data.
    Error,
}

enum EntryData<T> {
    Success(Arc<T>),
    Error(String),
}

struct Entry<T> {
    data: EntryData<T>,
    fetched_at: DateTime<Utc>,
}

impl<T> Entry<T> {
    fn is_stale(&self, stale_after: Option<Duration>) -> bool {
        stale_after.is_some_and(|ttl| {
            let elapsed = Utc::now().signed_duration_since(self.fetched_at);
            chrono::Duration::from_std(ttl).is_ok_and(|d| elapsed > d)
        })
    }
}

/// One in-flight fetch; late callers block on it instead of duplicating the
/// backend read.
struct Flight<T> {
    done: Mutex<Option<Result<Arc<T>, String>>>,
    cv: Condvar,
}

/// An explicit query cache: a mapping from query key to the outcome of the
/// last fetch (success or error) plus its timestamp, with single-flight
/// coalescing and explicit invalidation. Staleness is enforced lazily on
/// access; there is no background purge.
pub struct QueryCache<T> {
    store: Arc<RwLock<LruCache<QueryKey, Entry<T>>>>,
    flights: Arc<Mutex<HashMap<QueryKey, Arc<Flight<T>>>>>,
    config: Arc<RwLock<CacheConfig>>, // runtime adjustable
    metrics: Arc<CacheMetrics>,
}

impl<T> Clone for QueryCache<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            flights: self.flights.clone(),
            config: self.config.clone(),
            metrics: self.metrics.clone(),
        }
    }
}

impl<T> QueryCache<T> {
    /// Creates a new cache with a given key capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::new_with_config(CacheConfig { capacity, ..Default::default() })
    }

    /// Creates a new cache with the provided configuration.
    #[must_use]
    pub fn new_with_config(config: CacheConfig) -> Self {
        let cap = NonZeroUsize::new(config.capacity.max(1))
            .unwrap_or_else(|| NonZeroUsize::new(1).expect("NonZeroUsize(1) must exist"));
        Self {
            store: Arc::new(RwLock::new(LruCache::new(cap))),
            flights: Arc::new(Mutex::new(HashMap::new())),
            config: Arc::new(RwLock::new(config)),
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    /// Cached read. Serves the shared entry when fresh, joins an in-flight
    /// fetch for the same key, or runs `fetch` and records the outcome under
    /// `key` with a timestamp.
    ///
    /// # Errors
    /// Propagates the backend failure when the fetch (own or joined) fails;
    /// stale or partial data is never returned in its place.
    pub fn get_or_fetch<F>(&self, key: &str, fetch: F) -> Result<Arc<T>, ExportError>
    where
        F: FnOnce() -> Result<T, ExportError>,
    {
        if let Some(data) = self.get(key) {
            return Ok(data);
        }

        // Join an existing flight or become the one that fetches
        let (flight, leader) = {
            let mut flights = self.flights.lock();
            match flights.get(key) {
                Some(f) => (f.clone(), false),
                None => {
                    let f = Arc::new(Flight { done: Mutex::new(None), cv: Condvar::new() });
                    flights.insert(key.to_string(), f.clone());
                    (f, true)
                }
            }
        };

        if !leader {
            self.metrics.coalesced.fetch_add(1, Ordering::Relaxed);
            let mut done = flight.done.lock();
            while done.is_none() {
                flight.cv.wait(&mut done);
            }
            return match done.as_ref().expect("flight result set before wakeup") {
                Ok(data) => Ok(data.clone()),
                Err(msg) => Err(ExportError::Backend(msg.clone())),
            };
        }

        let outcome = fetch().map(Arc::new);
        let shared: Result<Arc<T>, String> = match &outcome {
            Ok(data) => Ok(data.clone()),
            Err(e) => Err(e.to_string()),
        };

        {
            let mut store = self.store.write();
            let data = match &shared {
                Ok(arc) => EntryData::Success(arc.clone()),
                Err(msg) => EntryData::Error(msg.clone()),
            };
            store.put(key.to_string(), Entry { data, fetched_at: Utc::now() });
        }
        self.metrics.inserts.fetch_add(1, Ordering::Relaxed);
        if shared.is_err() {
            self.metrics.errors.fetch_add(1, Ordering::Relaxed);
        }

        self.flights.lock().remove(key);
        {
            let mut done = flight.done.lock();
            *done = Some(shared);
            flight.cv.notify_all();
        }

        outcome
    }

    /// Fresh successful data for `key`, if resident. Stale entries are
    /// dropped lazily here; error entries count as misses but stay
    /// observable through [`QueryCache::status`] until the next fetch.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Arc<T>> {
        let stale_after = self.config.read().stale_after;
        let mut store = self.store.write();
        if let Some(entry) = store.get(key) {
            if entry.is_stale(stale_after) {
                // Lazy eviction on access
                store.pop(key);
                self.metrics.stale_evictions.fetch_add(1, Ordering::Relaxed);
                self.metrics.misses.fetch_add(1, Ordering::Relaxed);
                None
            } else if let EntryData::Success(data) = &entry.data {
                self.metrics.hits.fetch_add(1, Ordering::Relaxed);
                Some(data.clone())
            } else {
                self.metrics.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        } else {
            self.metrics.misses.fetch_add(1, Ordering::Relaxed);
            None
        }
    }

    /// State of `key` without touching recency or staleness.
    #[must_use]
    pub fn status(&self, key: &str) -> QueryStatus {
        if self.flights.lock().contains_key(key) {
            return QueryStatus::Pending;
        }
        match self.store.read().peek(key) {
            Some(Entry { data: EntryData::Success(_), .. }) => QueryStatus::Success,
            Some(Entry { data: EntryData::Error(_), .. }) => QueryStatus::Error,
            None => QueryStatus::Absent,
        }
    }

    /// Drop the entry for `key`; the next read goes back to the backend.
    /// Returns whether an entry was resident.
    pub fn invalidate(&self, key: &str) -> bool {
        let removed = self.store.write().pop(key).is_some();
        if removed {
            self.metrics.invalidations.fetch_add(1, Ordering::Relaxed);
        }
        removed
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.store.write().clear();
    }

    /// Drop all stale entries now. Returns the number removed.
    pub fn purge_stale_now(&self) -> usize {
        let stale_after = self.config.read().stale_after;
        let mut store = self.store.write();
        let stale_keys: Vec<QueryKey> = store
            .iter()
            .filter(|(_, entry)| entry.is_stale(stale_after))
            .map(|(k, _)| k.clone())
            .collect();
        let count = stale_keys.len();
        for key in stale_keys {
            store.pop(&key);
        }
        if count > 0 {
            self.metrics.stale_evictions.fetch_add(count as u64, Ordering::Relaxed);
        }
        count
    }

    /// Get a snapshot of metrics.
    #[must_use]
    pub fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        self.metrics.snapshot()
    }

    // Runtime config updates

    pub fn set_stale_after(&self, stale_after: Option<Duration>) {
        self.config.write().stale_after = stale_after;
    }

    pub fn set_capacity(&self, capacity: usize) {
        let nz = NonZeroUsize::new(capacity.max(1))
            .unwrap_or_else(|| NonZeroUsize::new(1).expect("NonZeroUsize(1) must exist"));
        self.config.write().capacity = nz.get();
        self.store.write().resize(nz);
    }
}
