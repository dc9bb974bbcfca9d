mod backend;
mod record;

pub use backend::{MemoryBackend, VehicleBackend, records_from_json};
pub use record::{VehicleRecord, roster_table};

use crate::cache::{QueryCache, QueryStatus};
use crate::errors::ExportError;
use std::sync::Arc;

/// Stable cache key for the active-roster read.
pub const ACTIVE_VEHICLES_KEY: &str = "viaturas:ativa:prefixo";

/// Cached reader of the active vehicle roster: a backend bound to a query
/// cache under [`ACTIVE_VEHICLES_KEY`].
pub struct VehicleSource<B> {
    backend: B,
    cache: QueryCache<Vec<VehicleRecord>>,
}

impl<B: VehicleBackend> VehicleSource<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend, cache: QueryCache::new(8) }
    }

    #[must_use]
    pub fn with_cache(backend: B, cache: QueryCache<Vec<VehicleRecord>>) -> Self {
        Self { backend, cache }
    }

    /// Fetch the active roster, served from cache when fresh. Concurrent
    /// callers share a single backend read.
    ///
    /// # Errors
    /// Propagates the backend failure; the cache never substitutes stale or
    /// default data for it.
    pub fn fetch_active(&self) -> Result<Arc<Vec<VehicleRecord>>, ExportError> {
        self.cache.get_or_fetch(ACTIVE_VEHICLES_KEY, || {
            log::debug!("roster: backend read, key={ACTIVE_VEHICLES_KEY}");
            self.backend.fetch_active()
        })
    }

    /// Force the next read back to the backend.
    pub fn invalidate(&self) {
        self.cache.invalidate(ACTIVE_VEHICLES_KEY);
    }

    #[must_use]
    pub fn status(&self) -> QueryStatus {
        self.cache.status(ACTIVE_VEHICLES_KEY)
    }

    #[must_use]
    pub fn cache(&self) -> &QueryCache<Vec<VehicleRecord>> {
        &self.cache
    }
}
