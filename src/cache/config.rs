use std::time::Duration;

/// Configuration for the query cache.
#[derive(Clone, Debug)]
pub struct CacheConfig {
    /// Maximum number of query keys kept resident.
    pub capacity: usize,
    /// Age after which a successful entry stops being served and the next
    /// read goes back to the backend. `None` keeps entries until they are
    /// explicitly invalidated.
    pub stale_after: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { capacity: 64, stale_after: Some(Duration::from_secs(300)) }
    }
}
