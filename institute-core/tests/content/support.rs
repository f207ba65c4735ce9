//! Shared fixtures for content tests

use std::sync::Arc;
use std::time::Duration;

use institute_core::content::{
    ContentConfig, ContentManager, LocalCache, MemoryCache, MemoryRemoteStore, RemoteStore,
};

/// Remote store, cache and a manager wired over both
pub struct Fixture {
    pub remote: Arc<MemoryRemoteStore>,
    pub cache: Arc<MemoryCache>,
    pub manager: ContentManager,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_remote(MemoryRemoteStore::new())
    }

    pub fn with_remote(remote: MemoryRemoteStore) -> Self {
        Self::with_config(remote, ContentConfig::default().with_timeout(Duration::from_secs(1)))
    }

    pub fn with_config(remote: MemoryRemoteStore, config: ContentConfig) -> Self {
        let remote = Arc::new(remote);
        let cache = Arc::new(MemoryCache::new());
        let remote_handle: Arc<dyn RemoteStore> = remote.clone();
        let cache_handle: Arc<dyn LocalCache> = cache.clone();
        let manager = ContentManager::new(config, Some(remote_handle), cache_handle);
        Self {
            remote,
            cache,
            manager,
        }
    }

    /// Remote down and cache empty
    pub fn offline() -> Self {
        let fixture = Self::new();
        fixture.remote.set_available(false);
        fixture
    }
}
