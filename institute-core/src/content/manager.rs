//! Content Manager - entry point for the content system
//!
//! Built once at application start from a config, a remote store handle and
//! a local cache handle. Resolvers and persisters handed out by the manager
//! share those handles.

use std::sync::Arc;

use thiserror::Error;

use super::cache::{CacheError, FileCache, LocalCache};
use super::config::ContentConfig;
use super::persister::ContentPersister;
#[cfg(feature = "remote-http")]
use super::remote::HttpRemoteStore;
use super::remote::{RemoteError, RemoteStore};
use super::resolver::ContentResolver;
use super::types::{Resolved, SaveOutcome, Section, UnknownSection};
use crate::error::InstituteResult;
use crate::validation::ValidationError;

/// Owns the content sources and hands out read and write paths
#[derive(Clone)]
pub struct ContentManager {
    config: ContentConfig,
    remote: Option<Arc<dyn RemoteStore>>,
    cache: Arc<dyn LocalCache>,
}

impl ContentManager {
    /// Create a manager over explicitly provided sources
    pub fn new(
        config: ContentConfig,
        remote: Option<Arc<dyn RemoteStore>>,
        cache: Arc<dyn LocalCache>,
    ) -> Self {
        Self {
            config,
            remote,
            cache,
        }
    }

    /// Create a manager with a file cache under `config.storage_path`
    /// and the HTTP remote store when remote access is enabled
    pub fn from_config(config: ContentConfig) -> Result<Self, ContentError> {
        let cache: Arc<dyn LocalCache> = Arc::new(FileCache::new(&config.storage_path)?);
        let remote = Self::default_remote(&config)?;
        Ok(Self::new(config, remote, cache))
    }

    #[cfg(feature = "remote-http")]
    fn default_remote(config: &ContentConfig) -> Result<Option<Arc<dyn RemoteStore>>, ContentError> {
        if !config.remote_enabled {
            return Ok(None);
        }
        let store: Arc<dyn RemoteStore> = Arc::new(HttpRemoteStore::new(config)?);
        Ok(Some(store))
    }

    #[cfg(not(feature = "remote-http"))]
    fn default_remote(_config: &ContentConfig) -> Result<Option<Arc<dyn RemoteStore>>, ContentError> {
        Ok(None)
    }

    /// Read path sharing this manager's sources
    pub fn resolver(&self) -> ContentResolver {
        ContentResolver::new(self.remote.clone(), self.cache.clone(), &self.config)
    }

    /// Write path sharing this manager's sources
    pub fn persister(&self) -> ContentPersister {
        ContentPersister::new(self.remote.clone(), self.cache.clone(), &self.config)
    }

    /// Resolve every known section, in page order
    pub async fn resolve_all(&self) -> Vec<Resolved> {
        let resolver = self.resolver();
        let mut resolved = Vec::with_capacity(Section::ALL.len());
        for section in Section::ALL {
            resolved.push(resolver.resolve_detailed(section, None).await);
        }
        resolved
    }

    /// Drop the local mirror of a section
    pub fn clear_cached(&self, section: Section) -> Result<(), ContentError> {
        self.cache.remove(section.key())?;
        Ok(())
    }

    /// Shortcut for `persister().save(..)`
    pub async fn save(&self, section: Section, document: &serde_json::Value) -> SaveOutcome {
        self.persister().save(section, document).await
    }

    /// Parse a JSON document and save it
    ///
    /// Anything but a JSON object is rejected before the cache is touched.
    pub async fn import(&self, section: Section, json: &str) -> InstituteResult<SaveOutcome> {
        let document: serde_json::Value = serde_json::from_str(json)?;
        if !document.is_object() {
            return Err(ValidationError::MalformedDocument(
                "document must be a JSON object".into(),
            )
            .into());
        }
        Ok(self.save(section, &document).await)
    }

    /// Whether a remote store is in use
    pub fn has_remote(&self) -> bool {
        self.config.remote_enabled && self.remote.is_some()
    }

    /// Get access to the local cache
    pub fn cache(&self) -> &Arc<dyn LocalCache> {
        &self.cache
    }

    /// Get the configuration
    pub fn config(&self) -> &ContentConfig {
        &self.config
    }
}

/// Errors from setting up or administering the content system
#[derive(Debug, Error)]
pub enum ContentError {
    /// Cache error
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// Remote store error
    #[error("Remote error: {0}")]
    Remote(#[from] RemoteError),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Section key not recognized
    #[error(transparent)]
    UnknownSection(#[from] UnknownSection),
}
