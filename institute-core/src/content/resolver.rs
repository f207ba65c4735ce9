// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content resolver - the read path
//!
//! Resolution order, short-circuiting on the first usable source:
//! 1. Remote store (non-null object document)
//! 2. Local cache (present, intact, parseable object)
//! 3. Compiled-in section default (verbatim)
//!
//! Sources 1 and 2 are merged onto the default so missing fields are
//! filled. Failures are logged and never reach the caller.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::cache::LocalCache;
use super::config::{ContentConfig, RetryPolicy};
use super::merge::merge_documents;
use super::remote::{call_with_policy, RemoteStore};
use super::types::{ContentSource, Resolved, Section};
use crate::editor::Mount;
use crate::sections::view_or_default;

/// Produces a best-effort document for a section
#[derive(Clone)]
pub struct ContentResolver {
    remote: Option<Arc<dyn RemoteStore>>,
    cache: Arc<dyn LocalCache>,
    timeout: Duration,
    retry: RetryPolicy,
}

impl ContentResolver {
    /// Create a resolver over the given sources
    ///
    /// The remote store is skipped entirely when `remote` is `None` or
    /// remote access is disabled in `config`.
    pub fn new(
        remote: Option<Arc<dyn RemoteStore>>,
        cache: Arc<dyn LocalCache>,
        config: &ContentConfig,
    ) -> Self {
        Self {
            remote: remote.filter(|_| config.remote_enabled),
            cache,
            timeout: config.timeout,
            retry: config.retry,
        }
    }

    /// Resolve a section using the configured remote timeout
    pub async fn resolve(&self, section: Section) -> Value {
        self.resolve_detailed(section, None).await.document
    }

    /// Resolve a section with an explicit remote timeout
    pub async fn resolve_with_timeout(&self, section: Section, timeout: Duration) -> Value {
        self.resolve_detailed(section, Some(timeout)).await.document
    }

    /// Resolve a section and report which source answered
    pub async fn resolve_detailed(&self, section: Section, timeout: Option<Duration>) -> Resolved {
        let default = section.default_document();
        let timeout = timeout.unwrap_or(self.timeout);

        if let Some(remote) = self.from_remote(section, timeout).await {
            return Resolved {
                section,
                document: merge_documents(&default, &remote),
                source: ContentSource::Remote,
            };
        }

        if let Some(cached) = self.from_cache(section) {
            return Resolved {
                section,
                document: merge_documents(&default, &cached),
                source: ContentSource::Cache,
            };
        }

        debug!(section = %section, "Using bundled default");
        Resolved {
            section,
            document: default,
            source: ContentSource::Default,
        }
    }

    /// Resolve a section into a typed view
    ///
    /// Fields that do not fit the view are taken from the section default;
    /// the rest of the resolved document is kept.
    pub async fn resolve_as<T>(&self, section: Section) -> T
    where
        T: DeserializeOwned + Default,
    {
        let document = self.resolve(section).await;
        view_or_default(&document, &section.default_document())
    }

    /// Resolve a section for a view that may be discarded meanwhile
    ///
    /// Returns `None` if `mount` was released before the resolve finished,
    /// so a late result is never applied to a view that no longer exists.
    pub async fn resolve_while_mounted(&self, section: Section, mount: &Mount) -> Option<Value> {
        let document = self.resolve(section).await;
        if mount.is_mounted() {
            Some(document)
        } else {
            debug!(section = %section, "Discarding resolve result after unmount");
            None
        }
    }

    async fn from_remote(&self, section: Section, timeout: Duration) -> Option<Value> {
        let remote = self.remote.as_ref()?;
        let key = section.key();

        match call_with_policy(timeout, self.retry, || remote.get(key)).await {
            Ok(Some(document)) if document.is_object() => Some(document),
            Ok(Some(_)) => {
                warn!(section = %section, "Remote returned a non-object document, ignoring");
                None
            }
            Ok(None) => {
                debug!(section = %section, "No remote document");
                None
            }
            Err(e) => {
                warn!(section = %section, error = %e, "Remote store unavailable");
                None
            }
        }
    }

    fn from_cache(&self, section: Section) -> Option<Value> {
        let raw = match self.cache.get(section.key()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(section = %section, error = %e, "Local cache unreadable");
                return None;
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(document) if document.is_object() => Some(document),
            Ok(_) => {
                warn!(section = %section, "Cached entry is not an object, ignoring");
                None
            }
            Err(e) => {
                warn!(section = %section, error = %e, "Cached entry does not parse");
                None
            }
        }
    }
}
