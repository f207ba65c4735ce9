// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content persister - the write path
//!
//! The local mirror is written first so that an accepted save is always
//! visible to a later resolve, even while the remote store is down.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{info, warn};

use super::cache::LocalCache;
use super::config::{ContentConfig, RetryPolicy};
use super::remote::{call_with_policy, RemoteStore};
use super::types::{SaveOutcome, Section};

/// Writes section documents to the local cache and the remote store
#[derive(Clone)]
pub struct ContentPersister {
    remote: Option<Arc<dyn RemoteStore>>,
    cache: Arc<dyn LocalCache>,
    timeout: Duration,
    retry: RetryPolicy,
}

impl ContentPersister {
    /// Create a persister over the given sinks
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

    /// Persist `document` as the current content of `section`
    pub async fn save(&self, section: Section, document: &Value) -> SaveOutcome {
        if !document.is_object() {
            return SaveOutcome::Failed {
                reason: "document must be a JSON object".to_string(),
            };
        }

        let serialized = match serde_json::to_string(document) {
            Ok(s) => s,
            Err(e) => {
                return SaveOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        if let Err(e) = self.cache.set(section.key(), &serialized) {
            warn!(section = %section, error = %e, "Local cache write failed, save aborted");
            return SaveOutcome::Failed {
                reason: e.to_string(),
            };
        }

        let Some(remote) = self.remote.as_ref() else {
            info!(section = %section, "Remote store disabled, saved locally");
            return SaveOutcome::SavedLocallyOnly {
                reason: "remote store disabled".to_string(),
            };
        };

        let key = section.key();
        match call_with_policy(self.timeout, self.retry, || remote.upsert(key, document)).await {
            Ok(()) => {
                info!(section = %section, "Saved to remote store");
                SaveOutcome::Saved
            }
            Err(e) => {
                warn!(section = %section, error = %e, "Remote upsert failed, saved locally");
                SaveOutcome::SavedLocallyOnly {
                    reason: e.to_string(),
                }
            }
        }
    }
}
