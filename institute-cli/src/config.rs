//! CLI Configuration

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use institute_core::{ContentConfig, ContentManager, RetryPolicy, Storage};

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Data directory for the content cache and the enquiry database.
    pub data_dir: PathBuf,
    /// Remote content store URL.
    pub remote_url: String,
    /// Bearer token for the remote store.
    pub api_key: Option<String>,
    /// Skip the remote store entirely.
    pub offline: bool,
    /// Per-call remote timeout.
    pub timeout_secs: u64,
    /// Retries for transient remote failures.
    pub retries: u32,
}

impl CliConfig {
    /// Returns the enquiry database path.
    pub fn enquiries_path(&self) -> PathBuf {
        self.data_dir.join("enquiries.db")
    }

    /// Builds the content configuration.
    pub fn content_config(&self) -> ContentConfig {
        let mut config = ContentConfig::with_storage_path(&self.data_dir)
            .with_remote_url(&self.remote_url)
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_retry(RetryPolicy::exponential(
                self.retries,
                Duration::from_millis(250),
            ));
        if let Some(key) = &self.api_key {
            config = config.with_api_key(key);
        }
        if self.offline {
            config = config.without_remote();
        }
        config
    }

    /// Builds the content manager over the file cache and, unless offline,
    /// the HTTP remote store.
    pub fn content_manager(&self) -> Result<ContentManager> {
        std::fs::create_dir_all(&self.data_dir)
            .with_context(|| format!("Failed to create {}", self.data_dir.display()))?;

        ContentManager::from_config(self.content_config())
            .context("Failed to set up content sources")
    }

    /// Opens the enquiry database, creating it if needed.
    pub fn open_storage(&self) -> Result<Storage> {
        std::fs::create_dir_all(&self.data_dir)
            .with_context(|| format!("Failed to create {}", self.data_dir.display()))?;
        let path = self.enquiries_path();
        Storage::open(&path).with_context(|| format!("Failed to open {}", path.display()))
    }
}
