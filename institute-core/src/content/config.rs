//! Configuration for section content loading and saving

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the content system
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Local storage path for the cache
    pub storage_path: PathBuf,

    /// Remote content store URL (e.g., "https://example.org/api")
    pub remote_url: String,

    /// API key sent as a bearer token to the remote store
    pub api_key: Option<String>,

    /// Enable/disable the remote store (cache and defaults only when off)
    pub remote_enabled: bool,

    /// Timeout for each remote call
    pub timeout: Duration,

    /// Retry behaviour for remote calls
    pub retry: RetryPolicy,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("."),
            remote_url: "http://localhost:8888/api".to_string(),
            api_key: None,
            remote_enabled: true,
            timeout: Duration::from_secs(10),
            retry: RetryPolicy::none(),
        }
    }
}

impl ContentConfig {
    /// Configure with the given local storage path
    pub fn with_storage_path(storage_path: impl Into<PathBuf>) -> Self {
        Self {
            storage_path: storage_path.into(),
            ..Default::default()
        }
    }

    /// Configure the remote store URL
    pub fn with_remote_url(mut self, url: impl Into<String>) -> Self {
        self.remote_url = url.into();
        self
    }

    /// Configure the remote store API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Configure the per-call remote timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configure bounded retries for remote calls
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Disable the remote store (use cache and bundled content only)
    pub fn without_remote(mut self) -> Self {
        self.remote_enabled = false;
        self
    }
}

/// Bounded retry with exponential backoff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Additional attempts after the first failure
    pub max_retries: u32,
    /// Delay before the first retry; doubled for each further retry
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Single attempt, no retries
    pub const fn none() -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::ZERO,
        }
    }

    /// Retry up to `max_retries` times starting at `base_delay`
    pub const fn exponential(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// Delay before retry number `retry` (1-based)
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 1u32.checked_shl(retry.saturating_sub(1)).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}
