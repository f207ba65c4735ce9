//! Remote content store
//!
//! The remote store is the authoritative home of section documents. Only
//! point lookups and upserts by section key are needed:
//! - `HttpRemoteStore` talks to a JSON-over-HTTP document endpoint
//! - `MemoryRemoteStore` keeps documents in-process (tests, offline demos)
//!
//! Remote calls are bounded by a timeout and an optional retry policy.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::config::RetryPolicy;

#[cfg(feature = "remote-http")]
use super::config::ContentConfig;
#[cfg(feature = "remote-http")]
use reqwest::{Client, RequestBuilder, StatusCode};

/// Keyed document store holding the authoritative section content
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetch the document stored under `key`, `None` when no row exists
    async fn get(&self, key: &str) -> Result<Option<Value>, RemoteError>;

    /// Insert or replace the document stored under `key`
    async fn upsert(&self, key: &str, document: &Value) -> Result<(), RemoteError>;
}

/// Fetches and stores documents over HTTP
///
/// `GET {base}/{key}` returns the document (404 means no document);
/// `POST {base}/{key}` with a JSON body upserts it.
#[cfg(feature = "remote-http")]
pub struct HttpRemoteStore {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[cfg(feature = "remote-http")]
impl HttpRemoteStore {
    /// Create a new HTTP store from config
    ///
    /// The client sets no overall timeout; each call is bounded by the
    /// caller's `call_with_policy` deadline.
    pub fn new(config: &ContentConfig) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .user_agent(format!("institute/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.remote_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }
}

#[cfg(feature = "remote-http")]
#[async_trait]
impl RemoteStore for HttpRemoteStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, RemoteError> {
        let response = self.authorize(self.client.get(self.url(key))).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        check_status(status)?;

        let body = response.bytes().await?;
        if body.is_empty() {
            return Ok(None);
        }

        let document: Value = serde_json::from_slice(&body)?;
        Ok((!document.is_null()).then_some(document))
    }

    async fn upsert(&self, key: &str, document: &Value) -> Result<(), RemoteError> {
        let response = self
            .authorize(self.client.post(self.url(key)).json(document))
            .send()
            .await?;
        check_status(response.status())?;

        // Some endpoints acknowledge with {"success": bool, "message": ...}
        let body = response.bytes().await?;
        if let Ok(ack) = serde_json::from_slice::<Value>(&body) {
            if ack.get("success").and_then(Value::as_bool) == Some(false) {
                let message = ack
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("upsert not acknowledged");
                return Err(RemoteError::Rejected(message.to_string()));
            }
        }

        Ok(())
    }
}

#[cfg(feature = "remote-http")]
fn check_status(status: StatusCode) -> Result<(), RemoteError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(RemoteError::Rejected(format!("permission denied ({})", status)));
    }
    if !status.is_success() {
        return Err(RemoteError::Http(status.as_u16()));
    }
    Ok(())
}

/// In-process document store
///
/// Can be switched offline to simulate an outage, and can delay every
/// call to exercise timeouts and overlapping saves.
#[derive(Default)]
pub struct MemoryRemoteStore {
    documents: Mutex<HashMap<String, Value>>,
    offline: AtomicBool,
    latency_ms: AtomicUsize,
    upserts: AtomicUsize,
}

impl MemoryRemoteStore {
    /// Create an empty, available store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document
    pub fn with_document(self, key: &str, document: Value) -> Self {
        if let Ok(mut documents) = self.documents.lock() {
            documents.insert(key.to_string(), document);
        }
        self
    }

    /// Switch the store between available and offline
    pub fn set_available(&self, available: bool) {
        self.offline.store(!available, Ordering::SeqCst);
    }

    /// Delay every call by `latency`
    pub fn set_latency(&self, latency: Duration) {
        self.latency_ms
            .store(latency.as_millis() as usize, Ordering::SeqCst);
    }

    /// Number of successful upserts so far
    pub fn upsert_count(&self) -> usize {
        self.upserts.load(Ordering::SeqCst)
    }

    /// Current document stored under `key`
    pub fn document(&self, key: &str) -> Option<Value> {
        self.documents.lock().ok()?.get(key).cloned()
    }

    async fn simulate_call(&self) -> Result<(), RemoteError> {
        let latency = self.latency_ms.load(Ordering::SeqCst);
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency as u64)).await;
        }
        if self.offline.load(Ordering::SeqCst) {
            return Err(RemoteError::Unavailable("remote store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl RemoteStore for MemoryRemoteStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, RemoteError> {
        self.simulate_call().await?;
        let documents = self.documents.lock().map_err(|_| RemoteError::Poisoned)?;
        Ok(documents.get(key).cloned())
    }

    async fn upsert(&self, key: &str, document: &Value) -> Result<(), RemoteError> {
        self.simulate_call().await?;
        let mut documents = self.documents.lock().map_err(|_| RemoteError::Poisoned)?;
        documents.insert(key.to_string(), document.clone());
        self.upserts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Run a remote operation under a timeout, retrying transient failures
pub(crate) async fn call_with_policy<T, F, Fut>(
    timeout: Duration,
    retry: RetryPolicy,
    mut op: F,
) -> Result<T, RemoteError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, RemoteError>>,
{
    let mut retries = 0;
    loop {
        let result = match tokio::time::timeout(timeout, op()).await {
            Ok(result) => result,
            Err(_) => Err(RemoteError::Timeout(timeout)),
        };

        match result {
            Err(e) if retries < retry.max_retries && e.is_transient() => {
                retries += 1;
                let delay = retry.delay_for(retries);
                debug!(retries, ?delay, error = %e, "Retrying remote call");
                tokio::time::sleep(delay).await;
            }
            other => return other,
        }
    }
}

/// Errors that can occur talking to the remote store
#[derive(Debug, Error)]
pub enum RemoteError {
    /// HTTP error with status code
    #[error("HTTP error: {0}")]
    Http(u16),

    /// Network/request error
    #[cfg(feature = "remote-http")]
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The store refused the request (permissions, validation)
    #[error("Rejected by remote store: {0}")]
    Rejected(String),

    /// No answer within the configured timeout
    #[error("Remote call timed out after {0:?}")]
    Timeout(Duration),

    /// The store cannot be reached
    #[error("Remote store unavailable: {0}")]
    Unavailable(String),

    /// The returned body is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A previous holder of the store lock panicked
    #[error("Remote store lock poisoned")]
    Poisoned,
}

impl RemoteError {
    /// Whether retrying the same call might succeed
    pub fn is_transient(&self) -> bool {
        match self {
            RemoteError::Timeout(_) | RemoteError::Unavailable(_) => true,
            RemoteError::Http(status) => *status >= 500,
            #[cfg(feature = "remote-http")]
            RemoteError::Network(_) => true,
            RemoteError::Rejected(_) | RemoteError::Json(_) | RemoteError::Poisoned => false,
        }
    }
}
