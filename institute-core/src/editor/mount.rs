//! View lifetime tracking
//!
//! A `Mount` is held by a view for as long as it is displayed. Async work
//! started on behalf of the view checks it before applying its result.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared "still displayed" flag; clones observe the same state
#[derive(Debug, Clone)]
pub struct Mount {
    mounted: Arc<AtomicBool>,
}

impl Mount {
    /// A freshly mounted view
    pub fn new() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Whether the view is still displayed
    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Mark the view as discarded
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }
}

impl Default for Mount {
    fn default() -> Self {
        Self::new()
    }
}
