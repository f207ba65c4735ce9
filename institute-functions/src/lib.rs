//! Institute Functions
//!
//! HTTP service standing in for the site's serverless functions: per-section
//! JSON endpoints and enquiry intake.

pub mod config;
pub mod http;

use anyhow::Context;
use institute_core::Storage;

use config::FunctionsConfig;

/// Open the enquiry store described by `config`
pub fn open_storage(config: &FunctionsConfig) -> anyhow::Result<Storage> {
    if config.ephemeral {
        return Storage::in_memory().context("Failed to create in-memory enquiry store");
    }

    std::fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("Failed to create {}", config.data_dir.display()))?;
    let path = config.database_path();
    Storage::open(&path).with_context(|| format!("Failed to open {}", path.display()))
}
