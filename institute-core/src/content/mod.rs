// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Section content module
//!
//! Provides the read and write paths for website section content:
//! - Resolver: remote store → local cache → compiled-in default
//! - Persister: local cache mirror first, then remote upsert
//! - Merge: normalizes partial documents against the section default
//!
//! Local cache entries are wrapped in a SHA-256 envelope so a damaged
//! entry is treated as a miss instead of being rendered.

mod cache;
mod config;
mod defaults;
mod integrity;
mod manager;
mod merge;
mod persister;
mod remote;
mod resolver;
mod types;

pub use cache::{CacheError, FileCache, LocalCache, MemoryCache};
pub use config::{ContentConfig, RetryPolicy};
pub use integrity::{compute_checksum, seal, unseal, verify_checksum, IntegrityError};
pub use manager::{ContentError, ContentManager};
pub use merge::merge_documents;
pub use persister::ContentPersister;
#[cfg(feature = "remote-http")]
pub use remote::HttpRemoteStore;
pub use remote::{MemoryRemoteStore, RemoteError, RemoteStore};
pub use resolver::ContentResolver;
pub use types::{ContentSource, ItemListSpec, Resolved, SaveOutcome, Section, UnknownSection};
