// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error Types
//!
//! Unified error type for institute operations.

use thiserror::Error;

use crate::content::{CacheError, ContentError, RemoteError, UnknownSection};
use crate::editor::EditorError;
use crate::storage::StorageError;
use crate::validation::ValidationError;

/// Unified error type for institute operations.
#[derive(Error, Debug)]
pub enum InstituteError {
    /// Input validation failed.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Editor operation failed.
    #[error("editor error: {0}")]
    Editor(#[from] EditorError),

    /// Content system setup or administration failed.
    #[error("content error: {0}")]
    Content(#[from] ContentError),

    /// Local cache operation failed.
    #[error("cache error: {0}")]
    Cache(#[from] CacheError),

    /// Remote store operation failed.
    #[error("remote error: {0}")]
    Remote(#[from] RemoteError),

    /// Enquiry storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Section key not recognized.
    #[error("{0}")]
    UnknownSection(#[from] UnknownSection),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for institute operations.
pub type InstituteResult<T> = Result<T, InstituteError>;
