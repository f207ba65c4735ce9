//! Institute Core Library
//!
//! Section content for the institute website and its editing dashboard.
//! Every section resolves remote → local cache → compiled-in default, so a
//! page always has something to render even when the remote store is down.

pub mod content;
pub mod editor;
pub mod error;
pub mod sections;
pub mod storage;
pub mod validation;

pub use content::{
    merge_documents, ContentConfig, ContentManager, ContentPersister, ContentResolver,
    ContentSource, FileCache, LocalCache, MemoryCache, MemoryRemoteStore, RemoteError,
    RemoteStore, Resolved, RetryPolicy, SaveOutcome, Section,
};
pub use editor::{Direction, EditorError, EditorSession, Identified, ItemId, ListPolicy, Mount};
pub use error::{InstituteError, InstituteResult};
pub use sections::{render_preview, view_or_default, Icon};
pub use storage::{
    Enquiry, EnquiryQuery, EnquirySort, EnquiryStatus, NewEnquiry, SortOrder, Storage, StorageError,
};
pub use validation::ValidationError;
