// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Editor session for one section
//!
//! Holds the in-memory document between resolve and save. Edits are
//! applied synchronously; `save` takes `&self` so that a second save can be
//! attempted (and rejected) while the first is still in flight.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use super::items::{self, Direction, ItemId, ListPolicy};
use super::mount::Mount;
use crate::content::{ContentManager, ContentPersister, ContentSource, SaveOutcome, Section};
use crate::sections::view_or_default;
use crate::validation::ValidationError;

/// In-memory editing state for one section
pub struct EditorSession {
    section: Section,
    document: Value,
    source: ContentSource,
    persister: ContentPersister,
    dirty: AtomicBool,
    saving: AtomicBool,
}

impl EditorSession {
    /// Resolve the section and start editing it
    pub async fn open(manager: &ContentManager, section: Section) -> Self {
        let resolved = manager.resolver().resolve_detailed(section, None).await;
        Self::from_document(manager, section, resolved.document, resolved.source)
    }

    /// Like `open`, but `None` if the view was discarded during the resolve
    pub async fn open_while_mounted(
        manager: &ContentManager,
        section: Section,
        mount: &Mount,
    ) -> Option<Self> {
        let resolved = manager.resolver().resolve_detailed(section, None).await;
        if !mount.is_mounted() {
            debug!(section = %section, "View unmounted before resolve finished");
            return None;
        }
        Some(Self::from_document(
            manager,
            section,
            resolved.document,
            resolved.source,
        ))
    }

    fn from_document(
        manager: &ContentManager,
        section: Section,
        document: Value,
        source: ContentSource,
    ) -> Self {
        Self {
            section,
            document,
            source,
            persister: manager.persister(),
            dirty: AtomicBool::new(false),
            saving: AtomicBool::new(false),
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Where the document was loaded from
    pub fn source(&self) -> ContentSource {
        self.source
    }

    /// True when there are edits not yet saved
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// True while a save is in flight
    pub fn is_saving(&self) -> bool {
        self.saving.load(Ordering::SeqCst)
    }

    /// Deserialize the current document into a typed view
    ///
    /// Fields that do not fit come from the section default.
    pub fn view<T: DeserializeOwned + Default>(&self) -> T {
        view_or_default(&self.document, &self.section.default_document())
    }

    /// Read a field by dotted path (`"address.title"`)
    pub fn field(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.document, |current, segment| current.get(segment))
    }

    /// Set a field by dotted path, creating intermediate objects as needed
    pub fn set_field(&mut self, path: &str, value: impl Into<Value>) -> Result<(), EditorError> {
        let segments: Vec<&str> = path.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(ValidationError::MalformedDocument(format!("invalid field path '{}'", path)).into());
        }

        let (last, parents) = segments
            .split_last()
            .ok_or_else(|| ValidationError::MalformedDocument("empty field path".into()))?;

        let mut current = self.object_mut()?;
        for segment in parents {
            current = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()))
                .as_object_mut()
                .ok_or_else(|| {
                    ValidationError::MalformedDocument(format!("'{}' is not an object", segment))
                })?;
        }
        current.insert(last.to_string(), value.into());

        self.mark_dirty();
        Ok(())
    }

    /// Items of the named list (or the section's primary list)
    pub fn items(&self, list: Option<&str>) -> Result<&[Value], EditorError> {
        let (field, _) = self.list_spec(list)?;
        match self.document.get(field) {
            None => Ok(&[]),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(_) => Err(not_a_list(field).into()),
        }
    }

    /// Append an item with a fresh id; returns the id
    pub fn add_item(&mut self, list: Option<&str>, item: Value) -> Result<ItemId, EditorError> {
        require_object(&item)?;
        let (field, _) = self.list_spec(list)?;
        let id = items::add_item(self.list_mut(field)?, item)?;
        self.mark_dirty();
        Ok(id)
    }

    /// Replace the item with the given id
    pub fn update_item(&mut self, list: Option<&str>, id: &ItemId, item: Value) -> Result<(), EditorError> {
        require_object(&item)?;
        let (field, _) = self.list_spec(list)?;
        items::edit_item(self.list_mut(field)?, id, item)?;
        self.mark_dirty();
        Ok(())
    }

    /// Remove the item with the given id, honouring the list minimum
    pub fn remove_item(&mut self, list: Option<&str>, id: &ItemId) -> Result<Value, EditorError> {
        let (field, policy) = self.list_spec(list)?;
        let removed = items::delete_item(self.list_mut(field)?, id, &policy, field)?;
        self.mark_dirty();
        Ok(removed)
    }

    /// Move the item at `position` one step; returns its new position
    pub fn move_item(
        &mut self,
        list: Option<&str>,
        position: usize,
        direction: Direction,
    ) -> Result<usize, EditorError> {
        let (field, policy) = self.list_spec(list)?;
        let target = items::move_item(self.list_mut(field)?, position, direction, &policy)?;
        self.mark_dirty();
        Ok(target)
    }

    /// Check the document can be saved: an object whose item lists hold
    /// objects with unique ids
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.document.is_object() {
            return Err(ValidationError::MalformedDocument(
                "document must be a JSON object".into(),
            ));
        }
        for spec in self.section.item_lists() {
            match self.document.get(spec.field) {
                None => {}
                Some(Value::Array(list)) => {
                    if list.iter().any(|item| !item.is_object()) {
                        return Err(ValidationError::MalformedDocument(format!(
                            "{} must contain objects",
                            spec.field
                        )));
                    }
                    items::validate_ids(list)?;
                }
                Some(_) => return Err(not_a_list(spec.field)),
            }
        }
        Ok(())
    }

    /// Validate and persist the current document
    ///
    /// Rejected with `SaveInProgress` while another save on this session has
    /// not finished. The dirty flag is cleared once the document is
    /// persisted (remotely or locally).
    pub async fn save(&self) -> Result<SaveOutcome, EditorError> {
        self.validate()?;

        let _guard = SaveGuard::acquire(&self.saving).ok_or(EditorError::SaveInProgress)?;
        let outcome = self.persister.save(self.section, &self.document).await;
        if outcome.is_persisted() {
            self.dirty.store(false, Ordering::SeqCst);
        }
        Ok(outcome)
    }

    fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    fn list_spec(&self, list: Option<&str>) -> Result<(&'static str, ListPolicy), ValidationError> {
        let spec = match list {
            Some(field) => self.section.item_list(field),
            None => self.section.primary_list(),
        };
        spec.map(|spec| (spec.field, spec.policy))
            .ok_or_else(|| ValidationError::UnknownList {
                section: self.section.key().to_string(),
                field: list.unwrap_or("<default>").to_string(),
            })
    }

    fn object_mut(&mut self) -> Result<&mut Map<String, Value>, ValidationError> {
        self.document.as_object_mut().ok_or_else(|| {
            ValidationError::MalformedDocument("document must be a JSON object".into())
        })
    }

    fn list_mut(&mut self, field: &'static str) -> Result<&mut Vec<Value>, ValidationError> {
        self.object_mut()?
            .entry(field)
            .or_insert_with(|| Value::Array(Vec::new()))
            .as_array_mut()
            .ok_or_else(|| not_a_list(field))
    }
}

/// Holds the save flag for the duration of one save, released on drop
struct SaveGuard<'a>(&'a AtomicBool);

impl<'a> SaveGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for SaveGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

fn require_object(item: &Value) -> Result<(), ValidationError> {
    if item.is_object() {
        Ok(())
    } else {
        Err(ValidationError::MalformedDocument(
            "items must be JSON objects".into(),
        ))
    }
}

fn not_a_list(field: &str) -> ValidationError {
    ValidationError::MalformedDocument(format!("{} is not a list", field))
}

/// Editor errors
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("A save is already in progress")]
    SaveInProgress,
}
