// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sub-item list editing
//!
//! Items are addressed by `id`, never by position. The only positional
//! operation is `move_item`, which swaps neighbours.
//!
//! Ids are either numbers (FAQ entries, credentials) or slugs such as
//! `"facial-aesthetic"` for courses. Newly added items always get a
//! numeric id one above the highest numeric id already present.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::ValidationError;

/// Identifier of one list item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Num(u64),
    Str(String),
}

impl ItemId {
    /// The numeric value, if this is a numeric id
    pub fn as_num(&self) -> Option<u64> {
        match self {
            ItemId::Num(n) => Some(*n),
            ItemId::Str(_) => None,
        }
    }
}

impl Default for ItemId {
    fn default() -> Self {
        ItemId::Num(0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Num(n) => write!(f, "{}", n),
            ItemId::Str(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        ItemId::Num(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Str(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId::Str(s)
    }
}

impl From<ItemId> for Value {
    fn from(id: ItemId) -> Self {
        match id {
            ItemId::Num(n) => Value::from(n),
            ItemId::Str(s) => Value::String(s),
        }
    }
}

/// Digits parse as a numeric id, anything else is a slug
impl FromStr for ItemId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::EmptyValue { field: "id" });
        }
        Ok(s.parse::<u64>().map_or_else(|_| ItemId::from(s), ItemId::Num))
    }
}

/// An item carrying an `id`
pub trait Identified {
    /// The item's id, `None` if it has none
    fn id(&self) -> Option<ItemId>;

    /// Overwrite the item's id
    fn set_id(&mut self, id: ItemId);
}

impl Identified for Value {
    fn id(&self) -> Option<ItemId> {
        match self.get("id")? {
            Value::Number(n) => n.as_u64().map(ItemId::Num),
            Value::String(s) if !s.trim().is_empty() => Some(ItemId::Str(s.clone())),
            _ => None,
        }
    }

    fn set_id(&mut self, id: ItemId) {
        if let Some(object) = self.as_object_mut() {
            object.insert("id".to_string(), id.into());
        }
    }
}

/// Editing rules for one item list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListPolicy {
    /// Deletes that would leave fewer items are rejected
    pub min_items: usize,
    /// Ids are renumbered 1..n by position after a move
    pub ordered: bool,
}

impl ListPolicy {
    /// No minimum, ids stable across moves
    pub const fn unrestricted() -> Self {
        Self {
            min_items: 0,
            ordered: false,
        }
    }

    /// Keep at least `min_items` items
    pub const fn at_least(min_items: usize) -> Self {
        Self {
            min_items,
            ordered: false,
        }
    }

    /// Display order follows ids
    pub const fn ordered() -> Self {
        Self {
            min_items: 0,
            ordered: true,
        }
    }
}

/// Direction of a single-step move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the start of the list
    Up,
    /// Towards the end of the list
    Down,
}

/// Id for the next added item: highest numeric id plus one (1 when none)
///
/// Slug ids are ignored.
pub fn next_id<T: Identified>(items: &[T]) -> Result<u64, ValidationError> {
    items
        .iter()
        .filter_map(|item| item.id().and_then(|id| id.as_num()))
        .max()
        .map_or(Some(1), |max| max.checked_add(1))
        .ok_or(ValidationError::IdSpaceExhausted)
}

/// Append `item` with a freshly assigned id and return that id
pub fn add_item<T: Identified>(items: &mut Vec<T>, mut item: T) -> Result<ItemId, ValidationError> {
    let id = ItemId::Num(next_id(items)?);
    item.set_id(id.clone());
    items.push(item);
    Ok(id)
}

fn position_of<T: Identified>(items: &[T], id: &ItemId) -> Result<usize, ValidationError> {
    items
        .iter()
        .position(|item| item.id().as_ref() == Some(id))
        .ok_or_else(|| ValidationError::ItemNotFound(id.clone()))
}

/// Replace the item with the given id, keeping the id and position
pub fn edit_item<T: Identified>(items: &mut [T], id: &ItemId, mut item: T) -> Result<(), ValidationError> {
    let index = position_of(items, id)?;
    item.set_id(id.clone());
    items[index] = item;
    Ok(())
}

/// Remove and return the item with the given id
pub fn delete_item<T: Identified>(
    items: &mut Vec<T>,
    id: &ItemId,
    policy: &ListPolicy,
    list: &str,
) -> Result<T, ValidationError> {
    let index = position_of(items, id)?;

    if items.len() <= policy.min_items {
        return Err(ValidationError::BelowMinimum {
            list: list.to_string(),
            min: policy.min_items,
        });
    }

    Ok(items.remove(index))
}

/// Swap the item at `position` with its neighbour; returns the new position
pub fn move_item<T: Identified>(
    items: &mut [T],
    position: usize,
    direction: Direction,
    policy: &ListPolicy,
) -> Result<usize, ValidationError> {
    let len = items.len();
    let target = match direction {
        Direction::Up => position.checked_sub(1),
        Direction::Down => position.checked_add(1).filter(|&p| p < len),
    };
    let target = match target {
        Some(target) if position < len => target,
        _ => return Err(ValidationError::PositionOutOfRange { position, len }),
    };

    items.swap(position, target);
    if policy.ordered {
        renumber(items);
    }
    Ok(target)
}

/// Assign ids 1..n by position
pub fn renumber<T: Identified>(items: &mut [T]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_id(ItemId::Num(index as u64 + 1));
    }
}

/// Every item carries an id and no id repeats
pub fn validate_ids<T: Identified>(items: &[T]) -> Result<(), ValidationError> {
    let mut seen = std::collections::HashSet::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        let id = item.id().ok_or_else(|| {
            ValidationError::MalformedDocument(format!("item at position {} has no id", position))
        })?;
        if seen.contains(&id) {
            return Err(ValidationError::DuplicateId(id));
        }
        seen.insert(id);
    }
    Ok(())
}
