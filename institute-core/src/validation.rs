// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Field and document validation
//!
//! Validation failures are reported to the editing user and never mutate
//! the document or the store.

use thiserror::Error;

use crate::editor::ItemId;

/// Maximum length of a person or course name
pub const MAX_NAME_LEN: usize = 100;
/// Maximum length of an email address
pub const MAX_EMAIL_LEN: usize = 254;
/// Maximum length of a free-text message
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Validation error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid phone number format")]
    InvalidPhone,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("{field} is too long (max {max} characters)")]
    ValueTooLong { field: &'static str, max: usize },
    #[error("{field} cannot be empty")]
    EmptyValue { field: &'static str },
    #[error("{list} must keep at least {min} item(s)")]
    BelowMinimum { list: String, min: usize },
    #[error("No item with id {0}")]
    ItemNotFound(ItemId),
    #[error("Cannot move item at position {position} (list has {len} items)")]
    PositionOutOfRange { position: usize, len: usize },
    #[error("Section {section} has no item list named {field}")]
    UnknownList { section: String, field: String },
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
    #[error("Duplicate item id {0}")]
    DuplicateId(ItemId),
    #[error("No numeric ids left for a new item")]
    IdSpaceExhausted,
}

/// Reject empty or whitespace-only values
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyValue { field });
    }
    Ok(())
}

/// Reject values longer than `max` characters
pub fn require_max_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::ValueTooLong { field, max });
    }
    Ok(())
}

/// Check a plausible `local@domain.tld` address
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    require_max_len("email", email, MAX_EMAIL_LEN)?;

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };

    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
        && !domain.contains('@');

    if local.is_empty() || !domain_ok || email.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Check a phone number: 7-15 digits, optional leading `+`
///
/// Spaces, dashes and parentheses are accepted as separators.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let trimmed = phone.trim();
    let body = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let mut digits = 0;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            ' ' | '-' | '(' | ')' => {}
            _ => return Err(ValidationError::InvalidPhone),
        }
    }

    if !(7..=15).contains(&digits) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}
