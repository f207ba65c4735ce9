// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Document normalization against a section default

use serde_json::Value;

/// Merge `overlay` onto `default`.
///
/// Objects merge key by key (recursively for nested objects); the overlay
/// wins wherever it carries a non-null value and the default fills every
/// key the overlay omits. Arrays and scalars are replaced wholesale, so an
/// edited item list is never interleaved with default items.
pub fn merge_documents(default: &Value, overlay: &Value) -> Value {
    match (default, overlay) {
        (Value::Object(base), Value::Object(top)) => {
            let mut merged = base.clone();
            for (key, value) in top {
                if value.is_null() {
                    continue;
                }
                let next = match base.get(key) {
                    Some(existing) => merge_documents(existing, value),
                    None => value.clone(),
                };
                merged.insert(key.clone(), next);
            }
            Value::Object(merged)
        }
        (base, Value::Null) => base.clone(),
        (_, top) => top.clone(),
    }
}
