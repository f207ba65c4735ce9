// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Section editing
//!
//! Item-list operations over `id`-keyed lists, view lifetime tracking, and
//! the per-section editor session that ties resolve, edits and save together.

pub mod items;
mod mount;
mod session;

pub use items::{Direction, Identified, ItemId, ListPolicy};
pub use mount::Mount;
pub use session::{EditorError, EditorSession};
