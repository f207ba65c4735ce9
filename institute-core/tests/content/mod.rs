// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for section content loading, saving and editing

mod cache_tests;
mod editor_tests;
mod persister_tests;
mod property_tests;
mod resolver_tests;
mod sections_tests;
mod support;
