// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content type definitions for website sections
//!
//! These types name the independently editable sections of the site and
//! describe the outcome of reading and writing their documents.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::defaults;
use crate::editor::ListPolicy;

/// An independently editable block of site content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Institute introduction and credentials
    About,
    /// Feature highlights ("Why Choose Us")
    WhyUs,
    /// Frequently asked questions
    Faq,
    /// Footer contact block, social and quick links
    Footer,
    /// Contact and location details
    Contact,
    /// Course catalogue
    Courses,
    /// Alumni testimonials
    Testimonials,
}

/// Description of an `id`-keyed item list inside a section document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemListSpec {
    /// Field name holding the list (e.g. "faqs")
    pub field: &'static str,
    /// Editing rules for the list
    pub policy: ListPolicy,
}

const ABOUT_LISTS: &[ItemListSpec] = &[ItemListSpec {
    field: "credentials",
    policy: ListPolicy::at_least(1),
}];

const WHYUS_LISTS: &[ItemListSpec] = &[ItemListSpec {
    field: "features",
    policy: ListPolicy::unrestricted(),
}];

const FAQ_LISTS: &[ItemListSpec] = &[ItemListSpec {
    field: "faqs",
    policy: ListPolicy::ordered(),
}];

const FOOTER_LISTS: &[ItemListSpec] = &[
    ItemListSpec {
        field: "socialLinks",
        policy: ListPolicy::unrestricted(),
    },
    ItemListSpec {
        field: "quickLinks",
        policy: ListPolicy::unrestricted(),
    },
];

const COURSES_LISTS: &[ItemListSpec] = &[ItemListSpec {
    field: "courses",
    policy: ListPolicy::unrestricted(),
}];

const TESTIMONIALS_LISTS: &[ItemListSpec] = &[ItemListSpec {
    field: "testimonials",
    policy: ListPolicy::unrestricted(),
}];

impl Section {
    /// Every known section, in page order
    pub const ALL: [Section; 7] = [
        Section::About,
        Section::Courses,
        Section::WhyUs,
        Section::Testimonials,
        Section::Faq,
        Section::Contact,
        Section::Footer,
    ];

    /// Stable key used by the remote store and the local cache
    pub fn key(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::WhyUs => "whyus",
            Section::Faq => "faq",
            Section::Footer => "footer",
            Section::Contact => "contact",
            Section::Courses => "courses",
            Section::Testimonials => "testimonials",
        }
    }

    /// Human-readable name, as shown in dashboard messages
    pub fn label(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::WhyUs => "Why Us",
            Section::Faq => "FAQ",
            Section::Footer => "Footer",
            Section::Contact => "Contact",
            Section::Courses => "Courses",
            Section::Testimonials => "Testimonials",
        }
    }

    /// The compiled-in default document for this section
    pub fn default_document(&self) -> Value {
        defaults::document(*self)
    }

    /// Item lists this section carries, with their editing rules
    pub fn item_lists(&self) -> &'static [ItemListSpec] {
        match self {
            Section::About => ABOUT_LISTS,
            Section::WhyUs => WHYUS_LISTS,
            Section::Faq => FAQ_LISTS,
            Section::Footer => FOOTER_LISTS,
            Section::Courses => COURSES_LISTS,
            Section::Testimonials => TESTIMONIALS_LISTS,
            Section::Contact => &[],
        }
    }

    /// Look up one of this section's item lists by field name
    pub fn item_list(&self, field: &str) -> Option<&'static ItemListSpec> {
        self.item_lists().iter().find(|spec| spec.field == field)
    }

    /// The list edited when no field is named explicitly
    pub fn primary_list(&self) -> Option<&'static ItemListSpec> {
        self.item_lists().first()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.key() == key)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// A section key that has no compiled-in default schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown section: {0}")]
pub struct UnknownSection(pub String);

/// Where a resolved document came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    /// Remote store returned a document
    Remote,
    /// Remote unavailable, local cache entry used
    Cache,
    /// Neither source usable, compiled-in default used
    Default,
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentSource::Remote => "remote",
            ContentSource::Cache => "cache",
            ContentSource::Default => "default",
        };
        write!(f, "{}", name)
    }
}

/// A resolved section document together with its origin
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// The section that was resolved
    pub section: Section,
    /// Best-effort document, normalized against the section default
    pub document: Value,
    /// Source that satisfied the resolve
    pub source: ContentSource,
}

/// Result of persisting a section document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Remote upsert succeeded (local mirror also written)
    Saved,
    /// Remote upsert failed, local mirror written
    SavedLocallyOnly {
        /// Why the remote write did not happen
        reason: String,
    },
    /// Local mirror could not be written; nothing was saved
    Failed {
        /// Underlying cache error
        reason: String,
    },
}

impl SaveOutcome {
    /// True when a later resolve will observe the saved document
    pub fn is_persisted(&self) -> bool {
        !matches!(self, SaveOutcome::Failed { .. })
    }

    /// Message suitable for showing to the editing user
    pub fn user_message(&self) -> String {
        match self {
            SaveOutcome::Saved => "Changes saved successfully".to_string(),
            SaveOutcome::SavedLocallyOnly { .. } => {
                "Changes saved to local storage only".to_string()
            }
            SaveOutcome::Failed { reason } => format!("Changes could not be saved: {}", reason),
        }
    }
}
