// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed section views
//!
//! Every field is optional on the wire: a missing field deserializes to its
//! default, so any resolved document produces a renderable view. A field
//! with the wrong shape is replaced by the bundled default for that field
//! only (see [`view_or_default`]).

mod icons;
mod preview;

pub use icons::Icon;
pub use preview::render_preview;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::editor::{Identified, ItemId};

macro_rules! identified {
    ($($item:ty),+ $(,)?) => {
        $(impl Identified for $item {
            fn id(&self) -> Option<ItemId> {
                Some(self.id.clone())
            }

            fn set_id(&mut self, id: ItemId) {
                self.id = id;
            }
        })+
    };
}

fn fits<T: DeserializeOwned>(base: &Map<String, Value>, key: &str, candidate: &Value) -> bool {
    let mut trial = base.clone();
    trial.insert(key.to_string(), candidate.clone());
    T::deserialize(&Value::Object(trial)).is_ok()
}

/// Deserialize `document` into a view, one top-level field at a time
///
/// Fields that fit are kept. A list that does not fit keeps the items that
/// do. Any other misfit takes the value from `default`.
pub fn view_or_default<T: DeserializeOwned + Default>(document: &Value, default: &Value) -> T {
    if let Ok(view) = T::deserialize(document) {
        return view;
    }

    let (Some(fields), Some(base)) = (document.as_object(), default.as_object()) else {
        return T::deserialize(default).unwrap_or_default();
    };

    let mut kept = base.clone();
    for (key, value) in fields {
        if fits::<T>(&kept, key, value) {
            kept.insert(key.clone(), value.clone());
        } else if let Value::Array(items) = value {
            let good: Vec<Value> = items
                .iter()
                .filter(|item| fits::<T>(&kept, key, &Value::Array(vec![(*item).clone()])))
                .cloned()
                .collect();
            warn!(field = %key, dropped = items.len() - good.len(), "Dropping list items that do not fit");
            kept.insert(key.clone(), Value::Array(good));
        } else {
            warn!(field = %key, "Field does not fit, using the bundled value");
        }
    }

    T::deserialize(&Value::Object(kept))
        .or_else(|_| T::deserialize(default))
        .unwrap_or_default()
}

/// Icon, title and description; used for credentials and features
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IconCard {
    pub id: ItemId,
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

/// About section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutContent {
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
    pub credentials: Vec<IconCard>,
}

/// Why-choose-us section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WhyUsContent {
    pub title: String,
    pub subtitle: String,
    pub footer_text: String,
    pub features: Vec<IconCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    pub id: ItemId,
    pub question: String,
    pub answer: String,
}

/// FAQ section; display order is the list order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqContent {
    pub title: String,
    pub subtitle: String,
    pub faqs: Vec<FaqItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub id: ItemId,
    pub platform: String,
    pub icon: Icon,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickLink {
    pub id: ItemId,
    pub label: String,
    pub url: String,
}

/// Footer block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterContent {
    pub company_name: String,
    pub copyright_text: String,
    pub tagline: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub footer_logo: String,
    pub social_links: Vec<SocialLink>,
    pub quick_links: Vec<QuickLink>,
}

/// Titled pair of lines (address, office hours)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoLineBlock {
    pub title: String,
    pub line1: String,
    pub line2: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneBlock {
    pub title: String,
    pub number1: String,
    pub number2: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailBlock {
    pub title: String,
    pub email1: String,
    pub email2: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactButtons {
    pub call_button: String,
    pub directions_button: String,
}

/// Contact and location section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactContent {
    pub title: String,
    pub subtitle: String,
    pub map_embed_url: String,
    pub address: TwoLineBlock,
    pub phone: PhoneBlock,
    pub email: EmailBlock,
    pub hours: TwoLineBlock,
    pub buttons: ContactButtons,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Course {
    /// Slug such as `facial-aesthetic`
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub duration: String,
    pub mode: String,
    pub certification: String,
    pub batch_size: u32,
    pub start_date: String,
}

/// Course catalogue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoursesContent {
    pub title: String,
    pub subtitle: String,
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub id: ItemId,
    pub name: String,
    pub image: String,
    pub position: String,
    pub location: String,
    /// Title of the course the alumnus took
    pub course: String,
    /// Star rating, 1-5
    pub rating: u8,
    pub quote: String,
}

/// Alumni testimonials
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialsContent {
    pub title: String,
    pub subtitle: String,
    pub testimonials: Vec<Testimonial>,
}

identified!(IconCard, FaqItem, SocialLink, QuickLink, Course, Testimonial);
