// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The record shape handed over by the content loader.

use crate::types::{ContentIndexEntry, ContentType, Level, Topic};
use serde::{Deserialize, Serialize};

/// One article as the content loader produces it. `tags` may be absent
/// upstream and defaults to empty.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ContentRecord {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub topic: Topic,
    pub level: Level,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ContentRecord {
    /// Title, summary and slug must all carry text.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.slug.trim().is_empty() {
            Some("slug")
        } else if self.title.trim().is_empty() {
            Some("title")
        } else if self.summary.trim().is_empty() {
            Some("summary")
        } else {
            None
        }
    }

    pub fn into_entry(self, locale: &str) -> ContentIndexEntry {
        ContentIndexEntry {
            locale: locale.to_string(),
            slug: self.slug,
            title: self.title,
            summary: self.summary,
            topic: self.topic,
            level: self.level,
            content_type: self.content_type,
            tags: self.tags,
        }
    }
}
