// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::types::{ContentIndexEntry, ContentType, Level, Topic};

/// Optional equality filters plus a result cap.
///
/// Values are trusted: the API layer has already checked them against the
/// closed sets and bounded `limit`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub topic: Option<Topic>,
    pub content_type: Option<ContentType>,
    pub level: Option<Level>,
    pub limit: Option<usize>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn topic(mut self, topic: Topic) -> Self {
        self.topic = Some(topic);
        self
    }

    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Does the entry pass every supplied filter?
    pub fn admits(&self, entry: &ContentIndexEntry) -> bool {
        self.topic.map_or(true, |t| entry.topic == t)
            && self.content_type.map_or(true, |c| entry.content_type == c)
            && self.level.map_or(true, |l| entry.level == l)
    }
}
