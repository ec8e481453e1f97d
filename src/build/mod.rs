// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: content collection in, `ContentIndex` out.
//!
//! Building never fails. An unavailable locale, an unreadable manifest or a
//! collection with nothing valid in it all produce an empty index, and search
//! on an empty index is just "no results". Problems go to the log.

pub mod document;
pub mod manifest;
pub mod source;

use std::collections::{BTreeMap, HashSet};

pub use document::*;
pub use manifest::*;
pub use source::*;

use crate::types::{ContentIndex, ContentIndexEntry, Level, Topic};

/// Locale used when the caller does not name one.
pub const DEFAULT_LOCALE: &str = "en";

/// Resolve an optional locale to a concrete one.
pub fn resolve_locale(locale: Option<&str>) -> &str {
    match locale.map(str::trim) {
        Some(l) if !l.is_empty() => l,
        _ => DEFAULT_LOCALE,
    }
}

/// Build the index for one locale from a content source.
///
/// Idempotent per locale: the same source contents always give the same
/// entries in the same order.
pub fn build_index<S: ContentSource + ?Sized>(source: &S, locale: Option<&str>) -> ContentIndex {
    let locale = resolve_locale(locale);
    match source.load(locale) {
        Ok(records) => index_records(locale, records),
        Err(e) => {
            tracing::warn!(locale, error = %e, "content unavailable, serving empty index");
            ContentIndex::empty(locale)
        }
    }
}

/// Project loaded records into an index, in insertion order.
///
/// Keeps exactly one entry per slug (the first one seen) and drops records
/// whose slug, title or summary is blank.
pub fn index_records(locale: &str, records: Vec<ContentRecord>) -> ContentIndex {
    let total = records.len();
    let mut seen: HashSet<String> = HashSet::with_capacity(total);
    let mut entries: Vec<ContentIndexEntry> = Vec::with_capacity(total);

    for record in records {
        if let Some(field) = record.missing_field() {
            tracing::warn!(locale, slug = %record.slug, field, "skipping record with empty field");
            continue;
        }
        if !seen.insert(record.slug.clone()) {
            tracing::warn!(locale, slug = %record.slug, "skipping duplicate slug");
            continue;
        }
        entries.push(record.into_entry(locale));
    }

    tracing::debug!(locale, loaded = total, indexed = entries.len(), "built content index");
    ContentIndex::from_entries(locale.to_string(), entries)
}

/// Summary counts for one index, shown by `almanac inspect`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub locale: String,
    pub entries: usize,
    pub by_topic: BTreeMap<Topic, usize>,
    pub by_level: BTreeMap<Level, usize>,
    pub distinct_tags: usize,
}

pub fn index_stats(index: &ContentIndex) -> IndexStats {
    let mut stats = IndexStats {
        locale: index.locale().to_string(),
        entries: index.len(),
        ..IndexStats::default()
    };
    let mut tags: HashSet<String> = HashSet::new();

    for entry in index.entries() {
        *stats.by_topic.entry(entry.topic).or_default() += 1;
        *stats.by_level.entry(entry.level).or_default() += 1;
        tags.extend(entry.tags.iter().map(|t| t.to_lowercase()));
    }

    stats.distinct_tags = tags.len();
    stats
}
