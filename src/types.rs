// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a locale-scoped content index.
//!
//! Three closed sets classify every article (topic, level, content type),
//! an index entry is one article in one locale, and a search result is an
//! entry plus the fields that matched and their highlighted text.
//!
//! # Invariants
//!
//! - **ContentIndex**: `entries.len() == folded.len()`, one entry per slug,
//!   entries in source insertion order. Nothing mutates it after construction.
//!
//! - **SearchResult**: every field set in `highlights` is also set in
//!   `matched_on`, and `matched_on` is never empty.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::UnknownValue;
use crate::util::normalize::normalize;

// =============================================================================
// CLOSED SETS
// =============================================================================

/// Declares a closed string-backed enum with parsing, display and serde.
///
/// Parsing is exact (case-sensitive): request filters must name a member
/// verbatim, the same way the content files do.
macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $canonical:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $canonical),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($canonical $(| $alias)* => Ok($name::$variant),)+
                    other => Err(UnknownValue {
                        kind: $kind,
                        value: other.to_string(),
                        expected: $name::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

closed_set! {
    /// Subject area of an article.
    Topic, "topic" {
        Basics => "basics",
        Mining => "mining",
        Wallets => "wallets",
        Security => "security",
        Privacy => "privacy",
        Economics => "economics",
        Lightning => "lightning",
        History => "history",
        Regulation => "regulation",
        Development => "development",
    }
}

closed_set! {
    /// Reading difficulty.
    Level, "level" {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
    }
}

closed_set! {
    /// What kind of article this is. Content files written by hand often
    /// spell the Q&A type `q&a`, so that spelling is accepted on input.
    ContentType, "type" {
        Qa => "qa" | "q&a",
        Explainer => "explainer",
        Criticism => "criticism",
        Glossary => "glossary",
        Source => "source",
    }
}

impl Topic {
    /// English display label, used when no configured label exists.
    pub fn default_label(self) -> &'static str {
        match self {
            Topic::Basics => "Basics",
            Topic::Mining => "Mining",
            Topic::Wallets => "Wallets",
            Topic::Security => "Security",
            Topic::Privacy => "Privacy",
            Topic::Economics => "Economics",
            Topic::Lightning => "Lightning Network",
            Topic::History => "History",
            Topic::Regulation => "Regulation",
            Topic::Development => "Development",
        }
    }
}

impl Level {
    pub fn default_label(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }

    /// Badge color name, used when no configured color exists.
    pub fn default_color(self) -> &'static str {
        match self {
            Level::Beginner => "green",
            Level::Intermediate => "amber",
            Level::Advanced => "red",
        }
    }
}

// =============================================================================
// INDEX ENTRIES
// =============================================================================

/// One article in one locale, as it sits in the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentIndexEntry {
    pub locale: String,
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub topic: Topic,
    pub level: Level,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub tags: Vec<String>,
}

/// Lowercased copies of the searchable fields, computed once per index build
/// so queries never re-fold the same text.
#[derive(Debug, Clone)]
pub(crate) struct FoldedText {
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
}

impl FoldedText {
    fn of(entry: &ContentIndexEntry) -> Self {
        Self {
            title: normalize(&entry.title),
            summary: normalize(&entry.summary),
            tags: entry.tags.iter().map(|t| normalize(t)).collect(),
        }
    }
}

/// The searchable projection of one locale's content collection.
///
/// Read-only once built. Rebuild it (via `build_index`) when content changes;
/// there is deliberately no way to patch it in place.
#[derive(Debug, Clone)]
pub struct ContentIndex {
    locale: String,
    entries: Vec<ContentIndexEntry>,
    folded: Vec<FoldedText>,
}

impl ContentIndex {
    /// Construct from entries already deduplicated and validated by the builder.
    pub(crate) fn from_entries(locale: String, entries: Vec<ContentIndexEntry>) -> Self {
        let folded = entries.iter().map(FoldedText::of).collect();
        Self {
            locale,
            entries,
            folded,
        }
    }

    pub fn empty(locale: impl Into<String>) -> Self {
        Self::from_entries(locale.into(), Vec::new())
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn entries(&self) -> &[ContentIndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, slug: &str) -> Option<&ContentIndexEntry> {
        self.entries.iter().find(|e| e.slug == slug)
    }

    /// Entries paired with their folded text, in index order.
    pub(crate) fn searchable(&self) -> impl Iterator<Item = (&ContentIndexEntry, &FoldedText)> {
        self.entries.iter().zip(self.folded.iter())
    }
}

// =============================================================================
// MATCHED FIELDS
// =============================================================================

/// A field that can contribute to a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchedField {
    Title,
    Summary,
    Tags,
}

impl MatchedField {
    pub const ALL: [MatchedField; 3] = [MatchedField::Title, MatchedField::Summary, MatchedField::Tags];

    pub fn as_str(self) -> &'static str {
        match self {
            MatchedField::Title => "title",
            MatchedField::Summary => "summary",
            MatchedField::Tags => "tags",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            MatchedField::Title => 0b001,
            MatchedField::Summary => 0b010,
            MatchedField::Tags => 0b100,
        }
    }
}

/// Set of fields that contributed to a match. Three bits, always in
/// title, summary, tags order when iterated or serialized.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MatchedOn(u8);

impl MatchedOn {
    pub const fn empty() -> Self {
        MatchedOn(0)
    }

    pub fn insert(&mut self, field: MatchedField) {
        self.0 |= field.bit();
    }

    pub fn with(mut self, field: MatchedField) -> Self {
        self.insert(field);
        self
    }

    pub fn contains(self, field: MatchedField) -> bool {
        self.0 & field.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = MatchedField> {
        MatchedField::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

impl FromIterator<MatchedField> for MatchedOn {
    fn from_iter<I: IntoIterator<Item = MatchedField>>(iter: I) -> Self {
        iter.into_iter().fold(MatchedOn::empty(), MatchedOn::with)
    }
}

impl fmt::Debug for MatchedOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for MatchedOn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// Highlighted copies of matched fields. Only fields present in the result's
/// `matched_on` are ever filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Highlights {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl Highlights {
    pub fn get(&self, field: MatchedField) -> Option<&str> {
        match field {
            MatchedField::Title => self.title.as_deref(),
            MatchedField::Summary => self.summary.as_deref(),
            MatchedField::Tags => self.tags.as_deref(),
        }
    }

    pub(crate) fn set(&mut self, field: MatchedField, marked: String) {
        let slot = match field {
            MatchedField::Title => &mut self.title,
            MatchedField::Summary => &mut self.summary,
            MatchedField::Tags => &mut self.tags,
        };
        *slot = Some(marked);
    }

    /// Fields that carry a highlight.
    pub fn fields(&self) -> MatchedOn {
        MatchedField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_some())
            .collect()
    }
}

/// What a query returns for one matching entry. Lives only as long as the
/// response it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(flatten)]
    pub entry: ContentIndexEntry,
    pub matched_on: MatchedOn,
    pub highlights: Highlights,
}
