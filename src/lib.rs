// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Locale-scoped full-text search for a multilingual knowledge base.
//!
//! Content (articles with a title, summary, tags, topic, level and type) is
//! loaded once per locale into a read-only index. Queries scan that index,
//! score matches per field, rank them, and highlight the matched fields.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │   build/     │──▶│   search/    │──▶│  highlight   │──▶│    api/      │
//! │ (ContentSrc, │   │  scoring/    │   │  (<mark>)    │   │ (validate,   │
//! │ build_index) │   │ (match,rank) │   │              │   │  enrich)     │
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//!        │                                                        ▲
//!        └──────────────▶ suggest (fuzzy/) ───────────────────────┘
//! ```
//!
//! Every stage is a pure function of its inputs. Nothing here holds global
//! state: the caller owns the index and passes it in.
//!
//! # Usage
//!
//! ```ignore
//! use almanac::{build_index, search, MemorySource, SearchFilters};
//!
//! let source = MemorySource::new().with_locale("en", records);
//! let index = build_index(&source, Some("en"));
//! let results = search(&index, "bitcoin", &SearchFilters::new());
//! ```

pub mod api;
pub mod build;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod highlight;
pub mod scoring;
pub mod search;
pub mod suggest;
pub mod testing;
mod types;
pub mod util;

// Re-exports for public API
pub use api::{EnrichedResult, SearchParams, SearchResponse, SearchService, ValidatedQuery, MAX_LIMIT};
pub use build::{
    build_index, index_records, index_stats, ContentRecord, ContentSource, DirectorySource,
    IndexStats, MemorySource, DEFAULT_LOCALE,
};
pub use config::{Config, DisplayLabels, LocaleLabels};
pub use error::{ConfigError, FieldError, SourceError, UnknownValue, ValidationError};
pub use fuzzy::{bounded_distance, levenshtein_within};
pub use highlight::{highlight_text, Highlighter};
pub use search::{parse_query, search, search_with_scores, SearchFilters};
pub use suggest::{did_you_mean, search_suggestions, trending_searches};
pub use types::{
    ContentIndex, ContentIndexEntry, ContentType, Highlights, Level, MatchedField, MatchedOn,
    SearchResult, Topic,
};
pub use util::normalize::normalize;
