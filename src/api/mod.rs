// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The request/response contract served to endpoints and widgets.
//!
//! This is the only layer that looks at raw strings. It checks every filter
//! against its closed set, bounds `limit`, and reports all problems at once.
//! Past this point the matcher trusts its inputs.
//!
//! Transport is someone else's job: a web handler turns its query string into
//! `SearchParams`, calls `SearchService::handle`, and serializes either the
//! `SearchResponse` or `ValidationError::to_body()` with `status()`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::build::{build_index, ContentSource, DEFAULT_LOCALE};
use crate::config::{Config, DisplayLabels};
use crate::error::{FieldError, ValidationError};
use crate::search::{search, SearchFilters};
use crate::suggest::{did_you_mean, search_suggestions, trending_searches};
use crate::types::{ContentIndex, ContentType, Level, SearchResult, Topic};

/// Largest `limit` a client may ask for.
pub const MAX_LIMIT: usize = 100;

/// Longest accepted locale tag.
pub const MAX_LOCALE_LEN: usize = 35;

/// Raw request parameters, exactly as they arrive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub topic: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub level: Option<String>,
    pub limit: Option<String>,
    pub locale: Option<String>,
}

/// Parameters that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuery {
    pub query: String,
    pub filters: SearchFilters,
    pub locale: Option<String>,
}

impl SearchParams {
    pub fn query(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Self::default()
        }
    }

    /// Build from decoded key/value pairs (e.g. a parsed query string).
    /// Unknown keys are ignored; a repeated key keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "q" => &mut params.q,
                "topic" => &mut params.topic,
                "type" => &mut params.content_type,
                "level" => &mut params.level,
                "limit" => &mut params.limit,
                "locale" => &mut params.locale,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        params
    }

    /// Check every parameter; collect all failures.
    ///
    /// Empty strings count as absent for the filters and the locale, which is
    /// what an HTML form submits for an unselected `<select>`.
    pub fn validate(&self) -> Result<ValidatedQuery, ValidationError> {
        let mut details: Vec<FieldError> = Vec::new();

        let topic = parse_member::<Topic>("topic", self.topic.as_deref(), &mut details);
        let content_type = parse_member::<ContentType>("type", self.content_type.as_deref(), &mut details);
        let level = parse_member::<Level>("level", self.level.as_deref(), &mut details);
        let limit = parse_limit(self.limit.as_deref(), &mut details);
        let locale = parse_locale(self.locale.as_deref(), &mut details);

        if !details.is_empty() {
            return Err(ValidationError { details });
        }

        Ok(ValidatedQuery {
            query: self.q.clone().unwrap_or_default(),
            filters: SearchFilters {
                topic,
                content_type,
                level,
                limit,
            },
            locale,
        })
    }
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_member<T>(field: &'static str, raw: Option<&str>, details: &mut Vec<FieldError>) -> Option<T>
where
    T: std::str::FromStr<Err = crate::error::UnknownValue>,
{
    let raw = present(raw)?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            details.push(FieldError::new(field, e.to_string()));
            None
        }
    }
}

fn parse_limit(raw: Option<&str>, details: &mut Vec<FieldError>) -> Option<usize> {
    let raw = present(raw)?;
    match raw.parse::<usize>() {
        Ok(0) => {
            details.push(FieldError::new("limit", "must be a positive integer"));
            None
        }
        Ok(n) if n > MAX_LIMIT => {
            details.push(FieldError::new(
                "limit",
                format!("must be at most {}", MAX_LIMIT),
            ));
            None
        }
        Ok(n) => Some(n),
        Err(_) => {
            details.push(FieldError::new(
                "limit",
                format!("'{}' is not a positive integer", raw),
            ));
            None
        }
    }
}

fn parse_locale(raw: Option<&str>, details: &mut Vec<FieldError>) -> Option<String> {
    let raw = present(raw)?;
    let well_formed = raw.len() <= MAX_LOCALE_LEN
        && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if well_formed {
        Some(raw.to_string())
    } else {
        details.push(FieldError::new("locale", format!("'{}' is not a locale tag", raw)));
        None
    }
}

/// A result with locale-appropriate display labels attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedResult {
    #[serde(flatten)]
    pub result: SearchResult,
    pub topic_label: String,
    pub level_label: String,
    pub level_color: String,
}

/// `{ results, query }`: the success body of the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResponse {
    pub results: Vec<EnrichedResult>,
    pub query: String,
}

/// Per-locale indexes plus the label configuration, ready to answer requests.
///
/// Indexes are shared behind `Arc` and never mutated, so one service can be
/// used from any number of threads. To pick up new content, build a new
/// index and `insert_index` it (or build a new service).
#[derive(Debug, Clone)]
pub struct SearchService {
    default_locale: String,
    indexes: HashMap<String, Arc<ContentIndex>>,
    labels: DisplayLabels,
    trending: Vec<String>,
}

impl SearchService {
    pub fn new(labels: DisplayLabels) -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            indexes: HashMap::new(),
            labels,
            trending: Vec::new(),
        }
    }

    /// Build one index per configured locale (or per locale the caller names
    /// in `locales` when the config lists none).
    pub fn from_source<S: ContentSource + ?Sized>(source: &S, config: &Config, locales: &[String]) -> Self {
        let mut service = Self::new(config.display_labels());
        service.default_locale = config.default_locale.clone();
        service.trending = config.trending.clone();

        let wanted = if config.locales.is_empty() { locales } else { &config.locales[..] };
        for locale in wanted {
            service.insert_index(build_index(source, Some(locale.as_str())));
        }
        if !service.indexes.contains_key(&service.default_locale) {
            let default_locale = service.default_locale.clone();
            service.insert_index(build_index(source, Some(default_locale.as_str())));
        }
        service
    }

    pub fn with_index(mut self, index: ContentIndex) -> Self {
        self.insert_index(index);
        self
    }

    /// Add or replace the index for its locale.
    pub fn insert_index(&mut self, index: ContentIndex) {
        tracing::debug!(locale = index.locale(), entries = index.len(), "index installed");
        self.indexes.insert(index.locale().to_string(), Arc::new(index));
    }

    pub fn index(&self, locale: &str) -> Option<&ContentIndex> {
        self.indexes.get(locale).map(Arc::as_ref)
    }

    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.indexes.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Validate, search, enrich. Unknown locales answer with no results.
    pub fn handle(&self, params: &SearchParams) -> Result<SearchResponse, ValidationError> {
        let validated = params.validate()?;
        let locale = validated.locale.as_deref().unwrap_or(self.default_locale.as_str());

        let results = match self.index(locale) {
            Some(index) => search(index, &validated.query, &validated.filters),
            None => {
                tracing::debug!(locale, "no index for locale");
                Vec::new()
            }
        };

        Ok(SearchResponse {
            results: results
                .into_iter()
                .map(|result| self.enrich(locale, result))
                .collect(),
            query: validated.query,
        })
    }

    fn enrich(&self, locale: &str, result: SearchResult) -> EnrichedResult {
        let topic = result.entry.topic;
        let level = result.entry.level;
        EnrichedResult {
            topic_label: self.labels.topic_label(locale, topic),
            level_label: self.labels.level_label(locale, level),
            level_color: self.labels.level_color(locale, level),
            result,
        }
    }

    pub fn suggest(&self, locale: Option<&str>, query: &str, limit: usize) -> Vec<String> {
        self.index(self.locale_or_default(locale))
            .map(|index| search_suggestions(index, query, limit.min(MAX_LIMIT)))
            .unwrap_or_default()
    }

    pub fn did_you_mean(&self, locale: Option<&str>, query: &str) -> Option<String> {
        self.index(self.locale_or_default(locale))
            .and_then(|index| did_you_mean(index, query))
    }

    /// Configured trending searches if any, otherwise derived from the
    /// locale's tags.
    pub fn trending(&self, locale: Option<&str>, limit: usize) -> Vec<String> {
        if !self.trending.is_empty() {
            return self.trending.iter().take(limit).cloned().collect();
        }
        let locale = self.locale_or_default(locale);
        match self.index(locale) {
            Some(index) => trending_searches(index, limit),
            None => trending_searches(&ContentIndex::empty(locale), limit),
        }
    }

    fn locale_or_default<'a>(&'a self, locale: Option<&'a str>) -> &'a str {
        present(locale).unwrap_or(self.default_locale.as_str())
    }
}
