// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Configuration: where content lives, which locales to serve, and the
//! per-locale display labels the API attaches to results.
//!
//! Loaded from a JSON file; every key is optional.
//!
//! ```json
//! {
//!   "defaultLocale": "en",
//!   "contentDir": "content",
//!   "locales": ["en", "es"],
//!   "trending": ["what is bitcoin", "halving"],
//!   "labels": {
//!     "es": {
//!       "topics": { "mining": "Minería" },
//!       "levels": { "beginner": "Principiante" },
//!       "levelColors": { "beginner": "green" }
//!     }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::build::DEFAULT_LOCALE;
use crate::error::ConfigError;
use crate::types::{Level, Topic};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub default_locale: String,
    pub content_dir: Option<PathBuf>,
    /// Locales to index at startup. Empty means "whatever the content source has".
    pub locales: Vec<String>,
    /// Curated trending searches. Empty means "derive from tags".
    pub trending: Vec<String>,
    pub labels: BTreeMap<String, LocaleLabels>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            content_dir: None,
            locales: Vec::new(),
            trending: Vec::new(),
            labels: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn display_labels(&self) -> DisplayLabels {
        DisplayLabels {
            default_locale: self.default_locale.clone(),
            by_locale: self.labels.clone(),
        }
    }
}

/// Label overrides for one locale. Missing keys fall through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleLabels {
    pub topics: BTreeMap<Topic, String>,
    pub levels: BTreeMap<Level, String>,
    pub level_colors: BTreeMap<Level, String>,
}

/// Resolves display labels for a locale.
///
/// Lookup order: the requested locale, then the default locale, then the
/// built-in English label.
#[derive(Debug, Clone, Default)]
pub struct DisplayLabels {
    default_locale: String,
    by_locale: BTreeMap<String, LocaleLabels>,
}

impl DisplayLabels {
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            default_locale: default_locale.into(),
            by_locale: BTreeMap::new(),
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>, labels: LocaleLabels) -> Self {
        self.by_locale.insert(locale.into(), labels);
        self
    }

    pub fn topic_label(&self, locale: &str, topic: Topic) -> String {
        self.lookup(locale, |l| l.topics.get(&topic))
            .unwrap_or_else(|| topic.default_label().to_string())
    }

    pub fn level_label(&self, locale: &str, level: Level) -> String {
        self.lookup(locale, |l| l.levels.get(&level))
            .unwrap_or_else(|| level.default_label().to_string())
    }

    pub fn level_color(&self, locale: &str, level: Level) -> String {
        self.lookup(locale, |l| l.level_colors.get(&level))
            .unwrap_or_else(|| level.default_color().to_string())
    }

    fn lookup<F>(&self, locale: &str, pick: F) -> Option<String>
    where
        F: Fn(&LocaleLabels) -> Option<&String>,
    {
        [locale, self.default_locale.as_str()]
            .into_iter()
            .filter_map(|l| self.by_locale.get(l))
            .find_map(pick)
            .cloned()
    }
}
