// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where content records come from.
//!
//! The search core does not own content; it asks a `ContentSource` for one
//! locale's records and projects them into an index. Two sources ship here:
//! an in-memory map for tests and embedding, and a directory reader for the
//! file-based content tree.
//!
//! Reading a directory is the only expensive part of building an index, and
//! it is embarrassingly parallel. With the `parallel` feature, record files
//! are parsed with rayon; results are collected in manifest order either way.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{ContentRecord, LocaleManifest, MANIFEST_VERSION};
use crate::error::SourceError;

/// Anything that can hand over one locale's content collection.
pub trait ContentSource {
    fn load(&self, locale: &str) -> Result<Vec<ContentRecord>, SourceError>;
}

/// Records held in memory, keyed by locale.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    by_locale: HashMap<String, Vec<ContentRecord>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, locale: impl Into<String>, records: Vec<ContentRecord>) {
        self.by_locale.insert(locale.into(), records);
    }

    pub fn with_locale(mut self, locale: impl Into<String>, records: Vec<ContentRecord>) -> Self {
        self.insert(locale, records);
        self
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.by_locale.keys().map(String::as_str)
    }
}

impl ContentSource for MemorySource {
    fn load(&self, locale: &str) -> Result<Vec<ContentRecord>, SourceError> {
        self.by_locale
            .get(locale)
            .cloned()
            .ok_or_else(|| SourceError::MissingLocale {
                locale: locale.to_string(),
            })
    }
}

/// A content tree on disk:
///
/// ```text
/// content/
///   en/manifest.json      {"version": 1, "documents": ["a.json", ...]}
///   en/a.json             one ContentRecord
///   es/manifest.json
///   ...
/// ```
///
/// A record file that fails to parse is skipped with a warning; a missing or
/// broken manifest fails the whole locale.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Locale directories that carry a manifest, sorted.
    pub fn locales(&self) -> Result<Vec<String>, SourceError> {
        let entries = fs::read_dir(&self.root).map_err(|source| SourceError::Io {
            path: self.root.clone(),
            source,
        })?;
        let mut locales: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|e| e.path().join("manifest.json").is_file())
            .filter_map(|e| e.file_name().into_string().ok())
            .collect();
        locales.sort();
        Ok(locales)
    }

    /// Like [`locales`](Self::locales), but an unreadable root yields no
    /// locales instead of an error.
    pub fn discover_locales(&self) -> Vec<String> {
        self.locales().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "content directory unreadable; no locales discovered");
            Vec::new()
        })
    }

    fn locale_dir(&self, locale: &str) -> Result<PathBuf, SourceError> {
        let valid = !locale.is_empty()
            && locale
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(SourceError::InvalidLocale(locale.to_string()));
        }
        Ok(self.root.join(locale))
    }
}

impl ContentSource for DirectorySource {
    fn load(&self, locale: &str) -> Result<Vec<ContentRecord>, SourceError> {
        let dir = self.locale_dir(locale)?;
        let manifest_path = dir.join("manifest.json");
        if !manifest_path.is_file() {
            return Err(SourceError::MissingLocale {
                locale: locale.to_string(),
            });
        }

        let manifest: LocaleManifest = read_json(&manifest_path)?;
        if manifest.version != MANIFEST_VERSION {
            return Err(SourceError::ManifestVersion {
                found: manifest.version,
                expected: MANIFEST_VERSION,
            });
        }

        Ok(load_records(&dir, &manifest))
    }
}

/// Parse every record listed in the manifest, dropping the ones that fail.
fn load_records(dir: &Path, manifest: &LocaleManifest) -> Vec<ContentRecord> {
    let load_one = |filename: &String| -> Option<ContentRecord> {
        let path = dir.join(filename);
        match read_json::<ContentRecord>(&path) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(error = %e, "skipping content record");
                None
            }
        }
    };

    #[cfg(feature = "parallel")]
    let loaded: Vec<Option<ContentRecord>> = manifest.documents.par_iter().map(load_one).collect();
    #[cfg(not(feature = "parallel"))]
    let loaded: Vec<Option<ContentRecord>> = manifest.documents.iter().map(load_one).collect();

    loaded.into_iter().flatten().collect()
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, SourceError> {
    let raw = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SourceError::Json {
        path: path.to_path_buf(),
        source,
    })
}
