// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for loading, configuration, and request validation.
//!
//! The search core itself never fails: empty queries, empty indexes and zero
//! matches are all ordinary outcomes. Errors only exist at the edges, where
//! content is read from disk and where raw request parameters arrive.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why a content source could not produce records for a locale.
///
/// The index builder swallows all of these and degrades to an empty index,
/// so callers normally only see them through the log.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no content for locale '{locale}'")]
    MissingLocale { locale: String },

    #[error("locale '{0}' is not a valid content directory name")]
    InvalidLocale(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported manifest version {found} (expected {expected})")]
    ManifestVersion { found: u32, expected: u32 },
}

/// A string that is not a member of one of the closed sets (topic, level, type).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

/// Failure to load the JSON configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One rejected request parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field-level problem found in a search request.
///
/// Validation collects all failures instead of stopping at the first one,
/// so a client can fix its request in a single round trip.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid search parameters: {}", join_details(.details))]
pub struct ValidationError {
    pub details: Vec<FieldError>,
}

fn join_details(details: &[FieldError]) -> String {
    details
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// JSON body returned to clients alongside a `400` status.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub details: Vec<FieldError>,
}

impl ValidationError {
    /// HTTP status for this error. Validation failures are always the client's fault.
    pub fn status(&self) -> u16 {
        400
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: "invalid search parameters",
            details: self.details.clone(),
        }
    }

    /// Is there a failure recorded for `field`?
    pub fn has_field(&self, field: &str) -> bool {
        self.details.iter().any(|d| d.field == field)
    }
}
