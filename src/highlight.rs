// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighting: wrap occurrences of the query in `<mark>` for display.
//!
//! The pattern is the whole trimmed query (not individual words), escaped
//! with `regex::escape` and matched case-insensitively, so `c++ (intro)` is
//! searched for literally and cannot break the regex. The original casing of
//! the field text is kept inside the marker.
//!
//! The output is meant to be dropped straight into a page. Everything outside
//! the markers is HTML-escaped, which makes `<mark>` the only markup that can
//! ever appear in a highlighted field.

use regex::{Regex, RegexBuilder};

use crate::types::{ContentIndexEntry, Highlights, MatchedField, MatchedOn};

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// Separator used when the tags field is rendered as one string.
pub const TAG_SEPARATOR: &str = ", ";

/// A compiled highlight pattern for one query.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    pub fn new(query: &str) -> Self {
        let query = query.trim();
        if query.is_empty() {
            return Self { pattern: None };
        }

        let pattern = match RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
        {
            Ok(re) => Some(re),
            Err(e) => {
                // Only reachable for absurdly long queries (size limit).
                tracing::warn!(error = %e, "highlight pattern rejected, returning plain text");
                None
            }
        };
        Self { pattern }
    }

    /// Escape `text` and wrap every occurrence of the query.
    pub fn mark(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return escape_html(text);
        };

        let mut out = String::with_capacity(text.len() + 16);
        let mut last = 0;
        for m in pattern.find_iter(text) {
            out.push_str(&escape_html(&text[last..m.start()]));
            out.push_str(MARK_OPEN);
            out.push_str(&escape_html(m.as_str()));
            out.push_str(MARK_CLOSE);
            last = m.end();
        }
        out.push_str(&escape_html(&text[last..]));
        out
    }

    /// Highlight exactly the fields in `matched_on`; the rest stay unset.
    pub fn highlight(&self, entry: &ContentIndexEntry, matched_on: MatchedOn) -> Highlights {
        let mut highlights = Highlights::default();
        for field in matched_on.iter() {
            let marked = match field {
                MatchedField::Title => self.mark(&entry.title),
                MatchedField::Summary => self.mark(&entry.summary),
                MatchedField::Tags => entry
                    .tags
                    .iter()
                    .map(|tag| self.mark(tag))
                    .collect::<Vec<_>>()
                    .join(TAG_SEPARATOR),
            };
            highlights.set(field, marked);
        }
        highlights
    }
}

/// One-shot convenience for highlighting a single string.
pub fn highlight_text(text: &str, query: &str) -> String {
    Highlighter::new(query).mark(text)
}

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
