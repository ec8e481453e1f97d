// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the almanac command-line interface.
//!
//! Three subcommands: `search` runs a query through the same validation and
//! enrichment path the HTTP endpoint uses, `suggest` shows as-you-type
//! assistance, and `inspect` summarizes what got indexed per locale.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "almanac",
    about = "Search a multilingual knowledge base from the terminal",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Content directory (one sub-directory per locale, each with manifest.json)
    #[arg(short, long, global = true)]
    pub content: Option<PathBuf>,

    /// JSON configuration file (labels, locales, trending searches)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Locale to search (defaults to the configured default locale)
    #[arg(short = 'L', long, global = true)]
    pub locale: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the index and display ranked results
    Search {
        /// Search query
        query: String,

        /// Only show results with this topic
        #[arg(long)]
        topic: Option<String>,

        /// Only show results of this content type
        #[arg(long = "type")]
        content_type: Option<String>,

        /// Only show results at this level
        #[arg(long)]
        level: Option<String>,

        /// Maximum number of results to return (1-100)
        #[arg(short, long)]
        limit: Option<String>,

        /// Print the JSON response body instead of formatted results
        #[arg(long)]
        json: bool,

        /// Show each result's score
        #[arg(long)]
        explain: bool,
    },

    /// Show suggestions and a did-you-mean correction for a partial query
    Suggest {
        /// Partial query
        query: String,

        /// Maximum number of suggestions
        #[arg(short, long, default_value = "8")]
        limit: usize,
    },

    /// Summarize the indexed content per locale
    Inspect,
}
