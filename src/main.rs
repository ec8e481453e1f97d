// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use almanac::{
    index_stats, search_with_scores, Config, DirectorySource, EnrichedResult, SearchParams,
    SearchService,
};

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

const DEFAULT_CONTENT_DIR: &str = "content";

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output stays clean. `ALMANAC_LOG` takes
/// the usual `EnvFilter` directives.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("ALMANAC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.global.config {
        Some(path) => Config::load(path).context("loading configuration")?,
        None => Config::default(),
    };

    let content_dir: PathBuf = cli
        .global
        .content
        .clone()
        .or_else(|| config.content_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR));

    let source = DirectorySource::new(&content_dir);
    let discovered = if config.locales.is_empty() {
        source.discover_locales()
    } else {
        Vec::new()
    };
    let service = SearchService::from_source(&source, &config, &discovered);
    let locale = cli.global.locale.clone();

    match cli.command {
        Commands::Search {
            query,
            topic,
            content_type,
            level,
            limit,
            json,
            explain,
        } => {
            let params = SearchParams {
                q: Some(query),
                topic,
                content_type,
                level,
                limit,
                locale,
            };
            run_search(&service, &params, json, explain)
        }
        Commands::Suggest { query, limit } => {
            run_suggest(&service, locale.as_deref(), &query, limit);
            Ok(())
        }
        Commands::Inspect => {
            run_inspect(&service);
            Ok(())
        }
    }
}

fn run_search(service: &SearchService, params: &SearchParams, json: bool, explain: bool) -> Result<()> {
    let response = match service.handle(params) {
        Ok(response) => response,
        Err(e) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&e.to_body())?);
            } else {
                eprintln!("❌ {} (status {})", e.to_body().error, e.status());
                for detail in &e.details {
                    eprintln!("   {}: {}", detail.field, detail.message);
                }
            }
            std::process::exit(1);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let scores: HashMap<String, u32> = if explain {
        explain_scores(service, params)
    } else {
        HashMap::new()
    };

    section_top(&format!("RESULTS for \"{}\"", response.query));
    if response.results.is_empty() {
        row(&format!("  {}", themed(GRAY, &[], "No matches.")));
    }
    for (i, result) in response.results.iter().enumerate() {
        if i > 0 {
            row("");
        }
        print_result(i + 1, result, scores.get(&result.result.entry.slug).copied());
    }
    section_bot();

    if response.results.is_empty() {
        let locale = params.locale.as_deref();
        if let Some(suggestion) = service.did_you_mean(locale, &response.query) {
            println!("Did you mean: {}?", themed(CYAN, &[BOLD], &suggestion));
        }
    }
    Ok(())
}

/// Scores are not part of the response; re-run the matcher to get them.
fn explain_scores(service: &SearchService, params: &SearchParams) -> HashMap<String, u32> {
    let Ok(validated) = params.validate() else {
        return HashMap::new();
    };
    let locale = validated.locale.as_deref().unwrap_or(service.default_locale());
    service
        .index(locale)
        .map(|index| {
            search_with_scores(index, &validated.query, &validated.filters)
                .into_iter()
                .map(|(result, score)| (result.entry.slug, score))
                .collect()
        })
        .unwrap_or_default()
}

fn print_result(rank: usize, result: &EnrichedResult, score: Option<u32>) {
    let entry = &result.result.entry;
    let highlights = &result.result.highlights;

    let title = highlights.title.as_deref().map(render_marked).unwrap_or_else(|| entry.title.clone());
    let mut header = format!(
        "  {} {} {}",
        themed(GRAY, &[], &format!("{:>2}.", rank)),
        title,
        level_badge(&result.level_color, &result.level_label)
    );
    if let Some(score) = score {
        header.push_str(&format!("  score {}", score_value(score)));
    }
    row(&header);

    let summary = highlights.summary.as_deref().map(render_marked).unwrap_or_else(|| entry.summary.clone());
    row(&format!("      {}", summary));

    let matched: Vec<&str> = result.result.matched_on.iter().map(|f| f.as_str()).collect();
    row(&format!(
        "      {} · {} · {}  {}",
        themed(BLUE, &[], &result.topic_label),
        entry.content_type,
        entry.slug,
        themed(GRAY, &[DIM], &format!("matched: {}", matched.join(", ")))
    ));

    if let Some(tags) = highlights.tags.as_deref() {
        row(&format!("      {} {}", themed(GRAY, &[], "tags:"), render_marked(tags)));
    }
}

fn run_suggest(service: &SearchService, locale: Option<&str>, query: &str, limit: usize) {
    section_top("SUGGESTIONS");
    let suggestions = service.suggest(locale, query, limit);
    if suggestions.is_empty() {
        row(&format!("  {}", themed(GRAY, &[], "(none)")));
    }
    for suggestion in &suggestions {
        row(&format!("  {}", suggestion));
    }
    section_bot();

    if let Some(corrected) = service.did_you_mean(locale, query) {
        println!("Did you mean: {}?", themed(CYAN, &[BOLD], &corrected));
    }

    let trending = service.trending(locale, limit);
    if !trending.is_empty() {
        println!("{} {}", themed(GRAY, &[], "Trending:"), trending.join(", "));
    }
}

fn run_inspect(service: &SearchService) {
    let locales = service.locales();
    if locales.is_empty() {
        println!("No content indexed.");
        return;
    }
    for locale in locales {
        let Some(index) = service.index(locale) else {
            continue;
        };
        let stats = index_stats(index);
        let marker = if locale == service.default_locale() { " (default)" } else { "" };
        section_top(&format!("LOCALE {}{}", stats.locale, marker));
        row(&format!("  {:<14}{}", "Entries", themed(GREEN, &[BOLD], &stats.entries.to_string())));
        row(&format!("  {:<14}{}", "Distinct tags", stats.distinct_tags));
        row("");
        for (topic, count) in &stats.by_topic {
            row(&format!("  {:<14}{:>4}", topic.as_str(), count));
        }
        row("");
        for (level, count) in &stats.by_level {
            row(&format!("  {:<14}{:>4}", level.as_str(), count));
        }
        section_bot();
    }
}
