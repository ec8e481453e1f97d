//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical record builders and a small sample corpus.

#![doc(hidden)]

use crate::build::{index_records, ContentRecord};
use crate::types::{ContentIndex, ContentType, Level, Topic};

/// Create a record with neutral defaults: basics, beginner, explainer, no tags.
pub fn make_record(slug: &str, title: &str) -> ContentRecord {
    ContentRecord {
        slug: slug.to_string(),
        title: title.to_string(),
        summary: "Placeholder text for tests.".to_string(),
        topic: Topic::Basics,
        level: Level::Beginner,
        content_type: ContentType::Explainer,
        tags: vec![],
    }
}

/// Create a record with every searchable field spelled out.
pub fn make_record_full(
    slug: &str,
    title: &str,
    summary: &str,
    tags: &[&str],
    topic: Topic,
    level: Level,
) -> ContentRecord {
    ContentRecord {
        slug: slug.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        topic,
        level,
        content_type: ContentType::Explainer,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// A handful of English articles covering several topics and levels.
pub fn sample_records() -> Vec<ContentRecord> {
    vec![
        make_record_full(
            "what-is-bitcoin",
            "What is Bitcoin?",
            "A digital currency without banks.",
            &["basics", "currency"],
            Topic::Basics,
            Level::Beginner,
        ),
        make_record_full(
            "how-mining-works",
            "How Mining Works",
            "Miners compete to add blocks and secure the Bitcoin network.",
            &["proof-of-work", "hashrate"],
            Topic::Mining,
            Level::Intermediate,
        ),
        ContentRecord {
            content_type: ContentType::Qa,
            ..make_record_full(
                "is-mining-wasteful",
                "Is mining wasteful?",
                "The energy debate around proof-of-work.",
                &["energy", "criticism"],
                Topic::Mining,
                Level::Advanced,
            )
        },
        make_record_full(
            "choosing-a-wallet",
            "Choosing a Wallet",
            "Hot wallets, cold storage and hardware devices compared.",
            &["wallets", "self-custody"],
            Topic::Wallets,
            Level::Beginner,
        ),
        ContentRecord {
            content_type: ContentType::Glossary,
            ..make_record_full(
                "halving",
                "Halving",
                "The scheduled cut in the block subsidy every 210,000 blocks.",
                &["supply", "monetary-policy"],
                Topic::Economics,
                Level::Intermediate,
            )
        },
        make_record_full(
            "lightning-channels",
            "Lightning Channels",
            "Payment channels let two parties transact off-chain.",
            &["layer-2", "payments"],
            Topic::Lightning,
            Level::Advanced,
        ),
    ]
}

/// The sample corpus as an English index.
pub fn sample_index() -> ContentIndex {
    index_records("en", sample_records())
}
