//! Data models passed between pipeline stages.
//!
//! - [`FeedEntry`]: a candidate link read from a feed or a CSV row
//! - [`FeedOutcome`]: the result of reading a remote feed
//! - [`ResultRecord`]: one row of the final report
//! - [`RunStats`]: counters reported when a run finishes

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// A single link read from a feed entry or a CSV row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    /// The link exactly as the source published it (possibly redirect-wrapped).
    pub link: String,
}

impl FeedEntry {
    pub fn new(link: impl Into<String>) -> Self {
        Self { link: link.into() }
    }
}

/// Outcome of fetching and parsing a remote feed.
///
/// An empty feed and a feed that could not be read both yield no links, but
/// callers can tell them apart.
#[derive(Debug)]
pub enum FeedOutcome {
    /// The feed was read; it may contain zero entries.
    Entries(Vec<FeedEntry>),
    /// The feed could not be fetched or parsed.
    FetchFailed(Error),
}

impl FeedOutcome {
    /// Links of the feed, or an empty list when the fetch failed.
    pub fn into_links(self) -> Vec<String> {
        match self {
            FeedOutcome::Entries(entries) => entries.into_iter().map(|e| e.link).collect(),
            FeedOutcome::FetchFailed(_) => Vec::new(),
        }
    }
}

/// One row of the report: an article URL and its summary.
///
/// The summary is empty when the article could not be fetched, had no
/// paragraph text, or could not be summarized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "First Two Sentences")]
    pub summary: String,
}

/// Counters for a finished run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Number of URLs processed.
    pub total: usize,
    /// Number of records whose summary ended up empty.
    pub empty: usize,
}
