//! Links published by an RSS or Atom feed.
//!
//! Parsing is delegated to `feed-rs`, which accepts RSS 0.9x/1.0/2.0, Atom
//! and JSON Feed. Google Alerts publishes Atom.

use crate::error::Error;
use crate::models::{FeedEntry, FeedOutcome};
use feed_rs::model::{Entry, Link};
use feed_rs::parser;
use reqwest::Client;
use tracing::{debug, error, info, instrument};

/// The `alternate` link of an entry (explicit or implied), else its first link.
fn primary_link(entry: Entry) -> Option<String> {
    let usable = |link: &Link| !link.href.trim().is_empty();
    let alternate = entry
        .links
        .iter()
        .find(|l| usable(l) && matches!(l.rel.as_deref(), None | Some("alternate")));
    alternate
        .or_else(|| entry.links.iter().find(|l| usable(l)))
        .map(|l| l.href.trim().to_string())
}

/// Parse a feed document into its entry links, in document order.
///
/// Entries without a usable link are skipped.
///
/// # Errors
///
/// Returns [`Error::FeedParse`] if `body` is not a recognizable feed.
pub fn parse_feed(body: &[u8]) -> Result<Vec<FeedEntry>, Error> {
    let feed = parser::parse(body)?;
    let entries: Vec<FeedEntry> = feed
        .entries
        .into_iter()
        .filter_map(primary_link)
        .map(FeedEntry::new)
        .collect();
    debug!(count = entries.len(), "Parsed feed entries");
    Ok(entries)
}

async fn read_feed(client: &Client, url: &str) -> Result<Vec<FeedEntry>, Error> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    parse_feed(&body)
}

/// Fetch and parse the feed at `url`.
///
/// Never fails: a network, status or parse error is logged and returned as
/// [`FeedOutcome::FetchFailed`] so the caller can report it separately from
/// an empty feed.
#[instrument(level = "info", skip(client))]
pub async fn fetch_feed(client: &Client, url: &str) -> FeedOutcome {
    match read_feed(client, url).await {
        Ok(entries) => {
            info!(count = entries.len(), "Fetched feed");
            FeedOutcome::Entries(entries)
        }
        Err(e) => {
            error!(error = %e, "Error fetching URLs from feed");
            FeedOutcome::FetchFailed(e)
        }
    }
}
