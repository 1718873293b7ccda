//! The per-article pipeline: normalize, fetch, extract, summarize, report.
//!
//! [`process_url`] is the failure boundary. Whatever goes wrong for one URL
//! (bad link, HTTP error, empty page, summarizer failure) is logged with the
//! URL and turns into an empty summary; the batch always continues.
//!
//! [`run`] drives URLs through an order-preserving window of `concurrency`
//! in-flight articles. With the default width of 1 each article is finished
//! before the next one starts.
//!
//! [`run_feed_digest`] and [`run_csv_summarize`] are the two end-to-end
//! flows behind the binaries. User-facing lines go to the `out` writer
//! (stdout in the binaries); diagnostics go to `tracing`.

use crate::config::{CsvSummarizeConfig, FeedDigestConfig};
use crate::error::Error;
use crate::extract::extract_paragraph_text;
use crate::fetch::fetch_or_empty;
use crate::models::{FeedOutcome, ResultRecord, RunStats};
use crate::normalize::normalize_link;
use crate::report::{ConsoleReport, CsvReport, Report};
use crate::sources::csv_file::read_urls;
use crate::sources::feed::fetch_feed;
use crate::summarize::{AnySummarizer, Summarizer};
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// Printed when the feed yields nothing to summarize.
pub const NO_URLS_MESSAGE: &str = "No URLs found in Google Alerts feed.";
/// Printed once the CSV report is on disk.
pub const SAVED_MESSAGE: &str = "CSV file saved successfully.";

/// Produce the record for a single (already normalized) URL.
#[instrument(level = "info", skip(client, summarizer))]
pub async fn process_url<S: Summarizer>(client: &Client, summarizer: &S, url: &str) -> ResultRecord {
    let html = fetch_or_empty(client, url).await;
    let text = extract_paragraph_text(&html);

    let summary = if text.is_empty() {
        debug!("No paragraph text; skipping summarizer");
        String::new()
    } else {
        match summarizer.summarize(&text).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!(error = %e, "Summarization failed; recording empty summary");
                String::new()
            }
        }
    };

    ResultRecord {
        url: url.to_string(),
        summary,
    }
}

/// Normalize and process every link, handing records to `report` in input order.
///
/// # Errors
///
/// Only failures of the report itself (e.g. the output file cannot be
/// written) are returned; per-URL failures are absorbed by [`process_url`].
#[instrument(level = "info", skip_all, fields(urls = links.len(), concurrency = concurrency))]
pub async fn run<S, R>(
    client: &Client,
    summarizer: &S,
    links: Vec<String>,
    concurrency: usize,
    report: &mut R,
) -> Result<RunStats, Error>
where
    S: Summarizer,
    R: Report,
{
    let mut stats = RunStats::default();
    let mut records = stream::iter(links)
        .map(move |link| async move {
            let url = normalize_link(&link);
            process_url(client, summarizer, &url).await
        })
        .buffered(concurrency.max(1));

    while let Some(record) = records.next().await {
        stats.total += 1;
        if record.summary.is_empty() {
            stats.empty += 1;
        }
        report.record(&record)?;
    }
    report.finish()?;

    info!(total = stats.total, empty = stats.empty, "Pipeline finished");
    Ok(stats)
}

/// Summarize every article of the configured feed into the configured CSV file.
///
/// Returns `Ok(None)` without touching the output path when the feed is
/// empty or cannot be read; [`NO_URLS_MESSAGE`] is written to `out` in both
/// cases. Otherwise the CSV is written, [`SAVED_MESSAGE`] is written to
/// `out`, and the run's counts are returned.
///
/// # Errors
///
/// Fails only if the report cannot be written or `out` rejects a message.
#[instrument(level = "info", skip_all, fields(feed = %config.feed_url))]
pub async fn run_feed_digest<W: Write>(
    config: &FeedDigestConfig,
    client: &Client,
    out: &mut W,
) -> Result<Option<RunStats>, Error> {
    let entries = match fetch_feed(client, &config.feed_url).await {
        FeedOutcome::Entries(entries) if !entries.is_empty() => entries,
        FeedOutcome::Entries(_) => {
            warn!("Feed has no entries");
            writeln!(out, "{NO_URLS_MESSAGE}")?;
            return Ok(None);
        }
        FeedOutcome::FetchFailed(e) => {
            warn!(error = %e, "Feed could not be read");
            writeln!(out, "{NO_URLS_MESSAGE}")?;
            return Ok(None);
        }
    };
    let links: Vec<String> = entries.into_iter().map(|e| e.link).collect();
    info!(count = links.len(), strategy = ?config.summary.strategy, "Summarizing feed articles");

    let summarizer = AnySummarizer::from_config(&config.summary, client);
    let mut report = CsvReport::new(&config.output);
    let stats = run(client, &summarizer, links, config.http.concurrency, &mut report).await?;
    writeln!(out, "{SAVED_MESSAGE}")?;
    Ok(Some(stats))
}

/// Print a summary block to `out` for every URL in the configured CSV column.
///
/// # Errors
///
/// Returns [`Error::InputNotFound`] or [`Error::MissingColumn`] when the
/// input cannot be read, before any article is fetched.
#[instrument(level = "info", skip_all, fields(path = %config.csv_file_path.display()))]
pub async fn run_csv_summarize<W: Write>(
    config: &CsvSummarizeConfig,
    client: &Client,
    out: W,
) -> Result<RunStats, Error> {
    let links: Vec<String> = read_urls(&config.csv_file_path, &config.url_column)?
        .into_iter()
        .map(|e| e.link)
        .collect();
    info!(count = links.len(), strategy = ?config.summary.strategy, "Summarizing CSV articles");

    let summarizer = AnySummarizer::from_config(&config.summary, client);
    let mut report = ConsoleReport::new(out);
    run(client, &summarizer, links, config.http.concurrency, &mut report).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarize::TruncationSummarizer;
    use std::cell::Cell;

    /// Fails on every call after recording it.
    struct FailingSummarizer {
        calls: Cell<usize>,
    }

    impl Summarizer for FailingSummarizer {
        async fn summarize(&self, _text: &str) -> Result<String, Error> {
            self.calls.set(self.calls.get() + 1);
            Err(Error::EmptyCompletion)
        }
    }

    #[tokio::test]
    async fn test_unreachable_url_skips_summarizer() {
        let summarizer = FailingSummarizer { calls: Cell::new(0) };
        let record = process_url(&Client::new(), &summarizer, "not a url").await;
        assert_eq!(record.url, "not a url");
        assert_eq!(record.summary, "");
        assert_eq!(summarizer.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_summarizer_failure_degrades_to_empty() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/a")
            .with_status(200)
            .with_body("<p>Some text. More text.</p>")
            .create_async()
            .await;

        let summarizer = FailingSummarizer { calls: Cell::new(0) };
        let url = format!("{}/a", server.url());
        let record = process_url(&Client::new(), &summarizer, &url).await;
        assert_eq!(record.summary, "");
        assert_eq!(summarizer.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_run_normalizes_and_preserves_order() {
        let mut server = mockito::Server::new_async().await;
        let _a = server
            .mock("GET", "/a")
            .with_status(200)
            .with_body("<p>Alpha one. Alpha two. Alpha three.</p>")
            .create_async()
            .await;
        let _b = server
            .mock("GET", "/b")
            .with_status(200)
            .with_body("<p>Beta one.</p>")
            .create_async()
            .await;

        let a = format!("{}/a", server.url());
        let b = format!("{}/b", server.url());
        let wrapped_b = format!(
            "https://www.google.com/url?rct=j&sa=t&url={}&ct=ga",
            urlencoding::encode(&b)
        );

        let mut report = ConsoleReport::new(Vec::new());
        let stats = run(
            &Client::new(),
            &TruncationSummarizer::default(),
            vec![a.clone(), wrapped_b, a.clone()],
            3,
            &mut report,
        )
        .await
        .unwrap();

        assert_eq!(stats, RunStats { total: 3, empty: 0 });
        let out = String::from_utf8(report.into_inner()).unwrap();
        let expected = format!(
            "Summarizing article from: {a}\nSummary: Alpha one. Alpha two.\n\n\
             Summarizing article from: {b}\nSummary: Beta one.\n\n\
             Summarizing article from: {a}\nSummary: Alpha one. Alpha two.\n\n"
        );
        assert_eq!(out, expected);
    }
}
