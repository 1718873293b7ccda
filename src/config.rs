//! Run configuration built once at start-up and passed into each component.
//!
//! The CLI structs in [`crate::cli`] describe what the user may set; the
//! structs here are what the library consumes. Required values are validated
//! during the conversion so a missing feed URL or CSV path stops the run
//! before any network traffic.

use crate::cli::{CsvSummarizeCli, FeedDigestCli, HttpArgs, SummaryArgs};
use crate::error::Error;
use crate::summarize::Strategy;
use std::path::PathBuf;
use std::time::Duration;

/// Settings for the shared HTTP client and the worker window.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub user_agent: String,
    pub timeout: Option<Duration>,
    pub concurrency: usize,
}

impl From<HttpArgs> for HttpConfig {
    fn from(args: HttpArgs) -> Self {
        Self {
            user_agent: args.user_agent,
            timeout: args.timeout_secs.map(Duration::from_secs),
            concurrency: args.concurrency.max(1),
        }
    }
}

/// Settings for the summarizer selected by `strategy`.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    pub strategy: Strategy,
    pub sentences: usize,
    /// Completion credential; only checked when the generative strategy runs.
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
    pub max_tokens: u32,
}

impl SummaryConfig {
    fn new(strategy: Strategy, args: SummaryArgs) -> Self {
        Self {
            strategy,
            sentences: args.sentences,
            api_key: args.openai_api_key.filter(|k| !k.trim().is_empty()),
            api_base: args.openai_api_base,
            model: args.openai_model,
            max_tokens: args.max_tokens,
        }
    }
}

/// Configuration of the `feed_digest` binary.
#[derive(Debug, Clone)]
pub struct FeedDigestConfig {
    pub feed_url: String,
    pub output: PathBuf,
    pub summary: SummaryConfig,
    pub http: HttpConfig,
}

impl TryFrom<FeedDigestCli> for FeedDigestConfig {
    type Error = Error;

    fn try_from(cli: FeedDigestCli) -> Result<Self, Self::Error> {
        let feed_url = cli
            .feed_url
            .filter(|u| !u.trim().is_empty())
            .ok_or(Error::MissingConfig("GOOGLE_ALERTS_RSS_FEED_URL"))?;
        Ok(Self {
            feed_url,
            output: PathBuf::from(cli.output),
            summary: SummaryConfig::new(cli.strategy, cli.summary),
            http: cli.http.into(),
        })
    }
}

/// Configuration of the `csv_summarize` binary.
#[derive(Debug, Clone)]
pub struct CsvSummarizeConfig {
    pub csv_file_path: PathBuf,
    pub url_column: String,
    pub summary: SummaryConfig,
    pub http: HttpConfig,
}

impl TryFrom<CsvSummarizeCli> for CsvSummarizeConfig {
    type Error = Error;

    fn try_from(cli: CsvSummarizeCli) -> Result<Self, Self::Error> {
        let csv_file_path = cli
            .csv_file_path
            .filter(|p| !p.trim().is_empty())
            .ok_or(Error::MissingConfig("CSV_FILE_PATH"))?;
        Ok(Self {
            csv_file_path: PathBuf::from(csv_file_path),
            url_column: cli.url_column,
            summary: SummaryConfig::new(cli.strategy, cli.summary),
            http: cli.http.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_args() -> SummaryArgs {
        SummaryArgs {
            openai_api_key: None,
            openai_api_base: "https://api.openai.com/v1".to_string(),
            openai_model: "davinci-002".to_string(),
            max_tokens: 100,
            sentences: 2,
        }
    }

    fn http_args() -> HttpArgs {
        HttpArgs {
            concurrency: 1,
            timeout_secs: None,
            user_agent: "feed_summarizer-test".to_string(),
        }
    }

    fn feed_digest_cli(feed_url: Option<&str>) -> FeedDigestCli {
        FeedDigestCli {
            feed_url: feed_url.map(str::to_string),
            output: "google_alerts_summary.csv".to_string(),
            strategy: Strategy::Truncate,
            summary: summary_args(),
            http: http_args(),
        }
    }

    #[test]
    fn test_missing_feed_url_is_config_error() {
        for feed_url in [None, Some(""), Some("  ")] {
            let err = FeedDigestConfig::try_from(feed_digest_cli(feed_url)).unwrap_err();
            assert!(matches!(err, Error::MissingConfig("GOOGLE_ALERTS_RSS_FEED_URL")));
        }
    }

    #[test]
    fn test_blank_csv_path_is_config_error() {
        let cli = CsvSummarizeCli {
            csv_file_path: Some("   ".to_string()),
            url_column: "URL".to_string(),
            strategy: Strategy::Generative,
            summary: summary_args(),
            http: http_args(),
        };
        let err = CsvSummarizeConfig::try_from(cli).unwrap_err();
        assert!(matches!(err, Error::MissingConfig("CSV_FILE_PATH")));
    }

    #[test]
    fn test_feed_digest_config_conversion() {
        let mut cli = feed_digest_cli(Some("https://example.com/feed"));
        cli.http.timeout_secs = Some(15);
        cli.http.concurrency = 0;
        cli.summary.openai_api_key = Some(String::new());
        let config = FeedDigestConfig::try_from(cli).unwrap();

        assert_eq!(config.feed_url, "https://example.com/feed");
        assert_eq!(config.output, PathBuf::from("google_alerts_summary.csv"));
        assert_eq!(config.http.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.http.concurrency, 1);
        assert!(config.summary.api_key.is_none());
    }
}
