//! Command-line interface definitions for both binaries.
//!
//! Every argument is backed by an environment variable, so the binaries run
//! with no arguments at all once the environment (or a `.env` file) is set.

use crate::summarize::Strategy;
use clap::{Args, Parser};

/// Arguments for `feed_digest`: summarize every article of an alert feed into a CSV file.
///
/// # Examples
///
/// ```sh
/// GOOGLE_ALERTS_RSS_FEED_URL=https://www.google.com/alerts/feeds/123/456 feed_digest
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct FeedDigestCli {
    /// RSS or Atom feed to read article links from
    #[arg(long, env = "GOOGLE_ALERTS_RSS_FEED_URL")]
    pub feed_url: Option<String>,

    /// Where to write the CSV report (overwritten)
    #[arg(long, env = "OUTPUT_CSV_PATH", default_value = "google_alerts_summary.csv")]
    pub output: String,

    /// How to summarize each article
    #[arg(long, env = "SUMMARY_STRATEGY", value_enum, default_value_t = Strategy::Truncate)]
    pub strategy: Strategy,

    #[command(flatten)]
    pub summary: SummaryArgs,

    #[command(flatten)]
    pub http: HttpArgs,
}

/// Arguments for `csv_summarize`: print a summary for every URL listed in a CSV file.
///
/// # Examples
///
/// ```sh
/// CSV_FILE_PATH=links.csv OPENAI_API_KEY=sk-... csv_summarize
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct CsvSummarizeCli {
    /// CSV file with a header row and one article URL per row
    #[arg(long, env = "CSV_FILE_PATH")]
    pub csv_file_path: Option<String>,

    /// Name of the column holding the article URLs
    #[arg(long, env = "URL_COLUMN", default_value = "URL")]
    pub url_column: String,

    /// How to summarize each article
    #[arg(long, env = "SUMMARY_STRATEGY", value_enum, default_value_t = Strategy::Generative)]
    pub strategy: Strategy,

    #[command(flatten)]
    pub summary: SummaryArgs,

    #[command(flatten)]
    pub http: HttpArgs,
}

/// Summarizer settings shared by both binaries.
#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    /// API key for the completion service (only needed by the generative strategy)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// Base URL of the OpenAI-compatible completion API
    #[arg(long, env = "OPENAI_API_BASE", default_value = "https://api.openai.com/v1")]
    pub openai_api_base: String,

    /// Completion model name
    #[arg(long, env = "OPENAI_MODEL", default_value = "davinci-002")]
    pub openai_model: String,

    /// Maximum number of tokens the completion may produce
    #[arg(long, env = "SUMMARY_MAX_TOKENS", default_value_t = 100)]
    pub max_tokens: u32,

    /// Number of leading sentences kept by the truncate strategy
    #[arg(long, env = "SUMMARY_SENTENCES", default_value_t = 2)]
    pub sentences: usize,
}

/// HTTP and scheduling settings shared by both binaries.
#[derive(Args, Debug, Clone)]
pub struct HttpArgs {
    /// Number of articles processed at once (1 = strictly sequential)
    #[arg(long, env = "FETCH_CONCURRENCY", default_value_t = 1)]
    pub concurrency: usize,

    /// Per-request timeout in seconds (client default when unset)
    #[arg(long, env = "HTTP_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with every request
    #[arg(long, env = "HTTP_USER_AGENT", default_value = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Command, CommandFactory};

    /// Declared default and env var of `id`, independent of the process env.
    fn declared(cmd: &Command, id: &str) -> (Option<String>, Option<String>) {
        let arg = cmd
            .get_arguments()
            .find(|a| a.get_id() == id)
            .unwrap_or_else(|| panic!("no argument {id}"));
        let default = arg
            .get_default_values()
            .first()
            .map(|v| v.to_string_lossy().into_owned());
        let env = arg.get_env().map(|v| v.to_string_lossy().into_owned());
        (default, env)
    }

    #[test]
    fn test_feed_digest_defaults() {
        let cmd = FeedDigestCli::command();
        let expected = [
            ("feed_url", None, "GOOGLE_ALERTS_RSS_FEED_URL"),
            ("output", Some("google_alerts_summary.csv"), "OUTPUT_CSV_PATH"),
            ("strategy", Some("truncate"), "SUMMARY_STRATEGY"),
            ("sentences", Some("2"), "SUMMARY_SENTENCES"),
            ("max_tokens", Some("100"), "SUMMARY_MAX_TOKENS"),
            ("openai_model", Some("davinci-002"), "OPENAI_MODEL"),
            ("concurrency", Some("1"), "FETCH_CONCURRENCY"),
            ("timeout_secs", None, "HTTP_TIMEOUT_SECS"),
        ];
        for (id, default, env) in expected {
            let (got_default, got_env) = declared(&cmd, id);
            assert_eq!(got_default.as_deref(), default, "default of {id}");
            assert_eq!(got_env.as_deref(), Some(env), "env of {id}");
        }
    }

    #[test]
    fn test_csv_summarize_defaults() {
        let cmd = CsvSummarizeCli::command();
        assert_eq!(declared(&cmd, "url_column").0.as_deref(), Some("URL"));
        assert_eq!(declared(&cmd, "strategy").0.as_deref(), Some("generative"));
        assert_eq!(
            declared(&cmd, "csv_file_path").1.as_deref(),
            Some("CSV_FILE_PATH")
        );
    }

    #[test]
    fn test_csv_summarize_flags() {
        let cli = CsvSummarizeCli::parse_from([
            "csv_summarize",
            "--csv-file-path",
            "/tmp/links.csv",
            "--url-column",
            "link",
            "--strategy",
            "truncate",
            "--concurrency",
            "4",
        ]);

        assert_eq!(cli.csv_file_path.as_deref(), Some("/tmp/links.csv"));
        assert_eq!(cli.url_column, "link");
        assert_eq!(cli.strategy, Strategy::Truncate);
        assert_eq!(cli.http.concurrency, 4);
    }
}
