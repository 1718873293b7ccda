//! # Feed Summarizer
//!
//! Pulls article URLs out of an alert feed (RSS or Atom) or a CSV file,
//! downloads every article, keeps the text of its paragraphs, and reduces
//! that text to a short summary.
//!
//! ## Binaries
//!
//! - `feed_digest`: reads `GOOGLE_ALERTS_RSS_FEED_URL`, writes
//!   `google_alerts_summary.csv` with the first two sentences of each article.
//! - `csv_summarize`: reads the `URL` column of `CSV_FILE_PATH` and prints an
//!   LLM-generated summary for every row.
//!
//! ## Architecture
//!
//! 1. **Sources**: collect candidate links ([`sources`])
//! 2. **Normalizing**: strip redirect wrappers ([`normalize`])
//! 3. **Fetching**: download article HTML ([`fetch`])
//! 4. **Extracting**: keep paragraph text ([`extract`])
//! 5. **Summarizing**: truncate or ask a completion model ([`summarize`])
//! 6. **Reporting**: CSV file or console ([`report`])
//!
//! [`pipeline`] ties steps 2 through 6 together with a per-URL failure
//! boundary, so one bad article never stops the batch.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod sources;
pub mod summarize;
pub mod telemetry;
pub mod utils;

pub use error::Error;
