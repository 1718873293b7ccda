//! Reducing article text to a short summary.
//!
//! Two interchangeable strategies implement [`Summarizer`]:
//!
//! | Strategy | Type | Notes |
//! |----------|------|-------|
//! | `truncate` | [`TruncationSummarizer`] | First N sentences, no I/O |
//! | `generative` | [`CompletionSummarizer`] | OpenAI-compatible completion, bounded tokens |
//!
//! [`AnySummarizer`] dispatches to whichever one the configuration selects.

pub mod completion;
pub mod truncate;

pub use completion::CompletionSummarizer;
pub use truncate::TruncationSummarizer;

use crate::config::SummaryConfig;
use crate::error::Error;
use clap::ValueEnum;
use reqwest::Client;

/// Which summarizer a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Keep the leading sentences of the article.
    Truncate,
    /// Ask a hosted completion model.
    Generative,
}

/// Reduce article text to a summary.
pub trait Summarizer {
    /// Summarize `text`.
    ///
    /// # Errors
    ///
    /// Implementations that call out to a service report its failures;
    /// the pipeline logs them and records an empty summary.
    async fn summarize(&self, text: &str) -> Result<String, Error>;
}

/// The summarizer chosen by [`Strategy`].
#[derive(Debug)]
pub enum AnySummarizer {
    Truncate(TruncationSummarizer),
    Generative(CompletionSummarizer),
}

impl AnySummarizer {
    /// Build the configured summarizer. The generative one shares `client`.
    pub fn from_config(config: &SummaryConfig, client: &Client) -> Self {
        match config.strategy {
            Strategy::Truncate => Self::Truncate(TruncationSummarizer::new(config.sentences)),
            Strategy::Generative => Self::Generative(CompletionSummarizer::new(
                client.clone(),
                &config.api_base,
                config.api_key.clone(),
                &config.model,
                config.max_tokens,
            )),
        }
    }
}

impl Summarizer for AnySummarizer {
    async fn summarize(&self, text: &str) -> Result<String, Error> {
        match self {
            Self::Truncate(s) => s.summarize(text).await,
            Self::Generative(s) => s.summarize(text).await,
        }
    }
}
