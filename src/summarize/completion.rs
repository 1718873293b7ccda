//! Generative summaries from an OpenAI-compatible completion endpoint.
//!
//! The article text is sent verbatim as the prompt and the model's
//! continuation, capped at `max_tokens`, becomes the summary. One request
//! per article, no retry.

use super::Summarizer;
use crate::error::Error;
use crate::utils::truncate_for_log;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;
use tracing::{info, instrument, warn};

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    text: String,
}

/// Client for the `/completions` endpoint.
pub struct CompletionSummarizer {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    max_tokens: u32,
}

impl CompletionSummarizer {
    /// Create a summarizer posting to `{api_base}/completions`.
    ///
    /// A missing `api_key` is not an error here; it is reported by the first
    /// call to [`Summarizer::summarize`].
    pub fn new(
        client: Client,
        api_base: &str,
        api_key: Option<String>,
        model: &str,
        max_tokens: u32,
    ) -> Self {
        Self {
            client,
            endpoint: format!("{}/completions", api_base.trim_end_matches('/')),
            api_key,
            model: model.to_string(),
            max_tokens,
        }
    }
}

impl fmt::Debug for CompletionSummarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionSummarizer")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

impl Summarizer for CompletionSummarizer {
    #[instrument(level = "info", skip_all, fields(model = %self.model, prompt_bytes = text.len()))]
    async fn summarize(&self, text: &str) -> Result<String, Error> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(Error::MissingConfig("OPENAI_API_KEY"))?;

        let t0 = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&CompletionRequest {
                model: &self.model,
                prompt: text,
                max_tokens: self.max_tokens,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                %status,
                elapsed_ms = t0.elapsed().as_millis() as u64,
                body = %truncate_for_log(&body, 300),
                "Completion request rejected"
            );
            return Err(Error::CompletionStatus { status, body });
        }

        let parsed: CompletionResponse = response.json().await?;
        let summary = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.text.trim().to_string())
            .ok_or(Error::EmptyCompletion)?;

        info!(
            elapsed_ms = t0.elapsed().as_millis() as u64,
            summary_bytes = summary.len(),
            "Completion received"
        );
        Ok(summary)
    }
}
