//! Error type shared by every stage of the pipeline.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A required setting was not provided.
    #[error("{0} is not set")]
    MissingConfig(&'static str),

    /// The input CSV does not exist or cannot be opened.
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The input CSV has no column with the expected header.
    #[error("column `{column}` not found in {}", .path.display())]
    MissingColumn { column: String, path: PathBuf },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("feed could not be parsed: {0}")]
    FeedParse(#[from] feed_rs::parser::ParseFeedError),

    /// The completion service answered with a non-success status.
    #[error("completion service returned {status}: {body}")]
    CompletionStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("completion service returned no choices")]
    EmptyCompletion,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_message() {
        let err = Error::MissingConfig("OPENAI_API_KEY");
        assert_eq!(err.to_string(), "OPENAI_API_KEY is not set");
    }

    #[test]
    fn test_missing_column_message() {
        let err = Error::MissingColumn {
            column: "URL".to_string(),
            path: PathBuf::from("links.csv"),
        };
        assert_eq!(err.to_string(), "column `URL` not found in links.csv");
    }
}
