//! Leading-sentence summaries.
//!
//! Candidate boundaries come from Unicode Standard Annex #29, which handles
//! decimal numbers, closing quotes and non-Latin terminators. UAX #29 breaks
//! after every period followed by a capital, so candidates ending in a
//! known abbreviation ("Mr.", "Dr.", "Inc.") or an initialism ("U.S.",
//! "J.") are joined with the next one.

use super::Summarizer;
use crate::error::Error;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

const ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "sr.", "jr.", "st.", "mt.", "ft.", "rev.", "hon.",
    "gen.", "col.", "lt.", "sgt.", "capt.", "cmdr.", "adm.", "gov.", "sen.", "rep.", "pres.",
    "inc.", "ltd.", "co.", "corp.", "bros.", "dept.", "univ.", "assn.", "vs.", "etc.", "e.g.",
    "i.e.", "approx.", "est.", "no.", "vol.", "fig.", "jan.", "feb.", "mar.", "apr.", "jun.",
    "jul.", "aug.", "sep.", "sept.", "oct.", "nov.", "dec.",
];

/// "U.S.", "e.u.", or a single capital initial such as "J.".
static INITIALISM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\p{L}\.){2,}$|^\p{Lu}\.$").expect("static regex"));

/// Whether `candidate` ends with a period that does not end a sentence.
fn ends_with_abbreviation(candidate: &str) -> bool {
    let Some(last) = candidate.split_whitespace().next_back() else {
        return false;
    };
    let word = last.trim_start_matches(|c: char| !c.is_alphanumeric());
    if !word.ends_with('.') {
        return false;
    }
    ABBREVIATIONS.contains(&word.to_lowercase().as_str()) || INITIALISM.is_match(word)
}

/// Split `text` into trimmed sentences, in order.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start: Option<usize> = None;
    for (idx, segment) in text.split_sentence_bound_indices() {
        let begin = *start.get_or_insert(idx);
        let candidate = text[begin..idx + segment.len()].trim();
        if !candidate.chars().any(char::is_alphanumeric) {
            start = None;
            continue;
        }
        if ends_with_abbreviation(candidate) {
            continue;
        }
        out.push(candidate);
        start = None;
    }
    if let Some(begin) = start {
        let rest = text[begin..].trim();
        if !rest.is_empty() {
            out.push(rest);
        }
    }
    out
}

/// Keeps the first `sentences` sentences of the text.
#[derive(Debug, Clone, Copy)]
pub struct TruncationSummarizer {
    sentences: usize,
}

impl TruncationSummarizer {
    pub fn new(sentences: usize) -> Self {
        Self { sentences }
    }

    /// The first `self.sentences` sentences of `text`, trimmed and joined by single spaces.
    pub fn leading_sentences(&self, text: &str) -> String {
        sentences(text).into_iter().take(self.sentences).join(" ")
    }
}

impl Default for TruncationSummarizer {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Summarizer for TruncationSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, Error> {
        Ok(self.leading_sentences(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE: [&str; 5] = [
        "The council met on Tuesday.",
        "It approved a budget of 3.5 million dollars.",
        "Residents asked questions!",
        "Was the vote unanimous?",
        "Yes, it was.",
    ];

    fn text_of(n: usize) -> String {
        FIVE[..n].join(" ")
    }

    #[test]
    fn test_min_of_n_and_two() {
        let summarizer = TruncationSummarizer::default();
        for n in [0, 1, 2, 5] {
            let expected = FIVE[..n.min(2)].join(" ");
            assert_eq!(summarizer.leading_sentences(&text_of(n)), expected, "n = {n}");
        }
    }

    #[test]
    fn test_irregular_whitespace() {
        let summarizer = TruncationSummarizer::default();
        let text = "  First line.\n\n   Second line.    Third line.  ";
        assert_eq!(summarizer.leading_sentences(text), "First line. Second line.");
    }

    #[test]
    fn test_custom_count() {
        let summarizer = TruncationSummarizer::new(3);
        assert_eq!(summarizer.leading_sentences(&text_of(5)), FIVE[..3].join(" "));
        assert_eq!(TruncationSummarizer::new(0).leading_sentences(&text_of(5)), "");
    }

    #[test]
    fn test_unterminated_text_is_one_sentence() {
        let summarizer = TruncationSummarizer::default();
        assert_eq!(summarizer.leading_sentences("no terminator here"), "no terminator here");
    }

    #[test]
    fn test_titles_do_not_end_sentences() {
        let summarizer = TruncationSummarizer::default();
        assert_eq!(
            summarizer.leading_sentences(
                "Mr. Smith went to Washington. He met Dr. Jones there. Then he left."
            ),
            "Mr. Smith went to Washington. He met Dr. Jones there."
        );
    }

    #[test]
    fn test_initialisms_do_not_end_sentences() {
        let summarizer = TruncationSummarizer::default();
        assert_eq!(
            summarizer.leading_sentences("The U.S. Senate voted on Monday. It passed easily. Done."),
            "The U.S. Senate voted on Monday. It passed easily."
        );
        assert_eq!(
            summarizer.leading_sentences("John F. Kennedy spoke (approx. Noon). Crowds cheered."),
            "John F. Kennedy spoke (approx. Noon). Crowds cheered."
        );
    }

    #[test]
    fn test_trailing_abbreviation_kept() {
        assert_eq!(
            sentences("Shares of Acme Inc. rose. They sold pens, paper, etc."),
            ["Shares of Acme Inc. rose.", "They sold pens, paper, etc."]
        );
    }

    #[tokio::test]
    async fn test_summarize_never_fails() {
        let summary = TruncationSummarizer::default().summarize("").await.unwrap();
        assert_eq!(summary, "");
    }
}
