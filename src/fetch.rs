//! Article download.
//!
//! One GET per URL, no retry. A non-success status counts as a failure.
//!
//! Bodies are decoded with the charset from the `Content-Type` header, else
//! the one declared by a `<meta>` tag near the top of the page, else UTF-8.
//! A byte-order mark wins over both.

use crate::config::HttpConfig;
use crate::error::Error;
use encoding_rs::{Encoding, UTF_8};
use once_cell::sync::Lazy;
use regex::bytes::Regex;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument, warn};

/// How far into the body a `<meta charset>` declaration is looked for.
const META_SNIFF_LEN: usize = 1024;

static META_CHARSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?\s*([A-Za-z0-9_\-:.]+)"#).expect("static regex")
});

/// Build the HTTP client shared by the feed reader, fetcher and summarizer.
///
/// Without a configured timeout the client keeps reqwest's default (none).
pub fn build_client(config: &HttpConfig) -> Result<Client, Error> {
    let mut builder = Client::builder().user_agent(config.user_agent.clone());
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Fetch the body of `url` as text.
///
/// # Errors
///
/// Returns [`Error::Http`] when the URL is malformed, the connection fails,
/// or the server answers with a 4xx/5xx status.
#[instrument(level = "debug", skip(client))]
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, Error> {
    let response = client.get(url).send().await?.error_for_status()?;
    let header_charset = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(charset_param)
        .map(str::to_string);
    let bytes = response.bytes().await?;
    let body = decode_body(&bytes, header_charset.as_deref());
    debug!(bytes = bytes.len(), "Fetched article");
    Ok(body)
}

/// The `charset` parameter of a `Content-Type` value.
fn charset_param(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
    })
}

/// Decode an HTML body, preferring `header_charset`, then a `<meta>` declaration.
///
/// Unknown labels fall back to UTF-8; malformed sequences become U+FFFD.
pub fn decode_body(bytes: &[u8], header_charset: Option<&str>) -> String {
    let head = &bytes[..bytes.len().min(META_SNIFF_LEN)];
    let encoding = header_charset
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .or_else(|| {
            META_CHARSET
                .captures(head)
                .and_then(|c| Encoding::for_label(&c[1]))
        })
        .unwrap_or(UTF_8);
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        debug!(encoding = used.name(), "Body had malformed sequences");
    }
    text.into_owned()
}

/// Fetch the body of `url`, logging any failure and returning an empty string instead.
pub async fn fetch_or_empty(client: &Client, url: &str) -> String {
    match fetch_html(client, url).await {
        Ok(body) => body,
        Err(e) => {
            warn!(%url, error = %e, "Error extracting content from URL");
            String::new()
        }
    }
}
