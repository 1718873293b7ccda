//! Redirect-wrapper removal for alert feed links.
//!
//! Google Alerts publishes every link as a click-tracking redirect of the form
//! `https://www.google.com/url?rct=j&sa=t&url=<encoded target>&ct=ga&...`.
//! [`normalize_link`] recovers the target so the article itself is fetched.

use url::Url;

const REDIRECT_HOSTS: &[&str] = &["www.google.com", "google.com"];
const REDIRECT_PATH: &str = "/url";
const TARGET_PARAM: &str = "url";

/// Return the destination of a redirect-wrapped link, or the link unchanged.
///
/// Never fails: anything that does not parse as a wrapper URL is returned
/// as-is. Wrappers nested inside wrappers are peeled until a plain link is
/// left, which makes the operation idempotent.
///
/// # Examples
///
/// ```
/// use feed_summarizer::normalize::normalize_link;
///
/// let wrapped = "https://www.google.com/url?rct=j&sa=t&url=https%3A%2F%2Fexample.com%2Fa%3Fb%3D1&ct=ga";
/// assert_eq!(normalize_link(wrapped), "https://example.com/a?b=1");
/// assert_eq!(normalize_link("https://example.com/a"), "https://example.com/a");
/// ```
pub fn normalize_link(raw: &str) -> String {
    let mut current = raw.to_string();
    // Each target is decoded out of its wrapper's query, so it is shorter.
    while let Some(target) = unwrap_once(&current) {
        if target.len() >= current.len() {
            break;
        }
        current = target;
    }
    if current != raw {
        tracing::debug!(from = %raw, to = %current, "Unwrapped redirect link");
    }
    current
}

fn unwrap_once(link: &str) -> Option<String> {
    let parsed = Url::parse(link.trim()).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    let host = parsed.host_str()?;
    if !REDIRECT_HOSTS.contains(&host) || parsed.path() != REDIRECT_PATH {
        return None;
    }
    parsed
        .query_pairs()
        .find(|(key, value)| key == TARGET_PARAM && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}
