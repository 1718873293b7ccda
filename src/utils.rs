//! Small helpers for logging and file system checks.

use std::error::Error;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument};

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (on a character boundary) with
/// an ellipsis and the number of dropped bytes appended.
///
/// # Examples
///
/// ```
/// use feed_summarizer::utils::truncate_for_log;
///
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Ensure the directory that will hold `file` exists and is writable.
///
/// Creates the directory if needed, then creates and removes a probe file.
/// Used before a run so an unwritable report path fails fast instead of after
/// every article has been fetched.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or written to.
#[instrument(level = "info", skip_all, fields(path = %file.display()))]
pub async fn ensure_writable_parent(file: &Path) -> Result<(), Box<dyn Error>> {
    let dir = match file.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).await?;
    let probe_path = dir.join("..__probe_write__");
    stdfs::File::create(&probe_path)?;
    remove_probe(&probe_path);
    info!(dir = %dir.display(), "Output directory is writable");
    Ok(())
}

/// Delete the write probe; a leftover probe is harmless, so failure is only logged.
fn remove_probe(path: &Path) -> bool {
    match stdfs::remove_file(path) {
        Ok(()) => true,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Could not remove probe file");
            false
        }
    }
}
