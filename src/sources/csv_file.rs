//! Links listed in a CSV file.

use crate::error::Error;
use crate::models::FeedEntry;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::{info, instrument};

/// Read the `column` value of every row of the CSV file at `path`, in file order.
///
/// The file must have a header row. Blank lines are skipped; rows whose cell
/// is empty still produce an (empty) entry so every row gets a record.
///
/// # Errors
///
/// - [`Error::InputNotFound`] if the file does not exist or cannot be opened
/// - [`Error::MissingColumn`] if no header equals `column`
/// - [`Error::Csv`] if the file is not valid CSV
#[instrument(level = "info", skip_all, fields(path = %path.display(), %column))]
pub fn read_urls(path: &Path, column: &str) -> Result<Vec<FeedEntry>, Error> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => Error::InputNotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;
    let entries = read_urls_from(file, column).map_err(|e| match e {
        Error::MissingColumn { column, .. } => Error::MissingColumn {
            column,
            path: path.to_path_buf(),
        },
        other => other,
    })?;
    info!(count = entries.len(), "Read URLs from CSV");
    Ok(entries)
}

/// Same as [`read_urls`] for any reader; a missing column reports an empty path.
pub fn read_urls_from<R: Read>(reader: R, column: &str) -> Result<Vec<FeedEntry>, Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let index = rdr
        .headers()?
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}') == column)
        .ok_or_else(|| Error::MissingColumn {
            column: column.to_string(),
            path: Default::default(),
        })?;

    let mut entries = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let link = record.get(index).unwrap_or("").trim();
        entries.push(FeedEntry::new(link));
    }
    Ok(entries)
}
