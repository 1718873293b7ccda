//! Report writers for finished records.
//!
//! - [`CsvReport`]: collects every record and writes one CSV file at the end
//! - [`ConsoleReport`]: prints each record as soon as it is ready
//!
//! # CSV layout
//!
//! ```text
//! URL,First Two Sentences
//! https://example.com/a,First sentence. Second sentence.
//! https://example.com/b,
//! ```

use crate::error::Error;
use crate::models::ResultRecord;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Sink for records produced by the pipeline, in input order.
pub trait Report {
    /// Accept the next record.
    fn record(&mut self, record: &ResultRecord) -> Result<(), Error>;

    /// Called once after the last record.
    fn finish(&mut self) -> Result<(), Error>;
}

/// Serialize `records` as CSV (header row, no index column) into `writer`.
pub fn write_csv<W: Write>(writer: W, records: &[ResultRecord]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(["URL", "First Two Sentences"])?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes all records to a CSV file when the run finishes, replacing any existing file.
#[derive(Debug)]
pub struct CsvReport {
    path: PathBuf,
    records: Vec<ResultRecord>,
}

impl CsvReport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }
}

impl Report for CsvReport {
    fn record(&mut self, record: &ResultRecord) -> Result<(), Error> {
        self.records.push(record.clone());
        Ok(())
    }

    #[instrument(level = "info", skip_all, fields(path = %self.path.display(), rows = self.records.len()))]
    fn finish(&mut self) -> Result<(), Error> {
        let file = std::fs::File::create(&self.path)?;
        write_csv(io::BufWriter::new(file), &self.records)?;
        info!("CSV file saved successfully.");
        Ok(())
    }
}

/// Prints each record as
///
/// ```text
/// Summarizing article from: <url>
/// Summary: <summary>
///
/// ```
#[derive(Debug)]
pub struct ConsoleReport<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Report for ConsoleReport<W> {
    fn record(&mut self, record: &ResultRecord) -> Result<(), Error> {
        writeln!(self.out, "Summarizing article from: {}", record.url)?;
        writeln!(self.out, "Summary: {}", record.summary)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Error> {
        self.out.flush()?;
        Ok(())
    }
}
