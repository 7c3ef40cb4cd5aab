use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::flatten::{FlatRow, field_names};

/// Append-only CSV destination for flat match rows.
///
/// The header is written on creation; rows follow in the order they are
/// appended. Nothing is rolled back if the run fails part way.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    rows_written: usize,
}

impl CsvSink<File> {
    /// Create or truncate `path` and write the header
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file {}", path.display()))?;
        let sink = Self::from_writer(file)?;
        info!("Writing matches to {}", path.display());
        Ok(sink)
    }
}

impl<W: Write> CsvSink<W> {
    pub fn from_writer(inner: W) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(inner);
        writer
            .write_record(field_names())
            .context("Failed to write CSV header")?;
        Ok(Self {
            writer,
            rows_written: 0,
        })
    }

    pub fn append(&mut self, row: &FlatRow) -> Result<()> {
        self.writer
            .write_record(row.to_record())
            .context("Failed to write CSV row")?;
        self.rows_written += 1;
        Ok(())
    }

    /// Push buffered rows down to the destination
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush CSV output")
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to finish CSV output: {}", e.error()))
    }
}
