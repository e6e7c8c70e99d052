//! CSV implementation of [`crate::export::ExportSink`].

use std::path::{Path, PathBuf};

use csv::Writer;

use super::{EXPORT_FILE_NAME, ExportResult, ExportSink, HEADER, build_rows};
use crate::item::ItemRecord;

/// File-backed sink producing a single flat sheet.
///
/// The artifact keeps one fixed name and is truncated on every export, never
/// versioned or appended.
pub struct CsvFileSink {
    path: PathBuf,
}

impl CsvFileSink {
    /// Creates a sink writing [`EXPORT_FILE_NAME`] inside `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(EXPORT_FILE_NAME),
        }
    }

    /// Full path of the artifact.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExportSink for CsvFileSink {
    fn export(&mut self, items: &[ItemRecord]) -> ExportResult<usize> {
        let mut writer = Writer::from_path(&self.path)?;
        writer.write_record(HEADER)?;

        let rows = build_rows(items);
        for row in &rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(rows.len())
    }
}
