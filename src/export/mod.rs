//! Spreadsheet export: shared row model and the sink seam.

/// CSV file sink writing the fixed-name artifact.
pub mod csv;

use thiserror::Error;

use crate::item::ItemRecord;

/// Fixed name of the export artifact, regenerated on every export.
pub const EXPORT_FILE_NAME: &str = "items_export.csv";

/// Column headers, in artifact order.
pub const HEADER: [&str; 7] = [
    "S.No",
    "ID",
    "Name",
    "Emp Code",
    "Taluk Name",
    "Description",
    "Date Created",
];

/// Errors surfaced by an export request.
#[derive(Debug, Error)]
pub enum ExportError {
    /// No sink is attached to the store.
    #[error("export sink is not available")]
    Unavailable,
    /// There is no record to export.
    #[error("no items to export")]
    Nothing,
    /// The artifact could not be written.
    #[error("csv write error: {0}")]
    Csv(#[from] ::csv::Error),
    /// The artifact could not be flushed to disk.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Flattens records into artifact rows, one per record in store order.
///
/// `S.No` is the 1-based position. Both the automatic post-persist export and
/// the on-demand export go through this function.
pub fn build_rows(items: &[ItemRecord]) -> Vec<[String; 7]> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            [
                (idx + 1).to_string(),
                item.id.to_string(),
                item.name.clone(),
                item.emp_code.clone(),
                item.taluk_name.clone(),
                item.description.clone(),
                item.created_at_label(),
            ]
        })
        .collect()
}

/// Sink turning the record list into a downloadable tabular artifact.
pub trait ExportSink {
    /// Writes the header plus one row per record, returning the data-row
    /// count. Any previous artifact is replaced.
    fn export(&mut self, items: &[ItemRecord]) -> ExportResult<usize>;
}
