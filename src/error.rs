use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for merge operations.
pub type MergeResult<T> = Result<T, MergeError>;

/// Error type returned by reader, writer and merge functions.
///
/// Header problems found at validation time are *not* errors; they are
/// [`crate::validate::Diagnostic`]s inside a [`crate::validate::ValidationReport`]
/// and never stop a run. Everything here is fatal.
#[derive(Debug, Error)]
pub enum MergeError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure opening or reading an input workbook.
    #[error("workbook read error: {0}")]
    Read(#[from] calamine::Error),

    /// Failure building or saving the output workbook.
    #[error("workbook write error: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    /// Merge or run was invoked with an empty table list.
    #[error("no input tables were provided")]
    NoInputs,

    /// The input workbook contains no sheets at all.
    #[error("workbook has no sheets: {}", .table.display())]
    NoSheets { table: PathBuf },

    /// The first sheet is completely empty, so there is no header row.
    #[error("sheet has no header row: {}", .table.display())]
    EmptyTable { table: PathBuf },

    /// A unique-key column named by the caller is missing from a table's own
    /// header at merge time.
    ///
    /// Distinct from the non-fatal validation-time "unknown unique-key column"
    /// diagnostic: here the dedup key for a row cannot be computed, so output
    /// correctness is at stake and the run must abort.
    #[error("missing unique-key column '{column}' in {}", .table.display())]
    MissingKeyColumn { table: PathBuf, column: String },
}
