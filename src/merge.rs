//! Row Merger: stream all data rows into one output table, first occurrence
//! of each dedup key wins.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::{MergeError, MergeResult};
use crate::table::{Cell, Record, Table};

/// Per-table merge statistics. For every table,
/// `rows_written + duplicates_skipped` equals its data row count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCounts {
    /// Path of the input table.
    pub source: PathBuf,
    /// Rows appended to the output.
    pub rows_written: usize,
    /// Rows skipped because their dedup key was already seen.
    pub duplicates_skipped: usize,
}

/// The merged output table plus per-input statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    /// Output header, copied verbatim from the first input table.
    pub header: Vec<String>,
    /// Surviving data rows: each input table's first-occurrence rows, in input
    /// table order, each table's rows in file order.
    pub rows: Vec<Vec<Cell>>,
    /// Per-table counts, in input order.
    pub counts: Vec<TableCounts>,
}

/// Merge tables into one output table, dropping duplicate rows.
///
/// Rules:
///
/// - The output header is the first table's header, verbatim.
/// - Each row is keyed through its *own* table's header: with `unique_on`, the
///   dedup key is the named columns' values in the given order; without it,
///   the key is all record values in that table's header order. Tables whose
///   column order differs from the reference therefore only dedup against each
///   other via `unique_on`.
/// - First occurrence of a key is written; later occurrences are skipped.
/// - If `unique_on` names a column a table's header lacks, the merge fails
///   with [`MergeError::MissingKeyColumn`]; silently mis-keying rows would
///   corrupt the output.
pub fn merge(tables: &[Table], unique_on: Option<&[String]>) -> MergeResult<MergeOutcome> {
    let first = tables.first().ok_or(MergeError::NoInputs)?;

    let mut seen: HashSet<Vec<Cell>> = HashSet::new();
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut counts: Vec<TableCounts> = Vec::with_capacity(tables.len());

    for table in tables {
        let mut rows_written = 0;
        let mut duplicates_skipped = 0;

        for row in &table.rows {
            let record = Record::from_row(&table.header, row);
            let key = dedup_key(&record, unique_on, table)?;

            if seen.insert(key) {
                rows.push(record.values().cloned().collect());
                rows_written += 1;
            } else {
                duplicates_skipped += 1;
            }
        }

        counts.push(TableCounts {
            source: table.source.clone(),
            rows_written,
            duplicates_skipped,
        });
    }

    Ok(MergeOutcome {
        header: first.header.clone(),
        rows,
        counts,
    })
}

fn dedup_key(
    record: &Record<'_>,
    unique_on: Option<&[String]>,
    table: &Table,
) -> MergeResult<Vec<Cell>> {
    match unique_on {
        Some(columns) => columns
            .iter()
            .map(|column| {
                record
                    .get(column)
                    .cloned()
                    .ok_or_else(|| MergeError::MissingKeyColumn {
                        table: table.source.clone(),
                        column: column.clone(),
                    })
            })
            .collect(),
        None => Ok(record.values().cloned().collect()),
    }
}
