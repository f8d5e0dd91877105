//! Driver: open inputs, validate headers, merge, write the output workbook.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::{MergeError, MergeResult};
use crate::merge::{merge, TableCounts};
use crate::reader::read_table;
use crate::report::MergeObserver;
use crate::table::Table;
use crate::validate::{validate, ValidationReport};
use crate::writer::TableWriter;

/// Configuration for one merge run.
///
/// Built explicitly by the caller (the CLI builds it from parsed arguments);
/// there is no global state.
#[derive(Clone)]
pub struct MergeConfig {
    /// Input workbook paths, merged in this order. Must be non-empty.
    pub files: Vec<PathBuf>,
    /// Path of the output workbook.
    pub output: PathBuf,
    /// Optional unique-key column names defining the dedup key.
    pub unique_on: Option<Vec<String>>,
    /// Optional observer for progress and diagnostics.
    pub observer: Option<Arc<dyn MergeObserver>>,
}

impl MergeConfig {
    /// Create a config with the default output path (`output.xlsx`), no
    /// unique-key columns and no observer.
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self {
            files,
            output: PathBuf::from("output.xlsx"),
            unique_on: None,
            observer: None,
        }
    }
}

impl fmt::Debug for MergeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergeConfig")
            .field("files", &self.files)
            .field("output", &self.output)
            .field("unique_on", &self.unique_on)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

/// What a completed run produced, beyond the output file itself.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Header validation findings (non-fatal).
    pub validation: ValidationReport,
    /// Per-table merge counts, in input order.
    pub counts: Vec<TableCounts>,
}

/// Execute a full merge run.
///
/// Steps, in order:
///
/// 1. Read the first sheet of every input workbook.
/// 2. Validate headers against the first table's header. Findings are
///    forwarded to the observer but never stop the run.
/// 3. Merge all data rows, first occurrence of each dedup key wins.
/// 4. Write the output workbook (header row 0, then surviving rows).
///
/// Fatal errors ([`MergeError::MissingKeyColumn`], I/O and workbook failures)
/// abort the run; no partial-output cleanup is attempted.
pub fn run(config: &MergeConfig) -> MergeResult<RunSummary> {
    if config.files.is_empty() {
        return Err(MergeError::NoInputs);
    }

    let mut tables: Vec<Table> = Vec::with_capacity(config.files.len());
    for path in &config.files {
        let table = read_table(path)?;
        if let Some(obs) = &config.observer {
            obs.on_table_opened(&table.source);
        }
        tables.push(table);
    }

    let unique_on = config.unique_on.as_deref();

    let validation = validate(&tables, unique_on);
    if let Some(obs) = &config.observer {
        for diagnostic in &validation.diagnostics {
            obs.on_diagnostic(diagnostic);
        }
    }

    let outcome = merge(&tables, unique_on)?;
    if let Some(obs) = &config.observer {
        for counts in &outcome.counts {
            obs.on_table_merged(counts);
        }
    }

    let mut writer = TableWriter::new();
    writer.write_header(&outcome.header)?;
    for (i, row) in outcome.rows.iter().enumerate() {
        writer.write_row((i + 1) as u32, row)?;
    }
    writer.save(&config.output)?;

    if let Some(obs) = &config.observer {
        obs.on_output_written(&config.output, outcome.rows.len());
    }

    Ok(RunSummary {
        validation,
        counts: outcome.counts,
    })
}
