//! Progress and diagnostic reporting for merge runs.
//!
//! The merge core stays pure; the driver forwards events to an optional
//! [`MergeObserver`]. The stock [`StdoutObserver`] prints human-readable lines
//! to standard output, which is the tool's only diagnostic channel.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::merge::TableCounts;
use crate::validate::Diagnostic;

/// Observer interface for merge-run events.
///
/// All callbacks default to no-ops, so implementors only override what they
/// care about.
pub trait MergeObserver: Send + Sync {
    /// Called after an input workbook has been opened and read.
    fn on_table_opened(&self, _path: &Path) {}

    /// Called once per validation finding (header mismatches, unknown
    /// unique-key columns). Findings never stop the run.
    fn on_diagnostic(&self, _diagnostic: &Diagnostic) {}

    /// Called after each table has been merged, with its counts.
    fn on_table_merged(&self, _counts: &TableCounts) {}

    /// Called after the output workbook has been saved.
    fn on_output_written(&self, _path: &Path, _rows: usize) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn MergeObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn MergeObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl MergeObserver for CompositeObserver {
    fn on_table_opened(&self, path: &Path) {
        for o in &self.observers {
            o.on_table_opened(path);
        }
    }

    fn on_diagnostic(&self, diagnostic: &Diagnostic) {
        for o in &self.observers {
            o.on_diagnostic(diagnostic);
        }
    }

    fn on_table_merged(&self, counts: &TableCounts) {
        for o in &self.observers {
            o.on_table_merged(counts);
        }
    }

    fn on_output_written(&self, path: &Path, rows: usize) {
        for o in &self.observers {
            o.on_output_written(path, rows);
        }
    }
}

/// Logs merge events to stdout.
#[derive(Debug, Default)]
pub struct StdoutObserver;

impl MergeObserver for StdoutObserver {
    fn on_table_opened(&self, path: &Path) {
        println!("[merge] reading {}", path.display());
    }

    fn on_diagnostic(&self, diagnostic: &Diagnostic) {
        println!("[validate] {diagnostic}");
    }

    fn on_table_merged(&self, counts: &TableCounts) {
        println!(
            "[merge] {}: wrote {}, ignored {} duplicates",
            counts.source.display(),
            counts.rows_written,
            counts.duplicates_skipped
        );
    }

    fn on_output_written(&self, path: &Path, rows: usize) {
        println!("[merge] saved {} ({rows} rows)", path.display());
    }
}
