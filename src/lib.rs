//! `xlsx-merge` merges several spreadsheet workbooks (first sheet only) into a
//! single output workbook, dropping duplicate rows.
//!
//! Inputs are expected to share a common header row; headers are checked up
//! front and any mismatch is reported as a diagnostic, but the merge proceeds
//! regardless. Rows are de-duplicated either by full-row equality or, with a
//! unique-key specification, by a chosen subset of columns. The first
//! occurrence of a key wins.
//!
//! The primary entrypoint is [`run::run`], driven by an explicit
//! [`run::MergeConfig`]:
//!
//! ```no_run
//! use xlsx_merge::run::{run, MergeConfig};
//!
//! # fn main() -> Result<(), xlsx_merge::MergeError> {
//! let mut config = MergeConfig::new(vec!["q1.xlsx".into(), "q2.xlsx".into()]);
//! config.output = "combined.xlsx".into();
//! config.unique_on = Some(vec!["order_id".to_string()]);
//!
//! let summary = run(&config)?;
//! for counts in &summary.counts {
//!     println!("{}: wrote {}", counts.source.display(), counts.rows_written);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The validation and merge cores are pure and work on in-memory
//! [`table::Table`]s, so they can also be used directly:
//!
//! ```rust
//! use xlsx_merge::merge::merge;
//! use xlsx_merge::table::{Cell, Table};
//!
//! let a = Table::new(
//!     "a.xlsx",
//!     vec!["id".to_string(), "name".to_string()],
//!     vec![vec![Cell::Number(1.0), Cell::Text("Ada".to_string())]],
//! );
//! let b = Table::new(
//!     "b.xlsx",
//!     vec!["id".to_string(), "name".to_string()],
//!     vec![
//!         vec![Cell::Number(1.0), Cell::Text("Ada".to_string())],
//!         vec![Cell::Number(2.0), Cell::Text("Grace".to_string())],
//!     ],
//! );
//!
//! let out = merge(&[a, b], None).unwrap();
//! assert_eq!(out.rows.len(), 2);
//! assert_eq!(out.counts[1].duplicates_skipped, 1);
//! ```
//!
//! ## Modules
//!
//! - [`run`]: driver ([`run::MergeConfig`] → [`run::run`])
//! - [`validate`]: header compatibility checking (diagnostic only)
//! - [`merge`]: streaming row de-duplication
//! - [`table`]: cells, tables and row records
//! - [`reader`] / [`writer`]: workbook I/O collaborators
//! - [`report`]: observer-style progress/diagnostic reporting
//! - [`error`]: error types
//!
//! ## Semantics worth knowing
//!
//! - The output header is the **first** input's header, verbatim.
//! - Each row is keyed through its own table's header, so a column-reordered
//!   table only dedups against the others via `unique_on`.
//! - Duplicate header names within one table collapse in the row record; the
//!   last value wins (see [`table::Record`]).
//! - A unique-key column missing from a table's own header aborts the merge
//!   with [`MergeError::MissingKeyColumn`]; the same name merely missing from
//!   the first table's header is only a validation diagnostic.

pub mod error;
pub mod merge;
pub mod reader;
pub mod report;
pub mod run;
pub mod table;
pub mod validate;
pub mod writer;

pub use error::{MergeError, MergeResult};
