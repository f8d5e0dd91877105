//! Header Validator: compare every table's header against the first table's.
//!
//! Validation is purely diagnostic. Nothing here is an error and nothing here
//! blocks the merge: a table with a mismatched header still merges, keyed by
//! its own column names (see [`crate::merge`]).

use std::fmt;
use std::path::PathBuf;

use crate::table::Table;

/// A single non-fatal validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A requested unique-key column is not present in the reference header
    /// (the first table's header).
    UnknownUniqueKeyColumn { column: String },
    /// A table's header does not match the reference header under sorted
    /// positional comparison. Each pair is `(reference value, other value)`.
    HeaderMismatch {
        table: PathBuf,
        pairs: Vec<(String, String)>,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownUniqueKeyColumn { column } => {
                write!(f, "'{column}' is not a known column")
            }
            Diagnostic::HeaderMismatch { table, pairs } => {
                write!(f, "mismatched headers in {}: {pairs:?}", table.display())
            }
        }
    }
}

/// Result of validating a set of input tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Findings, in table order.
    pub diagnostics: Vec<Diagnostic>,
    /// `false` iff at least one header mismatch was found. Unknown unique-key
    /// columns do not affect this flag.
    pub passed: bool,
}

/// Validate that all tables share the first table's header, and (if given)
/// that the unique-key columns exist in the reference header.
///
/// Rules:
///
/// - The first table's header is the reference; it is never flagged.
/// - Headers are compared sorted, element-wise by position, so column order
///   does not matter. Headers of different lengths are compared only up to the
///   shorter one; extra columns in the longer header are silently ignored.
///   This lax truncation is intentional, kept from the tool's long-standing
///   behavior.
/// - All findings are diagnostics; validation never fails the run.
pub fn validate(tables: &[Table], unique_on: Option<&[String]>) -> ValidationReport {
    let mut report = ValidationReport {
        diagnostics: Vec::new(),
        passed: true,
    };

    let Some((first, rest)) = tables.split_first() else {
        return report;
    };

    if let Some(columns) = unique_on {
        for column in columns {
            if !first.header.contains(column) {
                report.diagnostics.push(Diagnostic::UnknownUniqueKeyColumn {
                    column: column.clone(),
                });
            }
        }
    }

    let mut reference = first.header.clone();
    reference.sort_unstable();

    for table in rest {
        let mut header = table.header.clone();
        header.sort_unstable();

        let pairs: Vec<(String, String)> = reference
            .iter()
            .zip(header.iter())
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (a.clone(), b.clone()))
            .collect();

        if !pairs.is_empty() {
            report.passed = false;
            report.diagnostics.push(Diagnostic::HeaderMismatch {
                table: table.source.clone(),
                pairs,
            });
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::{validate, Diagnostic};
    use crate::table::Table;

    fn table(name: &str, header: &[&str]) -> Table {
        Table::new(name, header.iter().map(|s| s.to_string()).collect(), vec![])
    }

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn identical_headers_pass() {
        let tables = vec![
            table("a.xlsx", &["id", "name"]),
            table("b.xlsx", &["id", "name"]),
        ];
        let report = validate(&tables, None);
        assert!(report.passed);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn reordered_headers_pass() {
        let tables = vec![
            table("a.xlsx", &["id", "name", "score"]),
            table("b.xlsx", &["score", "id", "name"]),
        ];
        let report = validate(&tables, None);
        assert!(report.passed);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn mismatched_header_is_reported_with_pairs() {
        let tables = vec![
            table("a.xlsx", &["id", "name"]),
            table("b.xlsx", &["id", "email"]),
        ];
        let report = validate(&tables, None);
        assert!(!report.passed);
        assert_eq!(
            report.diagnostics,
            vec![Diagnostic::HeaderMismatch {
                table: "b.xlsx".into(),
                // sorted: [id, name] vs [email, id]
                pairs: vec![
                    ("id".to_string(), "email".to_string()),
                    ("name".to_string(), "id".to_string()),
                ],
            }]
        );
    }

    #[test]
    fn unknown_unique_key_column_is_diagnostic_only() {
        let tables = vec![table("a.xlsx", &["id", "name"])];
        let report = validate(&tables, Some(&cols(&["id", "email"])));
        assert!(report.passed);
        assert_eq!(
            report.diagnostics,
            vec![Diagnostic::UnknownUniqueKeyColumn {
                column: "email".to_string(),
            }]
        );
    }

    #[test]
    fn longer_header_is_truncated_in_comparison() {
        // Sorted-zip only compares up to the shorter header, so an extra
        // trailing column is not flagged.
        let tables = vec![
            table("a.xlsx", &["a", "b"]),
            table("b.xlsx", &["a", "b", "c"]),
        ];
        let report = validate(&tables, None);
        assert!(report.passed);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn single_table_always_passes() {
        let tables = vec![table("a.xlsx", &["id"])];
        let report = validate(&tables, None);
        assert!(report.passed);
        assert!(report.diagnostics.is_empty());
    }
}
