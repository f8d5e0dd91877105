//! Core data model: cells, tables and row records.
//!
//! A [`Table`] is one worksheet's data (a header row, row 0 of the sheet,
//! plus data rows) as produced by [`crate::reader::read_table`]. Tables are
//! read-only once built; the merge never mutates them.

use std::hash::{Hash, Hasher};
use std::path::PathBuf;

/// A single spreadsheet cell value.
#[derive(Debug, Clone)]
pub enum Cell {
    /// Missing/empty cell.
    Empty,
    /// Text content.
    Text(String),
    /// Numeric content (Excel stores all numbers, including serial dates, as f64).
    Number(f64),
    /// Boolean content.
    Bool(bool),
}

/// Numbers compare bitwise so that `Cell` can participate in hash-set
/// membership (the seen-key set). Cells read twice from the same file always
/// carry identical bits.
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Cell::Empty, Cell::Empty) => true,
            (Cell::Text(a), Cell::Text(b)) => a == b,
            (Cell::Number(a), Cell::Number(b)) => a.to_bits() == b.to_bits(),
            (Cell::Bool(a), Cell::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Cell::Empty => {}
            Cell::Text(s) => s.hash(state),
            Cell::Number(n) => n.to_bits().hash(state),
            Cell::Bool(b) => b.hash(state),
        }
    }
}

/// One worksheet's data: the header row plus all data rows, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Path of the workbook this table was read from.
    pub source: PathBuf,
    /// Column names from row 0, verbatim and in sheet order.
    pub header: Vec<String>,
    /// Data rows (everything after row 0), positionally aligned with `header`.
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create a table from a source path, header and data rows.
    pub fn new(source: impl Into<PathBuf>, header: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            source: source.into(),
            header,
            rows,
        }
    }

    /// Number of data rows (the header is not counted).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Name → cell mapping for one data row, built by zipping a table's own header
/// with the row's cells.
///
/// Column order is first-seen header order. Duplicate header names collapse to
/// a single entry and the **last** value wins; the collapsed record is what
/// gets keyed and written, so rows under a duplicated header come out one cell
/// shorter. The zip truncates at the shorter of header/row.
#[derive(Debug)]
pub struct Record<'t> {
    entries: Vec<(&'t str, &'t Cell)>,
}

impl<'t> Record<'t> {
    /// Build a record from a header and one data row.
    pub fn from_row(header: &'t [String], cells: &'t [Cell]) -> Self {
        let mut entries: Vec<(&str, &Cell)> = Vec::with_capacity(header.len());
        for (name, cell) in header.iter().zip(cells.iter()) {
            match entries.iter_mut().find(|(n, _)| *n == name.as_str()) {
                Some(entry) => entry.1 = cell,
                None => entries.push((name.as_str(), cell)),
            }
        }
        Self { entries }
    }

    /// Look up a cell by column name.
    pub fn get(&self, name: &str) -> Option<&'t Cell> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, cell)| *cell)
    }

    /// Iterate cell values in record (first-seen column) order.
    pub fn values(&self) -> impl Iterator<Item = &'t Cell> + '_ {
        self.entries.iter().map(|(_, cell)| *cell)
    }

    /// Number of distinct columns in the record.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the record holds no columns.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Record};

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn record_preserves_header_order() {
        let h = header(&["id", "name", "score"]);
        let row = vec![
            Cell::Number(1.0),
            Cell::Text("Ada".to_string()),
            Cell::Number(98.5),
        ];

        let rec = Record::from_row(&h, &row);
        assert_eq!(rec.len(), 3);
        assert_eq!(rec.get("id"), Some(&Cell::Number(1.0)));
        assert_eq!(rec.get("missing"), None);

        let values: Vec<&Cell> = rec.values().collect();
        assert_eq!(values, vec![&row[0], &row[1], &row[2]]);
    }

    #[test]
    fn duplicate_header_names_collapse_last_value_wins() {
        let h = header(&["id", "name", "id"]);
        let row = vec![
            Cell::Number(1.0),
            Cell::Text("Ada".to_string()),
            Cell::Number(2.0),
        ];

        let rec = Record::from_row(&h, &row);
        assert_eq!(rec.len(), 2);
        // The "id" entry keeps its first position but holds the last value.
        let values: Vec<&Cell> = rec.values().collect();
        assert_eq!(values, vec![&Cell::Number(2.0), &Cell::Text("Ada".to_string())]);
    }

    #[test]
    fn record_zip_truncates_at_shorter_side() {
        let h = header(&["id", "name"]);
        let short_row = vec![Cell::Number(1.0)];
        let rec = Record::from_row(&h, &short_row);
        assert_eq!(rec.len(), 1);
        assert_eq!(rec.get("name"), None);

        let long_row = vec![Cell::Number(1.0), Cell::Text("x".to_string()), Cell::Bool(true)];
        let rec = Record::from_row(&h, &long_row);
        assert_eq!(rec.len(), 2);
    }

    #[test]
    fn cell_equality_and_hashing_are_consistent() {
        use std::collections::HashSet;

        let mut seen: HashSet<Vec<Cell>> = HashSet::new();
        assert!(seen.insert(vec![Cell::Number(1.0), Cell::Text("a".to_string())]));
        assert!(!seen.insert(vec![Cell::Number(1.0), Cell::Text("a".to_string())]));
        assert!(seen.insert(vec![Cell::Number(2.0), Cell::Text("a".to_string())]));
        assert!(seen.insert(vec![Cell::Empty, Cell::Bool(false)]));
        assert!(!seen.insert(vec![Cell::Empty, Cell::Bool(false)]));
    }
}
