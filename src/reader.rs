//! Table Reader collaborator: load the first sheet of a workbook.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::{MergeError, MergeResult};
use crate::table::{Cell, Table};

/// Read the first sheet of a workbook (`.xlsx`, `.xls`, `.ods`, etc.) into a
/// [`Table`].
///
/// Behavior:
/// - Only the first sheet is read; any other sheets are ignored
/// - Row 0 of the sheet is taken as the header, verbatim
/// - All remaining rows become data rows, in file order
pub fn read_table(path: impl AsRef<Path>) -> MergeResult<Table> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| MergeError::NoSheets {
            table: path.to_path_buf(),
        })?;
    let range = workbook.worksheet_range(&sheet)?;

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .ok_or_else(|| MergeError::EmptyTable {
            table: path.to_path_buf(),
        })?
        .iter()
        .map(header_string)
        .collect();

    let data: Vec<Vec<Cell>> = rows
        .map(|row| row.iter().map(cell_value).collect())
        .collect();

    Ok(Table::new(path, header, data))
}

/// Render a header cell as a column name.
fn header_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(f) => f.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{e:?}"),
        Data::Empty => "".to_string(),
    }
}

/// Convert a data cell into a [`Cell`].
///
/// Numbers (including Excel serial datetimes) become [`Cell::Number`]; ISO
/// datetime/duration strings and cell errors become [`Cell::Text`].
fn cell_value(c: &Data) -> Cell {
    match c {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) => Cell::Text(s.clone()),
        Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(format!("{e:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::{cell_value, header_string};
    use crate::table::Cell;
    use calamine::Data;

    #[test]
    fn header_cells_render_as_names() {
        assert_eq!(header_string(&Data::String("id".to_string())), "id");
        assert_eq!(header_string(&Data::Float(3.0)), "3");
        assert_eq!(header_string(&Data::Float(3.5)), "3.5");
        assert_eq!(header_string(&Data::Bool(true)), "true");
        assert_eq!(header_string(&Data::Empty), "");
    }

    #[test]
    fn data_cells_convert_to_typed_values() {
        assert_eq!(cell_value(&Data::Empty), Cell::Empty);
        assert_eq!(
            cell_value(&Data::String("x".to_string())),
            Cell::Text("x".to_string())
        );
        assert_eq!(cell_value(&Data::Int(2)), Cell::Number(2.0));
        assert_eq!(cell_value(&Data::Float(2.5)), Cell::Number(2.5));
        assert_eq!(cell_value(&Data::Bool(false)), Cell::Bool(false));
    }
}
