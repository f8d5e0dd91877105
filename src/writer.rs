//! Table Writer collaborator: build the output workbook, one sheet.

use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::error::MergeResult;
use crate::table::Cell;

/// Writes rows into a single-sheet output workbook.
///
/// Row 0 must receive the header; nothing is flushed to disk until
/// [`TableWriter::save`] is called.
pub struct TableWriter {
    workbook: Workbook,
}

impl TableWriter {
    /// Create a writer with one empty worksheet.
    pub fn new() -> Self {
        let mut workbook = Workbook::new();
        workbook.add_worksheet();
        Self { workbook }
    }

    /// Write the header into row 0.
    pub fn write_header(&mut self, header: &[String]) -> MergeResult<()> {
        let sheet = self.workbook.worksheet_from_index(0)?;
        for (col, name) in header.iter().enumerate() {
            sheet.write_string(0, col as u16, name)?;
        }
        Ok(())
    }

    /// Write one data row at sheet row `row` (row 0 is the header).
    pub fn write_row(&mut self, row: u32, cells: &[Cell]) -> MergeResult<()> {
        let sheet = self.workbook.worksheet_from_index(0)?;
        for (col, cell) in cells.iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Empty => {}
                Cell::Text(s) => {
                    sheet.write_string(row, col, s)?;
                }
                Cell::Number(n) => {
                    sheet.write_number(row, col, *n)?;
                }
                Cell::Bool(b) => {
                    sheet.write_boolean(row, col, *b)?;
                }
            }
        }
        Ok(())
    }

    /// Finalize the workbook and save it to `path`.
    pub fn save(mut self, path: impl AsRef<Path>) -> MergeResult<()> {
        self.workbook.save(path.as_ref())?;
        Ok(())
    }
}

impl Default for TableWriter {
    fn default() -> Self {
        Self::new()
    }
}
