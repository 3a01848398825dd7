//! XLSX-backed sheet source

use std::path::{Path, PathBuf};

use calamine::{open_workbook, DataType, Range, Reader, Xlsx};

use core_kernel::{RawRow, SheetSource, SourceError};

use crate::error::SheetError;

/// Reads sheets from an Excel workbook
///
/// The workbook is opened on every read, so the file may be edited
/// between runs without restarting anything.
#[derive(Debug, Clone)]
pub struct XlsxSheetSource {
    path: PathBuf,
}

impl XlsxSheetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of all worksheets in workbook order
    pub fn sheet_names(&self) -> Result<Vec<String>, SheetError> {
        let workbook: Xlsx<_> = open_workbook(&self.path)?;
        Ok(workbook.sheet_names().to_vec())
    }

    /// Reads a worksheet as text rows
    ///
    /// Rows and columns before the first used cell are kept as empty
    /// cells so that column positions match the sheet.
    pub fn read_sheet(&self, sheet_name: &str) -> Result<Vec<RawRow>, SheetError> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)?;
        let range = workbook
            .worksheet_range(sheet_name)
            .ok_or_else(|| SheetError::MissingSheet {
                path: self.path.clone(),
                sheet: sheet_name.to_string(),
            })??;

        let rows = range_to_rows(&range);
        tracing::debug!(path = %self.path.display(), sheet = sheet_name, rows = rows.len(), "xlsx sheet read");
        Ok(rows)
    }
}

impl SheetSource for XlsxSheetSource {
    fn read_rows(&self, sheet_id: &str, sheet_name: &str) -> Result<Vec<RawRow>, SourceError> {
        self.read_sheet(sheet_name)
            .map_err(|err| err.into_source_error(sheet_id, sheet_name))
    }
}

fn range_to_rows(range: &Range<DataType>) -> Vec<RawRow> {
    let Some((first_row, first_column)) = range.start() else {
        return Vec::new();
    };

    let mut rows: Vec<RawRow> = vec![Vec::new(); first_row as usize];
    for row in range.rows() {
        let mut cells = vec![String::new(); first_column as usize];
        cells.extend(row.iter().map(|cell| cell_to_string(Some(cell))));
        rows.push(cells);
    }
    rows
}

fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_floats_print_without_fraction() {
        assert_eq!(cell_to_string(Some(&DataType::Float(5.0))), "5");
        assert_eq!(cell_to_string(Some(&DataType::Float(100.5))), "100.5");
    }

    #[test]
    fn test_booleans_and_empty() {
        assert_eq!(cell_to_string(Some(&DataType::Bool(true))), "true");
        assert_eq!(cell_to_string(Some(&DataType::Empty)), "");
        assert_eq!(cell_to_string(None), "");
    }
}
