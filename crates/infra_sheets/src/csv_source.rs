//! CSV-backed sheet source

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use core_kernel::{RawRow, SheetSource, SourceError};

use crate::error::SheetError;

/// Reads sheets from CSV files
///
/// When the root is a directory each sheet is the file `<sheet>.csv`
/// inside it. When the root is a single file that file is returned for
/// every sheet name.
#[derive(Debug, Clone)]
pub struct CsvSheetSource {
    root: PathBuf,
    delimiter: u8,
}

impl CsvSheetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            delimiter: b',',
        }
    }

    /// Uses another field delimiter, e.g. `b';'` for spreadsheet exports
    /// made with a comma decimal separator
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File holding the given sheet
    pub fn sheet_path(&self, sheet_name: &str) -> PathBuf {
        if self.root.is_dir() {
            self.root.join(format!("{sheet_name}.csv"))
        } else {
            self.root.clone()
        }
    }

    /// Reads every record of a sheet, header included
    ///
    /// Records may have different lengths.
    pub fn read_sheet(&self, sheet_name: &str) -> Result<Vec<RawRow>, SheetError> {
        let path = self.sheet_path(sheet_name);
        if !path.is_file() {
            if self.root.is_dir() {
                return Err(SheetError::MissingSheet {
                    path: self.root.clone(),
                    sheet: sheet_name.to_string(),
                });
            }
            return Err(SheetError::NotFound(path));
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_path(&path)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        tracing::debug!(path = %path.display(), rows = rows.len(), "csv sheet read");
        Ok(rows)
    }
}

impl SheetSource for CsvSheetSource {
    fn read_rows(&self, sheet_id: &str, sheet_name: &str) -> Result<Vec<RawRow>, SourceError> {
        self.read_sheet(sheet_name)
            .map_err(|err| err.into_source_error(sheet_id, sheet_name))
    }
}
