//! Ports to the outside world
//!
//! The allocation core only ever sees fully materialized rows. Where they
//! come from (a local CSV export, an XLSX workbook, a hosted sheet) is an
//! adapter concern behind [`SheetSource`].
//!
//! ```rust,ignore
//! let rows = source.read_rows("departments.xlsx", "Departments")?;
//! let directory = load_departments(&rows, &columns, &mut diagnostics);
//! ```

use thiserror::Error;

use crate::sheet::RawRow;

/// Error type for sheet source operations
#[derive(Debug, Error)]
pub enum SourceError {
    /// The spreadsheet itself could not be found or opened
    #[error("Spreadsheet '{sheet_id}' is unavailable: {message}")]
    Unavailable {
        sheet_id: String,
        message: String,
    },

    /// The spreadsheet exists but has no sheet with that name
    #[error("Sheet '{sheet_name}' not found in '{sheet_id}'")]
    SheetNotFound {
        sheet_id: String,
        sheet_name: String,
    },

    /// The content could not be decoded into rows
    #[error("Malformed sheet '{sheet_name}': {message}")]
    Malformed {
        sheet_name: String,
        message: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Supplier of raw spreadsheet rows
///
/// The first returned row is the header row. Cells are returned as text
/// exactly as displayed; rows may be shorter than the widest row.
pub trait SheetSource {
    fn read_rows(&self, sheet_id: &str, sheet_name: &str) -> Result<Vec<RawRow>, SourceError>;
}

/// In-memory source, keyed by `(sheet_id, sheet_name)`
#[derive(Debug, Default, Clone)]
pub struct StaticSheetSource {
    sheets: Vec<(String, String, Vec<RawRow>)>,
}

impl StaticSheetSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sheet and returns the source for chaining
    pub fn with_sheet(
        mut self,
        sheet_id: impl Into<String>,
        sheet_name: impl Into<String>,
        rows: Vec<RawRow>,
    ) -> Self {
        self.sheets.push((sheet_id.into(), sheet_name.into(), rows));
        self
    }
}

impl SheetSource for StaticSheetSource {
    fn read_rows(&self, sheet_id: &str, sheet_name: &str) -> Result<Vec<RawRow>, SourceError> {
        self.sheets
            .iter()
            .find(|(id, name, _)| id == sheet_id && name == sheet_name)
            .map(|(_, _, rows)| rows.clone())
            .ok_or_else(|| SourceError::SheetNotFound {
                sheet_id: sheet_id.to_string(),
                sheet_name: sheet_name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_source_lookup() {
        let source = StaticSheetSource::new().with_sheet(
            "book",
            "Assets",
            vec![vec!["header".to_string()]],
        );

        assert_eq!(source.read_rows("book", "Assets").unwrap().len(), 1);
        let missing = source.read_rows("book", "Other");
        assert!(matches!(missing, Err(SourceError::SheetNotFound { .. })));
    }
}
