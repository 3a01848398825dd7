//! Spreadsheet adapter errors

use std::path::PathBuf;

use thiserror::Error;

use core_kernel::SourceError;

/// Errors raised while reading spreadsheet files
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("No such file or directory: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported spreadsheet format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Sheet '{sheet}' not found in {}", .path.display())]
    MissingSheet { path: PathBuf, sheet: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Workbook error: {0}")]
    Xlsx(#[from] calamine::XlsxError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SheetError {
    /// Converts to the port error, tagging it with the sheet being read
    pub fn into_source_error(self, sheet_id: &str, sheet_name: &str) -> SourceError {
        match self {
            SheetError::MissingSheet { sheet, .. } => SourceError::SheetNotFound {
                sheet_id: sheet_id.to_string(),
                sheet_name: sheet,
            },
            SheetError::Io(err) => SourceError::Io(err),
            SheetError::Csv(err) => SourceError::Malformed {
                sheet_name: sheet_name.to_string(),
                message: err.to_string(),
            },
            SheetError::Xlsx(err) => SourceError::Malformed {
                sheet_name: sheet_name.to_string(),
                message: err.to_string(),
            },
            other => SourceError::Unavailable {
                sheet_id: sheet_id.to_string(),
                message: other.to_string(),
            },
        }
    }
}
