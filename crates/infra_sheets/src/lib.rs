//! Infrastructure Layer - Spreadsheet Files
//!
//! File-backed implementations of [`core_kernel::SheetSource`]:
//!
//! - [`CsvSheetSource`]: one CSV file, or a directory of `<sheet>.csv` files
//! - [`XlsxSheetSource`]: a workbook read with `calamine`
//!
//! [`open_source`] picks the adapter from the path.

pub mod csv_source;
pub mod xlsx_source;
pub mod error;

use std::path::Path;

use core_kernel::SheetSource;

pub use csv_source::CsvSheetSource;
pub use xlsx_source::XlsxSheetSource;
pub use error::SheetError;

/// Opens a sheet source for a path
///
/// `.xlsx` and `.xlsm` files are read as workbooks; `.csv` files and
/// directories are read as CSV.
///
/// # Errors
///
/// `SheetError::NotFound` when nothing exists at `path`, and
/// `SheetError::UnsupportedFormat` for any other file type.
pub fn open_source(path: impl AsRef<Path>) -> Result<Box<dyn SheetSource>, SheetError> {
    let path = path.as_ref();

    if path.is_dir() {
        return Ok(Box::new(CsvSheetSource::new(path)));
    }
    if !path.exists() {
        return Err(SheetError::NotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "xlsx" | "xlsm" => Ok(Box::new(XlsxSheetSource::new(path))),
        "csv" => Ok(Box::new(CsvSheetSource::new(path))),
        _ => Err(SheetError::UnsupportedFormat(path.to_path_buf())),
    }
}
