//! Act generation errors

use thiserror::Error;

use core_kernel::SourceError;
use domain_directory::DirectoryError;
use infra_sheets::SheetError;

/// Errors that end a run or drop a single act
#[derive(Debug, Error)]
pub enum ActError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error("Failed to read assets: {0}")]
    Assets(#[from] SourceError),

    #[error("Failed to open spreadsheet: {0}")]
    Sheet(#[from] SheetError),

    #[error("Failed to render act for {owner}: {message}")]
    Render { owner: String, message: String },

    #[error("Export '{exporter}' failed: {message}")]
    Export { exporter: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
