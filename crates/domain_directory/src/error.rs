//! Directory domain errors

use thiserror::Error;

use core_kernel::SourceError;

/// Errors that can occur while building the department directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The department sheet could not be read at all; no row can be
    /// allocated without it
    #[error("Failed to load departments from '{sheet_id}' / '{sheet_name}': {source}")]
    Load {
        sheet_id: String,
        sheet_name: String,
        #[source]
        source: SourceError,
    },
}
