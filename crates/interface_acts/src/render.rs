//! Document renderer and exporter ports
//!
//! A renderer turns an [`ActContext`] into one document file. Exporters
//! run on the rendered file afterwards (format conversion, upload, copy to
//! a shared folder). A failing exporter never drops the act.

use std::fs;
use std::path::{Path, PathBuf};

use crate::context::ActContext;
use crate::error::ActError;

/// Produces one document per act
pub trait DocumentRenderer {
    /// Renders `context` into a file named after `file_stem`
    ///
    /// Returns the path of the written document.
    fn render(&self, context: &ActContext, file_stem: &str) -> Result<PathBuf, ActError>;
}

/// Post-processes a rendered document
pub trait DocumentExporter {
    /// Short name used in diagnostics
    fn name(&self) -> &str;

    /// Exports `document`, returning the path or location produced
    fn export(&self, document: &Path, file_stem: &str) -> Result<PathBuf, ActError>;
}

/// Writes each context as pretty-printed JSON, ready for an external
/// template engine
#[derive(Debug, Clone)]
pub struct JsonContextRenderer {
    output_dir: PathBuf,
}

impl JsonContextRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl DocumentRenderer for JsonContextRenderer {
    fn render(&self, context: &ActContext, file_stem: &str) -> Result<PathBuf, ActError> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(format!("{file_stem}.json"));
        let body = serde_json::to_string_pretty(context)?;
        fs::write(&path, body)?;
        Ok(path)
    }
}

/// Copies rendered documents into another directory
#[derive(Debug, Clone)]
pub struct CopyExporter {
    target_dir: PathBuf,
}

impl CopyExporter {
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
        }
    }
}

impl DocumentExporter for CopyExporter {
    fn name(&self) -> &str {
        "copy"
    }

    fn export(&self, document: &Path, file_stem: &str) -> Result<PathBuf, ActError> {
        let file_name = document
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(file_stem));
        fs::create_dir_all(&self.target_dir).map_err(|e| ActError::Export {
            exporter: self.name().to_string(),
            message: e.to_string(),
        })?;
        let target = self.target_dir.join(file_name);
        fs::copy(document, &target).map_err(|e| ActError::Export {
            exporter: self.name().to_string(),
            message: format!("{}: {e}", document.display()),
        })?;
        Ok(target)
    }
}
