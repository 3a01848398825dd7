//! Acceptance Act Generation
//!
//! Wires the allocation core to files on disk: reads the department and
//! asset sheets, allocates every row, renders one act per department and
//! reports a summary.
//!
//! # Architecture
//!
//! - **Config**: `ActsConfig` from file, `ACTS_*` environment and flags
//! - **Context**: template placeholders built from an owner ledger
//! - **Render**: renderer and exporter ports with file-based adapters
//! - **Summary**: the end-of-run counters line
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_acts::{run, ActsConfig};
//!
//! let config = ActsConfig::from_env()?;
//! let report = run(&config, today, &mut TracingDiagnostics)?;
//! tracing::info!("{}", report.summary.line(&config.money_format()));
//! ```

pub mod acts;
pub mod config;
pub mod context;
pub mod error;
pub mod naming;
pub mod render;
pub mod summary;

use chrono::NaiveDate;

use core_kernel::{DiagnosticsSink, SheetSource};
use domain_allocation::BatchProcessor;
use domain_directory::load_directory;
use infra_sheets::open_source;

pub use acts::{ActGenerator, GeneratedAct};
pub use config::ActsConfig;
pub use context::{ActContext, ActItem};
pub use error::ActError;
pub use render::{CopyExporter, DocumentExporter, DocumentRenderer, JsonContextRenderer};
pub use summary::RunSummary;

/// Outcome of a complete run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub summary: RunSummary,
    pub acts: Vec<GeneratedAct>,
}

/// Runs one batch against already opened sources
///
/// The directory is loaded first; if that fails nothing else happens.
///
/// # Errors
///
/// `ActError::Directory` when the department sheet cannot be read and
/// `ActError::Assets` when the asset sheet cannot be read. Row and owner
/// problems are reported to `diagnostics` only.
pub fn run_batch(
    config: &ActsConfig,
    assets: &dyn SheetSource,
    departments: &dyn SheetSource,
    generator: &ActGenerator<'_>,
    diagnostics: &mut dyn DiagnosticsSink,
) -> Result<RunReport, ActError> {
    let departments_id = config.departments_path().display().to_string();
    let directory = load_directory(
        departments,
        &departments_id,
        &config.departments_sheet,
        &config.department_columns,
        diagnostics,
    )?;
    tracing::info!(departments = directory.len(), "departments loaded");

    let assets_id = config.assets_path.display().to_string();
    let rows = assets.read_rows(&assets_id, &config.assets_sheet)?;
    tracing::info!(rows = rows.len().saturating_sub(1), "asset rows read");

    let processor = BatchProcessor::new(
        &directory,
        config.asset_columns.clone(),
        config.allocation_policy(),
    );
    let snapshot = processor.process(&rows, diagnostics);

    let acts = generator.generate(&snapshot, diagnostics);
    let summary = RunSummary::new(&snapshot.stats, &acts);

    Ok(RunReport { summary, acts })
}

/// Runs one batch from the files named in `config`
///
/// Acts are written as JSON contexts to `output_dir` and copied to
/// `export_dir` when one is set.
pub fn run(
    config: &ActsConfig,
    date: NaiveDate,
    diagnostics: &mut dyn DiagnosticsSink,
) -> Result<RunReport, ActError> {
    let departments = open_source(config.departments_path())?;
    let assets = open_source(&config.assets_path)?;

    let renderer = JsonContextRenderer::new(&config.output_dir);
    let copy = config
        .export_dir
        .as_ref()
        .map(|dir| CopyExporter::new(dir.clone()));

    let mut generator = ActGenerator::new(
        &renderer,
        config.money_format(),
        config.file_name_pattern.clone(),
        date,
    );
    if let Some(copy) = &copy {
        generator = generator.with_exporter(copy);
    }

    run_batch(
        config,
        assets.as_ref(),
        departments.as_ref(),
        &generator,
        diagnostics,
    )
}
