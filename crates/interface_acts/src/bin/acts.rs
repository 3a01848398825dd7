//! Acceptance Acts - Command Line Binary
//!
//! Reads the asset and department sheets, allocates every asset row among
//! its owners and writes one act per department.
//!
//! # Usage
//!
//! ```bash
//! # Everything from ACTS_* variables or .env
//! cargo run --bin acts
//!
//! # Explicit inputs
//! acts --assets inventory.xlsx --output-dir out --date 2025-01-31
//! ```
//!
//! # Environment Variables
//!
//! * `ACTS_ASSETS_PATH` / `ACTS_ASSETS_SHEET` - Asset spreadsheet and sheet
//! * `ACTS_DEPARTMENTS_PATH` / `ACTS_DEPARTMENTS_SHEET` - Department spreadsheet and sheet
//! * `ACTS_OUTPUT_DIR` - Where acts are written (default: docs)
//! * `ACTS_EXPORT_DIR` - Optional second copy of every act
//! * `ACTS_FILE_NAME_PATTERN` - e.g. `Акт. {deptname} {date}`
//! * `ACTS_ALLOW_ROUNDING_ADJUST` - Reconcile cent remainders (default: true)
//! * `ACTS_LOG_LEVEL` - trace, debug, info, warn, error (default: info)

use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::TracingDiagnostics;
use interface_acts::{run, ActsConfig};

/// Generate per-department acceptance acts from an asset spreadsheet
#[derive(Debug, Parser)]
#[command(name = "acts", version, about)]
struct Cli {
    /// Config file (TOML, YAML or JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Asset spreadsheet (.xlsx, .csv or a directory of CSV sheets)
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Asset sheet name
    #[arg(long)]
    assets_sheet: Option<String>,

    /// Department spreadsheet, if different from the asset spreadsheet
    #[arg(long)]
    departments: Option<PathBuf>,

    /// Department sheet name
    #[arg(long)]
    departments_sheet: Option<String>,

    /// Output directory for rendered acts
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Copy every act into this directory as well
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Keep rounded shares as they are instead of reconciling row totals
    #[arg(long)]
    no_rounding_adjust: bool,

    /// Date printed in file names (YYYY-MM-DD); today by default
    #[arg(long)]
    date: Option<NaiveDate>,
}

impl Cli {
    fn apply(self, config: &mut ActsConfig) {
        if let Some(path) = self.assets {
            config.assets_path = path;
        }
        if let Some(sheet) = self.assets_sheet {
            config.assets_sheet = sheet;
        }
        if let Some(path) = self.departments {
            config.departments_path = Some(path);
        }
        if let Some(sheet) = self.departments_sheet {
            config.departments_sheet = sheet;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(dir) = self.export_dir {
            config.export_dir = Some(dir);
        }
        if self.no_rounding_adjust {
            config.allow_rounding_adjust = false;
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = ActsConfig::load(cli.config.as_deref(), None)
        .context("Failed to load configuration")?;
    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    cli.apply(&mut config);

    init_tracing(&config.log_level);

    tracing::info!(
        assets = %config.assets_path.display(),
        departments = %config.departments_path().display(),
        output = %config.output_dir.display(),
        "Generating acceptance acts"
    );

    let report = run(&config, date, &mut TracingDiagnostics)?;

    tracing::info!("{}", report.summary.line(&config.money_format()));
    Ok(())
}

/// Initializes the tracing subscriber
///
/// `RUST_LOG` wins over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
