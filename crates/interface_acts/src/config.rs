//! Run configuration
//!
//! Values come from an optional config file, then from `ACTS_*`
//! environment variables (a `.env` file is loaded first by the binary),
//! then from command-line flags.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use core_kernel::MoneyFormat;
use domain_allocation::{AllocationPolicy, AssetColumns};
use domain_directory::DepartmentColumns;

use crate::naming::DEFAULT_FILE_NAME_PATTERN;

/// Prefix of every environment variable read by [`ActsConfig`]
pub const ENV_PREFIX: &str = "ACTS";

/// Acts configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ActsConfig {
    /// Asset spreadsheet: `.xlsx`, `.csv` or a directory of CSV sheets
    pub assets_path: PathBuf,
    pub assets_sheet: String,
    /// Department spreadsheet; the asset spreadsheet when unset
    pub departments_path: Option<PathBuf>,
    pub departments_sheet: String,
    pub output_dir: PathBuf,
    /// Copy every rendered act here as well
    pub export_dir: Option<PathBuf>,
    /// File name pattern with `{deptname}` and `{date}`
    pub file_name_pattern: String,
    pub thousands_separator: String,
    pub decimal_separator: String,
    pub currency_suffix: String,
    /// Move rounding remainders onto the last owner of a row
    pub allow_rounding_adjust: bool,
    pub log_level: String,
    pub asset_columns: AssetColumns,
    pub department_columns: DepartmentColumns,
}

impl Default for ActsConfig {
    fn default() -> Self {
        Self {
            assets_path: PathBuf::from("assets.xlsx"),
            assets_sheet: "Assets".to_string(),
            departments_path: None,
            departments_sheet: "Departments".to_string(),
            output_dir: PathBuf::from("docs"),
            export_dir: None,
            file_name_pattern: DEFAULT_FILE_NAME_PATTERN.to_string(),
            thousands_separator: " ".to_string(),
            decimal_separator: ",".to_string(),
            currency_suffix: String::new(),
            allow_rounding_adjust: true,
            log_level: "info".to_string(),
            asset_columns: AssetColumns::default(),
            department_columns: DepartmentColumns::default(),
        }
    }
}

impl ActsConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load(None, None)
    }

    /// Loads configuration from an optional file and the environment
    ///
    /// # Arguments
    ///
    /// * `file` - TOML/YAML/JSON file, format taken from the extension
    /// * `vars` - Environment to read instead of the process environment
    pub fn load(
        file: Option<&Path>,
        vars: Option<HashMap<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path));
        }
        builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).source(vars))
            .build()?
            .try_deserialize()
    }

    /// Department spreadsheet path
    pub fn departments_path(&self) -> &Path {
        self.departments_path.as_deref().unwrap_or(&self.assets_path)
    }

    pub fn money_format(&self) -> MoneyFormat {
        MoneyFormat {
            thousands_separator: self.thousands_separator.clone(),
            decimal_separator: self.decimal_separator.clone(),
            currency_suffix: self.currency_suffix.clone(),
        }
    }

    pub fn allocation_policy(&self) -> AllocationPolicy {
        AllocationPolicy {
            reconcile_rounding: self.allow_rounding_adjust,
        }
    }
}
