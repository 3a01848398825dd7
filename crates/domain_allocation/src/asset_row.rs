//! Asset rows as read from the sheet

use serde::{Deserialize, Serialize};

use core_kernel::sheet::{describe_fields, trimmed_cell};

/// Generate-flag values that mark a row for inclusion, compared
/// case-insensitively
pub const AFFIRMATIVE_FLAGS: [&str; 6] = ["TRUE", "1", "YES", "Y", "ТАК", "+"];

/// 1-based column positions of the asset sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetColumns {
    pub name: usize,
    pub inventory_number: usize,
    pub unit: usize,
    pub quantity: usize,
    pub price: usize,
    pub owners: usize,
    pub generate_flag: usize,
}

impl Default for AssetColumns {
    fn default() -> Self {
        Self {
            name: 3,
            inventory_number: 5,
            unit: 6,
            quantity: 7,
            price: 9,
            owners: 10,
            generate_flag: 11,
        }
    }
}

/// One asset row with its cells as trimmed text
///
/// Nothing is parsed here; see [`crate::validation::validate_row`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRow {
    /// 1-based sheet row, header included
    pub row_number: usize,
    pub name: String,
    pub inventory_number: String,
    pub unit: String,
    pub quantity: String,
    pub price: String,
    /// Raw owners cell; may hold several lines
    pub owners: String,
    pub generate_flag: String,
}

impl AssetRow {
    /// Maps raw cells; absent trailing cells become empty strings
    pub fn from_cells(row_number: usize, cells: &[String], columns: &AssetColumns) -> Self {
        let text = |column: usize| trimmed_cell(cells, column).to_string();
        Self {
            row_number,
            name: text(columns.name),
            inventory_number: text(columns.inventory_number),
            unit: text(columns.unit),
            quantity: text(columns.quantity),
            price: text(columns.price),
            owners: text(columns.owners),
            generate_flag: text(columns.generate_flag),
        }
    }

    /// Whether the row is marked for act generation
    pub fn should_generate(&self) -> bool {
        is_affirmative(&self.generate_flag)
    }

    /// Cell values for diagnostics, e.g. `{name: "Chair", qty: "5"}`
    pub fn describe(&self) -> String {
        describe_fields(&[
            ("name", self.name.as_str()),
            ("inventory", self.inventory_number.as_str()),
            ("unit", self.unit.as_str()),
            ("qty", self.quantity.as_str()),
            ("price", self.price.as_str()),
            ("owners", self.owners.as_str()),
        ])
    }
}

/// Checks a generate-flag cell against [`AFFIRMATIVE_FLAGS`]
pub fn is_affirmative(flag: &str) -> bool {
    let flag = flag.trim().to_uppercase();
    AFFIRMATIVE_FLAGS.contains(&flag.as_str())
}
