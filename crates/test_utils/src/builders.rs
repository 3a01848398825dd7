//! Test Data Builders
//!
//! Builders for raw sheet rows in the default column layout. Tests set
//! only the cells they care about.

use std::path::Path;

use core_kernel::RawRow;
use domain_allocation::AssetColumns;
use domain_directory::DepartmentColumns;

/// Builder for a raw asset sheet row
#[derive(Debug, Clone)]
pub struct AssetRowBuilder {
    name: String,
    inventory_number: String,
    unit: String,
    quantity: String,
    price: String,
    owners: String,
    generate_flag: String,
}

impl AssetRowBuilder {
    /// Creates a row for one unit priced 10.00 owned by IT
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            inventory_number: format!("INV-{name}"),
            name,
            unit: "шт".to_string(),
            quantity: "1".to_string(),
            price: "10.00".to_string(),
            owners: "IT".to_string(),
            generate_flag: "TRUE".to_string(),
        }
    }

    pub fn inventory(mut self, value: impl Into<String>) -> Self {
        self.inventory_number = value.into();
        self
    }

    pub fn unit(mut self, value: impl Into<String>) -> Self {
        self.unit = value.into();
        self
    }

    pub fn quantity(mut self, value: impl Into<String>) -> Self {
        self.quantity = value.into();
        self
    }

    pub fn price(mut self, value: impl Into<String>) -> Self {
        self.price = value.into();
        self
    }

    pub fn owners(mut self, value: impl Into<String>) -> Self {
        self.owners = value.into();
        self
    }

    pub fn generate(mut self, flag: bool) -> Self {
        self.generate_flag = if flag { "TRUE" } else { "FALSE" }.to_string();
        self
    }

    pub fn flag(mut self, value: impl Into<String>) -> Self {
        self.generate_flag = value.into();
        self
    }

    /// Builds the row in the default asset layout
    pub fn build(self) -> RawRow {
        let columns = AssetColumns::default();
        let mut row = RawRow::new();
        place(&mut row, columns.name, self.name);
        place(&mut row, columns.inventory_number, self.inventory_number);
        place(&mut row, columns.unit, self.unit);
        place(&mut row, columns.quantity, self.quantity);
        place(&mut row, columns.price, self.price);
        place(&mut row, columns.owners, self.owners);
        place(&mut row, columns.generate_flag, self.generate_flag);
        row
    }
}

/// Builder for a raw department sheet row
#[derive(Debug, Clone)]
pub struct DepartmentRowBuilder {
    code: String,
    status: String,
    signatory_position: String,
    signatory_name: String,
    signatory_name_formatted: String,
    receiver_position: String,
    receiver_name: String,
}

impl DepartmentRowBuilder {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            status: "active".to_string(),
            signatory_position: String::new(),
            signatory_name: String::new(),
            signatory_name_formatted: String::new(),
            receiver_position: String::new(),
            receiver_name: String::new(),
        }
    }

    pub fn with_signatory(
        mut self,
        position: impl Into<String>,
        name: impl Into<String>,
        formatted_name: impl Into<String>,
    ) -> Self {
        self.signatory_position = position.into();
        self.signatory_name = name.into();
        self.signatory_name_formatted = formatted_name.into();
        self
    }

    pub fn with_receiver(mut self, position: impl Into<String>, name: impl Into<String>) -> Self {
        self.receiver_position = position.into();
        self.receiver_name = name.into();
        self
    }

    /// Builds the row in the default department layout
    pub fn build(self) -> RawRow {
        let columns = DepartmentColumns::default();
        let mut row = RawRow::new();
        place(&mut row, columns.code, self.code);
        place(&mut row, columns.status, self.status);
        place(&mut row, columns.signatory_position, self.signatory_position);
        place(&mut row, columns.signatory_name, self.signatory_name);
        place(&mut row, columns.signatory_name_formatted, self.signatory_name_formatted);
        place(&mut row, columns.receiver_position, self.receiver_position);
        place(&mut row, columns.receiver_name, self.receiver_name);
        row
    }
}

/// Puts a value at a 1-based column, growing the row as needed
fn place(row: &mut RawRow, column: usize, value: String) {
    if column == 0 {
        return;
    }
    if row.len() < column {
        row.resize(column, String::new());
    }
    row[column - 1] = value;
}

/// Writes rows to a CSV file
pub fn write_csv(path: &Path, rows: &[RawRow]) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(path)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
