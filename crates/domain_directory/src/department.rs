//! Department records

use serde::{Deserialize, Serialize};

use core_kernel::sheet::trimmed_cell;
use core_kernel::OwnerCode;

/// 1-based column positions of the department sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepartmentColumns {
    pub code: usize,
    pub status: usize,
    pub signatory_position: usize,
    pub signatory_name: usize,
    /// Signatory name in the grammatical case used by the act text
    pub signatory_name_formatted: usize,
    pub receiver_position: usize,
    pub receiver_name: usize,
}

impl Default for DepartmentColumns {
    fn default() -> Self {
        Self {
            code: 1,
            status: 2,
            signatory_position: 3,
            signatory_name: 4,
            signatory_name_formatted: 5,
            receiver_position: 6,
            receiver_name: 7,
        }
    }
}

/// An owning department as listed in the directory sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Lookup key
    pub key: OwnerCode,
    /// Code as typed in the sheet, used in file names
    pub code: String,
    pub status: String,
    pub signatory_position: String,
    pub signatory_name: String,
    pub signatory_name_formatted: String,
    pub receiver_position: String,
    pub receiver_name: String,
}

impl Department {
    /// Creates a department with only a code, other fields empty
    pub fn new(code: impl Into<String>) -> Self {
        let code: String = code.into();
        let code = code.trim().to_string();
        Self {
            key: OwnerCode::normalize(&code),
            code,
            status: String::new(),
            signatory_position: String::new(),
            signatory_name: String::new(),
            signatory_name_formatted: String::new(),
            receiver_position: String::new(),
            receiver_name: String::new(),
        }
    }

    /// Maps a raw sheet row; `None` when the code cell is empty
    pub fn from_row(row: &[String], columns: &DepartmentColumns) -> Option<Self> {
        let code = trimmed_cell(row, columns.code);
        if code.is_empty() {
            return None;
        }
        let key = OwnerCode::normalize(code);
        if key.is_empty() {
            return None;
        }

        Some(Self {
            key,
            code: code.to_string(),
            status: trimmed_cell(row, columns.status).to_string(),
            signatory_position: trimmed_cell(row, columns.signatory_position).to_string(),
            signatory_name: trimmed_cell(row, columns.signatory_name).to_string(),
            signatory_name_formatted: trimmed_cell(row, columns.signatory_name_formatted)
                .to_string(),
            receiver_position: trimmed_cell(row, columns.receiver_position).to_string(),
            receiver_name: trimmed_cell(row, columns.receiver_name).to_string(),
        })
    }

    /// Sets the signatory
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

    /// Sets the receiver
    pub fn with_receiver(mut self, position: impl Into<String>, name: impl Into<String>) -> Self {
        self.receiver_position = position.into();
        self.receiver_name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_from_full_row() {
        let r = row(&[
            " it 01 ",
            "active",
            "Head of IT",
            "Ivan Petrenko",
            "Ivana Petrenka",
            "Storekeeper",
            "Olha Koval",
        ]);
        let dept = Department::from_row(&r, &DepartmentColumns::default()).unwrap();

        assert_eq!(dept.key.as_str(), "IT01");
        assert_eq!(dept.code, "it 01");
        assert_eq!(dept.signatory_name_formatted, "Ivana Petrenka");
        assert_eq!(dept.receiver_name, "Olha Koval");
    }

    #[test]
    fn test_short_row_defaults_to_empty() {
        let dept = Department::from_row(&row(&["FIN"]), &DepartmentColumns::default()).unwrap();
        assert_eq!(dept.status, "");
        assert_eq!(dept.receiver_position, "");
    }

    #[test]
    fn test_missing_code() {
        assert!(Department::from_row(&row(&["", "active"]), &DepartmentColumns::default()).is_none());
        assert!(Department::from_row(&row(&[]), &DepartmentColumns::default()).is_none());
    }
}
