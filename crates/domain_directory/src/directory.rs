//! The department directory
//!
//! Built once per run from the department sheet, read-only afterwards.
//! Owner tokens from the asset sheet are resolved against it by normalized
//! code.

use std::collections::HashMap;

use core_kernel::sheet::describe_cells;
use core_kernel::{DiagnosticsSink, OwnerCode, RawRow, SheetSource};

use crate::department::{Department, DepartmentColumns};
use crate::error::DirectoryError;

/// Departments indexed by normalized code
#[derive(Debug, Clone, Default)]
pub struct DepartmentDirectory {
    departments: HashMap<OwnerCode, Department>,
}

impl DepartmentDirectory {
    /// Creates an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a department, returning the one it replaced
    pub fn insert(&mut self, department: Department) -> Option<Department> {
        self.departments.insert(department.key.clone(), department)
    }

    /// Resolves raw owner text (any case, any spacing)
    pub fn lookup(&self, raw_code: &str) -> Option<&Department> {
        let key = OwnerCode::normalize(raw_code);
        if key.is_empty() {
            return None;
        }
        self.departments.get(&key)
    }

    /// Looks up an already normalized code
    pub fn get(&self, code: &OwnerCode) -> Option<&Department> {
        self.departments.get(code)
    }

    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    /// Iterates over departments in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &Department> {
        self.departments.values()
    }
}

impl FromIterator<Department> for DepartmentDirectory {
    fn from_iter<I: IntoIterator<Item = Department>>(iter: I) -> Self {
        let mut directory = Self::new();
        for department in iter {
            directory.insert(department);
        }
        directory
    }
}

/// Builds the directory from department sheet rows
///
/// The first row is the header and is skipped. Rows without a code are
/// reported and skipped. When a code appears twice the later row wins and
/// a warning names both rows.
///
/// # Arguments
///
/// * `rows` - All sheet rows, header included
/// * `columns` - Column layout of the sheet
/// * `diagnostics` - Sink for skipped and duplicate rows
pub fn load_departments(
    rows: &[RawRow],
    columns: &DepartmentColumns,
    diagnostics: &mut dyn DiagnosticsSink,
) -> DepartmentDirectory {
    let mut directory = DepartmentDirectory::new();

    if rows.len() < 2 {
        diagnostics.warning(
            None,
            "departments_empty",
            "Departments sheet empty or missing rows.".to_string(),
        );
        return directory;
    }

    let mut first_seen: HashMap<OwnerCode, usize> = HashMap::new();

    for (offset, row) in rows.iter().enumerate().skip(1) {
        let row_number = offset + 1;

        let Some(department) = Department::from_row(row, columns) else {
            let context = describe_cells(
                row,
                &[
                    ("status", columns.status),
                    ("position", columns.signatory_position),
                    ("fullname", columns.signatory_name),
                    ("normalized", columns.signatory_name_formatted),
                ],
            );
            diagnostics.warning(
                Some(row_number),
                "department_missing_code",
                format!("Departments row {row_number} missing code; skipping. Row data: {context}"),
            );
            continue;
        };

        if let Some(previous) = first_seen.insert(department.key.clone(), row_number) {
            diagnostics.warning(
                Some(row_number),
                "duplicate_department_code",
                format!(
                    "Department code '{}' already defined in row {previous}; row {row_number} replaces it.",
                    department.key
                ),
            );
        }

        directory.insert(department);
    }

    tracing::debug!(departments = directory.len(), "department directory built");
    directory
}

/// Reads the department sheet from a source and builds the directory
///
/// # Errors
///
/// Returns `DirectoryError::Load` when the source cannot be read. This is
/// the only fatal condition of a run.
pub fn load_directory(
    source: &dyn SheetSource,
    sheet_id: &str,
    sheet_name: &str,
    columns: &DepartmentColumns,
    diagnostics: &mut dyn DiagnosticsSink,
) -> Result<DepartmentDirectory, DirectoryError> {
    let rows = source
        .read_rows(sheet_id, sheet_name)
        .map_err(|source| DirectoryError::Load {
            sheet_id: sheet_id.to_string(),
            sheet_name: sheet_name.to_string(),
            source,
        })?;

    Ok(load_departments(&rows, columns, diagnostics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::CollectingDiagnostics;

    fn rows(data: &[&[&str]]) -> Vec<RawRow> {
        data.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_lookup_is_normalized() {
        let directory: DepartmentDirectory =
            vec![Department::new("It 01"), Department::new("FIN")].into_iter().collect();

        assert!(directory.lookup("it01").is_some());
        assert!(directory.lookup(" I T 0 1 ").is_some());
        assert!(directory.lookup("fin").is_some());
        assert!(directory.lookup("HR").is_none());
        assert!(directory.lookup("  ").is_none());
    }

    #[test]
    fn test_header_only_sheet_is_empty() {
        let mut sink = CollectingDiagnostics::new();
        let directory = load_departments(
            &rows(&[&["code", "status"]]),
            &DepartmentColumns::default(),
            &mut sink,
        );

        assert!(directory.is_empty());
        assert!(sink.has_code("departments_empty"));
    }

    #[test]
    fn test_row_numbers_are_sheet_rows() {
        let mut sink = CollectingDiagnostics::new();
        load_departments(
            &rows(&[&["code"], &["A"], &["", "active", "Head"]]),
            &DepartmentColumns::default(),
            &mut sink,
        );

        let skipped = sink.with_code("department_missing_code");
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].row, Some(3));
        assert!(skipped[0].message.contains("Head"));
    }
}
