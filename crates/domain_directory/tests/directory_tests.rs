//! Tests for loading the department directory

use core_kernel::{CollectingDiagnostics, RawRow, Severity, StaticSheetSource};
use domain_directory::{
    load_departments, load_directory, Department, DepartmentColumns, DirectoryError,
};

fn sheet(data: &[&[&str]]) -> Vec<RawRow> {
    data.iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

fn department_sheet() -> Vec<RawRow> {
    sheet(&[
        &["Code", "Status", "Position", "Full name", "Name (dative)", "Receiver position", "Receiver"],
        &["IT", "active", "Head of IT", "Ivan Petrenko", "Ivanu Petrenku", "Storekeeper", "Olha Koval"],
        &["fin 2", "active", "Chief accountant", "Maria Shevchuk", "Marii Shevchuk"],
        &[],
        &["", "archived", "Nobody"],
    ])
}

mod loading {
    use super::*;

    #[test]
    fn test_loads_every_row_with_code() {
        let mut sink = CollectingDiagnostics::new();
        let directory = load_departments(&department_sheet(), &DepartmentColumns::default(), &mut sink);

        assert_eq!(directory.len(), 2);
        let it = directory.lookup("it").unwrap();
        assert_eq!(it.signatory_position, "Head of IT");
        assert_eq!(it.receiver_name, "Olha Koval");

        let fin = directory.lookup("FIN2").unwrap();
        assert_eq!(fin.code, "fin 2");
        assert_eq!(fin.receiver_position, "");
    }

    #[test]
    fn test_rows_without_code_are_warned_not_fatal() {
        let mut sink = CollectingDiagnostics::new();
        load_departments(&department_sheet(), &DepartmentColumns::default(), &mut sink);

        let skipped = sink.with_code("department_missing_code");
        assert_eq!(skipped.len(), 2);
        assert_eq!(skipped[0].row, Some(4));
        assert_eq!(skipped[1].row, Some(5));
        assert!(skipped.iter().all(|d| d.severity == Severity::Warning));
    }

    #[test]
    fn test_custom_columns() {
        let columns = DepartmentColumns {
            code: 2,
            status: 1,
            ..DepartmentColumns::default()
        };
        let rows = sheet(&[&["status", "code"], &["active", "HR"]]);
        let mut sink = CollectingDiagnostics::new();
        let directory = load_departments(&rows, &columns, &mut sink);

        assert_eq!(directory.lookup("hr").unwrap().status, "active");
    }
}

mod duplicates {
    use super::*;

    #[test]
    fn test_last_occurrence_wins_with_warning() {
        let rows = sheet(&[
            &["Code", "Status", "Position"],
            &["OPS", "active", "First head"],
            &["o p s", "active", "Second head"],
        ]);
        let mut sink = CollectingDiagnostics::new();
        let directory = load_departments(&rows, &DepartmentColumns::default(), &mut sink);

        assert_eq!(directory.len(), 1);
        assert_eq!(directory.lookup("OPS").unwrap().signatory_position, "Second head");

        let warnings = sink.with_code("duplicate_department_code");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].row, Some(3));
        assert!(warnings[0].message.contains("row 2"));
    }
}

mod sources {
    use super::*;

    #[test]
    fn test_load_directory_from_source() {
        let source = StaticSheetSource::new().with_sheet("depts", "Departments", department_sheet());
        let mut sink = CollectingDiagnostics::new();

        let directory = load_directory(
            &source,
            "depts",
            "Departments",
            &DepartmentColumns::default(),
            &mut sink,
        )
        .unwrap();

        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn test_unreadable_source_is_fatal() {
        let source = StaticSheetSource::new();
        let mut sink = CollectingDiagnostics::new();

        let result = load_directory(
            &source,
            "depts",
            "Departments",
            &DepartmentColumns::default(),
            &mut sink,
        );

        match result {
            Err(DirectoryError::Load { sheet_name, .. }) => assert_eq!(sheet_name, "Departments"),
            other => panic!("Expected Load error, got {other:?}"),
        }
    }
}

mod records {
    use super::*;

    #[test]
    fn test_builder_style_department() {
        let dept = Department::new(" qa ")
            .with_signatory("Lead", "Petro Bondar", "Petru Bondaru")
            .with_receiver("Clerk", "Anna Lys");

        assert_eq!(dept.key.as_str(), "QA");
        assert_eq!(dept.code, "qa");
        assert_eq!(dept.signatory_name_formatted, "Petru Bondaru");
        assert_eq!(dept.receiver_name, "Anna Lys");
    }

    #[test]
    fn test_department_serializes_with_plain_key() {
        let dept = Department::new("IT");
        let json = serde_json::to_value(&dept).unwrap();
        assert_eq!(json["key"], "IT");
    }
}
