//! Positional access to raw spreadsheet rows
//!
//! Sheet APIs drop trailing empty cells, so rows have ragged lengths. Every
//! accessor here is total: a column past the end of the row reads as an
//! empty string instead of failing.

/// One raw spreadsheet row
pub type RawRow = Vec<String>;

/// Returns the cell at a 1-based column, or `""` when absent
pub fn cell(row: &[String], column: usize) -> &str {
    column
        .checked_sub(1)
        .and_then(|index| row.get(index))
        .map(String::as_str)
        .unwrap_or("")
}

/// Returns the trimmed cell at a 1-based column
pub fn trimmed_cell(row: &[String], column: usize) -> &str {
    cell(row, column).trim()
}

/// Returns true when every cell of the row is blank
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|value| value.trim().is_empty())
}

/// Renders the non-empty cells of a row as `{name: value, ...}` for logs
pub fn describe_cells(row: &[String], columns: &[(&str, usize)]) -> String {
    let fields: Vec<(&str, &str)> = columns
        .iter()
        .map(|(name, column)| (*name, trimmed_cell(row, *column)))
        .collect();
    describe_fields(&fields)
}

/// Renders named values as `{name: value, ...}`, leaving out empty ones
pub fn describe_fields(fields: &[(&str, &str)]) -> String {
    let parts: Vec<String> = fields
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(name, value)| format!("{name}: {:?}", value.trim()))
        .collect();

    if parts.is_empty() {
        "{empty row}".to_string()
    } else {
        format!("{{{}}}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> RawRow {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_cell_is_one_based_and_total() {
        let r = row(&["a", "b"]);
        assert_eq!(cell(&r, 1), "a");
        assert_eq!(cell(&r, 2), "b");
        assert_eq!(cell(&r, 3), "");
        assert_eq!(cell(&r, 0), "");
    }

    #[test]
    fn test_blank_row() {
        assert!(is_blank_row(&row(&["", "  ", "\t"])));
        assert!(is_blank_row(&[]));
        assert!(!is_blank_row(&row(&["", "x"])));
    }

    #[test]
    fn test_describe_cells_skips_empty() {
        let r = row(&["Chair", "", " 5 "]);
        let text = describe_cells(&r, &[("name", 1), ("unit", 2), ("qty", 3), ("price", 9)]);
        assert_eq!(text, r#"{name: "Chair", qty: "5"}"#);
        assert_eq!(describe_cells(&row(&[]), &[("name", 1)]), "{empty row}");
    }
}
