//! Act file names

use chrono::NaiveDate;

/// Pattern used when none is configured
pub const DEFAULT_FILE_NAME_PATTERN: &str = "Акт. {deptname} {date}";

/// `strftime` format of the `{date}` placeholder
pub const DATE_FORMAT: &str = "%Y %m %d";

const FORBIDDEN: [char; 9] = ['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Builds the file stem (no extension) for a department's act
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use interface_acts::naming::act_file_stem;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// assert_eq!(act_file_stem("Акт. {deptname} {date}", "IT/01", date), "Акт. IT_01 2024 03 07");
/// ```
pub fn act_file_stem(pattern: &str, department_name: &str, date: NaiveDate) -> String {
    let date_text = date.format(DATE_FORMAT).to_string();
    let name = pattern
        .replace("{date}", &date_text)
        .replace("{deptname}", department_name);
    sanitize_file_name(&name)
}

/// Replaces characters that are not allowed in file names with `_`
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if FORBIDDEN.contains(&c) || c.is_control() { '_' } else { c })
        .collect();
    cleaned.trim().to_string()
}
