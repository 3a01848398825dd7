//! Row-indexed diagnostics
//!
//! Components never log through a global logger. They receive a
//! [`DiagnosticsSink`] and report every skip or adjustment as a
//! [`Diagnostic`] carrying the sheet row number, a stable code and a
//! message with the offending cell values. The binary plugs in
//! [`TracingDiagnostics`]; tests plug in [`CollectingDiagnostics`] and
//! assert on what was reported.

use std::fmt;

/// Importance of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        };
        f.write_str(label)
    }
}

/// A single reported event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// 1-based sheet row the event refers to, if any
    pub row: Option<usize>,
    /// Stable machine-readable code, e.g. `mixed_owner_spec`
    pub code: &'static str,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row {
            Some(row) => write!(f, "{}: Row {} [{}] {}", self.severity, row, self.code, self.message),
            None => write!(f, "{}: [{}] {}", self.severity, self.code, self.message),
        }
    }
}

/// Destination for diagnostics
pub trait DiagnosticsSink {
    /// Records a diagnostic
    fn emit(&mut self, diagnostic: Diagnostic);

    fn info(&mut self, row: Option<usize>, code: &'static str, message: String) {
        self.emit(Diagnostic { severity: Severity::Info, row, code, message });
    }

    fn warning(&mut self, row: Option<usize>, code: &'static str, message: String) {
        self.emit(Diagnostic { severity: Severity::Warning, row, code, message });
    }

    fn error(&mut self, row: Option<usize>, code: &'static str, message: String) {
        self.emit(Diagnostic { severity: Severity::Error, row, code, message });
    }
}

/// Forwards diagnostics to the `tracing` subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn emit(&mut self, diagnostic: Diagnostic) {
        let Diagnostic { severity, row, code, message } = diagnostic;
        match severity {
            Severity::Info => tracing::info!(row = ?row, code, "{message}"),
            Severity::Warning => tracing::warn!(row = ?row, code, "{message}"),
            Severity::Error => tracing::error!(row = ?row, code, "{message}"),
        }
    }
}

/// Keeps every diagnostic in memory
#[derive(Debug, Default, Clone)]
pub struct CollectingDiagnostics {
    entries: Vec<Diagnostic>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// All diagnostics in emission order
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Diagnostics with the given code
    pub fn with_code(&self, code: &str) -> Vec<&Diagnostic> {
        self.entries.iter().filter(|d| d.code == code).collect()
    }

    /// Diagnostics reported for the given sheet row
    pub fn for_row(&self, row: usize) -> Vec<&Diagnostic> {
        self.entries.iter().filter(|d| d.row == Some(row)).collect()
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.entries.iter().any(|d| d.code == code)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.entries.iter().filter(|d| d.severity == severity).count()
    }
}

impl DiagnosticsSink for CollectingDiagnostics {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink_keeps_order_and_codes() {
        let mut sink = CollectingDiagnostics::new();
        sink.warning(Some(4), "rounding_adjusted", "adjusted by 0.01".to_string());
        sink.error(Some(7), "mixed_owner_spec", "mixed".to_string());
        sink.info(None, "summary", "done".to_string());

        assert_eq!(sink.entries().len(), 3);
        assert_eq!(sink.entries()[0].code, "rounding_adjusted");
        assert!(sink.has_code("mixed_owner_spec"));
        assert_eq!(sink.for_row(7).len(), 1);
        assert_eq!(sink.count(Severity::Warning), 1);
        assert!(sink.with_code("unknown").is_empty());
    }

    #[test]
    fn test_display_includes_row() {
        let diagnostic = Diagnostic {
            severity: Severity::Error,
            row: Some(12),
            code: "no_owners",
            message: "no owners".to_string(),
        };
        assert_eq!(diagnostic.to_string(), "ERROR: Row 12 [no_owners] no owners");
    }
}
