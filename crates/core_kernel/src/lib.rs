//! Core Kernel - Foundational types for acceptance act generation
//!
//! This crate provides the building blocks shared by every other crate:
//! - Money types with exact decimal arithmetic and half-up cent rounding
//! - Locale-aware money formatting and Ukrainian number words
//! - Normalized owner codes
//! - Total, 1-based access to raw spreadsheet rows
//! - The diagnostics sink and the sheet source port

pub mod money;
pub mod format;
pub mod words;
pub mod codes;
pub mod sheet;
pub mod diagnostics;
pub mod ports;

pub use money::{Money, MoneyError, parse_decimal, quantize_money};
pub use format::{MoneyFormat, format_money};
pub use words::{integer_to_words, money_to_words};
pub use codes::OwnerCode;
pub use sheet::RawRow;
pub use diagnostics::{
    CollectingDiagnostics, Diagnostic, DiagnosticsSink, Severity, TracingDiagnostics,
};
pub use ports::{SheetSource, SourceError, StaticSheetSource};
