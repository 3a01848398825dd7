//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! acceptance act test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built departments and sheets
//! - `builders`: Builders for raw asset and department rows
//! - `assertions`: Assertion helpers for ledgers and money
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
