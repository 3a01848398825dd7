//! Allocation Domain - Splitting Asset Rows Among Owners
//!
//! Every asset row names one or more owning departments. This crate turns
//! a row into per-owner line items whose money sums add up to the row's
//! price to the cent, and accumulates them into one ledger per owner.
//!
//! # Allocation Rules
//!
//! - The unit price is computed once per row and rounded to the cent
//! - Owners are either all explicit (`IT-3, FIN-2`) or one implicit owner
//! - Explicit quantities must add up to the row quantity
//! - Unknown owners are dropped; the row continues with the rest
//! - The rounding remainder lands on the last resolved owner
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_allocation::{AllocationPolicy, AssetColumns, BatchProcessor};
//!
//! let processor = BatchProcessor::new(&directory, AssetColumns::default(), AllocationPolicy::default());
//! let snapshot = processor.process(&rows, &mut diagnostics);
//!
//! for (code, ledger) in &snapshot.ledgers {
//!     println!("{code}: {} items, {}", ledger.items().len(), ledger.total_sum());
//! }
//! ```

pub mod asset_row;
pub mod owner_token;
pub mod validation;
pub mod engine;
pub mod ledger;
pub mod processor;
pub mod error;

pub use asset_row::{is_affirmative, AssetColumns, AssetRow};
pub use owner_token::{parse_owner_token, parse_owners, tokenize_owners, OwnerToken};
pub use validation::{validate_row, ValidatedRow};
pub use engine::{
    split_quantities, Allocation, AllocationEngine, AllocationPolicy, OwnerShare, RoundingOutcome,
};
pub use ledger::{Aggregator, BatchStats, LedgerEntry, LedgerSnapshot, LineItem, OwnerLedger};
pub use processor::BatchProcessor;
pub use error::RowError;
