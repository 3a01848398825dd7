//! Row-level allocation errors
//!
//! None of these abort a batch. The processor turns each one into a
//! diagnostic and a skip counter.

use thiserror::Error;

use core_kernel::Severity;

/// Reasons a row, or one owner of a row, is left out of the acts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// One or more required cells are blank
    #[error("missing required field(s): {}", .fields.join(", "))]
    MissingField { fields: Vec<&'static str> },

    /// Quantity is not a positive integer
    #[error("invalid quantity '{value}': {reason}")]
    InvalidQuantity { value: String, reason: String },

    /// Price is not a non-negative decimal
    #[error("invalid price '{value}': {reason}")]
    InvalidPrice { value: String, reason: String },

    /// Owners cell tokenizes to nothing
    #[error("no owners listed")]
    NoOwners,

    /// An owner count is too large to be a unit count
    #[error("owner '{owner}' has invalid quantity '{value}'")]
    InvalidOwnerQuantity { owner: String, value: String },

    /// Some owners carry a count and some do not
    #[error(
        "mixed explicit and implicit owners (explicit: {}; implicit: {})",
        .explicit.join(", "),
        .implicit.join(", ")
    )]
    MixedOwnerSpec {
        explicit: Vec<String>,
        implicit: Vec<String>,
    },

    /// Explicit owner counts do not add up to the row quantity
    #[error("owner counts sum {specified} != quantity {quantity}")]
    OwnerQuantityMismatch { specified: u64, quantity: u64 },

    /// Several owners and none of them has a count
    #[error("ambiguous multiple owners without counts: {}", .owners.join(", "))]
    AmbiguousOwner { owners: Vec<String> },

    /// An explicit owner was given zero units
    #[error("owner '{owner}' has zero quantity")]
    ZeroOwnerQuantity { owner: String },

    /// Owner code is not in the directory
    #[error("owner '{owner}' not found in departments")]
    UnknownOwner { owner: String },

    /// Adding the row would push a running total out of range
    #[error("running total for {scope} out of range")]
    TotalsOverflow { scope: String },

    /// Every owner of the row was unknown
    #[error("no known owners left (skipped: {})", .owners.join(", "))]
    NoResolvedOwners { owners: Vec<String> },
}

impl RowError {
    /// Stable identifier used as the diagnostic code
    pub fn code(&self) -> &'static str {
        match self {
            RowError::MissingField { .. } => "missing_field",
            RowError::InvalidQuantity { .. } => "invalid_quantity",
            RowError::InvalidPrice { .. } => "invalid_price",
            RowError::NoOwners => "no_owners",
            RowError::InvalidOwnerQuantity { .. } => "invalid_owner_quantity",
            RowError::MixedOwnerSpec { .. } => "mixed_owner_spec",
            RowError::OwnerQuantityMismatch { .. } => "owner_quantity_mismatch",
            RowError::AmbiguousOwner { .. } => "ambiguous_owner",
            RowError::ZeroOwnerQuantity { .. } => "zero_owner_quantity",
            RowError::UnknownOwner { .. } => "unknown_owner",
            RowError::TotalsOverflow { .. } => "totals_overflow",
            RowError::NoResolvedOwners { .. } => "no_resolved_owners",
        }
    }

    /// How loudly the skip is reported
    pub fn severity(&self) -> Severity {
        match self {
            RowError::MissingField { .. } => Severity::Warning,
            RowError::NoResolvedOwners { .. } => Severity::Info,
            _ => Severity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_lists_all() {
        let err = RowError::MissingField {
            fields: vec!["name", "price"],
        };
        assert_eq!(err.to_string(), "missing required field(s): name, price");
        assert_eq!(err.code(), "missing_field");
        assert_eq!(err.severity(), Severity::Warning);
    }

    #[test]
    fn test_mismatch_message() {
        let err = RowError::OwnerQuantityMismatch {
            specified: 7,
            quantity: 10,
        };
        assert_eq!(err.to_string(), "owner counts sum 7 != quantity 10");
        assert_eq!(err.severity(), Severity::Error);
    }
}
