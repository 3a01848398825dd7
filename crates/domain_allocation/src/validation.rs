//! Row validation
//!
//! Turns the text cells of an [`AssetRow`] into typed values. Every check
//! that can fail without looking at the directory happens here.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::parse_decimal;

use crate::asset_row::AssetRow;
use crate::error::RowError;
use crate::owner_token::{parse_owners, OwnerToken};

/// An asset row with parsed quantity, price and owners
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedRow {
    pub row_number: usize,
    pub name: String,
    pub inventory_number: String,
    /// Lower-cased unit of measure
    pub unit: String,
    pub quantity: u64,
    /// Total price as written, not yet rounded
    pub price: Decimal,
    pub owners: Vec<OwnerToken>,
}

/// Validates an asset row
///
/// # Errors
///
/// - `MissingField` naming every blank required cell
/// - `InvalidQuantity` when quantity is not a positive whole number
/// - `InvalidPrice` when price is not a non-negative number
/// - `InvalidOwnerQuantity` when an owner count does not fit a `u64`
/// - `NoOwners` when the owners cell holds only separators
pub fn validate_row(row: &AssetRow) -> Result<ValidatedRow, RowError> {
    let required: [(&'static str, &str); 6] = [
        ("name", row.name.as_str()),
        ("inventory", row.inventory_number.as_str()),
        ("unit", row.unit.as_str()),
        ("quantity", row.quantity.as_str()),
        ("price", row.price.as_str()),
        ("owners", row.owners.as_str()),
    ];
    let missing: Vec<&'static str> = required
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| *field)
        .collect();
    if !missing.is_empty() {
        return Err(RowError::MissingField { fields: missing });
    }

    let quantity = parse_quantity(&row.quantity)?;
    let price = parse_price(&row.price)?;

    let owners = parse_owners(&row.owners)?;
    if owners.is_empty() {
        return Err(RowError::NoOwners);
    }

    Ok(ValidatedRow {
        row_number: row.row_number,
        name: row.name.trim().to_string(),
        inventory_number: row.inventory_number.trim().to_string(),
        unit: row.unit.trim().to_lowercase(),
        quantity,
        price,
        owners,
    })
}

fn parse_quantity(text: &str) -> Result<u64, RowError> {
    let invalid = |reason: &str| RowError::InvalidQuantity {
        value: text.trim().to_string(),
        reason: reason.to_string(),
    };

    let value = parse_decimal(text).map_err(|e| invalid(&e.to_string()))?;
    if value <= Decimal::ZERO {
        return Err(invalid("must be positive"));
    }
    if !value.fract().is_zero() {
        return Err(invalid("must be a whole number"));
    }
    value.to_u64().ok_or_else(|| invalid("out of range"))
}

fn parse_price(text: &str) -> Result<Decimal, RowError> {
    let value = parse_decimal(text).map_err(|e| RowError::InvalidPrice {
        value: text.trim().to_string(),
        reason: e.to_string(),
    })?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(RowError::InvalidPrice {
            value: text.trim().to_string(),
            reason: "must not be negative".to_string(),
        });
    }
    Ok(value)
}
