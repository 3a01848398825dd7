//! The allocation engine
//!
//! Splits one validated row among its owners:
//!
//! 1. `unit_price = quantize(P / Q)`, computed once
//! 2. Owner counts are checked: all explicit and summing to `Q`, or one
//!    implicit owner taking all of `Q`
//! 3. Codes are resolved against the directory; unknown ones are dropped
//! 4. `sum_i = quantize(unit_price * q_i)`
//! 5. The cent remainder against the target lands on the last resolved
//!    owner
//!
//! The target is `quantize(P)` when every owner resolves, and
//! `quantize(P * Σq_resolved / Q)` when some were dropped.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, MoneyError, OwnerCode};
use domain_directory::{Department, DepartmentDirectory};

use crate::error::RowError;
use crate::owner_token::OwnerToken;
use crate::validation::ValidatedRow;

/// Knobs of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationPolicy {
    /// Move the rounding remainder onto the last owner. When off, shares
    /// keep their rounded sums and the row total may be off by cents.
    pub reconcile_rounding: bool,
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        Self {
            reconcile_rounding: true,
        }
    }
}

/// What reconciliation did to a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingOutcome {
    /// Rounded shares already matched the target
    Exact,
    /// `difference` was added to the last share
    Adjusted { difference: Decimal },
    /// Reconciliation is off; shares miss the target by `difference`
    Unreconciled { difference: Decimal },
}

/// One resolved owner's part of a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerShare<'d> {
    pub code: OwnerCode,
    pub department: &'d Department,
    pub quantity: u64,
    pub sum: Money,
}

/// Result of allocating one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation<'d> {
    pub unit_price: Money,
    /// Resolved owners in token order
    pub shares: Vec<OwnerShare<'d>>,
    /// Owner codes, as written, that are not in the directory
    pub unknown_owners: Vec<String>,
    /// Money the shares are reconciled against
    pub target: Money,
    pub rounding: RoundingOutcome,
}

impl Allocation<'_> {
    pub fn total(&self) -> Money {
        self.shares.iter().map(|share| share.sum).sum()
    }

    pub fn total_quantity(&self) -> u64 {
        self.shares.iter().map(|share| share.quantity).sum()
    }
}

/// Allocates validated rows against a department directory
#[derive(Debug, Clone, Copy)]
pub struct AllocationEngine<'d> {
    directory: &'d DepartmentDirectory,
    policy: AllocationPolicy,
}

impl<'d> AllocationEngine<'d> {
    pub fn new(directory: &'d DepartmentDirectory, policy: AllocationPolicy) -> Self {
        Self { directory, policy }
    }

    pub fn policy(&self) -> AllocationPolicy {
        self.policy
    }

    /// Splits a row among its owners
    ///
    /// Unknown owners do not fail the row; they are listed in
    /// `Allocation::unknown_owners`.
    ///
    /// # Errors
    ///
    /// Owner-count errors from [`split_quantities`],
    /// `RowError::NoResolvedOwners` when no owner is in the directory, and
    /// `RowError::InvalidPrice` when an amount does not fit a `Decimal`.
    pub fn allocate(&self, row: &ValidatedRow) -> Result<Allocation<'d>, RowError> {
        let quantity = row.quantity;
        let unit_price =
            Money::unit_price(row.price, quantity).map_err(|e| RowError::InvalidQuantity {
                value: quantity.to_string(),
                reason: e.to_string(),
            })?;

        let requested = split_quantities(&row.owners, quantity)?;

        let out_of_range = |reason: MoneyError| RowError::InvalidPrice {
            value: row.price.to_string(),
            reason: reason.to_string(),
        };

        let mut shares = Vec::with_capacity(requested.len());
        let mut unknown_owners = Vec::new();
        for (base_code, owner_quantity) in requested {
            match self.directory.lookup(&base_code) {
                Some(department) => shares.push(OwnerShare {
                    code: department.key.clone(),
                    department,
                    quantity: owner_quantity,
                    sum: unit_price.multiply(owner_quantity).map_err(out_of_range)?,
                }),
                None => unknown_owners.push(base_code),
            }
        }

        if shares.is_empty() {
            return Err(RowError::NoResolvedOwners {
                owners: unknown_owners,
            });
        }

        let resolved_quantity: u64 = shares.iter().map(|share| share.quantity).sum();
        let target = if resolved_quantity == quantity {
            Money::new(row.price)
        } else {
            Money::share_of(row.price, resolved_quantity, quantity).map_err(out_of_range)?
        };

        let allocated = shares
            .iter()
            .try_fold(Money::zero(), |acc, share| acc.checked_add(share.sum))
            .ok_or_else(|| out_of_range(MoneyError::Overflow))?;
        let difference = target
            .amount()
            .checked_sub(allocated.amount())
            .ok_or_else(|| out_of_range(MoneyError::Overflow))?;

        let rounding = if difference.is_zero() {
            RoundingOutcome::Exact
        } else if self.policy.reconcile_rounding {
            if let Some(last) = shares.last_mut() {
                last.sum = last
                    .sum
                    .checked_add(Money::new(difference))
                    .ok_or_else(|| out_of_range(MoneyError::Overflow))?;
            }
            RoundingOutcome::Adjusted { difference }
        } else {
            RoundingOutcome::Unreconciled { difference }
        };

        Ok(Allocation {
            unit_price,
            shares,
            unknown_owners,
            target,
            rounding,
        })
    }
}

/// Assigns a quantity to every owner token
///
/// # Errors
///
/// - `NoOwners` for an empty token list
/// - `MixedOwnerSpec` when only some tokens carry a count
/// - `ZeroOwnerQuantity` for an explicit count of zero
/// - `OwnerQuantityMismatch` when explicit counts do not sum to `quantity`
/// - `AmbiguousOwner` for several tokens without counts
pub fn split_quantities(
    tokens: &[OwnerToken],
    quantity: u64,
) -> Result<Vec<(String, u64)>, RowError> {
    if tokens.is_empty() {
        return Err(RowError::NoOwners);
    }

    let (explicit, implicit): (Vec<&OwnerToken>, Vec<&OwnerToken>) =
        tokens.iter().partition(|token| token.is_explicit());

    if !explicit.is_empty() && !implicit.is_empty() {
        return Err(RowError::MixedOwnerSpec {
            explicit: explicit.iter().map(|t| t.base_code.clone()).collect(),
            implicit: implicit.iter().map(|t| t.base_code.clone()).collect(),
        });
    }

    if implicit.len() > 1 {
        return Err(RowError::AmbiguousOwner {
            owners: implicit.iter().map(|t| t.base_code.clone()).collect(),
        });
    }

    if let [single] = implicit.as_slice() {
        return Ok(vec![(single.base_code.clone(), quantity)]);
    }

    let mut split = Vec::with_capacity(explicit.len());
    let mut specified: u64 = 0;
    for token in explicit {
        let owner_quantity = token.quantity.unwrap_or_default();
        if owner_quantity == 0 {
            return Err(RowError::ZeroOwnerQuantity {
                owner: token.base_code.clone(),
            });
        }
        specified = specified.saturating_add(owner_quantity);
        split.push((token.base_code.clone(), owner_quantity));
    }

    if specified != quantity {
        return Err(RowError::OwnerQuantityMismatch {
            specified,
            quantity,
        });
    }

    Ok(split)
}
