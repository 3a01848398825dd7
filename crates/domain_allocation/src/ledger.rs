//! Per-owner ledgers and batch statistics
//!
//! The [`Aggregator`] is the only place owner ledgers are mutated. A
//! ledger is created on the first allocation to its owner, so a ledger
//! without items cannot exist.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use core_kernel::{Money, OwnerCode};
use domain_directory::Department;

use crate::error::RowError;

/// One owner's share of one asset row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub inventory_number: String,
    pub unit: String,
    pub quantity: u64,
    pub unit_price: Money,
    pub sum: Money,
    pub note: String,
}

/// Everything allocated to one department over a batch
///
/// # Invariants
///
/// - `items` is never empty
/// - `total_quantity` and `total_sum` equal the sums over `items`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerLedger<'d> {
    department: &'d Department,
    items: Vec<LineItem>,
    total_quantity: u64,
    total_sum: Money,
}

impl<'d> OwnerLedger<'d> {
    fn open(department: &'d Department, first: LineItem) -> Self {
        Self {
            department,
            total_quantity: first.quantity,
            total_sum: first.sum,
            items: vec![first],
        }
    }

    fn push(&mut self, item: LineItem) -> Result<(), RowError> {
        let overflow = || RowError::TotalsOverflow {
            scope: self.department.key.to_string(),
        };
        let total_quantity = self
            .total_quantity
            .checked_add(item.quantity)
            .ok_or_else(overflow)?;
        let total_sum = self.total_sum.checked_add(item.sum).ok_or_else(overflow)?;

        self.total_quantity = total_quantity;
        self.total_sum = total_sum;
        self.items.push(item);
        Ok(())
    }

    pub fn department(&self) -> &'d Department {
        self.department
    }

    /// Items in the order they were allocated
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total_quantity(&self) -> u64 {
        self.total_quantity
    }

    pub fn total_sum(&self) -> Money {
        self.total_sum
    }
}

/// Owner, department and line item for one resolved share of a row
pub type LedgerEntry<'d> = (OwnerCode, &'d Department, LineItem);

const BATCH_SCOPE: &str = "the batch";

/// Counters for the end-of-run summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStats {
    /// Rows that produced at least one line item
    pub rows_processed: usize,
    pub rows_skipped: usize,
    /// Owner entries dropped because their code is unknown
    pub owners_skipped: usize,
    pub total_items: usize,
    pub total_value: Money,
    pub rounding_adjustments: usize,
}

/// Accumulates line items into owner ledgers
#[derive(Debug, Clone, Default)]
pub struct Aggregator<'d> {
    ledgers: BTreeMap<OwnerCode, OwnerLedger<'d>>,
    stats: BatchStats,
}

impl<'d> Aggregator<'d> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line item to the owner's ledger, opening it if needed
    ///
    /// # Errors
    ///
    /// `RowError::TotalsOverflow` when a running total would leave the
    /// `Decimal` range. Nothing is recorded in that case.
    pub fn record_allocation(
        &mut self,
        owner_code: OwnerCode,
        department: &'d Department,
        item: LineItem,
    ) -> Result<(), RowError> {
        self.record_row(vec![(owner_code, department, item)])
    }

    /// Records all line items of one row, or none of them
    ///
    /// # Errors
    ///
    /// `RowError::TotalsOverflow` when any batch or owner total would leave
    /// the `Decimal` range.
    pub fn record_row(&mut self, entries: Vec<LedgerEntry<'d>>) -> Result<(), RowError> {
        self.check_totals(&entries)?;

        for (owner_code, department, item) in entries {
            let total_value = self.stats.total_value.checked_add(item.sum).ok_or_else(|| {
                RowError::TotalsOverflow {
                    scope: BATCH_SCOPE.to_string(),
                }
            })?;

            match self.ledgers.get_mut(&owner_code) {
                Some(ledger) => ledger.push(item)?,
                None => {
                    self.ledgers
                        .insert(owner_code, OwnerLedger::open(department, item));
                }
            }

            self.stats.total_value = total_value;
            self.stats.total_items += 1;
        }
        Ok(())
    }

    fn check_totals(&self, entries: &[LedgerEntry<'d>]) -> Result<(), RowError> {
        let overflow = |scope: &str| RowError::TotalsOverflow {
            scope: scope.to_string(),
        };

        let mut batch = self.stats.total_value;
        let mut owners: BTreeMap<&OwnerCode, (Money, u64)> = BTreeMap::new();
        for (owner_code, _, item) in entries {
            batch = batch
                .checked_add(item.sum)
                .ok_or_else(|| overflow(BATCH_SCOPE))?;

            let (sum, quantity) = owners.entry(owner_code).or_insert_with(|| {
                self.ledgers
                    .get(owner_code)
                    .map(|ledger| (ledger.total_sum, ledger.total_quantity))
                    .unwrap_or((Money::zero(), 0))
            });
            *sum = sum
                .checked_add(item.sum)
                .ok_or_else(|| overflow(owner_code.as_str()))?;
            *quantity = quantity
                .checked_add(item.quantity)
                .ok_or_else(|| overflow(owner_code.as_str()))?;
        }
        Ok(())
    }

    pub fn record_row_processed(&mut self) {
        self.stats.rows_processed += 1;
    }

    pub fn record_row_skipped(&mut self) {
        self.stats.rows_skipped += 1;
    }

    pub fn record_owner_skipped(&mut self) {
        self.stats.owners_skipped += 1;
    }

    pub fn record_rounding_adjustment(&mut self) {
        self.stats.rounding_adjustments += 1;
    }

    pub fn stats(&self) -> &BatchStats {
        &self.stats
    }

    /// Read-only copy of the current state
    pub fn snapshot(&self) -> LedgerSnapshot<'d> {
        LedgerSnapshot {
            ledgers: self.ledgers.clone(),
            stats: self.stats.clone(),
        }
    }

    /// Finishes the batch without copying
    pub fn into_snapshot(self) -> LedgerSnapshot<'d> {
        LedgerSnapshot {
            ledgers: self.ledgers,
            stats: self.stats,
        }
    }
}

/// Final ledgers, ordered by owner code, and the batch counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerSnapshot<'d> {
    pub ledgers: BTreeMap<OwnerCode, OwnerLedger<'d>>,
    pub stats: BatchStats,
}

impl<'d> LedgerSnapshot<'d> {
    /// Looks up a ledger by raw owner code
    pub fn ledger(&self, raw_code: &str) -> Option<&OwnerLedger<'d>> {
        self.ledgers.get(&OwnerCode::normalize(raw_code))
    }

    pub fn is_empty(&self) -> bool {
        self.ledgers.is_empty()
    }

    /// Number of items across all ledgers
    pub fn item_count(&self) -> usize {
        self.ledgers.values().map(|ledger| ledger.items().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn item(quantity: u64, sum: Money) -> LineItem {
        LineItem {
            name: "Chair".to_string(),
            inventory_number: "INV-1".to_string(),
            unit: "pcs".to_string(),
            quantity,
            unit_price: sum,
            sum,
            note: String::new(),
        }
    }

    #[test]
    fn test_ledgers_open_lazily_and_keep_totals() {
        let it = Department::new("IT");
        let mut aggregator = Aggregator::new();
        assert!(aggregator.snapshot().is_empty());

        aggregator.record_allocation(it.key.clone(), &it, item(2, Money::new(dec!(10.50))))
            .unwrap();
        aggregator.record_allocation(it.key.clone(), &it, item(3, Money::new(dec!(4.25))))
            .unwrap();

        let snapshot = aggregator.snapshot();
        let ledger = snapshot.ledger("it").unwrap();
        assert_eq!(ledger.items().len(), 2);
        assert_eq!(ledger.total_quantity(), 5);
        assert_eq!(ledger.total_sum(), Money::new(dec!(14.75)));
        assert_eq!(ledger.department().code, "IT");
        assert_eq!(snapshot.stats.total_items, 2);
        assert_eq!(snapshot.stats.total_value, Money::new(dec!(14.75)));
    }

    #[test]
    fn test_ledgers_are_ordered_by_code() {
        let b = Department::new("B");
        let a = Department::new("A");
        let mut aggregator = Aggregator::new();
        aggregator.record_allocation(b.key.clone(), &b, item(1, Money::zero())).unwrap();
        aggregator.record_allocation(a.key.clone(), &a, item(1, Money::zero())).unwrap();

        let snapshot = aggregator.snapshot();
        let codes: Vec<&str> = snapshot.ledgers.keys().map(|code| code.as_str()).collect();
        assert_eq!(codes, vec!["A", "B"]);
    }

    #[test]
    fn test_overflowing_row_records_nothing() {
        let a = Department::new("A");
        let b = Department::new("B");
        let mut aggregator = Aggregator::new();
        aggregator
            .record_allocation(b.key.clone(), &b, item(1, Money::new(Decimal::MAX)))
            .unwrap();

        let result = aggregator.record_row(vec![
            (a.key.clone(), &a, item(1, Money::new(dec!(1.00)))),
            (b.key.clone(), &b, item(1, Money::new(dec!(1.00)))),
        ]);

        assert!(matches!(result, Err(RowError::TotalsOverflow { .. })));
        let snapshot = aggregator.snapshot();
        assert!(snapshot.ledger("A").is_none());
        assert_eq!(snapshot.ledger("B").unwrap().items().len(), 1);
        assert_eq!(snapshot.stats.total_items, 1);
        assert_eq!(snapshot.stats.total_value, Money::new(Decimal::MAX));
    }
}
