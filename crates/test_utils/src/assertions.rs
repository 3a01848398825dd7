//! Custom Test Assertions
//!
//! Assertion helpers for ledgers and amounts that print the values
//! involved when they fail.

use core_kernel::Money;
use domain_allocation::{LedgerSnapshot, OwnerLedger};
use rust_decimal::Decimal;

/// Asserts that an amount equals a decimal value to the cent
pub fn assert_money_eq(actual: Money, expected: Decimal) {
    assert_eq!(
        actual,
        Money::new(expected),
        "Money mismatch: actual={actual}, expected={expected}"
    );
}

/// Asserts that a ledger's running totals equal the sums over its items
pub fn assert_ledger_consistent(ledger: &OwnerLedger<'_>) {
    assert!(
        !ledger.items().is_empty(),
        "Ledger for {} has no items",
        ledger.department().code
    );

    let sum: Money = ledger.items().iter().map(|item| item.sum).sum();
    let quantity: u64 = ledger.items().iter().map(|item| item.quantity).sum();
    assert_eq!(
        ledger.total_sum(),
        sum,
        "Ledger {} total_sum={} but items sum to {}",
        ledger.department().code,
        ledger.total_sum(),
        sum
    );
    assert_eq!(
        ledger.total_quantity(),
        quantity,
        "Ledger {} total_quantity={} but items sum to {}",
        ledger.department().code,
        ledger.total_quantity(),
        quantity
    );
}

/// Asserts every ledger is consistent and the stats agree with them
pub fn assert_snapshot_consistent(snapshot: &LedgerSnapshot<'_>) {
    for ledger in snapshot.ledgers.values() {
        assert_ledger_consistent(ledger);
    }

    let total: Money = snapshot.ledgers.values().map(|l| l.total_sum()).sum();
    assert_eq!(
        snapshot.stats.total_value, total,
        "Stats total_value={} but ledgers sum to {}",
        snapshot.stats.total_value, total
    );
    assert_eq!(snapshot.stats.total_items, snapshot.item_count());
}
