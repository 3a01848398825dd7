//! End-of-run summary line

use serde::Serialize;

use core_kernel::{Money, MoneyFormat};
use domain_allocation::BatchStats;

use crate::acts::GeneratedAct;

/// Counters reported once at the end of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub rows_processed: usize,
    pub rows_skipped: usize,
    pub owners_skipped: usize,
    pub acts_generated: usize,
    pub items_in_acts: usize,
    pub total_value_generated: Money,
    pub rounding_adjustments: usize,
}

impl RunSummary {
    pub fn new(stats: &BatchStats, acts: &[GeneratedAct]) -> Self {
        Self {
            rows_processed: stats.rows_processed,
            rows_skipped: stats.rows_skipped,
            owners_skipped: stats.owners_skipped,
            acts_generated: acts.len(),
            items_in_acts: stats.total_items,
            total_value_generated: stats.total_value,
            rounding_adjustments: stats.rounding_adjustments,
        }
    }

    /// The single summary line, money formatted with `format`
    pub fn line(&self, format: &MoneyFormat) -> String {
        format!(
            "rows_processed={}, rows_skipped={}, owners_skipped={}, acts_generated={}, items_in_acts={}, total_value_generated={}",
            self.rows_processed,
            self.rows_skipped,
            self.owners_skipped,
            self.acts_generated,
            self.items_in_acts,
            format.format(self.total_value_generated.amount()),
        )
    }
}
