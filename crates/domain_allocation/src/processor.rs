//! Batch processing of the asset sheet
//!
//! Rows are handled one at a time in sheet order. Whatever goes wrong with
//! a row is reported through the diagnostics sink and counted; it never
//! stops the batch.

use core_kernel::sheet::is_blank_row;
use core_kernel::{Diagnostic, DiagnosticsSink, RawRow};
use domain_directory::DepartmentDirectory;

use crate::asset_row::{AssetColumns, AssetRow};
use crate::engine::{Allocation, AllocationEngine, AllocationPolicy, RoundingOutcome};
use crate::error::RowError;
use crate::ledger::{Aggregator, LedgerSnapshot, LineItem};
use crate::validation::{validate_row, ValidatedRow};

/// Runs every asset row through validation, allocation and aggregation
#[derive(Debug, Clone)]
pub struct BatchProcessor<'d> {
    engine: AllocationEngine<'d>,
    columns: AssetColumns,
}

impl<'d> BatchProcessor<'d> {
    pub fn new(
        directory: &'d DepartmentDirectory,
        columns: AssetColumns,
        policy: AllocationPolicy,
    ) -> Self {
        Self {
            engine: AllocationEngine::new(directory, policy),
            columns,
        }
    }

    /// Processes all sheet rows, header first
    ///
    /// Blank rows are ignored without being counted.
    pub fn process(
        &self,
        rows: &[RawRow],
        diagnostics: &mut dyn DiagnosticsSink,
    ) -> LedgerSnapshot<'d> {
        let mut aggregator = Aggregator::new();

        if rows.len() < 2 {
            diagnostics.info(None, "no_asset_rows", "No asset rows found.".to_string());
            return aggregator.into_snapshot();
        }

        for (offset, cells) in rows.iter().enumerate().skip(1) {
            if is_blank_row(cells) {
                continue;
            }
            let row = AssetRow::from_cells(offset + 1, cells, &self.columns);
            self.process_row(&row, &mut aggregator, diagnostics);
        }

        let stats = aggregator.stats();
        tracing::debug!(
            rows_processed = stats.rows_processed,
            rows_skipped = stats.rows_skipped,
            owners_skipped = stats.owners_skipped,
            "asset batch processed"
        );

        aggregator.into_snapshot()
    }

    /// Processes a single mapped row into the aggregator
    pub fn process_row(
        &self,
        row: &AssetRow,
        aggregator: &mut Aggregator<'d>,
        diagnostics: &mut dyn DiagnosticsSink,
    ) {
        let row_number = row.row_number;

        if !row.should_generate() {
            aggregator.record_row_skipped();
            diagnostics.info(
                Some(row_number),
                "generate_flag_off",
                format!(
                    "Row {row_number} not marked for generation (flag {:?}); skipping.",
                    row.generate_flag
                ),
            );
            return;
        }

        let validated = match validate_row(row) {
            Ok(validated) => validated,
            Err(error) => {
                skip_row(row, &error, aggregator, diagnostics);
                return;
            }
        };

        match self.engine.allocate(&validated) {
            Ok(allocation) => {
                if let Err(error) = self.record(&validated, allocation, aggregator, diagnostics) {
                    skip_row(row, &error, aggregator, diagnostics);
                }
            }
            Err(RowError::NoResolvedOwners { owners }) => {
                for owner in &owners {
                    report_unknown_owner(row_number, owner, aggregator, diagnostics);
                }
                skip_row(row, &RowError::NoResolvedOwners { owners }, aggregator, diagnostics);
            }
            Err(error) => skip_row(row, &error, aggregator, diagnostics),
        }
    }

    /// Records the row's line items, then reports unknown owners and rounding
    ///
    /// Nothing is recorded or reported when the aggregator refuses the row.
    fn record(
        &self,
        row: &ValidatedRow,
        allocation: Allocation<'d>,
        aggregator: &mut Aggregator<'d>,
        diagnostics: &mut dyn DiagnosticsSink,
    ) -> Result<(), RowError> {
        let row_number = row.row_number;
        let shares_total = allocation.total();
        let last_owner = allocation
            .shares
            .last()
            .map(|share| share.code.to_string())
            .unwrap_or_default();

        let entries = allocation
            .shares
            .into_iter()
            .map(|share| {
                let item = LineItem {
                    name: row.name.clone(),
                    inventory_number: row.inventory_number.clone(),
                    unit: row.unit.clone(),
                    quantity: share.quantity,
                    unit_price: allocation.unit_price,
                    sum: share.sum,
                    note: String::new(),
                };
                (share.code, share.department, item)
            })
            .collect();
        aggregator.record_row(entries)?;

        for owner in &allocation.unknown_owners {
            report_unknown_owner(row_number, owner, aggregator, diagnostics);
        }

        match allocation.rounding {
            RoundingOutcome::Exact => {}
            RoundingOutcome::Adjusted { difference } => {
                aggregator.record_rounding_adjustment();
                diagnostics.warning(
                    Some(row_number),
                    "rounding_adjusted",
                    format!(
                        "Row {row_number} rounding adjustment {difference} applied to owner '{last_owner}' (target {}).",
                        allocation.target
                    ),
                );
            }
            RoundingOutcome::Unreconciled { difference } => {
                diagnostics.warning(
                    Some(row_number),
                    "rounding_unreconciled",
                    format!(
                        "Row {row_number} shares total {shares_total} but target is {} (difference {difference}); left as is.",
                        allocation.target
                    ),
                );
            }
        }

        aggregator.record_row_processed();
        Ok(())
    }
}

fn report_unknown_owner(
    row_number: usize,
    owner: &str,
    aggregator: &mut Aggregator<'_>,
    diagnostics: &mut dyn DiagnosticsSink,
) {
    aggregator.record_owner_skipped();
    let error = RowError::UnknownOwner {
        owner: owner.to_string(),
    };
    diagnostics.error(
        Some(row_number),
        error.code(),
        format!("Row {row_number} {error}; skipping this owner entry."),
    );
}

fn skip_row(
    row: &AssetRow,
    error: &RowError,
    aggregator: &mut Aggregator<'_>,
    diagnostics: &mut dyn DiagnosticsSink,
) {
    aggregator.record_row_skipped();
    let row_number = row.row_number;
    diagnostics.emit(Diagnostic {
        severity: error.severity(),
        row: Some(row_number),
        code: error.code(),
        message: format!("Row {row_number} {error}; skip. Row data: {}", row.describe()),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::CollectingDiagnostics;
    use domain_directory::Department;

    fn header() -> RawRow {
        vec!["header".to_string()]
    }

    fn asset(name: &str, qty: &str, price: &str, owners: &str, flag: &str) -> RawRow {
        let inventory = format!("INV-{name}");
        ["1", "", name, "", inventory.as_str(), "PCS", qty, "", price, owners, flag]
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    #[test]
    fn test_blank_rows_are_not_counted() {
        let directory: DepartmentDirectory = vec![Department::new("A")].into_iter().collect();
        let processor =
            BatchProcessor::new(&directory, AssetColumns::default(), AllocationPolicy::default());
        let rows = vec![
            header(),
            vec![String::new(), " ".to_string()],
            asset("Chair", "2", "10", "A", "TRUE"),
        ];
        let mut sink = CollectingDiagnostics::new();

        let snapshot = processor.process(&rows, &mut sink);

        assert_eq!(snapshot.stats.rows_processed, 1);
        assert_eq!(snapshot.stats.rows_skipped, 0);
        assert!(sink.entries().is_empty());
        assert_eq!(snapshot.ledger("A").unwrap().items()[0].unit, "pcs");
    }

    #[test]
    fn test_flag_off_is_counted_skip() {
        let directory: DepartmentDirectory = vec![Department::new("A")].into_iter().collect();
        let processor =
            BatchProcessor::new(&directory, AssetColumns::default(), AllocationPolicy::default());
        let rows = vec![header(), asset("Chair", "2", "10", "A", "no")];
        let mut sink = CollectingDiagnostics::new();

        let snapshot = processor.process(&rows, &mut sink);

        assert!(snapshot.is_empty());
        assert_eq!(snapshot.stats.rows_skipped, 1);
        assert_eq!(sink.with_code("generate_flag_off")[0].row, Some(2));
    }

    #[test]
    fn test_header_only_sheet() {
        let directory = DepartmentDirectory::new();
        let processor =
            BatchProcessor::new(&directory, AssetColumns::default(), AllocationPolicy::default());
        let mut sink = CollectingDiagnostics::new();

        let snapshot = processor.process(&[header()], &mut sink);

        assert!(snapshot.is_empty());
        assert!(sink.has_code("no_asset_rows"));
    }
}
