//! Render context of one act
//!
//! Field names of [`ActContext`] serialize to the placeholder names used
//! in act templates (`TotalSumWords`, `ReceiverName`, ...).

use serde::Serialize;

use core_kernel::{integer_to_words, money_to_words, DiagnosticsSink, MoneyFormat};
use domain_allocation::{LineItem, OwnerLedger};

/// One table row of an act, every value already formatted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActItem {
    pub name: String,
    pub inventory: String,
    pub unit: String,
    pub qty: String,
    pub unit_price: String,
    pub sum: String,
    pub note: String,
}

impl ActItem {
    pub fn from_line_item(item: &LineItem, format: &MoneyFormat) -> Self {
        Self {
            name: item.name.clone(),
            inventory: item.inventory_number.clone(),
            unit: item.unit.clone(),
            qty: item.quantity.to_string(),
            unit_price: format.format(item.unit_price.amount()),
            sum: format.format(item.sum.amount()),
            note: item.note.clone(),
        }
    }
}

/// Placeholders and items for one department's act
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActContext {
    pub total_quantity_words: String,
    pub total_quantity_numeric: String,
    pub total_sum_numeric: String,
    pub total_sum_words: String,
    pub second_director_position: String,
    pub second_director_name: String,
    pub receiver_position: String,
    pub receiver_name: String,
    pub val: String,
    #[serde(rename = "items")]
    pub items: Vec<ActItem>,
}

impl ActContext {
    /// Builds the context from a finished ledger
    ///
    /// Empty receiver fields are reported as warnings; the act is still
    /// built with blanks in their place.
    pub fn build(
        ledger: &OwnerLedger<'_>,
        format: &MoneyFormat,
        diagnostics: &mut dyn DiagnosticsSink,
    ) -> Self {
        let department = ledger.department();

        if department.receiver_position.is_empty() {
            diagnostics.warning(
                None,
                "receiver_position_empty",
                format!("Department '{}' has empty receiver position", department.code),
            );
        }
        if department.receiver_name.is_empty() {
            diagnostics.warning(
                None,
                "receiver_name_empty",
                format!("Department '{}' has empty receiver name", department.code),
            );
        }

        let total_quantity = ledger.total_quantity();
        let total_quantity_words = i64::try_from(total_quantity)
            .map(integer_to_words)
            .unwrap_or_else(|_| total_quantity.to_string());
        let total_sum = format.format(ledger.total_sum().amount());

        Self {
            total_quantity_words,
            total_quantity_numeric: total_quantity.to_string(),
            total_sum_numeric: total_sum.clone(),
            total_sum_words: money_to_words(ledger.total_sum().amount()),
            second_director_position: department.signatory_position.clone(),
            second_director_name: department.signatory_name_formatted.clone(),
            receiver_position: department.receiver_position.clone(),
            receiver_name: department.receiver_name.clone(),
            val: total_sum,
            items: ledger
                .items()
                .iter()
                .map(|item| ActItem::from_line_item(item, format))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{CollectingDiagnostics, Money};
    use domain_allocation::Aggregator;
    use domain_directory::Department;
    use rust_decimal_macros::dec;

    fn item(name: &str, quantity: u64, unit_price: Money, sum: Money) -> LineItem {
        LineItem {
            name: name.to_string(),
            inventory_number: format!("INV-{name}"),
            unit: "шт".to_string(),
            quantity,
            unit_price,
            sum,
            note: String::new(),
        }
    }

    #[test]
    fn test_placeholders_are_filled() {
        let dept = Department::new("IT")
            .with_signatory("Директор", "Іван Петренко", "Івану Петренку")
            .with_receiver("Комірник", "Ольга Коваль");
        let mut aggregator = Aggregator::new();
        aggregator.record_allocation(
            dept.key.clone(),
            &dept,
            item("Стіл", 2, Money::new(dec!(600.25)), Money::new(dec!(1200.50))),
        )
        .unwrap();
        aggregator.record_allocation(
            dept.key.clone(),
            &dept,
            item("Стілець", 1, Money::new(dec!(1000)), Money::new(dec!(1000))),
        )
        .unwrap();
        let snapshot = aggregator.snapshot();
        let mut sink = CollectingDiagnostics::new();

        let context = ActContext::build(
            snapshot.ledger("IT").unwrap(),
            &MoneyFormat::default(),
            &mut sink,
        );

        assert_eq!(context.total_quantity_numeric, "3");
        assert_eq!(context.total_quantity_words, "три");
        assert_eq!(context.total_sum_numeric, "2 200,50");
        assert_eq!(context.val, "2 200,50");
        assert_eq!(context.total_sum_words, "дві тисячі двісті грн. 50 коп.");
        assert_eq!(context.second_director_name, "Івану Петренку");
        assert_eq!(context.items[0].unit_price, "600,25");
        assert_eq!(context.items[1].name, "Стілець");
        assert!(sink.entries().is_empty());
    }

    #[test]
    fn test_missing_receiver_is_warned() {
        let dept = Department::new("HR");
        let mut aggregator = Aggregator::new();
        aggregator.record_allocation(
            dept.key.clone(),
            &dept,
            item("Шафа", 1, Money::new(dec!(10)), Money::new(dec!(10))),
        )
        .unwrap();
        let snapshot = aggregator.snapshot();
        let mut sink = CollectingDiagnostics::new();

        let context = ActContext::build(
            snapshot.ledger("HR").unwrap(),
            &MoneyFormat::default(),
            &mut sink,
        );

        assert_eq!(context.receiver_name, "");
        assert!(sink.has_code("receiver_position_empty"));
        assert!(sink.has_code("receiver_name_empty"));
    }

    #[test]
    fn test_serializes_with_template_names() {
        let dept = Department::new("IT");
        let mut aggregator = Aggregator::new();
        aggregator.record_allocation(
            dept.key.clone(),
            &dept,
            item("Стіл", 1, Money::new(dec!(5)), Money::new(dec!(5))),
        )
        .unwrap();
        let snapshot = aggregator.snapshot();
        let context = ActContext::build(
            snapshot.ledger("IT").unwrap(),
            &MoneyFormat::default(),
            &mut CollectingDiagnostics::new(),
        );

        let json = serde_json::to_value(&context).unwrap();
        for key in [
            "TotalQuantityWords",
            "TotalQuantityNumeric",
            "TotalSumNumeric",
            "TotalSumWords",
            "SecondDirectorPosition",
            "SecondDirectorName",
            "ReceiverPosition",
            "ReceiverName",
            "Val",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["items"][0]["qty"], "1");
    }
}
