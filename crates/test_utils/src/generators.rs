//! Property-Based Test Generators
//!
//! Proptest strategies for prices, owner splits and code spellings.

use proptest::prelude::*;
use rust_decimal::Decimal;

/// Department codes known to [`crate::DepartmentFixtures::directory`]
pub const KNOWN_CODES: [&str; 3] = ["IT", "FIN", "HR"];

/// Strategy for non-negative prices with two decimals
pub fn price_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for an explicit split among known owners
///
/// Yields the owners cell text (e.g. `"IT-3,FIN-1"`) and the row quantity
/// it adds up to.
pub fn explicit_split_strategy() -> impl Strategy<Value = (String, u64)> {
    prop::collection::vec(1u64..40, 1..=KNOWN_CODES.len()).prop_map(|counts| {
        let text = KNOWN_CODES
            .iter()
            .zip(&counts)
            .map(|(code, count)| format!("{code}-{count}"))
            .collect::<Vec<_>>()
            .join(",");
        (text, counts.iter().sum())
    })
}

/// Strategy for owner code spellings that normalize to a known code
pub fn code_spelling_strategy() -> impl Strategy<Value = (String, &'static str)> {
    (prop::sample::select(KNOWN_CODES.to_vec()), any::<bool>(), any::<bool>()).prop_map(
        |(code, lower, padded)| {
            let mut text = if lower { code.to_lowercase() } else { code.to_string() };
            if padded {
                text = format!(" {} ", text.chars().map(String::from).collect::<Vec<_>>().join(" "));
            }
            (text, code)
        },
    )
}
