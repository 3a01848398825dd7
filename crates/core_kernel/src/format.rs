//! Locale-aware rendering of monetary amounts

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::quantize_money;

/// Separators and suffix used when printing amounts in an act
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoneyFormat {
    /// Inserted between groups of three integer digits
    pub thousands_separator: String,
    /// Placed between the whole and the fractional part
    pub decimal_separator: String,
    /// Appended after the number, e.g. `" грн"`
    pub currency_suffix: String,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            thousands_separator: " ".to_string(),
            decimal_separator: ",".to_string(),
            currency_suffix: String::new(),
        }
    }
}

impl MoneyFormat {
    /// Formats a value with exactly two fractional digits
    ///
    /// # Example
    ///
    /// ```rust
    /// use core_kernel::format::MoneyFormat;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(MoneyFormat::default().format(dec!(1234567.5)), "1 234 567,50");
    /// ```
    pub fn format(&self, value: Decimal) -> String {
        let quantized = quantize_money(value);
        let negative = quantized.is_sign_negative() && !quantized.is_zero();
        let digits = quantized.abs().to_string();
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let mut out = String::with_capacity(digits.len() + 8);
        if negative {
            out.push('-');
        }
        out.push_str(&group_thousands(whole, &self.thousands_separator));
        out.push_str(&self.decimal_separator);
        out.push_str(fraction);
        out.push_str(&self.currency_suffix);
        out
    }
}

/// Formats a value with the default separators (space and comma)
pub fn format_money(value: Decimal) -> String {
    MoneyFormat::default().format(value)
}

fn group_thousands(whole: &str, separator: &str) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}
