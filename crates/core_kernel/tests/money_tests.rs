//! Tests for money parsing, rounding, formatting and words
//!
//! Covers the number primitives as the allocation engine and the act
//! renderer use them.

use core_kernel::{
    format_money, integer_to_words, money_to_words, parse_decimal, quantize_money, Money,
    MoneyError, MoneyFormat,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod parsing {
    use super::*;

    #[test]
    fn test_parses_spreadsheet_style_numbers() {
        assert_eq!(parse_decimal("1 250,75").unwrap(), dec!(1250.75));
        assert_eq!(parse_decimal("\u{a0}42\u{a0}").unwrap(), dec!(42));
        assert_eq!(parse_decimal("-3,5").unwrap(), dec!(-3.5));
    }

    #[test]
    fn test_parse_keeps_extra_precision() {
        assert_eq!(parse_decimal("0,125").unwrap(), dec!(0.125));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_decimal("   "), Err(MoneyError::Empty));
        assert_eq!(
            parse_decimal("12 грн"),
            Err(MoneyError::InvalidNumber("12 грн".to_string()))
        );
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_half_up_at_every_tie() {
        for (input, expected) in [
            (dec!(1.005), dec!(1.01)),
            (dec!(1.015), dec!(1.02)),
            (dec!(1.025), dec!(1.03)),
            (dec!(3.3333), dec!(3.33)),
            (dec!(3.335), dec!(3.34)),
        ] {
            assert_eq!(quantize_money(input), expected, "input {input}");
        }
    }

    #[test]
    fn test_money_is_always_two_places() {
        let m = Money::new(dec!(7));
        assert_eq!(m.amount().scale(), 2);
        assert_eq!(m.to_string(), "7.00");
    }

    #[test]
    fn test_negative_money() {
        let m = Money::new(dec!(-0.01));
        assert!(m.is_negative());
        assert_eq!(m.abs().amount(), dec!(0.01));
        assert_eq!((-m).amount(), dec!(0.01));
    }

    #[test]
    fn test_unit_price_is_rounded_quotient() {
        assert_eq!(Money::unit_price(dec!(100.00), 10).unwrap().amount(), dec!(10.00));
        assert_eq!(Money::unit_price(dec!(0.01), 2).unwrap().amount(), dec!(0.01));
        assert_eq!(Money::unit_price(dec!(1.00), 3).unwrap().amount(), dec!(0.33));
    }
}

mod formatting {
    use super::*;

    #[test]
    fn test_default_format_uses_space_and_comma() {
        assert_eq!(format_money(dec!(1234567.891)), "1 234 567,89");
        assert_eq!(format_money(Decimal::ZERO), "0,00");
    }

    #[test]
    fn test_format_with_suffix() {
        let fmt = MoneyFormat {
            currency_suffix: " грн".to_string(),
            ..MoneyFormat::default()
        };
        assert_eq!(fmt.format(dec!(15)), "15,00 грн");
    }
}

mod words {
    use super::*;

    #[test]
    fn test_quantity_words() {
        assert_eq!(integer_to_words(3), "три");
        assert_eq!(integer_to_words(12), "дванадцять");
        assert_eq!(integer_to_words(101), "сто один");
        assert_eq!(integer_to_words(1001), "одна тисяча один");
    }

    #[test]
    fn test_money_words_agreement() {
        assert_eq!(money_to_words(dec!(1)), "одна грн. 00 коп.");
        assert_eq!(money_to_words(dec!(3000.07)), "три тисячі грн. 07 коп.");
        assert_eq!(money_to_words(dec!(11000)), "одинадцять тисяч грн. 00 коп.");
        assert_eq!(
            money_to_words(dec!(42001.99)),
            "сорок дві тисячі одна грн. 99 коп."
        );
    }

    #[test]
    fn test_money_words_cents_are_zero_padded() {
        assert!(money_to_words(dec!(10.5)).ends_with("грн. 50 коп."));
        assert!(money_to_words(dec!(10.05)).ends_with("грн. 05 коп."));
    }
}
