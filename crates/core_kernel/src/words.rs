//! Ukrainian number words for act totals
//!
//! Acts print the total quantity as cardinal words and the total sum as
//! "<words> грн. <cents> коп.". Scale nouns (тисяча, мільйон, ...) agree with
//! the preceding number using the usual Slavic rule, see [`plural_form`].

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::money::quantize_money;

/// Abbreviation of the major currency unit
pub const MAJOR_UNIT: &str = "грн";
/// Abbreviation of the minor currency unit
pub const MINOR_UNIT: &str = "коп";

const ZERO: &str = "нуль";
const MINUS: &str = "мінус";

const ONES: [&str; 10] = [
    "", "один", "два", "три", "чотири", "п'ять", "шість", "сім", "вісім", "дев'ять",
];
const TEENS: [&str; 10] = [
    "десять",
    "одинадцять",
    "дванадцять",
    "тринадцять",
    "чотирнадцять",
    "п'ятнадцять",
    "шістнадцять",
    "сімнадцять",
    "вісімнадцять",
    "дев'ятнадцять",
];
const TENS: [&str; 10] = [
    "", "", "двадцять", "тридцять", "сорок", "п'ятдесят", "шістдесят", "сімдесят", "вісімдесят",
    "дев'яносто",
];
const HUNDREDS: [&str; 10] = [
    "", "сто", "двісті", "триста", "чотириста", "п'ятсот", "шістсот", "сімсот", "вісімсот",
    "дев'ятсот",
];

/// Grammatical gender of the noun a number agrees with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Masculine,
    Feminine,
}

struct Scale {
    forms: [&'static str; 3],
    gender: Gender,
}

/// Scale nouns for 10^3, 10^6, 10^9 and 10^12
const SCALES: [Scale; 4] = [
    Scale { forms: ["тисяча", "тисячі", "тисяч"], gender: Gender::Feminine },
    Scale { forms: ["мільйон", "мільйони", "мільйонів"], gender: Gender::Masculine },
    Scale { forms: ["мільярд", "мільярди", "мільярдів"], gender: Gender::Masculine },
    Scale { forms: ["трильйон", "трильйони", "трильйонів"], gender: Gender::Masculine },
];

/// Picks the noun form that agrees with `n`
///
/// `forms` holds the singular, plural-few and plural-many forms: numbers
/// ending in 1 (but not 11) take the first, numbers ending in 2-4 (but not
/// 12-14) the second, everything else the third.
pub fn plural_form<'a>(n: u64, forms: &[&'a str; 3]) -> &'a str {
    let last_two = n % 100;
    let last = n % 10;
    if last == 1 && last_two != 11 {
        forms[0]
    } else if (2..=4).contains(&last) && !(12..=14).contains(&last_two) {
        forms[1]
    } else {
        forms[2]
    }
}

/// Spells out a non-negative number, `None` when it exceeds the known scales
pub fn cardinal_words(n: u64, gender: Gender) -> Option<String> {
    if n == 0 {
        return Some(ZERO.to_string());
    }

    let mut triads = Vec::new();
    let mut rest = n;
    while rest > 0 {
        triads.push(rest % 1000);
        rest /= 1000;
    }
    if triads.len() > SCALES.len() + 1 {
        return None;
    }

    let mut words: Vec<&'static str> = Vec::new();
    for (index, triad) in triads.iter().copied().enumerate().rev() {
        if triad == 0 {
            continue;
        }
        if index == 0 {
            push_triad(triad, gender, &mut words);
        } else {
            let scale = &SCALES[index - 1];
            push_triad(triad, scale.gender, &mut words);
            words.push(plural_form(triad, &scale.forms));
        }
    }

    Some(words.join(" "))
}

fn push_triad(n: u64, gender: Gender, words: &mut Vec<&'static str>) {
    let hundreds = (n / 100) as usize;
    let tens = ((n / 10) % 10) as usize;
    let ones = (n % 10) as usize;

    if hundreds > 0 {
        words.push(HUNDREDS[hundreds]);
    }
    match tens {
        0 => {}
        1 => {
            words.push(TEENS[ones]);
            return;
        }
        _ => words.push(TENS[tens]),
    }
    if ones > 0 {
        words.push(match (gender, ones) {
            (Gender::Feminine, 1) => "одна",
            (Gender::Feminine, 2) => "дві",
            _ => ONES[ones],
        });
    }
}

/// Spells out an integer in masculine agreement
///
/// Falls back to the plain digit string for numbers beyond trillions.
///
/// # Example
///
/// ```rust
/// use core_kernel::words::integer_to_words;
///
/// assert_eq!(integer_to_words(21), "двадцять один");
/// assert_eq!(integer_to_words(2000), "дві тисячі");
/// ```
pub fn integer_to_words(n: i64) -> String {
    match cardinal_words(n.unsigned_abs(), Gender::Masculine) {
        Some(words) if n < 0 => format!("{MINUS} {words}"),
        Some(words) => words,
        None => {
            tracing::debug!(value = n, "number out of word range, using digits");
            n.to_string()
        }
    }
}

/// Spells out a monetary amount as "<words> грн. <cents> коп."
///
/// The amount is quantized to the cent first. Whole units agree with the
/// feminine "гривня", so 1 and 2 read "одна" and "дві".
pub fn money_to_words(amount: Decimal) -> String {
    let quantized = quantize_money(amount);
    let negative = quantized.is_sign_negative() && !quantized.is_zero();
    let abs = quantized.abs();
    let whole = abs.trunc();
    let cents = ((abs - whole) * Decimal::ONE_HUNDRED).to_u8().unwrap_or(0);

    let whole_words = whole
        .to_u64()
        .and_then(|units| cardinal_words(units, Gender::Feminine))
        .unwrap_or_else(|| whole.normalize().to_string());

    let sign = if negative { "мінус " } else { "" };
    format!("{sign}{whole_words} {MAJOR_UNIT}. {cents:02} {MINOR_UNIT}.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plural_forms() {
        let forms = ["тисяча", "тисячі", "тисяч"];
        assert_eq!(plural_form(1, &forms), "тисяча");
        assert_eq!(plural_form(21, &forms), "тисяча");
        assert_eq!(plural_form(11, &forms), "тисяч");
        assert_eq!(plural_form(3, &forms), "тисячі");
        assert_eq!(plural_form(12, &forms), "тисяч");
        assert_eq!(plural_form(104, &forms), "тисячі");
        assert_eq!(plural_form(5, &forms), "тисяч");
        assert_eq!(plural_form(0, &forms), "тисяч");
    }

    #[test]
    fn test_small_integers() {
        assert_eq!(integer_to_words(0), "нуль");
        assert_eq!(integer_to_words(1), "один");
        assert_eq!(integer_to_words(11), "одинадцять");
        assert_eq!(integer_to_words(40), "сорок");
        assert_eq!(integer_to_words(215), "двісті п'ятнадцять");
        assert_eq!(integer_to_words(999), "дев'ятсот дев'яносто дев'ять");
    }

    #[test]
    fn test_thousands_are_feminine() {
        assert_eq!(integer_to_words(1000), "одна тисяча");
        assert_eq!(integer_to_words(2002), "дві тисячі два");
        assert_eq!(integer_to_words(5000), "п'ять тисяч");
        assert_eq!(integer_to_words(21_000), "двадцять одна тисяча");
        assert_eq!(integer_to_words(11_001), "одинадцять тисяч один");
    }

    #[test]
    fn test_millions_are_masculine() {
        assert_eq!(integer_to_words(1_000_000), "один мільйон");
        assert_eq!(integer_to_words(2_500_000), "два мільйони п'ятсот тисяч");
        assert_eq!(integer_to_words(3_000_000_000), "три мільярди");
    }

    #[test]
    fn test_negative_and_fallback() {
        assert_eq!(integer_to_words(-7), "мінус сім");
        assert_eq!(integer_to_words(1_000_000_000_000_000), "1000000000000000");
        assert!(integer_to_words(999_999_999_999_999).starts_with("дев'ятсот дев'яносто дев'ять трильйонів"));
    }

    #[test]
    fn test_money_to_words() {
        assert_eq!(money_to_words(dec!(0)), "нуль грн. 00 коп.");
        assert_eq!(money_to_words(dec!(1.05)), "одна грн. 05 коп.");
        assert_eq!(money_to_words(dec!(22.22)), "двадцять дві грн. 22 коп.");
        assert_eq!(
            money_to_words(dec!(1234.56)),
            "одна тисяча двісті тридцять чотири грн. 56 коп."
        );
        assert_eq!(money_to_words(dec!(2000)), "дві тисячі грн. 00 коп.");
        assert_eq!(money_to_words(dec!(5000000.10)), "п'ять мільйонів грн. 10 коп.");
    }

    #[test]
    fn test_money_to_words_rounds_first() {
        assert_eq!(money_to_words(dec!(0.005)), "нуль грн. 01 коп.");
        assert_eq!(money_to_words(dec!(9.999)), "десять грн. 00 коп.");
    }
}
