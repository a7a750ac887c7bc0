//! Masking rules for the payment fields.
//!
//! Pure string transforms; nothing here touches the DOM.

/// Maximum digits kept in a card number
const CARD_NUMBER_DIGITS: usize = 16;
/// Digits per space-separated card number group
const CARD_GROUP_LEN: usize = 4;
/// MMYY
const EXPIRY_DIGITS: usize = 4;
/// 3 for most cards, 4 for AMEX
const CVV_DIGITS: usize = 4;

/// Card network inferred from the leading digit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardBrand {
    Visa,
    Mastercard,
}

impl CardBrand {
    /// Logo file name under the resources directory
    pub fn logo_file(&self) -> &'static str {
        match self {
            CardBrand::Visa => "visa.png",
            CardBrand::Mastercard => "mastercard.png",
        }
    }
}

/// The three masked inputs of the payment form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaskedField {
    CardNumber,
    Expiry,
    Cvv,
}

impl MaskedField {
    /// Apply this field's rule to the raw input value
    pub fn apply(&self, raw: &str) -> String {
        match self {
            MaskedField::CardNumber => format_card_number(raw),
            MaskedField::Expiry => format_expiry(raw),
            MaskedField::Cvv => format_cvv(raw),
        }
    }

    /// Character the mask inserts, which backspace removes first
    pub fn separator(&self) -> Option<char> {
        match self {
            MaskedField::CardNumber => Some(' '),
            MaskedField::Expiry => Some('/'),
            MaskedField::Cvv => None,
        }
    }
}

/// Keep at most `limit` ASCII digits from `raw`
fn digits_only(raw: &str, limit: usize) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).take(limit).collect()
}

/// `"4111111111111111"` -> `"4111 1111 1111 1111"`
pub fn format_card_number(raw: &str) -> String {
    let digits = digits_only(raw, CARD_NUMBER_DIGITS);
    digits
        .as_bytes()
        .chunks(CARD_GROUP_LEN)
        // chunks of ASCII digits are always valid UTF-8
        .map(|group| std::str::from_utf8(group).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Leading-digit heuristic, not an IIN lookup
pub fn detect_brand(raw: &str) -> Option<CardBrand> {
    match raw.chars().find(|c| c.is_ascii_digit())? {
        '4' => Some(CardBrand::Visa),
        '5' | '2' => Some(CardBrand::Mastercard),
        _ => None,
    }
}

/// `MM/YY` with the month clamped to 1..=12
pub fn format_expiry(raw: &str) -> String {
    let digits = digits_only(raw, EXPIRY_DIGITS);
    if digits.len() < 2 {
        return digits;
    }

    let (month, year) = digits.split_at(2);
    let month = month.parse::<u32>().unwrap_or(1).clamp(1, 12);
    format!("{:02}/{}", month, year)
}

pub fn format_cvv(raw: &str) -> String {
    digits_only(raw, CVV_DIGITS)
}

/// Value after a backspace lands on a mask-inserted separator.
///
/// Returns `None` when the value does not end with `separator` and the
/// browser's own backspace handling should proceed untouched.
pub fn strip_trailing_separator(value: &str, separator: char) -> Option<String> {
    value
        .strip_suffix(separator)
        .map(|rest| rest.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_number_groups_of_four() {
        assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(format_card_number("41111"), "4111 1");
        assert_eq!(format_card_number("4111"), "4111");
        assert_eq!(format_card_number(""), "");
    }

    #[test]
    fn test_card_number_strips_and_truncates() {
        let formatted = format_card_number("4111-1111 1111x1111 9999 abc");
        assert_eq!(formatted, "4111 1111 1111 1111");
    }

    #[test]
    fn test_card_number_shape_for_arbitrary_input() {
        let inputs = [
            "",
            " ",
            "abc",
            "1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9",
            "12345678901234567890123",
            "９９９ unicode digits 12",
            "4111 1111 1111 111",
        ];
        for input in inputs {
            let out = format_card_number(input);
            assert!(out.chars().all(|c| c.is_ascii_digit() || c == ' '), "{out:?}");
            assert!(!out.contains("  "), "{out:?}");
            assert!(!out.starts_with(' ') && !out.ends_with(' '), "{out:?}");
            assert!(out.split(' ').all(|run| run.len() <= 4), "{out:?}");
            assert!(out.chars().filter(|c| c.is_ascii_digit()).count() <= 16, "{out:?}");
        }
    }

    #[test]
    fn test_detect_brand() {
        assert_eq!(detect_brand("4111"), Some(CardBrand::Visa));
        assert_eq!(detect_brand("5500 0000"), Some(CardBrand::Mastercard));
        assert_eq!(detect_brand("2221"), Some(CardBrand::Mastercard));
        assert_eq!(detect_brand("3782"), None);
        assert_eq!(detect_brand("6011"), None);
        assert_eq!(detect_brand(""), None);
    }

    #[test]
    fn test_detect_brand_ignores_leading_noise() {
        assert_eq!(detect_brand(" 4"), Some(CardBrand::Visa));
        assert_eq!(detect_brand("x5"), Some(CardBrand::Mastercard));
    }

    #[test]
    fn test_logo_files() {
        assert_eq!(CardBrand::Visa.logo_file(), "visa.png");
        assert_eq!(CardBrand::Mastercard.logo_file(), "mastercard.png");
    }

    #[test]
    fn test_expiry_month_clamped() {
        assert_eq!(format_expiry("13"), "12/");
        assert_eq!(format_expiry("00"), "01/");
        assert_eq!(format_expiry("99"), "12/");
        assert_eq!(format_expiry("07"), "07/");
    }

    #[test]
    fn test_expiry_full_value() {
        assert_eq!(format_expiry("0229"), "02/29");
        assert_eq!(format_expiry("02/29"), "02/29");
        assert_eq!(format_expiry("1/2/3/4/5"), "12/34");
        assert_eq!(format_expiry("023"), "02/3");
    }

    #[test]
    fn test_expiry_short_input_untouched() {
        assert_eq!(format_expiry(""), "");
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("a"), "");
    }

    #[test]
    fn test_expiry_shape() {
        for input in ["13", "00", "0229", "4567", "1x2y", "98765"] {
            let out = format_expiry(input);
            let (month, year) = out.split_once('/').expect("slash present");
            assert_eq!(month.len(), 2);
            let month: u32 = month.parse().unwrap();
            assert!((1..=12).contains(&month));
            assert!(year.len() <= 2 && year.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_cvv() {
        assert_eq!(format_cvv("12a34b5"), "1234");
        assert_eq!(format_cvv("123"), "123");
        assert_eq!(format_cvv("abc"), "");
    }

    #[test]
    fn test_masked_field_dispatch() {
        assert_eq!(MaskedField::CardNumber.apply("55554444"), "5555 4444");
        assert_eq!(MaskedField::Expiry.apply("1325"), "12/25");
        assert_eq!(MaskedField::Cvv.apply("98765"), "9876");
        assert_eq!(MaskedField::CardNumber.separator(), Some(' '));
        assert_eq!(MaskedField::Expiry.separator(), Some('/'));
        assert_eq!(MaskedField::Cvv.separator(), None);
    }

    #[test]
    fn test_strip_trailing_separator() {
        assert_eq!(strip_trailing_separator("4111 ", ' '), Some("4111".to_string()));
        assert_eq!(strip_trailing_separator("12/", '/'), Some("12".to_string()));
        assert_eq!(strip_trailing_separator("12/3", '/'), None);
        assert_eq!(strip_trailing_separator("", ' '), None);
    }
}
