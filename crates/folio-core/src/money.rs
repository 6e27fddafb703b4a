//! Indian Rupee formatting.
//!
//! Amounts are rendered with the `en-IN` conventions: the rupee symbol as a
//! prefix, the last three integer digits grouped together and every two
//! digits above that separated (lakh/crore grouping), and exactly two
//! fractional digits.
//!
//! Rounding is half away from zero, so `0.005` becomes `0.01` and `-0.005`
//! becomes `-0.01`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rupee symbol used as the currency prefix.
pub const RUPEE_SYMBOL: &str = "₹";

/// Fractional digits shown for every currency amount.
pub const CURRENCY_DECIMALS: u32 = 2;

/// Formats an amount as Indian Rupees, e.g. `₹12,34,567.50`.
///
/// Negative amounts carry the minus sign before the symbol (`-₹1,234.00`).
/// An amount that rounds to zero is always rendered unsigned (`₹0.00`).
///
/// # Example
///
/// ```rust
/// use folio_core::money::format_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency(dec!(0)), "₹0.00");
/// assert_eq!(format_currency(dec!(-1234)), "-₹1,234.00");
/// ```
#[must_use]
pub fn format_currency(value: Decimal) -> String {
    let (negative, body) = rupee_body(value);
    if negative {
        format!("-{RUPEE_SYMBOL}{body}")
    } else {
        format!("{RUPEE_SYMBOL}{body}")
    }
}

/// Formats an amount with an explicit sign, e.g. `+₹30.00` or `-₹10.00`.
///
/// Zero is rendered unsigned.
#[must_use]
pub fn format_signed_currency(value: Decimal) -> String {
    let (negative, body) = rupee_body(value);
    if negative {
        format!("-{RUPEE_SYMBOL}{body}")
    } else if body.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        format!("+{RUPEE_SYMBOL}{body}")
    } else {
        format!("{RUPEE_SYMBOL}{body}")
    }
}

/// Formats a percentage figure (already in 0-100 units), e.g. `12.50%`.
#[must_use]
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", format_ratio(value))
}

/// Formats a plain ratio to two decimals, e.g. a P/E of `24.50`.
#[must_use]
pub fn format_ratio(value: Decimal) -> String {
    let rounded = round_currency(value);
    let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
    format!("{:.2}", rounded)
}

/// Inserts `en-IN` group separators into a run of ASCII digits.
///
/// The last three digits form one group, everything above is grouped in
/// pairs: `1234567` becomes `12,34,567`.
///
/// Input that is not all ASCII digits is returned unchanged.
#[must_use]
pub fn group_indian_digits(digits: &str) -> String {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return digits.to_string();
    }
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let lead = if head.len() % 2 == 1 { 1 } else { 2 };

    let mut groups = Vec::with_capacity(head.len() / 2 + 2);
    groups.push(&head[..lead]);
    let mut pos = lead;
    while pos < head.len() {
        groups.push(&head[pos..pos + 2]);
        pos += 2;
    }
    groups.push(tail);

    groups.join(",")
}

/// Rounds to the two decimals every currency amount is displayed with.
///
/// Use this to pick a sign or colour that agrees with the rendered text.
#[must_use]
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the sign and the unsigned grouped body (`12,34,567.50`).
fn rupee_body(value: Decimal) -> (bool, String) {
    let rounded = round_currency(value);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    (negative, format!("{}.{}", group_indian_digits(int_part), frac_part))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_is_prefixed() {
        assert_eq!(format_currency(Decimal::ZERO), "₹0.00");
        assert_eq!(format_currency(dec!(0.004)), "₹0.00");
        assert_eq!(format_currency(dec!(-0.004)), "₹0.00");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_currency(dec!(1234567.5)), "₹12,34,567.50");
        assert_eq!(format_currency(dec!(999)), "₹999.00");
        assert_eq!(format_currency(dec!(1000)), "₹1,000.00");
        assert_eq!(format_currency(dec!(100000)), "₹1,00,000.00");
        assert_eq!(format_currency(dec!(12345678.9)), "₹1,23,45,678.90");
        assert_eq!(format_currency(dec!(1000000000)), "₹1,00,00,00,000.00");
    }

    #[test]
    fn test_negative_sign_before_symbol() {
        assert_eq!(format_currency(dec!(-10)), "-₹10.00");
        assert_eq!(format_currency(dec!(-1234567.5)), "-₹12,34,567.50");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(format_currency(dec!(2.345)), "₹2.35");
        assert_eq!(format_currency(dec!(2.355)), "₹2.36");
        assert_eq!(format_currency(dec!(-2.345)), "-₹2.35");
        assert_eq!(format_currency(dec!(999.995)), "₹1,000.00");
        assert_eq!(format_currency(dec!(1.2344)), "₹1.23");
    }

    #[test]
    fn test_signed_currency() {
        assert_eq!(format_signed_currency(dec!(30)), "+₹30.00");
        assert_eq!(format_signed_currency(dec!(-10)), "-₹10.00");
        assert_eq!(format_signed_currency(Decimal::ZERO), "₹0.00");
        assert_eq!(format_signed_currency(dec!(0.001)), "₹0.00");
    }

    #[test]
    fn test_group_indian_digits() {
        assert_eq!(group_indian_digits("0"), "0");
        assert_eq!(group_indian_digits("123"), "123");
        assert_eq!(group_indian_digits("1234"), "1,234");
        assert_eq!(group_indian_digits("12345"), "12,345");
        assert_eq!(group_indian_digits("123456"), "1,23,456");
        assert_eq!(group_indian_digits("1234567"), "12,34,567");
    }

    #[test]
    fn test_group_indian_digits_leaves_other_text_alone() {
        assert_eq!(group_indian_digits("१२३४५६"), "१२३४५६");
        assert_eq!(group_indian_digits("12a4567"), "12a4567");
        assert_eq!(group_indian_digits(""), "");
    }

    #[test]
    fn test_round_currency() {
        assert_eq!(round_currency(dec!(-0.001)), Decimal::ZERO);
        assert!(round_currency(dec!(-0.005)).is_sign_negative());
        assert_eq!(round_currency(dec!(2.345)), dec!(2.35));
    }

    #[test]
    fn test_percent_and_ratio() {
        assert_eq!(format_percent(dec!(12.5)), "12.50%");
        assert_eq!(format_percent(dec!(0)), "0.00%");
        assert_eq!(format_ratio(dec!(24.456)), "24.46");
        assert_eq!(format_ratio(dec!(-0.001)), "0.00");
    }

    #[test]
    fn test_deterministic() {
        let a = format_currency(dec!(98765.4321));
        let b = format_currency(dec!(98765.4321));
        assert_eq!(a, b);
        assert_eq!(a, "₹98,765.43");
    }
}
