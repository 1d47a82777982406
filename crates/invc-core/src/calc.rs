//! Derived-total arithmetic and currency formatting.
//!
//! All monetary math rounds to two decimals, half away from zero. The
//! subtotal is rounded once over the raw quantity x rate sum, not over the
//! individually rounded line amounts.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::invoice::LineItem;

/// Round to two decimals, half away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Line total: quantity x rate, rounded.
pub fn line_amount(quantity: Decimal, rate: Decimal) -> Decimal {
    round_money(quantity * rate)
}

/// Sum of raw quantity x rate over all items, rounded once.
pub fn subtotal(items: &[LineItem]) -> Decimal {
    round_money(items.iter().map(|i| i.quantity * i.rate).sum())
}

/// Tax on the subtotal at a percentage rate.
pub fn tax_amount(subtotal: Decimal, rate: Decimal) -> Decimal {
    round_money(subtotal * rate / Decimal::ONE_HUNDRED)
}

/// Discount on the subtotal at a percentage rate.
pub fn discount_amount(subtotal: Decimal, rate: Decimal) -> Decimal {
    round_money(subtotal * rate / Decimal::ONE_HUNDRED)
}

/// Grand total: subtotal + tax - discount.
pub fn total(subtotal: Decimal, tax: Decimal, discount: Decimal) -> Decimal {
    round_money(subtotal + tax - discount)
}

/// Format an amount for display in the given ISO 4217 currency.
///
/// Well-known currencies get their symbol; anything else renders as
/// "CODE 1,234.56". Always two decimals, US-style digit grouping.
pub fn format_currency(amount: Decimal, currency: &str) -> String {
    let symbol = match currency {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "CAD" => "CA$",
        "AUD" => "A$",
        _ => "",
    };

    let rounded = round_money(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let grouped = group_thousands(rounded.abs());

    let body = if symbol.is_empty() {
        format!("{} {}", currency, grouped)
    } else {
        format!("{}{}", symbol, grouped)
    };

    if negative { format!("-{}", body) } else { body }
}

/// Render a non-negative amount with two decimals and comma separators.
fn group_thousands(amount: Decimal) -> String {
    let s = format!("{:.2}", amount);
    let Some((integer_part, decimal_part)) = s.split_once('.') else {
        return s;
    };

    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::new();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(*c);
    }

    format!("{}.{}", formatted, decimal_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_round_money_half_away_from_zero() {
        assert_eq!(round_money(dec("2.675")), dec("2.68"));
        assert_eq!(round_money(dec("2.674")), dec("2.67"));
        assert_eq!(round_money(dec("-2.675")), dec("-2.68"));
        assert_eq!(round_money(dec("10")), dec("10.00"));
    }

    #[test]
    fn test_line_amount() {
        assert_eq!(line_amount(dec("3"), dec("50")), dec("150.00"));
        assert_eq!(line_amount(dec("2.5"), dec("85")), dec("212.50"));
        assert_eq!(line_amount(dec("3"), dec("0.333")), dec("1.00"));
    }

    #[test]
    fn test_subtotal_rounds_once_over_raw_sum() {
        let items = vec![
            LineItem::new("a", dec("1"), dec("0.005")),
            LineItem::new("b", dec("1"), dec("0.005")),
        ];
        // Each rounded line amount is 0.01, but the subtotal comes from the
        // raw 0.005 + 0.005 sum.
        assert_eq!(items[0].amount, dec("0.01"));
        assert_eq!(subtotal(&items), dec("0.01"));
    }

    #[test]
    fn test_totals_chain() {
        let sub = dec("100.00");
        let tax = tax_amount(sub, dec("8.25"));
        let discount = discount_amount(sub, dec("5"));
        assert_eq!(tax, dec("8.25"));
        assert_eq!(discount, dec("5.00"));
        assert_eq!(total(sub, tax, discount), dec("103.25"));
    }

    #[test]
    fn test_zero_rates() {
        let sub = dec("250.00");
        assert_eq!(tax_amount(sub, Decimal::ZERO), Decimal::ZERO);
        assert_eq!(discount_amount(sub, Decimal::ZERO), Decimal::ZERO);
        assert_eq!(total(sub, Decimal::ZERO, Decimal::ZERO), sub);
    }

    #[test]
    fn test_format_currency_symbols() {
        assert_eq!(format_currency(dec("1234.5"), "USD"), "$1,234.50");
        assert_eq!(format_currency(dec("1234.56"), "EUR"), "€1,234.56");
        assert_eq!(format_currency(dec("99.9"), "GBP"), "£99.90");
        assert_eq!(format_currency(dec("1000"), "JPY"), "¥1,000.00");
        assert_eq!(format_currency(dec("10"), "CAD"), "CA$10.00");
    }

    #[test]
    fn test_format_currency_unknown_code() {
        assert_eq!(format_currency(dec("1234.56"), "PLN"), "PLN 1,234.56");
    }

    #[test]
    fn test_format_currency_negative_and_grouping() {
        assert_eq!(format_currency(dec("-50"), "USD"), "-$50.00");
        assert_eq!(
            format_currency(dec("12345678.9"), "USD"),
            "$12,345,678.90"
        );
    }
}
