//! Line item recovery from reconstructed text lines.

use rust_decimal::Decimal;
use uuid::Uuid;

use super::fields::parse_amount;
use super::patterns;
use crate::models::invoice::LineItem;

/// Pull line items out of the reconstructed lines.
///
/// Full rows (description, quantity, rate, amount) are tried first. Only when
/// none match does the looser description-amount form run, and a single blank
/// row stands in when both tiers come up empty, so the editor always has at
/// least one item.
pub fn line_items(lines: &[String]) -> Vec<LineItem> {
    let mut items = full_rows(lines);
    if items.is_empty() {
        items = compact_rows(lines);
    }
    if items.is_empty() {
        items.push(LineItem::blank());
    }
    items
}

fn full_rows(lines: &[String]) -> Vec<LineItem> {
    let mut items = Vec::new();
    for line in lines {
        let Some(caps) = patterns::ITEM_ROW_FULL.captures(line) else {
            continue;
        };
        let description = caps[1].trim().to_string();
        if patterns::ITEM_TABLE_HEADER.is_match(&description) {
            continue;
        }
        let quantity = parse_amount(&caps[2]);
        let rate = parse_amount(&caps[3]);
        let mut amount = parse_amount(&caps[4]);
        if amount.is_zero() {
            amount = quantity * rate;
        }
        items.push(LineItem {
            id: Uuid::new_v4().to_string(),
            description,
            quantity,
            rate,
            amount,
        });
    }
    items
}

fn compact_rows(lines: &[String]) -> Vec<LineItem> {
    let mut items = Vec::new();
    for line in lines {
        let Some(caps) = patterns::ITEM_ROW_COMPACT.captures(line) else {
            continue;
        };
        let description = caps[1].trim().to_string();
        if patterns::NON_ITEM_LABEL.is_match(&description) || description.chars().count() < 3 {
            continue;
        }
        let amount = parse_amount(&caps[2]);
        if amount <= Decimal::ZERO {
            continue;
        }
        items.push(LineItem {
            id: Uuid::new_v4().to_string(),
            description,
            quantity: Decimal::ONE,
            rate: amount,
            amount,
        });
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_rows() {
        let text = lines(&[
            "Description  Qty  Rate  Amount",
            "Widget Design  3  $50.00  $150.00",
            "Hosting  1  100  100",
        ]);
        let items = line_items(&text);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].description, "Widget Design");
        assert_eq!(items[0].quantity, Decimal::from(3));
        assert_eq!(items[0].rate, Decimal::new(5000, 2));
        assert_eq!(items[0].amount, Decimal::new(15000, 2));
        assert_eq!(items[1].description, "Hosting");
        assert_eq!(items[1].amount, Decimal::from(100));
    }

    #[test]
    fn test_full_row_derives_zero_amount() {
        let text = lines(&["Retainer  2  500  0"]);
        let items = line_items(&text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].amount, Decimal::from(1000));
    }

    #[test]
    fn test_full_rows_strip_thousands_separators() {
        let text = lines(&["Platform build  1  $12,500.00  $12,500.00"]);
        let items = line_items(&text);
        assert_eq!(items[0].rate, Decimal::new(1250000, 2));
    }

    #[test]
    fn test_compact_rows_only_when_no_full_rows() {
        let text = lines(&[
            "Consulting retainer  $2,000.00",
            "Subtotal  $2,000.00",
            "ok  $5.00",
        ]);
        let items = line_items(&text);
        // "Subtotal" is a summary label and "ok" is too short.
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Consulting retainer");
        assert_eq!(items[0].quantity, Decimal::ONE);
        assert_eq!(items[0].rate, Decimal::new(200000, 2));
        assert_eq!(items[0].amount, Decimal::new(200000, 2));
    }

    #[test]
    fn test_compact_rows_skip_non_positive_amounts() {
        let text = lines(&["Credit note  0"]);
        let items = line_items(&text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "");
        assert_eq!(items[0].rate, Decimal::ZERO);
    }

    #[test]
    fn test_blank_placeholder_when_nothing_matches() {
        let items = line_items(&lines(&["just prose, no tables"]));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "");
        assert_eq!(items[0].quantity, Decimal::ONE);
        assert_eq!(items[0].rate, Decimal::ZERO);
        assert_eq!(items[0].amount, Decimal::ZERO);
    }
}
