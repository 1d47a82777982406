//! Field extraction heuristics over reconstructed text lines.

use std::cmp::Ordering;

use regex::Regex;
use rust_decimal::Decimal;

use super::glyphs::TextFragment;
use super::patterns;

/// Invoice number used when no line yields one.
const FALLBACK_INVOICE_NUMBER: &str = "INV-001";

/// Lines scanned for letterhead details at the top of the document.
const LETTERHEAD_LINES: usize = 10;

/// Lines considered part of the recipient block under a "Bill To" heading.
const BILL_TO_BLOCK_LINES: usize = 5;

/// Body lines captured after a "Notes" or "Terms" heading.
const SECTION_BODY_LINES: usize = 3;

/// Fragments above this share of the first fragment's height count as the
/// top band when looking for the company name.
const TOP_BAND: f32 = 0.7;

/// The recipient block found under a "Bill To" heading.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BillTo {
    pub client_name: String,
    pub client_address: String,
    pub client_email: String,
}

/// Seller details pulled from the top of the document.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CompanyInfo {
    pub company_name: String,
    pub company_address: String,
    pub company_phone: String,
    pub company_email: String,
    pub company_website: String,
}

/// First line carrying an invoice-number pattern wins.
pub fn invoice_number(lines: &[String]) -> String {
    for line in lines {
        if let Some(caps) = patterns::INVOICE_NUMBER.captures(line) {
            return caps[1].to_string();
        }
    }
    FALLBACK_INVOICE_NUMBER.to_string()
}

/// Date on the first line that mentions one of the keywords.
///
/// The date comes back exactly as written; no normalization happens here.
pub fn date_near(lines: &[String], keywords: &[&str]) -> Option<String> {
    for line in lines {
        let lower = line.to_lowercase();
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            if let Some(caps) = patterns::DATE.captures(line) {
                return Some(caps[1].to_string());
            }
        }
    }
    None
}

/// Recipient block: the lines directly under the first "Bill To" heading,
/// stopping early at table or summary headings. The first line is the client
/// name, emails are split out, and the rest joins into the address.
pub fn bill_to(lines: &[String]) -> BillTo {
    let mut result = BillTo::default();
    let Some(heading) = lines
        .iter()
        .position(|line| patterns::BILL_TO_HEADING.is_match(line))
    else {
        return result;
    };

    let end = (heading + 1 + BILL_TO_BLOCK_LINES).min(lines.len());
    let mut block = Vec::new();
    for line in &lines[heading + 1..end] {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if patterns::SECTION_HEADING.is_match(trimmed) {
            break;
        }
        block.push(trimmed);
    }

    let Some((name, rest)) = block.split_first() else {
        return result;
    };
    result.client_name = name.to_string();

    let mut address = Vec::new();
    for line in rest {
        if let Some(email) = patterns::EMAIL.find(line) {
            result.client_email = email.as_str().to_string();
        } else {
            address.push(*line);
        }
    }
    result.client_address = address.join("\n");
    result
}

/// Seller details from the top band of the document.
///
/// The largest fragment in the band becomes the company name. The first ten
/// lines are then scanned for phone, email and website, everything else
/// accumulating into the address until the document body starts.
pub fn company_info(fragments: &[TextFragment], lines: &[String]) -> CompanyInfo {
    let mut result = CompanyInfo::default();

    let band = fragments.first().map(|f| f.y).unwrap_or(0.0) * TOP_BAND;
    let mut banner: Vec<&TextFragment> = fragments.iter().filter(|f| f.y > band).collect();
    banner.sort_by(|a, b| {
        b.font_size
            .partial_cmp(&a.font_size)
            .unwrap_or(Ordering::Equal)
    });
    if let Some(largest) = banner.first() {
        result.company_name = largest.text.clone();
    }

    let mut address = Vec::new();
    for line in lines.iter().take(LETTERHEAD_LINES) {
        if *line == result.company_name {
            continue;
        }
        if patterns::LETTERHEAD_END.is_match(line) {
            break;
        }
        if let Some(phone) = patterns::PHONE.find(line) {
            if result.company_phone.is_empty() {
                result.company_phone = phone.as_str().trim().to_string();
                continue;
            }
        }
        if let Some(email) = patterns::EMAIL.find(line) {
            if result.company_email.is_empty() {
                result.company_email = email.as_str().trim().to_string();
                continue;
            }
        }
        if let Some(website) = patterns::WEBSITE.find(line) {
            if result.company_website.is_empty() {
                result.company_website = website.as_str().trim().to_string();
                continue;
            }
        }
        let trimmed = line.trim();
        if !trimmed.is_empty()
            && !patterns::CURRENCY_SYMBOL.is_match(line)
            && !patterns::BARE_NUMBER.is_match(line)
        {
            address.push(trimmed.to_string());
        }
    }
    result.company_address = address.join("\n");
    result
}

/// Amount on the last line mentioning "total". Later lines overwrite earlier
/// ones, so a trailing "Total Due" balance line wins over the grand total;
/// keyword lines without a number leave the previous candidate in place.
pub fn grand_total(lines: &[String]) -> Decimal {
    let mut total = Decimal::ZERO;
    for line in lines {
        if !patterns::TOTAL_KEYWORD.is_match(line) {
            continue;
        }
        if let Some(caps) = patterns::MONEY_VALUE.captures(line) {
            total = parse_amount(&caps[1]);
        }
    }
    total
}

/// Free-text bodies following "Notes" and "Terms" headings. The last heading
/// of each kind wins.
pub fn notes_and_terms(lines: &[String]) -> (String, String) {
    let mut notes = String::new();
    let mut terms = String::new();
    for (i, line) in lines.iter().enumerate() {
        if patterns::NOTES_HEADING.is_match(line) {
            notes = section_body(lines, i, &patterns::NOTES_STOP);
        }
        if patterns::TERMS_HEADING.is_match(line) {
            terms = section_body(lines, i, &patterns::TERMS_STOP);
        }
    }
    (notes, terms)
}

fn section_body(lines: &[String], heading: usize, stop: &Regex) -> String {
    let end = (heading + 1 + SECTION_BODY_LINES).min(lines.len());
    lines[heading + 1..end]
        .iter()
        .filter(|line| !line.trim().is_empty() && !stop.is_match(line))
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a money or quantity string, tolerating thousands separators.
pub fn parse_amount(raw: &str) -> Decimal {
    raw.replace(',', "").parse().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    fn fragment(text: &str, y: f32, font_size: f32) -> TextFragment {
        TextFragment {
            text: text.to_string(),
            x: 72.0,
            y,
            font_size,
        }
    }

    #[test]
    fn test_invoice_number_forms() {
        assert_eq!(
            invoice_number(&lines(&["Invoice #: INV-2024-0099"])),
            "INV-2024-0099"
        );
        assert_eq!(invoice_number(&lines(&["INVOICE 2024-001"])), "2024-001");
        assert_eq!(invoice_number(&lines(&["inv-7731 for March"])), "7731");
        assert_eq!(invoice_number(&lines(&["no number here"])), "INV-001");
    }

    #[test]
    fn test_date_near_keywords() {
        let text = lines(&["Issued: 2024-02-01", "Due: 03/15/2024"]);
        assert_eq!(
            date_near(&text, &["date", "issued", "invoice date"]).as_deref(),
            Some("2024-02-01")
        );
        assert_eq!(
            date_near(&text, &["due", "due date", "payment due"]).as_deref(),
            Some("03/15/2024")
        );
        assert_eq!(date_near(&text, &["paid"]), None);
    }

    #[test]
    fn test_date_requires_keyword_on_same_line() {
        let text = lines(&["2024-02-01", "Due on receipt"]);
        assert_eq!(date_near(&text, &["due"]), None);
    }

    #[test]
    fn test_bill_to_block() {
        let text = lines(&[
            "Bill To",
            "Globex LLC",
            "42 Galaxy Way",
            "Springfield",
            "pay@globex.com",
            "Description  Qty",
        ]);
        let block = bill_to(&text);
        assert_eq!(block.client_name, "Globex LLC");
        assert_eq!(block.client_address, "42 Galaxy Way\nSpringfield");
        assert_eq!(block.client_email, "pay@globex.com");
    }

    #[test]
    fn test_bill_to_stops_at_table_heading() {
        let text = lines(&["BILL TO:", "Initech", "Qty  Rate", "123 Innovation Dr"]);
        let block = bill_to(&text);
        assert_eq!(block.client_name, "Initech");
        assert_eq!(block.client_address, "");
    }

    #[test]
    fn test_bill_to_missing() {
        let block = bill_to(&lines(&["Invoice", "Total  $5.00"]));
        assert_eq!(block, BillTo::default());
    }

    #[test]
    fn test_company_name_prefers_largest_top_fragment() {
        let fragments = vec![
            fragment("Acme Studio", 740.0, 24.0),
            fragment("Invoice", 700.0, 18.0),
            fragment("Some Footer", 30.0, 30.0),
        ];
        let info = company_info(&fragments, &lines(&[]));
        // The footer is outside the top band despite its size.
        assert_eq!(info.company_name, "Acme Studio");
    }

    #[test]
    fn test_company_contact_lines() {
        let fragments = vec![fragment("Acme Studio", 740.0, 24.0)];
        let text = lines(&[
            "Acme Studio",
            "123 Main Street",
            "hello@acme.dev",
            "(555) 123-4567",
            "acme.dev/studio",
            "Invoice #: INV-001",
            "ignored after break",
        ]);
        let info = company_info(&fragments, &text);
        assert_eq!(info.company_name, "Acme Studio");
        assert_eq!(info.company_address, "123 Main Street");
        assert_eq!(info.company_email, "hello@acme.dev");
        assert_eq!(info.company_phone, "(555) 123-4567");
        assert_eq!(info.company_website, "acme.dev/studio");
    }

    #[test]
    fn test_company_scan_skips_amounts_and_bare_numbers() {
        let fragments = vec![fragment("Acme", 740.0, 24.0)];
        let text = lines(&["Acme", "$1,200.00", "88", "Suite 5"]);
        let info = company_info(&fragments, &text);
        assert_eq!(info.company_address, "Suite 5");
    }

    #[test]
    fn test_grand_total_last_match_wins() {
        let text = lines(&[
            "Subtotal  $100.00",
            "Total  $110.00",
            "Amount paid toward total",
        ]);
        assert_eq!(grand_total(&text), Decimal::new(11000, 2));
    }

    #[test]
    fn test_grand_total_parses_thousands() {
        let text = lines(&["Total Due  1,234.56"]);
        assert_eq!(grand_total(&text), Decimal::new(123456, 2));
    }

    #[test]
    fn test_grand_total_missing() {
        assert_eq!(grand_total(&lines(&["no totals here"])), Decimal::ZERO);
    }

    #[test]
    fn test_notes_and_terms_bodies() {
        let text = lines(&[
            "Notes",
            "Thanks for your business!",
            "Wire fees on the client.",
            "Terms",
            "Net 30",
        ]);
        let (notes, terms) = notes_and_terms(&text);
        assert_eq!(notes, "Thanks for your business!\nWire fees on the client.");
        assert_eq!(terms, "Net 30");
    }

    #[test]
    fn test_section_body_excludes_other_headings() {
        let text = lines(&["Notes", "Subtotal  $5.00", "See attachment", "Total  $5.00"]);
        let (notes, _) = notes_and_terms(&text);
        assert_eq!(notes, "See attachment");
    }
}
