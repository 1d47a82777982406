//! Regex patterns for recovering invoice fields from reconstructed text lines.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Document metadata
    pub static ref DATE: Regex = Regex::new(
        r"\b(\d{4}[-/]\d{2}[-/]\d{2}|\d{1,2}[-/]\d{1,2}[-/]\d{2,4})\b"
    ).unwrap();

    pub static ref INVOICE_NUMBER: Regex = Regex::new(
        r"(?i)(?:invoice\s*#?\s*:?\s*|inv[- ]?)([A-Z0-9][-A-Z0-9]+)"
    ).unwrap();

    pub static ref CURRENCY_SYMBOL: Regex = Regex::new(
        r"[$€£¥]"
    ).unwrap();

    // Contact details
    pub static ref EMAIL: Regex = Regex::new(
        r"[\w.-]+@[\w.-]+\.\w+"
    ).unwrap();

    pub static ref PHONE: Regex = Regex::new(
        r"\+?1?\s*[-.(]?\d{3}[-.)]\s*\d{3}[-.]?\d{4}"
    ).unwrap();

    pub static ref WEBSITE: Regex = Regex::new(
        r"(?i)(?:https?://)?[\w.-]+\.(?:com|co|io|dev|xyz|net|org)[\w/]*"
    ).unwrap();

    // Section headings
    pub static ref BILL_TO_HEADING: Regex = Regex::new(
        r"(?i)bill\s*to"
    ).unwrap();

    pub static ref SECTION_HEADING: Regex = Regex::new(
        r"(?i)^(description|item|qty|quantity|rate|amount|total|subtotal|notes|terms)"
    ).unwrap();

    // Letterhead scan stops once the document body starts.
    pub static ref LETTERHEAD_END: Regex = Regex::new(
        r"(?i)invoice|bill\s*to"
    ).unwrap();

    pub static ref BARE_NUMBER: Regex = Regex::new(
        r"^\d+\s*$"
    ).unwrap();

    // Line item rows
    pub static ref ITEM_ROW_FULL: Regex = Regex::new(
        r"^(.+?)\s{2,}(\d+(?:\.\d+)?)\s{2,}[$€£¥]?([\d,]+(?:\.\d{2})?)\s{2,}[$€£¥]?([\d,]+(?:\.\d{2})?)$"
    ).unwrap();

    pub static ref ITEM_ROW_COMPACT: Regex = Regex::new(
        r"^(.+?)\s{2,}[$€£¥]?([\d,]+(?:\.\d{2})?)$"
    ).unwrap();

    pub static ref ITEM_TABLE_HEADER: Regex = Regex::new(
        r"(?i)^(description|item|service)"
    ).unwrap();

    pub static ref NON_ITEM_LABEL: Regex = Regex::new(
        r"(?i)^(description|item|subtotal|total|tax|discount|bill|invoice|date|due|notes|terms|payment)"
    ).unwrap();

    // Summary sections. The word boundary keeps "Subtotal" from matching.
    pub static ref TOTAL_KEYWORD: Regex = Regex::new(
        r"(?i)\btotal\b"
    ).unwrap();

    pub static ref MONEY_VALUE: Regex = Regex::new(
        r"[$€£¥]?\s*([\d,]+(?:\.\d{2})?)"
    ).unwrap();

    pub static ref NOTES_HEADING: Regex = Regex::new(
        r"(?i)^notes?\b"
    ).unwrap();

    pub static ref TERMS_HEADING: Regex = Regex::new(
        r"(?i)^terms?\b"
    ).unwrap();

    pub static ref NOTES_STOP: Regex = Regex::new(
        r"(?i)^(terms|total|subtotal)"
    ).unwrap();

    pub static ref TERMS_STOP: Regex = Regex::new(
        r"(?i)^(notes|total|subtotal)"
    ).unwrap();
}
