//! PDF to invoice extraction pipeline.
//!
//! Four stages: collect positioned text fragments from the content streams,
//! rebuild visual lines, run field heuristics over the lines, and recover the
//! line item table. The result is an [`InvoicePatch`] meant to be loaded into
//! the editor, which recomputes every derived total.

mod fields;
mod glyphs;
mod items;
mod lines;
mod patterns;

use chrono::Local;
use tracing::{debug, warn};

use crate::error::{PdfError, Result};
use crate::models::invoice::InvoicePatch;

/// Keywords marking the line that carries the issue date.
const ISSUE_DATE_KEYWORDS: &[&str] = &["date", "issued", "invoice date"];

/// Keywords marking the line that carries the due date.
const DUE_DATE_KEYWORDS: &[&str] = &["due", "due date", "payment due"];

/// Extract invoice fields from an in-memory PDF.
///
/// Missing content never fails: whatever the heuristics cannot find comes
/// back as an empty string or a fallback value, ready to be corrected in the
/// editor. Only unreadable documents produce an error.
pub fn extract_invoice(data: &[u8]) -> Result<InvoicePatch> {
    let (doc, raw) = glyphs::load_document(data)?;
    let fragments = glyphs::collect_fragments(&doc)?;
    debug!(fragments = fragments.len(), "collected positioned text");

    let text_lines = if fragments.is_empty() {
        warn!("no positioned text found, falling back to plain extraction");
        let text = pdf_extract::extract_text_from_mem(&raw)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        lines::reconstruct(&fragments)
    };
    debug!(lines = text_lines.len(), "reconstructed text lines");

    let company = fields::company_info(&fragments, &text_lines);
    let client = fields::bill_to(&text_lines);
    let rows = items::line_items(&text_lines);
    debug!(items = rows.len(), "recovered line items");

    let invoice_date = fields::date_near(&text_lines, ISSUE_DATE_KEYWORDS)
        .unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());
    let due_date = fields::date_near(&text_lines, DUE_DATE_KEYWORDS).unwrap_or_default();
    let (notes, terms) = fields::notes_and_terms(&text_lines);

    Ok(InvoicePatch {
        company_name: Some(company.company_name),
        company_address: Some(company.company_address),
        company_phone: Some(company.company_phone),
        company_email: Some(company.company_email),
        company_website: Some(company.company_website),
        client_name: Some(client.client_name),
        client_address: Some(client.client_address),
        client_email: Some(client.client_email),
        invoice_number: Some(fields::invoice_number(&text_lines)),
        invoice_date: Some(invoice_date),
        due_date: Some(due_date),
        items: Some(rows),
        total: Some(fields::grand_total(&text_lines)),
        notes: Some(notes),
        terms: Some(terms),
        ..InvoicePatch::default()
    })
}
