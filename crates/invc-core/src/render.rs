//! Document rendering seam.
//!
//! Rendering turns an invoice and a theme into a byte artifact plus the file
//! extension it should be saved under; the suggested file name comes from the
//! invoice number. Visual layouts live outside this crate, so the built-in
//! renderer emits a plain text summary.

use crate::calc::format_currency;
use crate::error::Result;
use crate::models::invoice::Invoice;
use crate::models::theme::Theme;

/// A rendered artifact and the file extension it should be saved under.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub extension: &'static str,
}

/// Turns an invoice and a theme into a downloadable artifact.
pub trait DocumentRenderer {
    fn render(&self, invoice: &Invoice, theme: &Theme) -> Result<RenderedDocument>;
}

/// Suggested file name for a rendered artifact: the trimmed invoice number,
/// or "invoice" when the number is blank.
pub fn artifact_file_name(invoice: &Invoice, extension: &str) -> String {
    let stem = invoice.invoice_number.trim();
    let stem = if stem.is_empty() { "invoice" } else { stem };
    format!("{}.{}", stem, extension)
}

/// Renders the invoice as a plain text summary.
///
/// Colors and typography have no text equivalent, so the theme is not
/// consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl DocumentRenderer for TextRenderer {
    fn render(&self, invoice: &Invoice, _theme: &Theme) -> Result<RenderedDocument> {
        Ok(RenderedDocument {
            bytes: format_text(invoice).into_bytes(),
            extension: "txt",
        })
    }
}

fn format_text(invoice: &Invoice) -> String {
    let currency = invoice.currency.as_str();
    let mut output = String::new();

    output.push_str(&format!("Invoice: {}\n", invoice.invoice_number));
    output.push_str(&format!("Date: {}\n", invoice.invoice_date));
    if !invoice.due_date.is_empty() {
        output.push_str(&format!("Due: {}\n", invoice.due_date));
    }
    output.push_str("\n");

    if !invoice.company_name.is_empty() {
        output.push_str("From:\n");
        output.push_str(&format!("  {}\n", invoice.company_name));
        push_block(&mut output, &invoice.company_address);
        push_line(&mut output, &invoice.company_phone);
        push_line(&mut output, &invoice.company_email);
        push_line(&mut output, &invoice.company_website);
        output.push_str("\n");
    }

    if !invoice.client_name.is_empty() || !invoice.client_address.is_empty() {
        output.push_str("Bill To:\n");
        push_line(&mut output, &invoice.client_name);
        push_block(&mut output, &invoice.client_address);
        push_line(&mut output, &invoice.client_email);
        output.push_str("\n");
    }

    output.push_str("Items:\n");
    for item in &invoice.items {
        output.push_str(&format!(
            "  {}  {} x {}  {}\n",
            item.description,
            item.quantity,
            format_currency(item.rate, currency),
            format_currency(item.amount, currency),
        ));
    }
    output.push_str("\n");

    output.push_str("Summary:\n");
    output.push_str(&format!(
        "  Subtotal: {}\n",
        format_currency(invoice.subtotal, currency)
    ));
    if !invoice.tax_rate.is_zero() {
        output.push_str(&format!(
            "  Tax ({}%): {}\n",
            invoice.tax_rate,
            format_currency(invoice.tax_amount, currency)
        ));
    }
    if !invoice.discount_rate.is_zero() {
        output.push_str(&format!(
            "  Discount ({}%): -{}\n",
            invoice.discount_rate,
            format_currency(invoice.discount_amount, currency)
        ));
    }
    output.push_str(&format!(
        "  Total: {}\n",
        format_currency(invoice.total, currency)
    ));

    if !invoice.notes.is_empty() {
        output.push_str("\nNotes:\n");
        push_block(&mut output, &invoice.notes);
    }
    if !invoice.terms.is_empty() {
        output.push_str("\nTerms:\n");
        push_block(&mut output, &invoice.terms);
    }
    if !invoice.payment_info.is_empty() {
        output.push_str("\nPayment:\n");
        push_block(&mut output, &invoice.payment_info);
    }

    output
}

fn push_line(output: &mut String, value: &str) {
    if !value.is_empty() {
        output.push_str(&format!("  {}\n", value));
    }
}

fn push_block(output: &mut String, value: &str) {
    for line in value.lines() {
        if !line.is_empty() {
            output.push_str(&format!("  {}\n", line));
        }
    }
}
