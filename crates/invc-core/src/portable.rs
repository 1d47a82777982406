//! Portable invoice JSON interchange.
//!
//! Exported documents are wrapped as
//! `{"_schema": "invoice-creator-v1", "invoice": {...}}`. Import accepts the
//! wrapped form or a bare invoice object, fills every missing field with its
//! documented default, and ends with a recalculation pass so derived totals
//! never come from the wire.

use serde::{Deserialize, Serialize};

use crate::error::{ImportError, Result};
use crate::models::invoice::Invoice;

/// Schema marker carried by exported documents.
pub const SCHEMA: &str = "invoice-creator-v1";

#[derive(Serialize, Deserialize)]
struct PortableDocument {
    #[serde(rename = "_schema")]
    schema: String,
    invoice: Invoice,
}

/// Serialize an invoice as a portable JSON document.
pub fn export(invoice: &Invoice) -> Result<String> {
    let document = PortableDocument {
        schema: SCHEMA.to_string(),
        invoice: invoice.clone(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Parse a portable document or a bare invoice object.
pub fn parse(text: &str) -> Result<Invoice, ImportError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| ImportError::MalformedJson(e.to_string()))?;

    // Wrapped documents carry the invoice under an "invoice" key; anything
    // else is treated as a bare invoice object.
    let invoice_value = match value.get("invoice") {
        Some(inner) => inner.clone(),
        None => value,
    };
    if !invoice_value.is_object() {
        return Err(ImportError::NotAnInvoice(
            "expected a JSON object".to_string(),
        ));
    }

    let mut invoice: Invoice = serde_json::from_value(invoice_value)
        .map_err(|e| ImportError::NotAnInvoice(e.to_string()))?;
    invoice.recalculate();
    Ok(invoice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::invoice::LineItem;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    #[test]
    fn test_round_trip() {
        let mut invoice = Invoice::default();
        invoice.company_name = "Acme Studio".to_string();
        invoice.items = vec![
            LineItem::new("Design", Decimal::from(2), Decimal::from(400)),
            LineItem::new("Hosting", Decimal::ONE, Decimal::new(2550, 2)),
        ];
        invoice.tax_rate = Decimal::new(825, 2);
        invoice.recalculate();

        let json = export(&invoice).unwrap();
        let parsed = parse(&json).unwrap();
        assert_eq!(parsed, invoice);
    }

    #[test]
    fn test_export_carries_schema_marker() {
        let json = export(&Invoice::default()).unwrap();
        assert!(json.contains("\"_schema\": \"invoice-creator-v1\""));
        assert!(json.contains("\"invoice\""));
    }

    #[test]
    fn test_parse_accepts_bare_invoice() {
        let parsed = parse(r#"{"companyName": "Solo LLC"}"#).unwrap();
        assert_eq!(parsed.company_name, "Solo LLC");
        // Missing fields fall back to import defaults.
        assert_eq!(parsed.invoice_number, "INV-001");
        assert_eq!(parsed.currency, "USD");
        assert_eq!(parsed.items.len(), 1);
    }

    #[test]
    fn test_parse_recalculates_derived_totals() {
        let parsed = parse(
            r#"{
                "invoice": {
                    "items": [{"description": "Work", "quantity": 2, "rate": 100}],
                    "taxRate": 10,
                    "total": 9999
                },
                "_schema": "invoice-creator-v1"
            }"#,
        )
        .unwrap();
        assert_eq!(parsed.subtotal, Decimal::from(200));
        assert_eq!(parsed.tax_amount, Decimal::from(20));
        assert_eq!(parsed.total, Decimal::from(220));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(
            parse("{ nope"),
            Err(ImportError::MalformedJson(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_invoice_payloads() {
        assert!(matches!(
            parse("[1, 2, 3]"),
            Err(ImportError::NotAnInvoice(_))
        ));
        assert!(matches!(
            parse(r#"{"invoice": 42}"#),
            Err(ImportError::NotAnInvoice(_))
        ));
    }
}
