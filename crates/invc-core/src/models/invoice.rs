//! Invoice data model for the portable `invoice-creator-v1` schema.
//!
//! Field names serialize in camelCase so documents interchange directly with
//! other implementations of the schema. Monetary values are decimals that
//! serialize as plain JSON numbers.

use chrono::{Days, Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::calc;

/// A single line item on the invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Opaque identifier, unique within an invoice and stable across edits.
    #[serde(default)]
    pub id: String,

    /// Product/service description.
    #[serde(default)]
    pub description: String,

    /// Quantity (hours, units, months, ...).
    #[serde(default = "default_quantity")]
    pub quantity: Decimal,

    /// Unit rate.
    #[serde(default)]
    pub rate: Decimal,

    /// Line total, recomputed as quantity x rate on every recalculation.
    #[serde(default)]
    pub amount: Decimal,
}

fn default_quantity() -> Decimal {
    Decimal::ONE
}

impl LineItem {
    /// A fresh empty item: quantity 1, rate 0, blank description.
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description: String::new(),
            quantity: Decimal::ONE,
            rate: Decimal::ZERO,
            amount: Decimal::ZERO,
        }
    }

    /// Create an item with the amount derived from quantity and rate.
    pub fn new(description: impl Into<String>, quantity: Decimal, rate: Decimal) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description: description.into(),
            quantity,
            rate,
            amount: calc::line_amount(quantity, rate),
        }
    }

    /// Rebuild an item from a loose JSON value, defaulting each field the way
    /// the interchange format tolerates: missing id becomes the 1-based index,
    /// missing quantity becomes 1, missing amount is derived.
    fn from_partial_value(value: &serde_json::Value, index: usize) -> Self {
        let quantity = value
            .get("quantity")
            .and_then(json_decimal)
            .unwrap_or(Decimal::ONE);
        let rate = value
            .get("rate")
            .and_then(json_decimal)
            .unwrap_or(Decimal::ZERO);
        let amount = value
            .get("amount")
            .and_then(json_decimal)
            .unwrap_or_else(|| calc::line_amount(quantity, rate));
        let id = value
            .get("id")
            .filter(|v| !v.is_null())
            .map(|v| match v {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .unwrap_or_else(|| (index + 1).to_string());
        let description = value
            .get("description")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string();

        Self {
            id,
            description,
            quantity,
            rate,
            amount,
        }
    }
}

/// A complete invoice draft.
///
/// Carries both the document fields the user edits and the derived monetary
/// fields. The derived fields are a pure function of the items and rates;
/// [`Invoice::recalculate`] re-establishes them after any edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default = "Invoice::import_defaults")]
pub struct Invoice {
    // Sender
    pub company_name: String,
    pub company_address: String,
    pub company_phone: String,
    pub company_email: String,
    pub company_website: String,
    /// Data-URL string of the uploaded logo, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    /// Logo display scale, clamped to 0.3..=2.0 by the editor.
    pub logo_scale: Decimal,

    // Recipient
    pub client_name: String,
    pub client_address: String,
    pub client_email: String,

    // Document metadata
    pub invoice_number: String,
    pub invoice_date: String,
    pub due_date: String,

    // Items
    #[serde(deserialize_with = "de_items")]
    pub items: Vec<LineItem>,

    // Percentage adjustments (0..=100)
    pub tax_rate: Decimal,
    pub discount_rate: Decimal,

    // Derived totals
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub discount_amount: Decimal,
    pub total: Decimal,

    // Free text
    pub notes: String,
    pub terms: String,
    pub payment_info: String,

    /// ISO 4217 currency code.
    pub currency: String,
}

impl Invoice {
    /// Defaults applied when importing a document with missing fields.
    ///
    /// Identical to [`Invoice::default`] except that terms default to empty
    /// instead of the standard payment-terms sentence.
    fn import_defaults() -> Self {
        Self {
            terms: String::new(),
            ..Self::default()
        }
    }

    /// Recompute line amounts and the derived totals in order: line amounts,
    /// subtotal, tax, discount, total.
    pub fn recalculate(&mut self) {
        for item in &mut self.items {
            item.amount = calc::line_amount(item.quantity, item.rate);
        }
        self.subtotal = calc::subtotal(&self.items);
        self.tax_amount = calc::tax_amount(self.subtotal, self.tax_rate);
        self.discount_amount = calc::discount_amount(self.subtotal, self.discount_rate);
        self.total = calc::total(self.subtotal, self.tax_amount, self.discount_amount);
    }

    /// Build an invoice from defaults overlaid with the patch, recalculated.
    ///
    /// This is a full replace against the default invoice, not a merge into
    /// any existing state: fields absent from the patch come out as defaults.
    pub fn from_patch(patch: &InvoicePatch) -> Self {
        let mut invoice = Self::default();
        patch.overlay(&mut invoice);
        invoice.recalculate();
        invoice
    }

    /// Copy every field into a patch (used when saving an invoice as a preset).
    pub fn to_patch(&self) -> InvoicePatch {
        InvoicePatch {
            company_name: Some(self.company_name.clone()),
            company_address: Some(self.company_address.clone()),
            company_phone: Some(self.company_phone.clone()),
            company_email: Some(self.company_email.clone()),
            company_website: Some(self.company_website.clone()),
            company_logo: self.company_logo.clone(),
            logo_scale: Some(self.logo_scale),
            client_name: Some(self.client_name.clone()),
            client_address: Some(self.client_address.clone()),
            client_email: Some(self.client_email.clone()),
            invoice_number: Some(self.invoice_number.clone()),
            invoice_date: Some(self.invoice_date.clone()),
            due_date: Some(self.due_date.clone()),
            items: Some(self.items.clone()),
            tax_rate: Some(self.tax_rate),
            discount_rate: Some(self.discount_rate),
            subtotal: Some(self.subtotal),
            tax_amount: Some(self.tax_amount),
            discount_amount: Some(self.discount_amount),
            total: Some(self.total),
            notes: Some(self.notes.clone()),
            terms: Some(self.terms.clone()),
            payment_info: Some(self.payment_info.clone()),
            currency: Some(self.currency.clone()),
        }
    }
}

impl Default for Invoice {
    fn default() -> Self {
        let today = Local::now().date_naive();
        Self {
            company_name: String::new(),
            company_address: String::new(),
            company_phone: String::new(),
            company_email: String::new(),
            company_website: String::new(),
            company_logo: None,
            logo_scale: Decimal::ONE,
            client_name: String::new(),
            client_address: String::new(),
            client_email: String::new(),
            invoice_number: "INV-001".to_string(),
            invoice_date: iso_date(today),
            due_date: iso_date(today.checked_add_days(Days::new(30)).unwrap_or(today)),
            items: vec![LineItem::blank()],
            tax_rate: Decimal::ZERO,
            discount_rate: Decimal::ZERO,
            subtotal: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            discount_amount: Decimal::ZERO,
            total: Decimal::ZERO,
            notes: String::new(),
            terms: "Payment is due within 30 days of invoice date.".to_string(),
            payment_info: String::new(),
            currency: "USD".to_string(),
        }
    }
}

fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Tolerant item-array deserializer: anything that is not a non-empty array
/// collapses to a single blank item, and each entry gets per-field defaults.
fn de_items<'de, D>(deserializer: D) -> Result<Vec<LineItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(items_from_value(&value))
}

fn items_from_value(value: &serde_json::Value) -> Vec<LineItem> {
    match value.as_array() {
        Some(list) if !list.is_empty() => list
            .iter()
            .enumerate()
            .map(|(index, entry)| LineItem::from_partial_value(entry, index))
            .collect(),
        _ => vec![LineItem::blank()],
    }
}

fn json_decimal(value: &serde_json::Value) -> Option<Decimal> {
    match value {
        serde_json::Value::Number(n) => n.as_f64().and_then(|f| Decimal::try_from(f).ok()),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A partial invoice: every field optional.
///
/// Patches are produced by PDF extraction, stored under preset codes, and
/// shipped as named samples. Applying one always goes through
/// [`Invoice::from_patch`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoicePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_scale: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_items_opt"
    )]
    pub items: Option<Vec<LineItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl InvoicePatch {
    /// Write every present field onto the invoice.
    pub(crate) fn overlay(&self, invoice: &mut Invoice) {
        if let Some(v) = &self.company_name {
            invoice.company_name = v.clone();
        }
        if let Some(v) = &self.company_address {
            invoice.company_address = v.clone();
        }
        if let Some(v) = &self.company_phone {
            invoice.company_phone = v.clone();
        }
        if let Some(v) = &self.company_email {
            invoice.company_email = v.clone();
        }
        if let Some(v) = &self.company_website {
            invoice.company_website = v.clone();
        }
        if let Some(v) = &self.company_logo {
            invoice.company_logo = Some(v.clone());
        }
        if let Some(v) = self.logo_scale {
            invoice.logo_scale = v;
        }
        if let Some(v) = &self.client_name {
            invoice.client_name = v.clone();
        }
        if let Some(v) = &self.client_address {
            invoice.client_address = v.clone();
        }
        if let Some(v) = &self.client_email {
            invoice.client_email = v.clone();
        }
        if let Some(v) = &self.invoice_number {
            invoice.invoice_number = v.clone();
        }
        if let Some(v) = &self.invoice_date {
            invoice.invoice_date = v.clone();
        }
        if let Some(v) = &self.due_date {
            invoice.due_date = v.clone();
        }
        if let Some(v) = &self.items {
            if !v.is_empty() {
                invoice.items = v.clone();
            }
        }
        if let Some(v) = self.tax_rate {
            invoice.tax_rate = v;
        }
        if let Some(v) = self.discount_rate {
            invoice.discount_rate = v;
        }
        if let Some(v) = self.subtotal {
            invoice.subtotal = v;
        }
        if let Some(v) = self.tax_amount {
            invoice.tax_amount = v;
        }
        if let Some(v) = self.discount_amount {
            invoice.discount_amount = v;
        }
        if let Some(v) = self.total {
            invoice.total = v;
        }
        if let Some(v) = &self.notes {
            invoice.notes = v.clone();
        }
        if let Some(v) = &self.terms {
            invoice.terms = v.clone();
        }
        if let Some(v) = &self.payment_info {
            invoice.payment_info = v.clone();
        }
        if let Some(v) = &self.currency {
            invoice.currency = v.clone();
        }
    }

    /// Remove the derived monetary fields. Presets never store computed
    /// totals; they are re-derived when the preset is applied.
    pub fn strip_computed(&mut self) {
        self.subtotal = None;
        self.tax_amount = None;
        self.discount_amount = None;
        self.total = None;
    }
}

fn de_items_opt<'de, D>(deserializer: D) -> Result<Option<Vec<LineItem>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value.as_array() {
        Some(list) if !list.is_empty() => Ok(Some(
            list.iter()
                .enumerate()
                .map(|(index, entry)| LineItem::from_partial_value(entry, index))
                .collect(),
        )),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_invoice_shape() {
        let invoice = Invoice::default();
        assert_eq!(invoice.invoice_number, "INV-001");
        assert_eq!(invoice.currency, "USD");
        assert_eq!(invoice.logo_scale, Decimal::ONE);
        assert_eq!(invoice.items.len(), 1);
        assert_eq!(invoice.items[0].quantity, Decimal::ONE);
        assert_eq!(invoice.items[0].rate, Decimal::ZERO);
        assert_eq!(
            invoice.terms,
            "Payment is due within 30 days of invoice date."
        );
        assert!(invoice.company_logo.is_none());
    }

    #[test]
    fn test_default_due_date_is_30_days_out() {
        let invoice = Invoice::default();
        let issued: NaiveDate = invoice.invoice_date.parse().unwrap();
        let due: NaiveDate = invoice.due_date.parse().unwrap();
        assert_eq!((due - issued).num_days(), 30);
    }

    #[test]
    fn test_from_patch_replaces_not_merges() {
        let patch = InvoicePatch {
            company_name: Some("Acme Corp".to_string()),
            tax_rate: Some(Decimal::from(10)),
            items: Some(vec![LineItem::new(
                "Consulting",
                Decimal::from(2),
                Decimal::from(100),
            )]),
            ..Default::default()
        };
        let invoice = Invoice::from_patch(&patch);

        assert_eq!(invoice.company_name, "Acme Corp");
        // Fields absent from the patch come out as defaults.
        assert_eq!(invoice.invoice_number, "INV-001");
        // Derived totals are recomputed from the patch items.
        assert_eq!(invoice.subtotal, Decimal::from(200));
        assert_eq!(invoice.tax_amount, Decimal::from(20));
        assert_eq!(invoice.total, Decimal::from(220));
    }

    #[test]
    fn test_from_patch_ignores_stored_totals() {
        let patch = InvoicePatch {
            items: Some(vec![LineItem::new(
                "Design",
                Decimal::from(1),
                Decimal::from(500),
            )]),
            total: Some(Decimal::from(9999)),
            ..Default::default()
        };
        let invoice = Invoice::from_patch(&patch);
        assert_eq!(invoice.total, Decimal::from(500));
    }

    #[test]
    fn test_import_tolerates_missing_fields() {
        let invoice: Invoice = serde_json::from_str("{}").unwrap();
        assert_eq!(invoice.invoice_number, "INV-001");
        assert_eq!(invoice.currency, "USD");
        assert_eq!(invoice.terms, "");
        assert_eq!(invoice.items.len(), 1);
    }

    #[test]
    fn test_import_tolerates_invalid_items() {
        let invoice: Invoice = serde_json::from_str(r#"{"items": "garbage"}"#).unwrap();
        assert_eq!(invoice.items.len(), 1);
        assert_eq!(invoice.items[0].quantity, Decimal::ONE);
    }

    #[test]
    fn test_import_defaults_partial_item_fields() {
        let invoice: Invoice = serde_json::from_str(
            r#"{"items": [{"description": "Hosting", "rate": 25}, {"quantity": 3}]}"#,
        )
        .unwrap();
        assert_eq!(invoice.items.len(), 2);
        assert_eq!(invoice.items[0].id, "1");
        assert_eq!(invoice.items[0].description, "Hosting");
        assert_eq!(invoice.items[0].quantity, Decimal::ONE);
        assert_eq!(invoice.items[0].amount, Decimal::from(25));
        assert_eq!(invoice.items[1].id, "2");
        assert_eq!(invoice.items[1].quantity, Decimal::from(3));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_string(&Invoice::default()).unwrap();
        assert!(json.contains("\"invoiceNumber\""));
        assert!(json.contains("\"taxRate\""));
        assert!(json.contains("\"logoScale\""));
        // Absent logo is omitted entirely, not serialized as null.
        assert!(!json.contains("companyLogo"));
    }

    #[test]
    fn test_strip_computed() {
        let mut patch = Invoice::default().to_patch();
        assert!(patch.subtotal.is_some());
        patch.strip_computed();
        assert!(patch.subtotal.is_none());
        assert!(patch.tax_amount.is_none());
        assert!(patch.discount_amount.is_none());
        assert!(patch.total.is_none());
        assert!(patch.items.is_some());
    }

    #[test]
    fn test_patch_round_trips_without_none_keys() {
        let patch = InvoicePatch {
            company_name: Some("Acme".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"companyName":"Acme"}"#);
    }
}
