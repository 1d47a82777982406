//! Invoice editing session.
//!
//! [`InvoiceEditor`] owns the draft invoice and is the only mutation path.
//! Every action that can affect money ends in a recalculation, so the derived
//! totals are never stale. Actions serialize with a `type` tag so frontends
//! can dispatch them as plain JSON.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::invoice::{Invoice, InvoicePatch, LineItem};

/// Minimum and maximum logo display scale.
const LOGO_SCALE_MIN: Decimal = Decimal::from_parts(3, 0, 0, false, 1);
const LOGO_SCALE_MAX: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// An edit to a single scalar invoice field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldEdit {
    CompanyName(String),
    CompanyAddress(String),
    CompanyPhone(String),
    CompanyEmail(String),
    CompanyWebsite(String),
    ClientName(String),
    ClientAddress(String),
    ClientEmail(String),
    InvoiceNumber(String),
    InvoiceDate(String),
    DueDate(String),
    Notes(String),
    Terms(String),
    PaymentInfo(String),
    Currency(String),
    /// Clamped to 0..=100.
    TaxRate(Decimal),
    /// Clamped to 0..=100.
    DiscountRate(Decimal),
    /// Clamped to 0.3..=2.0.
    LogoScale(Decimal),
}

/// An edit to one field of a line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ItemEdit {
    Description(String),
    /// Floored at zero.
    Quantity(Decimal),
    /// Floored at zero.
    Rate(Decimal),
}

/// Everything the editor can do to the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EditorAction {
    /// Set a scalar field, then recalculate.
    SetField(FieldEdit),
    /// Set or clear the logo. Does not touch totals.
    SetLogo { logo: Option<String> },
    /// Append a fresh blank item.
    AddItem,
    /// Remove an item by id. Removing the only remaining item is a no-op.
    RemoveItem { id: String },
    /// Edit one field of the item with the given id.
    UpdateItem {
        id: String,
        #[serde(flatten)]
        edit: ItemEdit,
    },
    /// Reorder items to match the given id sequence. Unknown ids are
    /// ignored; unlisted items keep their relative order at the end.
    ReorderItems { ids: Vec<String> },
    /// Recompute derived totals.
    Recalculate,
    /// Replace the whole draft with defaults overlaid by the patch.
    LoadPreset { data: InvoicePatch },
}

/// Owns the draft invoice and applies editor actions.
#[derive(Debug, Clone)]
pub struct InvoiceEditor {
    invoice: Invoice,
}

impl InvoiceEditor {
    /// Start from the default invoice, recalculated.
    pub fn new() -> Self {
        let mut invoice = Invoice::default();
        invoice.recalculate();
        Self { invoice }
    }

    /// Adopt an existing invoice (typically an import), recalculated.
    pub fn with_invoice(mut invoice: Invoice) -> Self {
        invoice.recalculate();
        Self { invoice }
    }

    /// The current draft.
    pub fn invoice(&self) -> &Invoice {
        &self.invoice
    }

    /// Consume the editor and take the draft.
    pub fn into_invoice(self) -> Invoice {
        self.invoice
    }

    /// Apply one action.
    pub fn apply(&mut self, action: EditorAction) {
        match action {
            EditorAction::SetField(edit) => {
                self.write_field(edit);
                self.invoice.recalculate();
            }
            EditorAction::SetLogo { logo } => {
                self.invoice.company_logo = logo;
            }
            EditorAction::AddItem => {
                self.invoice.items.push(LineItem::blank());
                self.invoice.recalculate();
            }
            EditorAction::RemoveItem { id } => {
                if self.invoice.items.len() <= 1 {
                    return;
                }
                self.invoice.items.retain(|i| i.id != id);
                self.invoice.recalculate();
            }
            EditorAction::UpdateItem { id, edit } => {
                if let Some(item) = self.invoice.items.iter_mut().find(|i| i.id == id) {
                    match edit {
                        ItemEdit::Description(v) => item.description = v,
                        ItemEdit::Quantity(v) => item.quantity = v.max(Decimal::ZERO),
                        ItemEdit::Rate(v) => item.rate = v.max(Decimal::ZERO),
                    }
                }
                self.invoice.recalculate();
            }
            EditorAction::ReorderItems { ids } => {
                let mut reordered = Vec::with_capacity(self.invoice.items.len());
                for id in &ids {
                    if let Some(pos) = self.invoice.items.iter().position(|i| &i.id == id) {
                        reordered.push(self.invoice.items.remove(pos));
                    }
                }
                reordered.append(&mut self.invoice.items);
                self.invoice.items = reordered;
                self.invoice.recalculate();
            }
            EditorAction::Recalculate => {
                self.invoice.recalculate();
            }
            EditorAction::LoadPreset { data } => {
                self.invoice = Invoice::from_patch(&data);
            }
        }
    }

    /// Set a scalar field.
    pub fn set_field(&mut self, edit: FieldEdit) {
        self.apply(EditorAction::SetField(edit));
    }

    /// Set or clear the logo.
    pub fn set_logo(&mut self, logo: Option<String>) {
        self.apply(EditorAction::SetLogo { logo });
    }

    /// Append a fresh blank item.
    pub fn add_item(&mut self) {
        self.apply(EditorAction::AddItem);
    }

    /// Remove an item by id.
    pub fn remove_item(&mut self, id: &str) {
        self.apply(EditorAction::RemoveItem { id: id.to_string() });
    }

    /// Edit one field of an item.
    pub fn update_item(&mut self, id: &str, edit: ItemEdit) {
        self.apply(EditorAction::UpdateItem {
            id: id.to_string(),
            edit,
        });
    }

    /// Reorder items to match the given id sequence.
    pub fn reorder_items(&mut self, ids: Vec<String>) {
        self.apply(EditorAction::ReorderItems { ids });
    }

    /// Replace the whole draft with defaults overlaid by the patch.
    pub fn load_preset(&mut self, patch: InvoicePatch) {
        self.apply(EditorAction::LoadPreset { data: patch });
    }

    fn write_field(&mut self, edit: FieldEdit) {
        let invoice = &mut self.invoice;
        match edit {
            FieldEdit::CompanyName(v) => invoice.company_name = v,
            FieldEdit::CompanyAddress(v) => invoice.company_address = v,
            FieldEdit::CompanyPhone(v) => invoice.company_phone = v,
            FieldEdit::CompanyEmail(v) => invoice.company_email = v,
            FieldEdit::CompanyWebsite(v) => invoice.company_website = v,
            FieldEdit::ClientName(v) => invoice.client_name = v,
            FieldEdit::ClientAddress(v) => invoice.client_address = v,
            FieldEdit::ClientEmail(v) => invoice.client_email = v,
            FieldEdit::InvoiceNumber(v) => invoice.invoice_number = v,
            FieldEdit::InvoiceDate(v) => invoice.invoice_date = v,
            FieldEdit::DueDate(v) => invoice.due_date = v,
            FieldEdit::Notes(v) => invoice.notes = v,
            FieldEdit::Terms(v) => invoice.terms = v,
            FieldEdit::PaymentInfo(v) => invoice.payment_info = v,
            FieldEdit::Currency(v) => invoice.currency = v,
            FieldEdit::TaxRate(v) => {
                invoice.tax_rate = v.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
            }
            FieldEdit::DiscountRate(v) => {
                invoice.discount_rate = v.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
            }
            FieldEdit::LogoScale(v) => {
                invoice.logo_scale = v.clamp(LOGO_SCALE_MIN, LOGO_SCALE_MAX)
            }
        }
    }
}

impl Default for InvoiceEditor {
    fn default() -> Self {
        Self::new()
    }
}
