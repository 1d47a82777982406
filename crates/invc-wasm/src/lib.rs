//! WASM bindings for the invoice creator core.
//!
//! Exposes the PDF extraction pipeline, the portable document format, the
//! theme catalog, and stateful editor/preset-store classes to browsers and
//! Node.js. All structured data crosses the boundary as plain JS objects.

use wasm_bindgen::prelude::*;

use invc_core::models::invoice::{Invoice, InvoicePatch};
use invc_core::session::editor::{EditorAction, InvoiceEditor};
use invc_core::store::PresetStore;
use invc_core::{portable, themes};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Extract an invoice draft from PDF bytes.
///
/// Returns a partial invoice with one entry per recognized field; load it
/// into an [`InvoiceSession`] to get a full document.
#[wasm_bindgen]
pub fn extract_invoice(data: &[u8]) -> Result<JsValue, JsValue> {
    let patch = invc_core::extract_invoice(data).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&patch).map_err(to_js_error)
}

/// Parse a portable invoice document (or bare invoice JSON).
#[wasm_bindgen]
pub fn parse_invoice_json(text: &str) -> Result<JsValue, JsValue> {
    let invoice = portable::parse(text).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&invoice).map_err(to_js_error)
}

/// Export an invoice as a portable JSON document.
#[wasm_bindgen]
pub fn export_invoice_json(invoice: JsValue) -> Result<String, JsValue> {
    let invoice: Invoice = serde_wasm_bindgen::from_value(invoice).map_err(to_js_error)?;
    portable::export(&invoice).map_err(to_js_error)
}

/// The built-in theme catalog, in gallery order.
#[wasm_bindgen]
pub fn theme_catalog() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&*themes::CATALOG).map_err(to_js_error)
}

/// Resolve a theme id, falling back to the default theme for unknown ids.
#[wasm_bindgen]
pub fn resolve_theme(id: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&themes::theme_by_id(id)).map_err(to_js_error)
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Stateful invoice editing session for browser use.
#[wasm_bindgen]
pub struct InvoiceSession {
    editor: InvoiceEditor,
}

#[wasm_bindgen]
impl InvoiceSession {
    /// Start from the default invoice.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            editor: InvoiceEditor::new(),
        }
    }

    /// Apply one editor action, given as a `{type: ...}` tagged object.
    #[wasm_bindgen]
    pub fn apply(&mut self, action: JsValue) -> Result<(), JsValue> {
        let action: EditorAction = serde_wasm_bindgen::from_value(action).map_err(to_js_error)?;
        self.editor.apply(action);
        Ok(())
    }

    /// The current draft invoice.
    #[wasm_bindgen]
    pub fn invoice(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.editor.invoice()).map_err(to_js_error)
    }

    /// Replace the draft with defaults overlaid by a partial invoice
    /// (preset, sample, or extraction result).
    #[wasm_bindgen]
    pub fn load_preset(&mut self, patch: JsValue) -> Result<(), JsValue> {
        let patch: InvoicePatch = serde_wasm_bindgen::from_value(patch).map_err(to_js_error)?;
        self.editor.load_preset(patch);
        Ok(())
    }

    /// Export the current draft as a portable JSON document.
    #[wasm_bindgen]
    pub fn export(&self) -> Result<String, JsValue> {
        portable::export(self.editor.invoice()).map_err(to_js_error)
    }
}

impl Default for InvoiceSession {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory preset store for browser use.
///
/// Persistence is the caller's concern: export the blob to localStorage (or
/// a backend) and import it back on startup.
#[wasm_bindgen]
pub struct PresetVault {
    store: PresetStore,
}

#[wasm_bindgen]
impl PresetVault {
    /// Create an empty vault.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            store: PresetStore::new(),
        }
    }

    /// Save a partial invoice under a code. Returns the normalized code.
    #[wasm_bindgen]
    pub fn save(&mut self, code: &str, invoice: JsValue) -> Result<String, JsValue> {
        let patch: InvoicePatch = serde_wasm_bindgen::from_value(invoice).map_err(to_js_error)?;
        self.store.save(code, &patch).map_err(to_js_error)
    }

    /// Load the preset stored under a code.
    #[wasm_bindgen]
    pub fn load(&self, code: &str) -> Result<JsValue, JsValue> {
        let patch = self.store.load(code).map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&patch).map_err(to_js_error)
    }

    /// All stored codes, sorted.
    #[wasm_bindgen]
    pub fn list(&self) -> Vec<String> {
        self.store.list()
    }

    /// Delete a preset. Returns whether anything was removed.
    #[wasm_bindgen]
    pub fn delete(&mut self, code: &str) -> bool {
        self.store.delete(code)
    }

    /// The whole vault as a JSON blob.
    #[wasm_bindgen]
    pub fn export_blob(&self) -> Result<String, JsValue> {
        self.store.export_blob().map_err(to_js_error)
    }

    /// Merge a JSON blob into the vault. Returns the number of codes that
    /// were not previously present.
    #[wasm_bindgen]
    pub fn import_blob(&mut self, blob: &str) -> Result<usize, JsValue> {
        self.store.import_blob(blob).map_err(to_js_error)
    }
}

impl Default for PresetVault {
    fn default() -> Self {
        Self::new()
    }
}
