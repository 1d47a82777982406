//! Core library for client-side invoicing.
//!
//! This crate provides:
//! - PDF text extraction with positions (text-based PDFs, no OCR)
//! - Heuristic invoice field recognition (parties, dates, line items, totals)
//! - Invoice draft state with edit actions and derived-total recalculation
//! - Theme catalog and theme customization sessions
//! - Shareable preset codes and a portable JSON interchange format

pub mod calc;
pub mod error;
pub mod extract;
pub mod models;
pub mod portable;
pub mod render;
pub mod samples;
pub mod session;
pub mod store;
pub mod themes;

pub use error::{ImportError, InvcError, PdfError, Result, StoreError};
pub use extract::extract_invoice;
pub use models::config::InvcConfig;
pub use models::invoice::{Invoice, InvoicePatch, LineItem};
pub use models::theme::{Theme, TemplateKind};
pub use render::{DocumentRenderer, RenderedDocument, TextRenderer};
pub use session::editor::{EditorAction, FieldEdit, InvoiceEditor, ItemEdit};
pub use session::theme::ThemeSession;
pub use store::PresetStore;
