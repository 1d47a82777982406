//! Data models for invoices, themes, and tool configuration.

pub mod config;
pub mod invoice;
pub mod theme;

pub use invoice::{Invoice, InvoicePatch, LineItem};
pub use theme::{Theme, TemplateKind};
