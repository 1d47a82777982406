//! Stateful editing sessions for invoices and themes.

pub mod editor;
pub mod theme;

pub use editor::{EditorAction, FieldEdit, InvoiceEditor, ItemEdit};
pub use theme::ThemeSession;
