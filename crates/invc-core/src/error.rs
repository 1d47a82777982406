//! Error types for the invc-core library.

use thiserror::Error;

/// Main error type for the invc library.
#[derive(Error, Debug)]
pub enum InvcError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Preset store error.
    #[error("preset error: {0}")]
    Store(#[from] StoreError),

    /// Portable document import error.
    #[error("import error: {0}")]
    Import(#[from] ImportError),

    /// Document rendering error.
    #[error("render error: {0}")]
    Render(String),

    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to the shareable preset store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The preset code does not satisfy the 3-8 alphanumeric rule.
    #[error("invalid preset code {code:?}: {reason}")]
    InvalidCode { code: String, reason: String },

    /// No preset is saved under the requested code.
    #[error("no preset found for code {code:?} (available: {})", available.join(", "))]
    CodeNotFound { code: String, available: Vec<String> },

    /// The preset blob could not be parsed or serialized.
    #[error("malformed preset blob: {0}")]
    Blob(String),
}

/// Errors related to portable document import.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The payload is not valid JSON.
    #[error("malformed JSON: {0}")]
    MalformedJson(String),

    /// The payload is valid JSON but not an invoice document.
    #[error("not an invoice document: {0}")]
    NotAnInvoice(String),
}

/// Result type for the invc library.
pub type Result<T, E = InvcError> = std::result::Result<T, E>;
