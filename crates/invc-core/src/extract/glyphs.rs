//! Positioned text collection from PDF content streams.

use std::collections::BTreeMap;

use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::{debug, warn};

use crate::error::PdfError;

/// Fallback size when the text state never sets one.
const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Approximate line height used for the `T*` and `'` operators.
const LINE_ADVANCE: f32 = 1.2;

/// A run of text placed on a page.
///
/// Coordinates are PDF user space with the origin at the bottom-left, so
/// larger `y` means closer to the top of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    /// Decoded text, trimmed.
    pub text: String,
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
    /// Font size scaled by the text matrix.
    pub font_size: f32,
}

/// Load a PDF from memory, decrypting empty-password documents.
///
/// Returns the parsed document together with the bytes to feed plain-text
/// extraction, re-saved when decryption rewrote the streams.
pub fn load_document(data: &[u8]) -> Result<(Document, Vec<u8>), PdfError> {
    let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

    // Handle PDFs with empty password encryption
    if doc.is_encrypted() {
        if doc.decrypt("").is_err() {
            return Err(PdfError::Encrypted);
        }
        debug!("decrypted PDF with empty password");

        let mut decrypted = Vec::new();
        doc.save_to(&mut decrypted)
            .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
        return Ok((doc, decrypted));
    }

    Ok((doc, data.to_vec()))
}

/// Walk every page's content stream and collect positioned text.
///
/// Pages whose content fails to decode are skipped so one bad page does not
/// discard the rest of the document.
pub fn collect_fragments(doc: &Document) -> Result<Vec<TextFragment>, PdfError> {
    let pages = doc.get_pages();
    if pages.is_empty() {
        return Err(PdfError::NoPages);
    }

    let mut fragments = Vec::new();
    for (page_num, page_id) in pages {
        match page_fragments(doc, page_id) {
            Ok(items) => fragments.extend(items),
            Err(err) => warn!(page = page_num, error = %err, "skipping unreadable page"),
        }
    }
    Ok(fragments)
}

fn page_fragments(doc: &Document, page_id: ObjectId) -> Result<Vec<TextFragment>, PdfError> {
    let fonts = doc.get_page_fonts(page_id).unwrap_or_default();

    let content_data = doc
        .get_page_content(page_id)
        .map_err(|e| PdfError::Parse(e.to_string()))?;
    let content = Content::decode(&content_data).map_err(|e| PdfError::Parse(e.to_string()))?;

    // Text state tracking
    let mut fragments = Vec::new();
    let mut current_font = String::new();
    let mut current_font_size: f32 = DEFAULT_FONT_SIZE;
    let mut text_matrix = [1.0f32, 0.0, 0.0, 1.0, 0.0, 0.0];
    let mut line_matrix = [1.0f32, 0.0, 0.0, 1.0, 0.0, 0.0];
    let mut in_text_block = false;

    for op in &content.operations {
        match op.operator.as_str() {
            "BT" => {
                in_text_block = true;
                text_matrix = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];
                line_matrix = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];
            }
            "ET" => {
                in_text_block = false;
            }
            "Tf" => {
                if op.operands.len() >= 2 {
                    if let Ok(name) = op.operands[0].as_name() {
                        current_font = String::from_utf8_lossy(name).to_string();
                    }
                    if let Some(size) = operand_number(&op.operands[1]) {
                        current_font_size = size;
                    }
                }
            }
            "Td" | "TD" => {
                if op.operands.len() >= 2 {
                    let tx = operand_number(&op.operands[0]).unwrap_or(0.0);
                    let ty = operand_number(&op.operands[1]).unwrap_or(0.0);
                    line_matrix[4] += tx;
                    line_matrix[5] += ty;
                    text_matrix = line_matrix;
                }
            }
            "Tm" => {
                if op.operands.len() >= 6 {
                    for (i, operand) in op.operands.iter().take(6).enumerate() {
                        text_matrix[i] = operand_number(operand)
                            .unwrap_or(if i == 0 || i == 3 { 1.0 } else { 0.0 });
                    }
                    line_matrix = text_matrix;
                }
            }
            "T*" => {
                line_matrix[5] -= current_font_size * LINE_ADVANCE;
                text_matrix = line_matrix;
            }
            "Tj" => {
                if in_text_block && !op.operands.is_empty() {
                    if let Some(text) = decode_operand(&op.operands[0], doc, &fonts, &current_font)
                    {
                        push_fragment(&mut fragments, &text, &text_matrix, current_font_size);
                    }
                }
            }
            "TJ" => {
                if in_text_block && !op.operands.is_empty() {
                    if let Ok(array) = op.operands[0].as_array() {
                        let mut combined = String::new();
                        for entry in array {
                            if let Some(text) = decode_operand(entry, doc, &fonts, &current_font) {
                                combined.push_str(&text);
                            }
                        }
                        push_fragment(&mut fragments, &combined, &text_matrix, current_font_size);
                    }
                }
            }
            "'" => {
                line_matrix[5] -= current_font_size * LINE_ADVANCE;
                text_matrix = line_matrix;
                if in_text_block && !op.operands.is_empty() {
                    if let Some(text) = decode_operand(&op.operands[0], doc, &fonts, &current_font)
                    {
                        push_fragment(&mut fragments, &text, &text_matrix, current_font_size);
                    }
                }
            }
            "\"" => {
                line_matrix[5] -= current_font_size * LINE_ADVANCE;
                text_matrix = line_matrix;
                if in_text_block && op.operands.len() >= 3 {
                    if let Some(text) = decode_operand(&op.operands[2], doc, &fonts, &current_font)
                    {
                        push_fragment(&mut fragments, &text, &text_matrix, current_font_size);
                    }
                }
            }
            _ => {}
        }
    }

    Ok(fragments)
}

fn push_fragment(fragments: &mut Vec<TextFragment>, text: &str, matrix: &[f32; 6], size: f32) {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return;
    }
    let scaled = (size * matrix[0]).abs();
    fragments.push(TextFragment {
        text: trimmed.to_string(),
        x: matrix[4],
        y: matrix[5],
        font_size: if scaled == 0.0 {
            DEFAULT_FONT_SIZE
        } else {
            scaled
        },
    });
}

fn operand_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Decode a string operand using the current font's encoding, falling back to
/// UTF-16BE (BOM-prefixed) and then Latin-1.
fn decode_operand(
    obj: &Object,
    doc: &Document,
    fonts: &BTreeMap<Vec<u8>, &Dictionary>,
    current_font: &str,
) -> Option<String> {
    if let Object::String(bytes, _) = obj {
        if let Some(font_dict) = fonts.get(current_font.as_bytes()) {
            if let Ok(encoding) = font_dict.get_font_encoding(doc) {
                if let Ok(text) = Document::decode_text(&encoding, bytes) {
                    return Some(text);
                }
            }
        }

        if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
            let utf16: Vec<u16> = bytes[2..]
                .chunks_exact(2)
                .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
                .collect();
            return Some(String::from_utf16_lossy(&utf16));
        }

        Some(bytes.iter().map(|&b| b as char).collect())
    } else {
        None
    }
}
