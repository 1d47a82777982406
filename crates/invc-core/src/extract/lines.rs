//! Visual line reconstruction from positioned text fragments.

use std::cmp::Ordering;

use super::glyphs::TextFragment;

/// Vertical distance within which fragments belong to the same visual line.
pub const LINE_Y_TOLERANCE: f32 = 3.0;

/// Separator between fragments joined into one line. Two spaces, so that
/// column boundaries survive into the row regexes.
const COLUMN_GAP: &str = "  ";

/// Rebuild reading-order lines from a fragment pool.
///
/// Fragments are ordered top to bottom, then left to right. A fragment joins
/// the current line when its `y` is within [`LINE_Y_TOLERANCE`] of the line's
/// first fragment; the anchor stays fixed for the whole line.
pub fn reconstruct(fragments: &[TextFragment]) -> Vec<String> {
    if fragments.is_empty() {
        return Vec::new();
    }

    let mut ordered: Vec<&TextFragment> = fragments.iter().collect();
    ordered.sort_by(|a, b| {
        b.y.partial_cmp(&a.y)
            .unwrap_or(Ordering::Equal)
            .then(a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
    });

    let mut lines = Vec::new();
    let mut current = ordered[0].text.clone();
    let mut anchor_y = ordered[0].y;

    for fragment in &ordered[1..] {
        if (fragment.y - anchor_y).abs() < LINE_Y_TOLERANCE {
            current.push_str(COLUMN_GAP);
            current.push_str(&fragment.text);
        } else {
            lines.push(current);
            current = fragment.text.clone();
            anchor_y = fragment.y;
        }
    }
    lines.push(current);
    lines
}
