//! Grouping glyphs into text lines.
//!
//! Glyphs are sorted by rounded `top` then `x0` and swept once. A glyph joins
//! the open line while its `top` stays within [`LINE_TOLERANCE`] of the line
//! anchor; the anchor is the first glyph's `top` and is never re-averaged, so
//! a line may drift inside the band without resetting its reference.

use crate::layout::text_line::{Glyph, TextLine};

/// Vertical tolerance for a glyph to join an open line.
pub const LINE_TOLERANCE: f32 = 2.0;

/// Group a page's glyphs into lines, top-to-bottom then left-to-right.
///
/// Input order is not assumed. Empty input yields no lines.
///
/// # Examples
///
/// ```
/// use pdf_layout::layout::{Glyph, group_glyphs_into_lines};
///
/// let glyphs = vec![
///     Glyph::new("B", 20.0, 26.0, 150.0, 12.0),
///     Glyph::new("A", 10.0, 16.0, 100.0, 12.0),
///     Glyph::new("a", 16.0, 22.0, 101.0, 12.0),
/// ];
///
/// let lines = group_glyphs_into_lines(&glyphs);
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0].text, "Aa");
/// assert_eq!(lines[1].text, "B");
/// ```
pub fn group_glyphs_into_lines(glyphs: &[Glyph]) -> Vec<TextLine> {
    if glyphs.is_empty() {
        return vec![];
    }

    let mut sorted: Vec<&Glyph> = glyphs.iter().collect();
    sorted.sort_by(|a, b| {
        a.top
            .round_ties_even()
            .total_cmp(&b.top.round_ties_even())
            .then(a.x0.total_cmp(&b.x0))
    });

    let mut lines = Vec::new();
    let mut current: Vec<Glyph> = Vec::new();
    let mut anchor = sorted[0].top;

    for glyph in sorted {
        if !current.is_empty() && (glyph.top - anchor).abs() > LINE_TOLERANCE {
            lines.extend(TextLine::from_glyphs(std::mem::take(&mut current)));
        }
        if current.is_empty() {
            anchor = glyph.top;
        }
        current.push(glyph.clone());
    }
    lines.extend(TextLine::from_glyphs(current));

    log::trace!("Grouped {} glyphs into {} lines", glyphs.len(), lines.len());
    lines
}
