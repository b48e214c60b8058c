//! Glyph and line representation for layout analysis.
//!
//! A [`Glyph`] is one positioned character as the page source reports it; a
//! [`TextLine`] is a run of glyphs sharing a vertical band.

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// One positioned character (or ligature) from the page text layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    /// Character content, a single char or a ligature such as "fi"
    pub text: String,
    /// Left edge
    pub x0: f32,
    /// Right edge
    pub x1: f32,
    /// Top edge (distance from the top of the page)
    pub top: f32,
    /// Glyph height
    pub height: f32,
}

impl Glyph {
    /// Create a glyph.
    pub fn new(text: impl Into<String>, x0: f32, x1: f32, top: f32, height: f32) -> Self {
        Self {
            text: text.into(),
            x0,
            x1,
            top,
            height,
        }
    }

    /// Bounding box of the glyph.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_layout::layout::Glyph;
    ///
    /// let g = Glyph::new("A", 10.0, 16.0, 100.0, 12.0);
    /// let bbox = g.bbox();
    /// assert_eq!(bbox.x, 10.0);
    /// assert_eq!(bbox.width, 6.0);
    /// assert_eq!(bbox.bottom(), 112.0);
    /// ```
    pub fn bbox(&self) -> Rect {
        Rect::new(self.x0, self.top, self.x1 - self.x0, self.height)
    }
}

/// A line of text: glyphs grouped by a shared vertical band.
///
/// Lines are built once from their glyphs and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    /// Member glyphs in left-to-right order
    pub glyphs: Vec<Glyph>,
    /// Concatenated glyph text
    pub text: String,
    /// Union of the member glyph boxes
    pub bbox: Rect,
    /// Vertical anchor: the `top` of the first glyph placed on this line
    pub anchor: f32,
}

impl TextLine {
    /// Build a line from its glyphs.
    ///
    /// The anchor is the first glyph's `top`. Returns `None` for an empty
    /// glyph list, since a line without glyphs has no position.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_layout::layout::{Glyph, TextLine};
    ///
    /// let line = TextLine::from_glyphs(vec![
    ///     Glyph::new("O", 0.0, 6.0, 100.0, 12.0),
    ///     Glyph::new("K", 6.0, 12.0, 101.0, 12.0),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(line.text, "OK");
    /// assert_eq!(line.anchor, 100.0);
    /// assert_eq!(line.bbox.bottom(), 113.0);
    /// ```
    pub fn from_glyphs(glyphs: Vec<Glyph>) -> Option<Self> {
        let first = glyphs.first()?;
        let anchor = first.top;
        let bbox = glyphs
            .iter()
            .map(Glyph::bbox)
            .fold(first.bbox(), |acc, r| acc.union(&r));
        let text: String = glyphs.iter().map(|g| g.text.as_str()).collect();

        Some(Self {
            glyphs,
            text,
            bbox,
            anchor,
        })
    }

    /// Line text without surrounding whitespace.
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }
}
