//! Structure classification for text lines.
//!
//! Each non-blank line is labelled heading, list item, table row or plain
//! text. Rules are evaluated first-match-wins in that order and rely only on
//! layout position and marker glyphs, never on language, so mixed-language
//! documents with irregular fonts classify the same way.
//!
//! Heading rules:
//! - starts with a section marker (`▢`, `■`) → level 1
//! - page-number bracket such as `- 3 -`, shorter than 10 chars → level 3
//! - shorter than 50 chars and horizontally centered within 50 units → level 2
//!
//! The centering rule is coarse: any short centered sentence becomes a
//! level-2 heading.

use crate::geometry::Rect;
use crate::layout::text_line::TextLine;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Lines whose anchors differ by at most this much share a row band.
pub const ROW_TOLERANCE: f32 = 2.0;

/// Maximum distance between line and page midpoints for a centered caption.
pub const CENTER_TOLERANCE: f32 = 50.0;

/// Centered captions must be shorter than this many characters.
pub const CENTERED_MAX_CHARS: usize = 50;

/// Page-number brackets must be shorter than this many characters.
pub const PAGE_MARKER_MAX_CHARS: usize = 10;

/// Page midpoint used when the page reports no width.
pub const DEFAULT_PAGE_CENTER: f32 = 300.0;

lazy_static! {
    /// `- <body> -` page-number bracket, e.g. `- 12 -`
    static ref RE_PAGE_MARKER: Regex = Regex::new(r"(?s)^- (?:.* )?-$").unwrap();
}

/// Section marker glyphs that open a level-1 heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingMarker {
    /// `▢`
    WhiteSquare,
    /// `■`
    BlackSquare,
}

impl HeadingMarker {
    /// Every heading marker.
    pub const ALL: [HeadingMarker; 2] = [HeadingMarker::WhiteSquare, HeadingMarker::BlackSquare];

    /// The marker glyph.
    pub fn glyph(&self) -> &'static str {
        match self {
            HeadingMarker::WhiteSquare => "▢",
            HeadingMarker::BlackSquare => "■",
        }
    }
}

/// Bullet glyphs that open a list item.
///
/// Serializes as the glyph itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListMarker {
    /// `○`
    #[serde(rename = "○")]
    WhiteCircle,
    /// `●`
    #[serde(rename = "●")]
    BlackCircle,
    /// `▪`
    #[serde(rename = "▪")]
    BlackSmallSquare,
    /// `▫`
    #[serde(rename = "▫")]
    WhiteSmallSquare,
    /// `◦`
    #[serde(rename = "◦")]
    WhiteBullet,
    /// `•`
    #[serde(rename = "•")]
    Bullet,
    /// `-`
    #[serde(rename = "-")]
    Hyphen,
    /// `*`
    #[serde(rename = "*")]
    Asterisk,
}

impl ListMarker {
    /// Every list marker, in matching order.
    pub const ALL: [ListMarker; 8] = [
        ListMarker::WhiteCircle,
        ListMarker::BlackCircle,
        ListMarker::BlackSmallSquare,
        ListMarker::WhiteSmallSquare,
        ListMarker::WhiteBullet,
        ListMarker::Bullet,
        ListMarker::Hyphen,
        ListMarker::Asterisk,
    ];

    /// The marker glyph.
    pub fn glyph(&self) -> &'static str {
        match self {
            ListMarker::WhiteCircle => "○",
            ListMarker::BlackCircle => "●",
            ListMarker::BlackSmallSquare => "▪",
            ListMarker::WhiteSmallSquare => "▫",
            ListMarker::WhiteBullet => "◦",
            ListMarker::Bullet => "•",
            ListMarker::Hyphen => "-",
            ListMarker::Asterisk => "*",
        }
    }

    /// Find the marker opening `text`: the marker alone, or the marker
    /// followed by a space.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_layout::layout::ListMarker;
    ///
    /// assert_eq!(ListMarker::detect("● Item"), Some(ListMarker::BlackCircle));
    /// assert_eq!(ListMarker::detect("•"), Some(ListMarker::Bullet));
    /// assert_eq!(ListMarker::detect("-5 degrees"), None);
    /// ```
    pub fn detect(text: &str) -> Option<ListMarker> {
        Self::ALL.iter().copied().find(|marker| {
            text.strip_prefix(marker.glyph())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with(' '))
        })
    }
}

/// Structural role of a line.
///
/// Serializes as `type` plus the variant payload (`level` or `marker`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementKind {
    /// Plain text
    Text,
    /// Heading with level 1-3 (1 is the strongest)
    Heading {
        /// Heading level
        level: u8,
    },
    /// Bulleted list item
    ListItem {
        /// Bullet glyph that opened the item
        marker: ListMarker,
    },
    /// Line sharing its row band with another line
    TableRow,
}

impl ElementKind {
    /// Output name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Heading { .. } => "heading",
            ElementKind::ListItem { .. } => "list_item",
            ElementKind::TableRow => "table_row",
        }
    }
}

/// A classified line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredElement {
    /// Role and role payload
    #[serde(flatten)]
    pub kind: ElementKind,
    /// Trimmed line text
    pub content: String,
    /// Bounding box of the source line
    pub bbox: Rect,
}

impl StructuredElement {
    /// Check if this element is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self.kind, ElementKind::Heading { .. })
    }

    /// Check if this element is a list item.
    pub fn is_list_item(&self) -> bool {
        matches!(self.kind, ElementKind::ListItem { .. })
    }
}

/// Classify lines into structured elements, preserving line order.
///
/// Lines whose trimmed text is empty are skipped. The result depends only on
/// `lines` and `page_width`.
///
/// # Examples
///
/// ```
/// use pdf_layout::layout::{classify_lines, ElementKind, Glyph, TextLine};
///
/// let line = TextLine::from_glyphs(vec![
///     Glyph::new("■", 280.0, 290.0, 50.0, 12.0),
///     Glyph::new(" ", 290.0, 294.0, 50.0, 12.0),
///     Glyph::new("T", 294.0, 302.0, 50.0, 12.0),
/// ])
/// .unwrap();
///
/// let elements = classify_lines(&[line], 600.0);
/// assert_eq!(elements[0].kind, ElementKind::Heading { level: 1 });
/// ```
pub fn classify_lines(lines: &[TextLine], page_width: f32) -> Vec<StructuredElement> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            let content = line.trimmed_text();
            if content.is_empty() {
                return None;
            }

            Some(StructuredElement {
                kind: classify_line(idx, lines, page_width),
                content: content.to_string(),
                bbox: line.bbox,
            })
        })
        .collect()
}

/// Classify the line at `idx` against its page neighbours.
fn classify_line(idx: usize, lines: &[TextLine], page_width: f32) -> ElementKind {
    let line = &lines[idx];
    let text = line.trimmed_text();

    if let Some(level) = heading_level(text, line, page_width) {
        ElementKind::Heading { level }
    } else if let Some(marker) = ListMarker::detect(text) {
        ElementKind::ListItem { marker }
    } else if shares_row_band(idx, lines) {
        ElementKind::TableRow
    } else {
        ElementKind::Text
    }
}

fn heading_level(text: &str, line: &TextLine, page_width: f32) -> Option<u8> {
    if HeadingMarker::ALL
        .iter()
        .any(|marker| text.starts_with(marker.glyph()))
    {
        return Some(1);
    }

    let char_count = text.chars().count();

    if char_count < PAGE_MARKER_MAX_CHARS && RE_PAGE_MARKER.is_match(text) {
        return Some(3);
    }

    if char_count < CENTERED_MAX_CHARS {
        let page_center = if page_width > 0.0 {
            page_width / 2.0
        } else {
            DEFAULT_PAGE_CENTER
        };
        if (line.bbox.center_x() - page_center).abs() < CENTER_TOLERANCE {
            return Some(2);
        }
    }

    None
}

fn shares_row_band(idx: usize, lines: &[TextLine]) -> bool {
    let anchor = lines[idx].anchor;
    lines
        .iter()
        .enumerate()
        .any(|(other, line)| other != idx && (line.anchor - anchor).abs() <= ROW_TOLERANCE)
}
