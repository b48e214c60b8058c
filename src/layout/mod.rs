//! Layout reconstruction for a single page.
//!
//! This module provides the per-page algorithms:
//! - Glyph → line grouping by vertical band
//! - Line classification (heading, list item, table row, text)
//! - Cell grid normalization
//! - Multi-strategy table selection

pub mod classifier;
pub mod line_grouper;
pub mod table_grid;
pub mod table_selector;
pub mod text_line;

// Re-export main types
pub use classifier::{classify_lines, ElementKind, HeadingMarker, ListMarker, StructuredElement};
pub use line_grouper::{group_glyphs_into_lines, LINE_TOLERANCE};
pub use table_grid::{RawGrid, TableGrid};
pub use table_selector::{
    select_best, select_union, EdgeStrategy, SelectionMode, TableCandidate, TableFinder,
    TableGeometry, TableSettings, TableStrategy, DUPLICATE_TOLERANCE,
};
pub use text_line::{Glyph, TextLine};
