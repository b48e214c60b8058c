//! Page sources: the boundary to the PDF parsing collaborator.
//!
//! Layout reconstruction never parses PDF content streams itself. It consumes
//! a document through these traits: pages report their size, their
//! positioned glyphs and, per detection preset, their candidate table
//! geometries.
//!
//! [`PageDump`] implements the traits over a JSON dump written by an
//! upstream parser.

mod dump;

pub use dump::{DumpPage, DumpTable, PageDump};

use crate::error::Result;
use crate::layout::{Glyph, TableFinder, TableSettings};
use crate::output::DocumentMetadata;
use std::path::Path;

/// One page of a document.
pub trait PdfPage: TableFinder {
    /// Page `(width, height)` in document units.
    fn size(&self) -> (f32, f32);

    /// Positioned glyphs in extraction order.
    fn glyphs(&self) -> Result<Vec<Glyph>>;
}

/// An opened document.
pub trait PdfDocument: Sized {
    /// Page handle type.
    type Page<'a>: PdfPage
    where
        Self: 'a;

    /// Open and parse the document at `path`.
    fn open(path: &Path) -> Result<Self>;

    /// Document metadata.
    fn metadata(&self) -> DocumentMetadata;

    /// Number of pages.
    fn page_count(&self) -> usize;

    /// Page at zero-based `index`.
    fn page(&self, index: usize) -> Result<Self::Page<'_>>;
}

impl<P: TableFinder> TableFinder for &P {
    type Geometry = P::Geometry;

    fn find_tables(&self, settings: &TableSettings) -> Result<Vec<Self::Geometry>> {
        (**self).find_tables(settings)
    }
}

impl<P: PdfPage> PdfPage for &P {
    fn size(&self) -> (f32, f32) {
        (**self).size()
    }

    fn glyphs(&self) -> Result<Vec<Glyph>> {
        (**self).glyphs()
    }
}
