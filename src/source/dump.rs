//! JSON page dumps.
//!
//! An upstream PDF parser writes one JSON document per PDF:
//!
//! ```text
//! {
//!   "metadata": {"title": "...", "author": null, ...},
//!   "pages": [{
//!     "width": 595.0, "height": 842.0,
//!     "glyphs": [{"text": "A", "x0": 72.0, "x1": 79.2, "top": 90.0, "height": 12.0}],
//!     "tables": {"lines/lines": [{"bbox": [x0, y0, x1, y1], "cells": [["A", null]]}]},
//!     "faults": {"text/text": "edge detection failed"},
//!     "error": null
//!   }]
//! }
//! ```
//!
//! Table geometries are keyed by detection preset (`"{vertical}/{horizontal}"`).
//! A `faults` entry makes that preset fail on this page; a page `error` makes
//! reading the page fail.

use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::layout::{Glyph, RawGrid, TableFinder, TableGeometry, TableSettings};
use crate::output::DocumentMetadata;
use crate::source::{PdfDocument, PdfPage};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// A whole document dump.
#[derive(Debug, Clone, Deserialize)]
pub struct PageDump {
    #[serde(default)]
    metadata: Option<DumpMetadata>,
    pages: Vec<DumpPage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DumpMetadata {
    #[serde(alias = "title")]
    title: Option<String>,
    #[serde(alias = "author")]
    author: Option<String>,
    #[serde(alias = "subject")]
    subject: Option<String>,
    #[serde(alias = "creator")]
    creator: Option<String>,
}

/// One page of a dump.
#[derive(Debug, Clone, Deserialize)]
pub struct DumpPage {
    #[serde(default)]
    width: f32,
    #[serde(default)]
    height: f32,
    #[serde(default)]
    glyphs: Vec<Glyph>,
    #[serde(default)]
    tables: HashMap<String, Vec<DumpTable>>,
    #[serde(default)]
    faults: HashMap<String, String>,
    #[serde(default)]
    error: Option<String>,
}

/// One table geometry of a dump page.
#[derive(Debug, Clone, Deserialize)]
pub struct DumpTable {
    bbox: [f32; 4],
    #[serde(default)]
    cells: RawGrid,
}

impl PageDump {
    /// Parse a dump from a JSON string.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_layout::source::{PageDump, PdfDocument};
    ///
    /// let dump = PageDump::from_json(r#"{"pages": [{"width": 600, "height": 800}]}"#).unwrap();
    /// assert_eq!(dump.page_count(), 1);
    /// assert_eq!(dump.metadata().total_pages, 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Parse(e.to_string()))
    }
}

impl PdfDocument for PageDump {
    type Page<'a> = &'a DumpPage;

    fn open(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            _ => Error::Parse(format!("{}: {}", path.display(), e)),
        })?;
        Self::from_json(&json)
    }

    fn metadata(&self) -> DocumentMetadata {
        let meta = self.metadata.clone().unwrap_or_default();
        DocumentMetadata {
            title: meta.title.unwrap_or_default(),
            author: meta.author.unwrap_or_default(),
            subject: meta.subject.unwrap_or_default(),
            creator: meta.creator.unwrap_or_default(),
            total_pages: self.pages.len(),
        }
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> Result<&DumpPage> {
        self.pages.get(index).ok_or(Error::PageOutOfRange(index))
    }
}

impl PdfPage for DumpPage {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn glyphs(&self) -> Result<Vec<Glyph>> {
        match &self.error {
            Some(reason) => Err(Error::Parse(reason.clone())),
            None => Ok(self.glyphs.clone()),
        }
    }
}

impl TableFinder for DumpPage {
    type Geometry = DumpTable;

    fn find_tables(&self, settings: &TableSettings) -> Result<Vec<DumpTable>> {
        let key = settings.key();
        if let Some(reason) = self.faults.get(&key) {
            return Err(Error::Strategy {
                strategy: key,
                reason: reason.clone(),
            });
        }
        Ok(self.tables.get(&key).cloned().unwrap_or_default())
    }
}

impl TableGeometry for DumpTable {
    fn extract(&self) -> Result<RawGrid> {
        Ok(self.cells.clone())
    }

    fn bbox(&self) -> Rect {
        let [x0, y0, x1, y1] = self.bbox;
        Rect::from_points(x0, y0, x1, y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{SelectionMode, TableStrategy};

    const DUMP: &str = r#"{
        "metadata": {"Title": "Report", "Author": null, "creator": "scanner"},
        "pages": [{
            "width": 600, "height": 800,
            "glyphs": [{"text": "A", "x0": 10, "x1": 16, "top": 100, "height": 12}],
            "tables": {"lines/lines": [{"bbox": [10, 20, 110, 70], "cells": [["A", null]]}]},
            "faults": {"text/text": "no words"}
        }, {
            "error": "content stream truncated"
        }]
    }"#;

    #[test]
    fn test_metadata() {
        let dump = PageDump::from_json(DUMP).unwrap();
        let meta = dump.metadata();
        assert_eq!(meta.title, "Report");
        assert_eq!(meta.author, "");
        assert_eq!(meta.creator, "scanner");
        assert_eq!(meta.total_pages, 2);
    }

    #[test]
    fn test_page_access() {
        let dump = PageDump::from_json(DUMP).unwrap();
        let page = dump.page(0).unwrap();
        assert_eq!(page.size(), (600.0, 800.0));
        assert_eq!(page.glyphs().unwrap().len(), 1);

        assert!(matches!(dump.page(5), Err(Error::PageOutOfRange(5))));
    }

    #[test]
    fn test_page_error() {
        let dump = PageDump::from_json(DUMP).unwrap();
        let err = dump.page(1).unwrap().glyphs().unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse document: content stream truncated");
    }

    #[test]
    fn test_tables_by_preset() {
        let dump = PageDump::from_json(DUMP).unwrap();
        let page = dump.page(0).unwrap();

        let lines = page
            .find_tables(&TableStrategy::Lines.settings(SelectionMode::BestOf))
            .unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].bbox(), Rect::new(10.0, 20.0, 100.0, 50.0));
        assert_eq!(lines[0].extract().unwrap()[0][1], None);

        let mixed = page
            .find_tables(&TableStrategy::Mixed.settings(SelectionMode::BestOf))
            .unwrap();
        assert!(mixed.is_empty());

        let text = page.find_tables(&TableStrategy::Text.settings(SelectionMode::BestOf));
        assert!(matches!(text, Err(Error::Strategy { .. })));
    }

    #[test]
    fn test_malformed_dump_is_parse_error() {
        assert!(matches!(
            PageDump::from_json("{\"pages\": 3}"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_open_missing_file() {
        let err = PageDump::open(Path::new("/nonexistent/doc.json")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
