//! Extraction output model.
//!
//! These types serialize to the JSON document result:
//!
//! ```text
//! { success, filename, metadata, error,
//!   pages: [ { number, layout, text?, elements?, tables } ],
//!   quality: { score, report } | null }
//! ```

use crate::geometry::Rect;
use crate::layout::{StructuredElement, TableCandidate};
use crate::quality::QualityAssessment;
use serde::{Deserialize, Serialize};

/// Document metadata as reported by the page source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Document title
    #[serde(default)]
    pub title: String,
    /// Document author
    #[serde(default)]
    pub author: String,
    /// Document subject
    #[serde(default)]
    pub subject: String,
    /// Producing application
    #[serde(default)]
    pub creator: String,
    /// Number of pages
    #[serde(default)]
    pub total_pages: usize,
}

/// Page dimensions in document units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PageLayout {
    /// Page width
    pub width: f32,
    /// Page height
    pub height: f32,
}

/// Where a table sits on the page.
///
/// The plain flow reports `position`, the coordinate flow `bbox`; both carry
/// the same `{x, y, width, height}` rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TablePlacement {
    /// Plain-flow placement
    Position(Rect),
    /// Coordinate-flow placement
    Bbox(Rect),
}

/// One accepted table in the page output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableEntry {
    /// Position of the table in the page's table list (plain flow only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    /// Cell strings, row-major
    pub data: Vec<Vec<String>>,
    /// Row count
    pub rows: usize,
    /// Column count
    pub cols: usize,
    /// Table placement
    #[serde(flatten)]
    pub placement: TablePlacement,
}

impl TableEntry {
    /// Plain-flow entry: indexed, placed by `position`.
    pub fn positioned(index: usize, candidate: TableCandidate) -> Self {
        let mut entry = Self::from_candidate(candidate, TablePlacement::Position);
        entry.index = Some(index);
        entry
    }

    /// Coordinate-flow entry: placed by `bbox`.
    pub fn bounded(candidate: TableCandidate) -> Self {
        Self::from_candidate(candidate, TablePlacement::Bbox)
    }

    fn from_candidate(candidate: TableCandidate, place: fn(Rect) -> TablePlacement) -> Self {
        let rows = candidate.grid.row_count();
        let cols = candidate.grid.column_count();
        Self {
            index: None,
            data: candidate.grid.into_rows(),
            rows,
            cols,
            placement: place(candidate.bbox),
        }
    }
}

/// Everything extracted from one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    /// One-based page number
    pub number: usize,
    /// Page size
    pub layout: PageLayout,
    /// Page text, one line per row band (plain flow only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Classified lines in reading order (coordinate flow only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<StructuredElement>>,
    /// Accepted tables
    #[serde(default)]
    pub tables: Vec<TableEntry>,
}

impl PageResult {
    /// Classified elements, empty for the plain flow.
    pub fn elements(&self) -> &[StructuredElement] {
        self.elements.as_deref().unwrap_or_default()
    }
}

/// How an extraction ended; maps onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractionStatus {
    /// Extraction succeeded (exit 0)
    #[default]
    Success,
    /// Document could not be read or processed (exit 1)
    Failed,
    /// Quality below threshold, lenient gate (exit 2)
    QualityWarning,
    /// Quality below threshold, strict gate (exit 3)
    QualityRejected,
}

impl ExtractionStatus {
    /// Process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            ExtractionStatus::Success => 0,
            ExtractionStatus::Failed => 1,
            ExtractionStatus::QualityWarning => 2,
            ExtractionStatus::QualityRejected => 3,
        }
    }
}

/// Document-level extraction result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// False when parsing failed or a strict quality gate rejected the output
    pub success: bool,
    /// Input file name (no directory)
    pub filename: String,
    /// Document metadata
    pub metadata: DocumentMetadata,
    /// Human-readable failure message
    pub error: Option<String>,
    /// Per-page results
    pub pages: Vec<PageResult>,
    /// Quality assessment (coordinate flow only)
    pub quality: Option<QualityAssessment>,
    /// Exit status
    #[serde(skip)]
    pub status: ExtractionStatus,
}

impl ExtractionResult {
    /// An empty, successful result for `filename`.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            success: true,
            filename: filename.into(),
            metadata: DocumentMetadata::default(),
            error: None,
            pages: Vec::new(),
            quality: None,
            status: ExtractionStatus::Success,
        }
    }

    /// A failed result carrying `error` as its message.
    pub fn failure(filename: impl Into<String>, error: &crate::error::Error) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            status: ExtractionStatus::Failed,
            ..Self::new(filename)
        }
    }

    /// Serialize to JSON, optionally pretty-printed.
    pub fn to_json(&self, pretty: bool) -> crate::error::Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Process exit code for this result.
    pub fn exit_code(&self) -> i32 {
        self.status.exit_code()
    }
}
