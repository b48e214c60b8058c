//! Independent quality assessors.
//!
//! Each assessor is a pure function of the finished pages and returns its
//! score in [0.0, 1.0] along with its own findings; nothing is shared between
//! them.

use crate::output::{PageResult, TableEntry};
use serde::{Deserialize, Serialize};

/// Tables at or above this many cells get the full size bonus.
pub const TABLE_SIZE_SATURATION: f32 = 10.0;

/// Expected characters per page for full text density.
pub const EXPECTED_CHARS_PER_PAGE: f32 = 100.0;

/// Expected meaningful elements per page.
pub const EXPECTED_ELEMENTS_PER_PAGE: f32 = 5.0;

/// Elements need more than this many characters to count as meaningful.
pub const MEANINGFUL_MIN_CHARS: usize = 2;

/// Per-table quality below this raises a warning.
pub const TABLE_WARNING_THRESHOLD: f32 = 0.1;

/// Average table quality below this raises an error.
pub const TABLE_ERROR_THRESHOLD: f32 = 0.2;

/// Warnings and errors produced by one assessor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Findings {
    /// Non-fatal issues
    pub warnings: Vec<String>,
    /// Serious issues
    pub errors: Vec<String>,
}

impl Findings {
    /// Append another assessor's findings.
    pub fn merge(&mut self, other: Findings) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
    }
}

/// Quality of one table in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableScore {
    /// One-based page number
    pub page: usize,
    /// Row count
    pub rows: usize,
    /// Column count
    pub cols: usize,
    /// Table quality in [0.0, 1.0]
    pub quality: f32,
}

/// Result of assessing every table in a document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableAssessment {
    /// Per-table scores in page order
    pub scores: Vec<TableScore>,
    /// Mean table quality; `None` when the document has no tables
    pub average: Option<f32>,
    /// Mostly-empty tables and a low average
    pub findings: Findings,
}

/// Quality of a single table.
///
/// `fill_ratio * (0.7 + 0.3 * min(1, rows * cols / 10))`: dense, larger
/// tables beat small sparse ones. A table without cells scores 0.0.
///
/// # Examples
///
/// ```
/// use pdf_layout::geometry::Rect;
/// use pdf_layout::output::{TableEntry, TablePlacement};
/// use pdf_layout::quality::table_quality;
///
/// let table = TableEntry {
///     index: None,
///     data: vec![
///         vec!["A".into(), "B".into()],
///         vec!["".into(), "D".into()],
///     ],
///     rows: 2,
///     cols: 2,
///     placement: TablePlacement::Bbox(Rect::default()),
/// };
///
/// assert!((table_quality(&table) - 0.615).abs() < 1e-6);
/// ```
pub fn table_quality(table: &TableEntry) -> f32 {
    let total_cells: usize = table.data.iter().map(Vec::len).sum();
    if total_cells == 0 {
        return 0.0;
    }

    let non_empty = table
        .data
        .iter()
        .flatten()
        .filter(|cell| !cell.trim().is_empty())
        .count();
    let fill_ratio = non_empty as f32 / total_cells as f32;
    let size_factor = ((table.rows * table.cols) as f32 / TABLE_SIZE_SATURATION).min(1.0);

    (fill_ratio * (0.7 + 0.3 * size_factor)).clamp(0.0, 1.0)
}

/// Score every table on every page.
pub fn assess_tables(pages: &[PageResult]) -> TableAssessment {
    let mut assessment = TableAssessment::default();

    for page in pages {
        for table in &page.tables {
            let quality = table_quality(table);
            if quality < TABLE_WARNING_THRESHOLD {
                assessment.findings.warnings.push(format!(
                    "Page {}: Table with {}x{} is mostly empty (quality: {:.2})",
                    page.number, table.rows, table.cols, quality
                ));
            }
            assessment.scores.push(TableScore {
                page: page.number,
                rows: table.rows,
                cols: table.cols,
                quality,
            });
        }
    }

    if !assessment.scores.is_empty() {
        let sum: f32 = assessment.scores.iter().map(|s| s.quality).sum();
        let average = sum / assessment.scores.len() as f32;
        if average < TABLE_ERROR_THRESHOLD {
            assessment
                .findings
                .errors
                .push(format!("Table quality too low: {:.2} average", average));
        }
        assessment.average = Some(average);
    }

    assessment
}

/// Text density of the document.
///
/// `0.6 * min(1, avg_chars_per_page / 100) + 0.4 * min(1, meaningful / (pages * 5))`
/// where meaningful elements have more than two characters.
pub fn text_quality(pages: &[PageResult]) -> f32 {
    if pages.is_empty() {
        return 0.0;
    }

    let mut total_chars = 0usize;
    let mut meaningful = 0usize;
    for element in pages.iter().flat_map(|p| p.elements()) {
        let content = element.content.trim();
        let len = content.chars().count();
        total_chars += len;
        if len > MEANINGFUL_MIN_CHARS {
            meaningful += 1;
        }
    }

    if total_chars == 0 {
        return 0.0;
    }

    let page_count = pages.len() as f32;
    let char_score = (total_chars as f32 / page_count / EXPECTED_CHARS_PER_PAGE).min(1.0);
    let element_score = (meaningful as f32 / (page_count * EXPECTED_ELEMENTS_PER_PAGE)).min(1.0);

    (char_score * 0.6 + element_score * 0.4).clamp(0.0, 1.0)
}

/// Structural diversity: 0.4 for any heading, 0.3 for any list item, 0.3 for
/// any table.
pub fn structure_quality(pages: &[PageResult]) -> f32 {
    let elements = || pages.iter().flat_map(|p| p.elements());

    let mut score: f32 = 0.0;
    if elements().any(|e| e.is_heading()) {
        score += 0.4;
    }
    if elements().any(|e| e.is_list_item()) {
        score += 0.3;
    }
    if pages.iter().any(|p| !p.tables.is_empty()) {
        score += 0.3;
    }
    score.min(1.0)
}
