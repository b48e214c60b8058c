//! Extraction quality assessment.
//!
//! Three independent assessors score the finished pages:
//! - table quality (per table, averaged)
//! - text density
//! - structural diversity
//!
//! The aggregator merges their scores and findings into one
//! [`QualityReport`]. Tables weigh 0.5, text 0.3 and structure 0.2; when a
//! document has no tables the table weight leaves the denominator, so the
//! overall score becomes `0.6 * text + 0.4 * structure`.
//!
//! Assessment needs every page, so it runs once after the last page.

pub mod assessors;
pub mod gate;

pub use assessors::{
    assess_tables, structure_quality, table_quality, text_quality, Findings, TableAssessment,
    TableScore,
};
pub use gate::{GateVerdict, QualityGate, DEFAULT_MIN_QUALITY};

use crate::output::PageResult;
use serde::{Deserialize, Serialize};

/// Weight of the average table quality.
pub const TABLE_WEIGHT: f32 = 0.5;

/// Weight of the text quality.
pub const TEXT_WEIGHT: f32 = 0.3;

/// Weight of the structure quality.
pub const STRUCTURE_WEIGHT: f32 = 0.2;

/// Document quality report.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QualityReport {
    /// Aggregate score in [0.0, 1.0]
    pub overall_score: f32,
    /// Per-table scores
    pub table_scores: Vec<TableScore>,
    /// Non-fatal issues
    pub warnings: Vec<String>,
    /// Serious issues
    pub errors: Vec<String>,
}

impl QualityReport {
    /// Record the gate verdict: a lenient miss becomes a warning, a strict
    /// miss an error.
    pub fn with_verdict(mut self, verdict: &GateVerdict) -> Self {
        match verdict {
            GateVerdict::Passed => {},
            GateVerdict::Warned(e) => self.warnings.push(e.to_string()),
            GateVerdict::Rejected(e) => self.errors.push(e.to_string()),
        }
        self
    }
}

/// The `quality` block of the extraction result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityAssessment {
    /// Overall score, equal to `report.overall_score`
    pub score: f32,
    /// Full report
    pub report: QualityReport,
}

impl From<QualityReport> for QualityAssessment {
    fn from(report: QualityReport) -> Self {
        Self {
            score: report.overall_score,
            report,
        }
    }
}

/// Weighted overall score.
///
/// Sub-scores are clamped to [0.0, 1.0] first. `table_average` is `None` for
/// a document without tables, which drops the table weight entirely.
///
/// # Examples
///
/// ```
/// use pdf_layout::quality::overall_score;
///
/// let score = overall_score(None, 0.8, 0.5);
/// assert!((score - 0.68).abs() < 1e-6);
/// ```
pub fn overall_score(table_average: Option<f32>, text: f32, structure: f32) -> f32 {
    let mut total = TEXT_WEIGHT * text.clamp(0.0, 1.0) + STRUCTURE_WEIGHT * structure.clamp(0.0, 1.0);
    let mut weights = TEXT_WEIGHT + STRUCTURE_WEIGHT;

    if let Some(average) = table_average {
        total += TABLE_WEIGHT * average.clamp(0.0, 1.0);
        weights += TABLE_WEIGHT;
    }

    (total / weights).clamp(0.0, 1.0)
}

/// Assess a fully extracted document.
pub fn assess_document(pages: &[PageResult]) -> QualityReport {
    let tables = assess_tables(pages);
    let text = text_quality(pages);
    let structure = structure_quality(pages);
    let overall = overall_score(tables.average, text, structure);

    log::debug!("=== Quality Assessment ===");
    log::debug!("Overall Score: {:.2}", overall);
    match tables.average {
        Some(average) => log::debug!("Table Quality: {:.2}", average),
        None => log::debug!("No tables"),
    }
    log::debug!("Text Quality: {:.2}", text);
    log::debug!("Structure Quality: {:.2}", structure);

    let mut findings = Findings::default();
    findings.merge(tables.findings);
    if !findings.warnings.is_empty() {
        log::debug!("Warnings: {}", findings.warnings.len());
    }
    if !findings.errors.is_empty() {
        log::debug!("Errors: {}", findings.errors.len());
    }

    QualityReport {
        overall_score: overall,
        table_scores: tables.scores,
        warnings: findings.warnings,
        errors: findings.errors,
    }
}
