//! Document-level extraction.
//!
//! The [`Extractor`] drives a [`PdfDocument`] page by page and assembles the
//! [`ExtractionResult`]:
//!
//! ```text
//! page glyphs ──> line grouper ──> classifier ──> elements ─┐
//! page tables ──> table selector ──────────────> tables ───┤
//!                                                           ├─> PageResult
//!                      all PageResults ──> quality report ──┴─> gate
//! ```
//!
//! Any error while reading a page aborts the document: the result comes back
//! with `success = false` and the error message, never as an `Err`.

use crate::config::{ExtractionConfig, ExtractionMode};
use crate::error::Result;
use crate::layout::{classify_lines, group_glyphs_into_lines, select_best, select_union};
use crate::output::{ExtractionResult, ExtractionStatus, PageLayout, PageResult, TableEntry};
use crate::quality::{assess_document, GateVerdict, QualityAssessment};
use crate::source::{PdfDocument, PdfPage};
use std::path::Path;

/// Layout extractor.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractionConfig,
}

impl Extractor {
    /// Create an extractor with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom configuration.
    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Open the document at `path` with backend `D` and extract it.
    pub fn extract_path<D: PdfDocument>(&self, path: &Path) -> ExtractionResult {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        if let Err(e) = self.config.validate() {
            return ExtractionResult::failure(filename, &e);
        }

        match D::open(path) {
            Ok(document) => self.extract_document(filename, &document),
            Err(e) => {
                log::debug!("Failed to open {}: {}", path.display(), e);
                ExtractionResult::failure(filename, &e)
            },
        }
    }

    /// Extract an already opened document.
    pub fn extract_document<D: PdfDocument>(
        &self,
        filename: impl Into<String>,
        document: &D,
    ) -> ExtractionResult {
        let mut result = ExtractionResult::new(filename);
        result.metadata = document.metadata();

        for index in 0..document.page_count() {
            let number = index + 1;
            log::debug!("Processing page {}...", number);

            let page = document
                .page(index)
                .and_then(|page| self.extract_page(number, &page));
            match page {
                Ok(page) => result.pages.push(page),
                Err(e) => {
                    log::debug!("Extraction aborted on page {}: {}", number, e);
                    result.success = false;
                    result.error = Some(e.to_string());
                    result.status = ExtractionStatus::Failed;
                    return result;
                },
            }
        }

        if self.config.mode == ExtractionMode::Coordinates {
            self.apply_quality(&mut result);
        }

        result
    }

    /// Extract one page; `number` is one-based.
    pub fn extract_page<P: PdfPage>(&self, number: usize, page: &P) -> Result<PageResult> {
        let (width, height) = page.size();
        let glyphs = page.glyphs()?;
        log::debug!("  Page {}: {} characters", number, glyphs.len());

        let lines = group_glyphs_into_lines(&glyphs);
        let layout = PageLayout { width, height };

        let page_result = match self.config.mode {
            ExtractionMode::Plain => {
                let text = lines
                    .iter()
                    .map(|line| line.text.trim_end())
                    .filter(|text| !text.is_empty())
                    .collect::<Vec<_>>()
                    .join("\n");
                let tables = select_best(page)
                    .into_iter()
                    .enumerate()
                    .map(|(index, candidate)| TableEntry::positioned(index, candidate))
                    .collect();

                PageResult {
                    number,
                    layout,
                    text: Some(text),
                    elements: None,
                    tables,
                }
            },
            ExtractionMode::Coordinates => {
                let elements = classify_lines(&lines, width);
                let tables = select_union(page)
                    .into_iter()
                    .map(TableEntry::bounded)
                    .collect();

                PageResult {
                    number,
                    layout,
                    text: None,
                    elements: Some(elements),
                    tables,
                }
            },
        };

        Ok(page_result)
    }

    fn apply_quality(&self, result: &mut ExtractionResult) {
        let report = assess_document(&result.pages);
        let verdict = self.config.gate.evaluate(report.overall_score);

        match &verdict {
            GateVerdict::Passed => {},
            GateVerdict::Warned(e) => {
                log::warn!("{}", e);
                result.status = ExtractionStatus::QualityWarning;
            },
            GateVerdict::Rejected(e) => {
                log::warn!("{}", e);
                result.success = false;
                result.error = Some(e.to_string());
                result.status = ExtractionStatus::QualityRejected;
            },
        }

        result.quality = Some(QualityAssessment::from(report.with_verdict(&verdict)));
    }
}
