//! Multi-strategy table selection.
//!
//! A page is asked for table geometries under several detection presets
//! (ruling lines, text alignment, and a lines/text mix). Two selection modes
//! combine the results:
//!
//! - [`select_best`]: keep the whole candidate set of the preset with the
//!   highest summed detection score. Improvement must be strict, so on a tie
//!   the earlier preset wins.
//! - [`select_union`]: keep every candidate with content, dropping later
//!   candidates whose top-left corner lies within [`DUPLICATE_TOLERANCE`] of
//!   an accepted one. Grids are kept whole, blank rows included.
//!
//! A preset that fails is logged and skipped; it never aborts the page.

use crate::error::Result;
use crate::geometry::Rect;
use crate::layout::table_grid::{RawGrid, TableGrid};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Candidates whose top-left corners are closer than this on both axes are
/// duplicates.
pub const DUPLICATE_TOLERANCE: f32 = 10.0;

/// One table geometry found on a page.
pub trait TableGeometry {
    /// Extract the raw cell grid (possibly ragged, possibly with missing cells).
    fn extract(&self) -> Result<RawGrid>;

    /// Bounding box of the table.
    fn bbox(&self) -> Rect;
}

/// Something that can look for tables under a detection preset.
pub trait TableFinder {
    /// Geometry type returned by this finder.
    type Geometry: TableGeometry;

    /// Find table geometries using `settings`.
    ///
    /// A failure here is a recoverable per-preset fault.
    fn find_tables(&self, settings: &TableSettings) -> Result<Vec<Self::Geometry>>;
}

/// How table edges are derived along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStrategy {
    /// Ruling lines drawn on the page
    Lines,
    /// Alignment of words
    Text,
}

impl fmt::Display for EdgeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeStrategy::Lines => write!(f, "lines"),
            EdgeStrategy::Text => write!(f, "text"),
        }
    }
}

/// Numeric detection settings handed to the page's table finder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSettings {
    /// Edge source for column boundaries
    pub vertical_strategy: EdgeStrategy,
    /// Edge source for row boundaries
    pub horizontal_strategy: EdgeStrategy,
    /// Snap parallel edges closer than this
    pub snap_tolerance: f32,
    /// Join collinear edge segments closer than this
    pub join_tolerance: f32,
    /// Discard edges shorter than this
    pub edge_min_length: f32,
    /// Minimum words sharing a vertical alignment
    pub min_words_vertical: Option<u32>,
    /// Minimum words sharing a horizontal alignment
    pub min_words_horizontal: Option<u32>,
    /// Tolerance for grouping characters into words
    pub text_tolerance: Option<f32>,
    /// Horizontal character grouping tolerance
    pub text_x_tolerance: Option<f32>,
    /// Vertical character grouping tolerance
    pub text_y_tolerance: Option<f32>,
}

impl TableSettings {
    fn lines_based(vertical: EdgeStrategy, horizontal: EdgeStrategy, tolerance: f32) -> Self {
        Self {
            vertical_strategy: vertical,
            horizontal_strategy: horizontal,
            snap_tolerance: tolerance,
            join_tolerance: tolerance,
            edge_min_length: tolerance,
            min_words_vertical: None,
            min_words_horizontal: None,
            text_tolerance: None,
            text_x_tolerance: None,
            text_y_tolerance: None,
        }
    }

    /// Preset key, `"{vertical}/{horizontal}"`, e.g. `lines/text`.
    pub fn key(&self) -> String {
        format!("{}/{}", self.vertical_strategy, self.horizontal_strategy)
    }
}

/// Which selection mode a preset is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Single winning preset
    BestOf,
    /// Union of all presets with duplicate removal
    Union,
}

/// Closed set of table detection presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStrategy {
    /// Visible borders on both axes
    Lines,
    /// Borderless tables from text alignment
    Text,
    /// Ruling lines for columns, text for rows
    Mixed,
}

impl TableStrategy {
    /// Presets tried by [`select_best`], in priority order.
    pub const BEST_OF: [TableStrategy; 3] =
        [TableStrategy::Lines, TableStrategy::Text, TableStrategy::Mixed];

    /// Presets tried by [`select_union`], in priority order.
    pub const UNION: [TableStrategy; 2] = [TableStrategy::Lines, TableStrategy::Text];

    /// Detection settings of this preset for the given mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_layout::layout::{SelectionMode, TableStrategy};
    ///
    /// let settings = TableStrategy::Mixed.settings(SelectionMode::BestOf);
    /// assert_eq!(settings.key(), "lines/text");
    /// assert_eq!(settings.snap_tolerance, 3.0);
    /// ```
    pub fn settings(&self, mode: SelectionMode) -> TableSettings {
        use EdgeStrategy::{Lines, Text};

        let mut settings = match self {
            TableStrategy::Lines => TableSettings::lines_based(Lines, Lines, 3.0),
            TableStrategy::Text => TableSettings::lines_based(Text, Text, 5.0),
            TableStrategy::Mixed => TableSettings::lines_based(Lines, Text, 3.0),
        };

        if mode == SelectionMode::BestOf {
            settings.min_words_vertical = Some(0);
            settings.min_words_horizontal = Some(0);
            if *self == TableStrategy::Text {
                settings.text_tolerance = Some(3.0);
                settings.text_x_tolerance = Some(5.0);
                settings.text_y_tolerance = Some(3.0);
            }
        } else if *self == TableStrategy::Text {
            // Text alignment keeps the finder's default minimum edge length
            settings.edge_min_length = 3.0;
        }

        settings
    }
}

/// One table found by one preset.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCandidate {
    /// Cell grid
    pub grid: TableGrid,
    /// Table bounding box
    pub bbox: Rect,
    /// Detection score: `fill_ratio * cell_count`
    pub score: f32,
    /// Preset that found the table
    pub strategy: TableStrategy,
}

impl TableCandidate {
    /// Create a candidate, scoring its grid.
    pub fn new(grid: TableGrid, bbox: Rect, strategy: TableStrategy) -> Self {
        let score = grid.detection_score();
        Self {
            grid,
            bbox,
            score,
            strategy,
        }
    }

    /// Drop blank rows; `None` when the grid is left empty.
    pub fn cleaned(self) -> Option<Self> {
        let grid = self.grid.cleaned()?;
        Some(Self { grid, ..self })
    }
}

/// Keep the candidate set of the best-scoring preset.
///
/// Candidates whose grid is empty after cleaning are dropped from the
/// winning set.
pub fn select_best<F: TableFinder>(page: &F) -> Vec<TableCandidate> {
    let mut best: Vec<TableCandidate> = Vec::new();
    let mut best_score = 0.0f32;

    for strategy in TableStrategy::BEST_OF {
        let settings = strategy.settings(SelectionMode::BestOf);
        let candidates = match run_strategy(page, strategy, &settings) {
            Ok(candidates) => candidates,
            Err(e) => {
                log::debug!("  Strategy {} error: {}", settings.key(), e);
                continue;
            },
        };

        let score: f32 = candidates.iter().map(|c| c.score).sum();
        if score > best_score {
            log::debug!(
                "    Strategy {} is current best with score {:.2}",
                settings.key(),
                score
            );
            best_score = score;
            best = candidates;
        }
    }

    best.into_iter()
        .filter_map(TableCandidate::cleaned)
        .inspect(|c| {
            log::debug!(
                "  Selected table: {}x{}",
                c.grid.row_count(),
                c.grid.column_count()
            )
        })
        .collect()
}

/// Keep every non-empty candidate from all presets, minus duplicates.
///
/// A candidate is a duplicate when its top-left corner lies within
/// [`DUPLICATE_TOLERANCE`] of an already accepted candidate; the first one
/// found is kept.
pub fn select_union<F: TableFinder>(page: &F) -> Vec<TableCandidate> {
    let mut accepted: Vec<TableCandidate> = Vec::new();

    for strategy in TableStrategy::UNION {
        let settings = strategy.settings(SelectionMode::Union);
        let candidates = match run_strategy(page, strategy, &settings) {
            Ok(candidates) => candidates,
            Err(e) => {
                log::debug!("  Table extraction error ({}): {}", settings.key(), e);
                continue;
            },
        };

        for candidate in candidates {
            if candidate.grid.non_empty_cells() == 0 {
                continue;
            }

            let duplicate = accepted
                .iter()
                .any(|existing| existing.bbox.same_origin(&candidate.bbox, DUPLICATE_TOLERANCE));
            if duplicate {
                continue;
            }

            log::debug!(
                "  Found table: {}x{} at ({:.1}, {:.1})",
                candidate.grid.row_count(),
                candidate.grid.column_count(),
                candidate.bbox.x,
                candidate.bbox.y
            );
            accepted.push(candidate);
        }
    }

    accepted
}

/// Run one preset, returning its candidates with at least one cell.
///
/// Ragged grids are skipped; a failing `find_tables` or `extract` call fails
/// the whole preset.
fn run_strategy<F: TableFinder>(
    page: &F,
    strategy: TableStrategy,
    settings: &TableSettings,
) -> Result<Vec<TableCandidate>> {
    let geometries = page.find_tables(settings)?;
    if !geometries.is_empty() {
        log::debug!(
            "  Strategy {} found {} table(s)",
            settings.key(),
            geometries.len()
        );
    }

    let mut candidates = Vec::with_capacity(geometries.len());
    for geometry in &geometries {
        let grid = match TableGrid::from_raw(geometry.extract()?) {
            Ok(grid) => grid,
            Err(e) => {
                log::debug!("  Skipping table from {}: {}", settings.key(), e);
                continue;
            },
        };

        if grid.cell_count() > 0 {
            candidates.push(TableCandidate::new(grid, geometry.bbox(), strategy));
        }
    }

    Ok(candidates)
}
