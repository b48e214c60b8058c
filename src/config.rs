//! Configuration for layout extraction.

use crate::error::Result;
use crate::quality::QualityGate;
use serde::{Deserialize, Serialize};

/// Which extraction flow to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Page text plus best-of tables, no quality assessment.
    Plain,
    /// Classified elements plus deduplicated tables, quality gated.
    #[default]
    Coordinates,
}

/// Extraction configuration.
#[derive(Debug, Clone, Default)]
pub struct ExtractionConfig {
    /// Extraction flow.
    pub mode: ExtractionMode,

    /// Acceptance gate (coordinate flow only).
    pub gate: QualityGate,
}

impl ExtractionConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the extraction flow.
    pub fn with_mode(mut self, mode: ExtractionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the acceptance gate.
    pub fn with_gate(mut self, gate: QualityGate) -> Self {
        self.gate = gate;
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        self.gate.validate()
    }
}
