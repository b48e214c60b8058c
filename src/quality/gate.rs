//! Acceptance gate on the overall quality score.

use crate::error::{Error, Result};

/// Default minimum acceptable score.
pub const DEFAULT_MIN_QUALITY: f32 = 0.2;

/// Caller-supplied acceptance threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityGate {
    /// Minimum acceptable overall score
    pub min_score: f32,
    /// Fail the extraction (instead of warning) below the minimum
    pub strict: bool,
}

impl Default for QualityGate {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_QUALITY, false)
    }
}

/// Outcome of checking a score against the gate.
#[derive(Debug)]
pub enum GateVerdict {
    /// Score meets the minimum
    Passed,
    /// Below the minimum, lenient gate: record as a warning
    Warned(Error),
    /// Below the minimum, strict gate: extraction fails
    Rejected(Error),
}

impl QualityGate {
    /// Create a gate.
    pub fn new(min_score: f32, strict: bool) -> Self {
        Self { min_score, strict }
    }

    /// Gate that accepts everything (minimum 0.0, lenient).
    pub fn ignore() -> Self {
        Self::new(0.0, false)
    }

    /// Enable strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Check the threshold lies in [0.0, 1.0].
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(Error::InvalidConfig(format!(
                "minimum quality must be within 0.0-1.0, got {}",
                self.min_score
            )));
        }
        Ok(())
    }

    /// Check `score` against the gate.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_layout::quality::{GateVerdict, QualityGate};
    ///
    /// let gate = QualityGate::new(0.5, true);
    /// assert!(matches!(gate.evaluate(0.3), GateVerdict::Rejected(_)));
    /// assert!(matches!(gate.evaluate(0.5), GateVerdict::Passed));
    /// ```
    pub fn evaluate(&self, score: f32) -> GateVerdict {
        if score >= self.min_score {
            return GateVerdict::Passed;
        }

        let fault = Error::QualityGate {
            score,
            minimum: self.min_score,
        };
        if self.strict {
            GateVerdict::Rejected(fault)
        } else {
            GateVerdict::Warned(fault)
        }
    }
}
