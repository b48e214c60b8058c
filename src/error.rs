//! Error types for layout reconstruction.
//!
//! This module defines all error types that can occur while opening a page
//! source, detecting tables and gating extraction quality.

use std::path::PathBuf;

/// Result type alias for layout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during layout reconstruction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input document does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Document cannot be opened or parsed (fatal for the whole document)
    #[error("Failed to parse document: {0}")]
    Parse(String),

    /// One table detection preset failed; its results are discarded
    #[error("Table strategy {strategy} failed: {reason}")]
    Strategy {
        /// Preset that failed, e.g. `lines/lines`
        strategy: String,
        /// Reason reported by the page source
        reason: String,
    },

    /// Extracted table grid has rows of differing length
    #[error("Ragged table grid: row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        /// Zero-based row index of the first offending row
        row: usize,
        /// Cell count of the first row
        expected: usize,
        /// Cell count of the offending row
        found: usize,
    },

    /// Aggregate quality score is below the caller's threshold
    #[error("Quality too low: {score:.2} (minimum: {minimum:.2})")]
    QualityGate {
        /// Computed overall score
        score: f32,
        /// Required minimum score
        minimum: f32,
    },

    /// Page index outside the document
    #[error("Page index {0} out of range")]
    PageOutOfRange(usize),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error() {
        let err = Error::FileNotFound(PathBuf::from("missing.json"));
        assert_eq!(err.to_string(), "File not found: missing.json");
    }

    #[test]
    fn test_strategy_error() {
        let err = Error::Strategy {
            strategy: "text/text".to_string(),
            reason: "no edges".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("text/text"));
        assert!(msg.contains("no edges"));
    }

    #[test]
    fn test_ragged_grid_error() {
        let err = Error::RaggedGrid {
            row: 2,
            expected: 3,
            found: 1,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("row 2"));
        assert!(msg.contains("expected 3"));
    }

    #[test]
    fn test_quality_gate_error_message() {
        let err = Error::QualityGate {
            score: 0.3,
            minimum: 0.5,
        };
        assert_eq!(err.to_string(), "Quality too low: 0.30 (minimum: 0.50)");
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
