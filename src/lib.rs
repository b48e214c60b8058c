// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::type_complexity)]
#![allow(clippy::enum_variant_names)]
#![allow(clippy::should_implement_trait)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # PDF Layout
//!
//! Layout reconstruction and extraction-quality scoring for PDF pages.
//!
//! ## Core Features
//!
//! - **Line Grouping**: positioned glyphs → text lines by vertical band
//! - **Structure Classification**: headings, list items, table rows and plain
//!   text from marker glyphs and page geometry, no NLP
//! - **Table Selection**: several detection presets per page, either the best
//!   scoring preset wins or all presets are merged with deduplication
//! - **Quality Scoring**: table, text and structure assessors combined into one
//!   score, checked against a strict or lenient acceptance gate
//!
//! ## Architecture
//!
//! PDF parsing itself is an external collaborator reached through the
//! [`source::PdfDocument`] and [`source::PdfPage`] traits. [`source::PageDump`]
//! implements them over the JSON page dump written by an upstream parser.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdf_layout::source::PageDump;
//! use pdf_layout::{ExtractionConfig, Extractor, QualityGate};
//! use std::path::Path;
//!
//! let config = ExtractionConfig::new().with_gate(QualityGate::new(0.5, true));
//! let result = Extractor::with_config(config).extract_path::<PageDump>(Path::new("report.json"));
//!
//! println!("{}", result.to_json(true).unwrap());
//! std::process::exit(result.exit_code());
//! ```

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Error handling
pub mod error;

// Core types
pub mod geometry;
pub mod layout;

// Page sources
pub mod source;

// Output and scoring
pub mod output;
pub mod quality;

// Configuration and extraction
pub mod config;
pub mod extractor;

pub use config::{ExtractionConfig, ExtractionMode};
pub use error::{Error, Result};
pub use extractor::Extractor;
pub use output::{ExtractionResult, ExtractionStatus};
pub use quality::{QualityGate, QualityReport};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
