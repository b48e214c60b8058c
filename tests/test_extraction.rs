//! End-to-end extraction tests over on-disk page dumps.
//!
//! Covers both extraction flows, fault handling and the `pdf_layout` binary's
//! exit-code convention.

use pdf_layout::source::PageDump;
use pdf_layout::{
    ExtractionConfig, ExtractionMode, ExtractionResult, ExtractionStatus, Extractor, QualityGate,
};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{tempdir, TempDir};

// ============================================================================
// Helper Functions for Creating Mock Dumps
// ============================================================================

/// Glyph records for `text`, one per char, 6 units wide.
fn mock_glyphs(text: &str, x: f32, top: f32) -> Vec<Value> {
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            let x0 = x + i as f32 * 6.0;
            json!({"text": c.to_string(), "x0": x0, "x1": x0 + 6.0, "top": top, "height": 12.0})
        })
        .collect()
}

fn mock_table(bbox: [f32; 4], cells: Value) -> Value {
    json!({"bbox": bbox, "cells": cells})
}

/// A two-page report: heading, list and a bordered table on page 1, prose on
/// page 2.
fn report_dump() -> Value {
    let mut page1 = Vec::new();
    page1.extend(mock_glyphs("■ Quarterly Report", 40.0, 40.0));
    page1.extend(mock_glyphs(
        "Revenue grew in every region during the quarter under review.",
        40.0,
        70.0,
    ));
    page1.extend(mock_glyphs("• Europe up 4%", 40.0, 100.0));
    page1.extend(mock_glyphs("• Asia up 7%", 40.0, 120.0));

    let page2 = mock_glyphs(
        "Outlook remains stable for the next two quarters across all segments.",
        40.0,
        60.0,
    );

    json!({
        "metadata": {"Title": "Quarterly Report", "Author": "Finance", "Creator": "Writer"},
        "pages": [
            {
                "width": 600.0, "height": 800.0,
                "glyphs": page1,
                "tables": {
                    "lines/lines": [mock_table(
                        [40.0, 200.0, 540.0, 260.0],
                        json!([["Region", "Q1", "Q2"], ["Europe", " 10 ", "11"], [null, "", null]])
                    )],
                    "text/text": [
                        mock_table([45.0, 205.0, 540.0, 260.0], json!([["Region", "Q1"]])),
                        mock_table([40.0, 400.0, 300.0, 440.0], json!([["Note", "x"], ["", "y"]]))
                    ]
                }
            },
            {
                "width": 600.0, "height": 800.0,
                "glyphs": page2
            }
        ]
    })
}

fn write_dump(dir: &TempDir, name: &str, dump: &Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string(dump).unwrap()).unwrap();
    path
}

fn extract(path: &Path, config: ExtractionConfig) -> ExtractionResult {
    Extractor::with_config(config).extract_path::<PageDump>(path)
}

// ============================================================================
// Coordinate Flow
// ============================================================================

#[test]
fn test_coordinate_flow_report() {
    let dir = tempdir().unwrap();
    let path = write_dump(&dir, "report.json", &report_dump());

    let result = extract(&path, ExtractionConfig::new());
    assert!(result.success, "error: {:?}", result.error);
    assert_eq!(result.status, ExtractionStatus::Success);
    assert_eq!(result.filename, "report.json");
    assert_eq!(result.metadata.title, "Quarterly Report");
    assert_eq!(result.metadata.subject, "");
    assert_eq!(result.metadata.total_pages, 2);

    let page = &result.pages[0];
    let kinds: Vec<&str> = page.elements().iter().map(|e| e.kind.name()).collect();
    assert_eq!(kinds, vec!["heading", "text", "list_item", "list_item"]);

    // The near-duplicate text-strategy table is dropped; the distinct one stays.
    assert_eq!(page.tables.len(), 2);
    assert_eq!(page.tables[0].rows, 3);
    assert_eq!(page.tables[0].cols, 3);
    assert_eq!(page.tables[0].data[1][1], "10");
    assert_eq!(page.tables[0].data[2], vec![String::new(); 3]);
    assert_eq!(page.tables[1].data[0][0], "Note");

    let quality = result.quality.as_ref().unwrap();
    assert_eq!(quality.report.table_scores.len(), 2);
    assert!(quality.score > 0.2);
}

#[test]
fn test_coordinate_flow_scores_blank_rows() {
    let dump = json!({"pages": [{
        "width": 600.0, "height": 800.0,
        "tables": {"lines/lines": [mock_table(
            [40.0, 200.0, 300.0, 260.0],
            json!([["A", "B"], [null, null], ["C", "D"]])
        )]}
    }]});
    let dir = tempdir().unwrap();
    let path = write_dump(&dir, "sparse.json", &dump);

    let result = extract(&path, ExtractionConfig::new().with_gate(QualityGate::ignore()));
    let table = &result.pages[0].tables[0];
    assert_eq!(table.rows, 3);
    assert_eq!(table.cols, 2);

    // 4 of 6 cells filled, size factor 0.7 + 0.3 * 0.6
    let quality = result.quality.unwrap();
    assert_eq!(quality.report.table_scores[0].rows, 3);
    assert!((quality.report.table_scores[0].quality - 0.586_666_7).abs() < 1e-4);
}

#[test]
fn test_coordinate_flow_json_shape() {
    let dir = tempdir().unwrap();
    let path = write_dump(&dir, "report.json", &report_dump());

    let json: Value =
        serde_json::from_str(&extract(&path, ExtractionConfig::new()).to_json(false).unwrap())
            .unwrap();

    assert_eq!(json["success"], true);
    assert!(json["error"].is_null());
    assert_eq!(json["pages"][0]["number"], 1);
    assert_eq!(json["pages"][0]["layout"]["width"], 600.0);
    assert_eq!(json["pages"][0]["elements"][0]["type"], "heading");
    assert_eq!(json["pages"][0]["elements"][0]["level"], 1);
    assert!(json["pages"][0]["tables"][0]["bbox"].is_object());
    assert!(json["pages"][0].get("text").is_none());
    assert!(json["quality"]["score"].is_number());
}

#[test]
fn test_strict_gate_fails_extraction() {
    let dump = json!({"pages": [{"width": 600.0, "height": 800.0, "glyphs": mock_glyphs("ok", 40.0, 40.0)}]});
    let dir = tempdir().unwrap();
    let path = write_dump(&dir, "thin.json", &dump);

    let config = ExtractionConfig::new().with_gate(QualityGate::new(0.5, true));
    let result = extract(&path, config);

    assert!(!result.success);
    assert_eq!(result.exit_code(), 3);
    let error = result.error.as_deref().unwrap();
    assert!(error.starts_with("Quality too low:"));
    assert_eq!(result.quality.unwrap().report.errors.last().unwrap(), error);
}

#[test]
fn test_lenient_gate_warns() {
    let dump = json!({"pages": [{"width": 600.0, "height": 800.0, "glyphs": mock_glyphs("ok", 40.0, 40.0)}]});
    let dir = tempdir().unwrap();
    let path = write_dump(&dir, "thin.json", &dump);

    let result = extract(&path, ExtractionConfig::new());
    assert!(result.success);
    assert_eq!(result.exit_code(), 2);
    assert!(result.error.is_none());
}

#[test]
fn test_ignore_quality_passes() {
    let dump = json!({"pages": [{"width": 600.0, "height": 800.0}]});
    let dir = tempdir().unwrap();
    let path = write_dump(&dir, "blank.json", &dump);

    let result = extract(&path, ExtractionConfig::new().with_gate(QualityGate::ignore()));
    assert!(result.success);
    assert_eq!(result.exit_code(), 0);
    assert_eq!(result.quality.unwrap().score, 0.0);
}

// ============================================================================
// Plain Flow
// ============================================================================

#[test]
fn test_plain_flow_best_of_tables() {
    let dir = tempdir().unwrap();
    let path = write_dump(&dir, "report.json", &report_dump());

    let result = extract(&path, ExtractionConfig::new().with_mode(ExtractionMode::Plain));
    assert!(result.success);
    assert!(result.quality.is_none());

    let page = &result.pages[0];
    let text = page.text.as_deref().unwrap();
    assert!(text.starts_with("■ Quarterly Report\nRevenue grew"));
    assert_eq!(text.lines().count(), 4);

    // lines/lines scores 6 against 2 + 3 for text/text.
    assert_eq!(page.tables.len(), 1);
    assert_eq!(page.tables[0].index, Some(0));
    assert_eq!(page.tables[0].rows, 2);

    let json = serde_json::to_value(&page.tables[0]).unwrap();
    assert!(json["position"].is_object());
    assert!(json.get("bbox").is_none());
}

// ============================================================================
// Faults
// ============================================================================

#[test]
fn test_strategy_fault_is_skipped() {
    let mut dump = report_dump();
    dump["pages"][0]["faults"] = json!({"lines/lines": "edge detection failed"});
    let dir = tempdir().unwrap();
    let path = write_dump(&dir, "faulty.json", &dump);

    let result = extract(&path, ExtractionConfig::new());
    assert!(result.success);
    // Only the text-strategy tables remain, both distinct.
    let tables = &result.pages[0].tables;
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].data, vec![vec!["Region".to_string(), "Q1".to_string()]]);
}

#[test]
fn test_ragged_table_is_skipped() {
    let dump = json!({"pages": [{
        "width": 600.0, "height": 800.0,
        "tables": {"lines/lines": [
            mock_table([10.0, 10.0, 100.0, 50.0], json!([["a", "b"], ["c"]])),
            mock_table([10.0, 300.0, 100.0, 350.0], json!([["d", "e"]]))
        ]}
    }]});
    let dir = tempdir().unwrap();
    let path = write_dump(&dir, "ragged.json", &dump);

    let result = extract(&path, ExtractionConfig::new().with_gate(QualityGate::ignore()));
    let tables = &result.pages[0].tables;
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].data[0][0], "d");
}

#[test]
fn test_page_fault_aborts_document() {
    let mut dump = report_dump();
    dump["pages"][1]["error"] = json!("content stream truncated");
    let dir = tempdir().unwrap();
    let path = write_dump(&dir, "broken.json", &dump);

    let result = extract(&path, ExtractionConfig::new());
    assert!(!result.success);
    assert_eq!(result.exit_code(), 1);
    assert_eq!(
        result.error.as_deref(),
        Some("Failed to parse document: content stream truncated")
    );
    assert!(result.quality.is_none());
}

#[test]
fn test_malformed_dump_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("garbage.json");
    fs::write(&path, "%PDF-1.7 not json").unwrap();

    let result = extract(&path, ExtractionConfig::new());
    assert!(!result.success);
    assert_eq!(result.status, ExtractionStatus::Failed);
    assert!(result.error.unwrap().starts_with("Failed to parse document:"));
}

// ============================================================================
// Command Line
// ============================================================================

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pdf_layout"))
}

#[test]
fn test_cli_missing_file() {
    let output = cli().arg("/nonexistent/missing.json").output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "File not found: /nonexistent/missing.json");
}

#[test]
fn test_cli_exit_codes() {
    let dump = json!({"pages": [{"width": 600.0, "height": 800.0, "glyphs": mock_glyphs("ok", 40.0, 40.0)}]});
    let dir = tempdir().unwrap();
    let path = write_dump(&dir, "thin.json", &dump);

    let lenient = cli().arg(&path).output().unwrap();
    assert_eq!(lenient.status.code(), Some(2));

    let strict = cli().arg(&path).args(["--strict", "-q", "0.5"]).output().unwrap();
    assert_eq!(strict.status.code(), Some(3));

    let ignored = cli().arg(&path).args(["--strict", "--ignore-quality"]).output().unwrap();
    assert_eq!(ignored.status.code(), Some(0));
}

#[test]
fn test_cli_writes_output_file() {
    let dir = tempdir().unwrap();
    let path = write_dump(&dir, "report.json", &report_dump());
    let out = dir.path().join("out.json");

    let status = cli()
        .arg(&path)
        .args(["--pretty", "--mode", "plain", "-o"])
        .arg(&out)
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(0));

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("■ Quarterly Report"));
    let json: Value = serde_json::from_str(&written).unwrap();
    assert!(json["quality"].is_null());
    assert!(json["pages"][0]["text"].is_string());
}
