//! Extract layout and structure from a PDF page dump as JSON.
//!
//! Usage:
//!   pdf_layout report.json --pretty
//!   pdf_layout report.json --strict --min-quality 0.5 -o out.json
//!   pdf_layout report.json --mode plain
//!
//! Exit codes: 0 success, 1 failure, 2 quality below minimum, 3 quality below
//! minimum in strict mode.

use clap::{Parser, ValueEnum};
use pdf_layout::source::PageDump;
use pdf_layout::{ExtractionConfig, ExtractionMode, ExtractionResult, Extractor, QualityGate};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pdf_layout",
    version,
    about = "Extract text and structure from a PDF with coordinate preservation"
)]
struct Cli {
    /// Path to the page dump
    file: PathBuf,

    /// Show debug information
    #[arg(short, long)]
    debug: bool,

    /// Pretty print JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Strict quality mode: fail on low quality
    #[arg(short, long)]
    strict: bool,

    /// Minimum quality threshold (0.0-1.0)
    #[arg(short = 'q', long, default_value_t = 0.2)]
    min_quality: f32,

    /// Ignore quality checks and force extraction
    #[arg(long)]
    ignore_quality: bool,

    /// Extraction flow
    #[arg(long, value_enum, default_value_t = Mode::Coords)]
    mode: Mode,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Page text and best-of tables
    Plain,
    /// Classified elements, all tables, quality report
    Coords,
}

impl From<Mode> for ExtractionMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Plain => ExtractionMode::Plain,
            Mode::Coords => ExtractionMode::Coordinates,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if !cli.file.exists() {
        println!(
            "{}",
            serde_json::json!({
                "success": false,
                "error": format!("File not found: {}", cli.file.display()),
            })
        );
        std::process::exit(1);
    }

    let gate = if cli.ignore_quality {
        QualityGate::ignore()
    } else {
        QualityGate::new(cli.min_quality, cli.strict)
    };
    let config = ExtractionConfig::new()
        .with_mode(cli.mode.into())
        .with_gate(gate);

    let result = Extractor::with_config(config).extract_path::<PageDump>(&cli.file);

    if let Err(e) = write_output(&cli, &result) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if cli.debug {
        print_findings(&result);
    }

    std::process::exit(result.exit_code());
}

fn write_output(cli: &Cli, result: &ExtractionResult) -> pdf_layout::Result<()> {
    let json = result.to_json(cli.pretty)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, json)?;
            if cli.debug {
                eprintln!("Output written to: {}", path.display());
            }
        },
        None => println!("{}", json),
    }
    Ok(())
}

fn print_findings(result: &ExtractionResult) {
    let Some(quality) = &result.quality else {
        return;
    };
    let report = &quality.report;

    if !report.warnings.is_empty() {
        eprintln!("\nWarnings:");
        for warning in &report.warnings {
            eprintln!("  - {}", warning);
        }
    }
    if !report.errors.is_empty() {
        eprintln!("\nErrors:");
        for error in &report.errors {
            eprintln!("  - {}", error);
        }
    }
}
