//! CLI entry point for the data cleaning engine.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::{info, warn};

use dataclean::{DataCleaner, DataQualityAnalyzer, parse_csv, serialize_csv};

/// Output file name for the cleaned dataset.
const CLEANED_FILE_NAME: &str = "cleaned_data.csv";

/// Output file name for the JSON quality report.
const REPORT_FILE_NAME: &str = "analysis_report.json";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "CSV data-quality analysis and cleaning",
    long_about = "Analyzes a CSV file for data-quality defects (missing values, duplicate\n\
                  rows, mixed types, outliers, inconsistent casing), scores overall quality,\n\
                  and writes a cleaned copy of the dataset.\n\n\
                  EXAMPLES:\n  \
                  # Analyze and clean, writing output/cleaned_data.csv\n  \
                  dataclean -i data.csv -o output/\n\n  \
                  # Analyze only, with a JSON quality report\n  \
                  dataclean -i data.csv --dry-run --report"
)]
struct Args {
    /// Path to the CSV file to process
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for results
    #[arg(short, long, default_value = "./output")]
    output: PathBuf,

    /// Write the quality report as JSON to the output directory
    #[arg(short, long)]
    report: bool,

    /// Analyze only; do not write a cleaned dataset
    #[arg(long)]
    dry_run: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Initialize the tracing subscriber for logging.
fn init_logging(level: &str, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "error" } else { level };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level, args.quiet);

    // Same gate the upload UI applies: only .csv files are accepted.
    let is_csv = args
        .input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(anyhow!(
            "not a CSV file: {} (expected a .csv extension)",
            args.input.display()
        ));
    }

    info!("Reading {}", args.input.display());
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let dataset = parse_csv(&text).context("parsing input file")?;
    if dataset.is_empty() {
        warn!("Input has a header but no data rows");
    }

    let report = DataQualityAnalyzer::new().analyze(&dataset);
    info!(
        "Analyzed {} records: {} issues, quality score {}/100",
        report.record_count,
        report.issues.len(),
        report.score
    );
    for issue in &report.issues {
        info!(
            "[{}] {}: {}",
            issue.severity.display_name(),
            issue.title,
            issue.description
        );
    }

    if args.report || !args.dry_run {
        fs::create_dir_all(&args.output)
            .with_context(|| format!("failed to create {}", args.output.display()))?;
    }

    if args.report {
        let path = args.output.join(REPORT_FILE_NAME);
        let json = report.to_json().context("serializing report")?;
        fs::write(&path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Wrote quality report to {}", path.display());
    }

    if args.dry_run {
        info!("Dry run requested; skipping cleaning");
        return Ok(());
    }

    let (cleaned, actions) = DataCleaner::new().clean_with_actions(&dataset);
    for action in &actions {
        info!("{}", action);
    }

    let path = args.output.join(CLEANED_FILE_NAME);
    fs::write(&path, serialize_csv(&cleaned))
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(
        "Wrote {} cleaned rows to {}",
        cleaned.num_rows(),
        path.display()
    );

    Ok(())
}
