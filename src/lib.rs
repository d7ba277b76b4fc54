//! CSV Data-Quality Analysis & Cleaning Engine
//!
//! `dataclean` ingests a comma-delimited dataset, detects data-quality
//! defects, scores overall quality, and produces a remediated copy of the
//! dataset.
//!
//! # Overview
//!
//! The engine is built from five parts:
//!
//! - **Codec**: naive CSV parsing and serialization ([`codec`])
//! - **Quality checks**: five independent defect detectors ([`quality`])
//! - **Scoring**: 0-100 aggregation of detected issues ([`quality::scoring`])
//! - **Cleaner**: deduplicate -> impute -> standardize pipeline ([`cleaner`])
//! - **Statistics helpers**: median, mode, quartile fences ([`utils`])
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dataclean::{parse_csv, serialize_csv, DataCleaner, DataQualityAnalyzer};
//!
//! let dataset = parse_csv(&raw_text)?;
//!
//! let report = DataQualityAnalyzer::new().analyze(&dataset);
//! for issue in &report.issues {
//!     println!("[{}] {}: {}", issue.severity.display_name(), issue.title, issue.description);
//! }
//! println!("quality score: {}/100", report.score);
//!
//! let cleaned = DataCleaner::new().clean(&dataset);
//! std::fs::write("cleaned_data.csv", serialize_csv(&cleaned))?;
//! ```
//!
//! # Design
//!
//! Every operation is a pure, synchronous function over an in-memory
//! [`Dataset`]: `parse` builds one, `analyze` reads one and returns a fresh
//! [`QualityReport`], `clean` returns a new remediated dataset without
//! touching its input. There is no ambient "current dataset" state and no
//! caching between calls; a host that wants progress bars or async file
//! I/O wraps these calls behind its own task boundary.
//!
//! Malformed data is not an error: rows with a bad field count are dropped
//! during parsing and unparseable numerics are excluded from numeric
//! aggregates. Only structurally unusable input (no header line at all)
//! fails.

pub mod cleaner;
pub mod codec;
pub mod dataset;
pub mod error;
pub mod quality;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use cleaner::{CleanConfig, CleaningStage, DataCleaner, StatisticalImputer};
pub use codec::{parse_csv, serialize_csv};
pub use dataset::Dataset;
pub use error::{EngineError, Result, ResultExt};
pub use quality::{scoring::quality_score, CheckConfig, DataQualityAnalyzer};
pub use types::{Issue, IssueKind, IssueLevel, QualityReport, Severity};
