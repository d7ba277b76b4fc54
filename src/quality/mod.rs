//! Data quality assessment.
//!
//! Five independent detectors scan a dataset read-only, in a fixed order,
//! and the resulting issues are aggregated into a 0-100 quality score.

mod analyzer;
pub mod scoring;

pub use analyzer::{CheckConfig, DataQualityAnalyzer};
