//! Quality detectors.
//!
//! The analyzer runs five detectors over a read-only dataset, always in the
//! same order: missing values, duplicate rows, mixed types, outliers,
//! inconsistent case. Detectors are independent and never see each other's
//! output; per-column detectors emit issues in header order.

use std::collections::HashSet;

use tracing::debug;

use crate::dataset::Dataset;
use crate::quality::scoring;
use crate::types::{Issue, IssueKind, QualityReport, Severity};
use crate::utils::{is_missing_value, parse_numeric, quartile_bounds};

/// Detection thresholds. The defaults are the engine's normative behavior;
/// hosts should only override them for experimentation.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Missing-value ratio above which the issue is high severity.
    pub high_missing_ratio: f64,
    /// Minimum parseable numeric values a column needs before the outlier
    /// detector runs at all.
    pub outlier_min_samples: usize,
    /// IQR multiplier for the outlier fences.
    pub outlier_iqr_multiplier: f64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            high_missing_ratio: 0.1,
            outlier_min_samples: 11,
            outlier_iqr_multiplier: 1.5,
        }
    }
}

/// Data quality analyzer.
#[derive(Debug, Clone, Default)]
pub struct DataQualityAnalyzer {
    config: CheckConfig,
}

impl DataQualityAnalyzer {
    /// Create an analyzer with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the missing-value ratio above which severity becomes high.
    #[must_use]
    pub fn high_missing_ratio(mut self, ratio: f64) -> Self {
        self.config.high_missing_ratio = ratio;
        self
    }

    /// Set the minimum sample count for outlier detection.
    #[must_use]
    pub fn outlier_min_samples(mut self, samples: usize) -> Self {
        self.config.outlier_min_samples = samples;
        self
    }

    /// Set the IQR multiplier for the outlier fences.
    #[must_use]
    pub fn outlier_iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.config.outlier_iqr_multiplier = multiplier;
        self
    }

    /// Run every detector and aggregate the result into a report.
    ///
    /// Total over any well-formed dataset; an empty dataset yields an empty
    /// issue list and a score of 100.
    pub fn analyze(&self, dataset: &Dataset) -> QualityReport {
        let mut issues = Vec::new();

        self.check_missing_values(dataset, &mut issues);
        self.check_duplicate_rows(dataset, &mut issues);
        self.check_mixed_types(dataset, &mut issues);
        self.check_outliers(dataset, &mut issues);
        self.check_inconsistent_case(dataset, &mut issues);

        let score = scoring::quality_score(&issues, dataset.num_columns());
        debug!(
            "Analysis complete: {} issues over {} rows (score {})",
            issues.len(),
            dataset.num_rows(),
            score
        );

        QualityReport {
            issues,
            score,
            record_count: dataset.num_rows(),
        }
    }

    /// Detector 1: empty, whitespace-only, or literal "null" fields.
    fn check_missing_values(&self, dataset: &Dataset, issues: &mut Vec<Issue>) {
        let row_count = dataset.num_rows();
        for (index, header) in dataset.headers().iter().enumerate() {
            let missing = dataset
                .column(index)
                .filter(|value| is_missing_value(value))
                .count();
            if missing == 0 {
                continue;
            }

            let percentage = round_percentage(missing as f64 / row_count as f64 * 100.0);
            let severity =
                if missing as f64 > row_count as f64 * self.config.high_missing_ratio {
                    Severity::High
                } else {
                    Severity::Medium
                };

            issues.push(Issue {
                kind: IssueKind::MissingValues,
                title: format!("Missing Values in '{header}'"),
                description: format!("{missing} missing values ({percentage:.1}% of data)"),
                recommendation: missing_value_recommendation(percentage, header),
                column: Some(header.clone()),
                severity,
            });
        }
    }

    /// Detector 2: rows whose full field content repeats an earlier row.
    fn check_duplicate_rows(&self, dataset: &Dataset, issues: &mut Vec<Issue>) {
        let mut seen: HashSet<&[String]> = HashSet::new();
        let mut duplicates = 0usize;
        for row in dataset.rows() {
            if !seen.insert(row.as_slice()) {
                duplicates += 1;
            }
        }

        if duplicates > 0 {
            issues.push(Issue {
                kind: IssueKind::DuplicateRows,
                title: "Duplicate Records Found".to_string(),
                description: format!("{duplicates} duplicate rows detected"),
                recommendation: "Remove duplicate records to ensure data integrity and \
                                 accurate analysis."
                    .to_string(),
                column: None,
                severity: Severity::Medium,
            });
        }
    }

    /// Detector 3: columns mixing numeric and textual values.
    fn check_mixed_types(&self, dataset: &Dataset, issues: &mut Vec<Issue>) {
        for (index, header) in dataset.headers().iter().enumerate() {
            let mut has_numeric = false;
            let mut has_text = false;
            for value in dataset.column(index) {
                if value.trim().is_empty() {
                    continue;
                }
                if parse_numeric(value).is_some() {
                    has_numeric = true;
                } else {
                    has_text = true;
                }
            }

            if has_numeric && has_text {
                issues.push(Issue {
                    kind: IssueKind::MixedTypes,
                    title: format!("Mixed Data Types in '{header}'"),
                    description: "Column contains both numeric and text values".to_string(),
                    recommendation: "Standardize data types for consistent analysis. \
                                     Consider separating into different columns or \
                                     converting to a common format."
                        .to_string(),
                    column: Some(header.clone()),
                    severity: Severity::Medium,
                });
            }
        }
    }

    /// Detector 4: numeric values outside the IQR fences of their column.
    fn check_outliers(&self, dataset: &Dataset, issues: &mut Vec<Issue>) {
        for (index, header) in dataset.headers().iter().enumerate() {
            let numeric: Vec<f64> = dataset.column(index).filter_map(parse_numeric).collect();
            if numeric.len() < self.config.outlier_min_samples {
                continue;
            }

            let mut sorted = numeric.clone();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            let (lower, upper) = quartile_bounds(&sorted, self.config.outlier_iqr_multiplier);

            let outliers = numeric.iter().filter(|&&v| v < lower || v > upper).count();
            if outliers > 0 {
                issues.push(Issue {
                    kind: IssueKind::Outliers,
                    title: format!("Potential Outliers in '{header}'"),
                    description: format!("{outliers} potential outliers detected"),
                    recommendation: "Review outliers to determine if they are data entry \
                                     errors or legitimate extreme values. Consider capping \
                                     or transforming if necessary."
                        .to_string(),
                    column: Some(header.clone()),
                    severity: Severity::Low,
                });
            }
        }
    }

    /// Detector 5: columns mixing upper- and lower-case text.
    fn check_inconsistent_case(&self, dataset: &Dataset, issues: &mut Vec<Issue>) {
        for (index, header) in dataset.headers().iter().enumerate() {
            let mut has_upper = false;
            let mut has_lower = false;
            for value in dataset.column(index) {
                if value.trim().is_empty() {
                    continue;
                }
                if value != value.to_lowercase().as_str() {
                    has_upper = true;
                }
                if value != value.to_uppercase().as_str() {
                    has_lower = true;
                }
            }

            if has_upper && has_lower {
                issues.push(Issue {
                    kind: IssueKind::InconsistentCase,
                    title: format!("Inconsistent Case in '{header}'"),
                    description: "Column contains mixed upper and lower case values"
                        .to_string(),
                    recommendation: "Standardize text case (e.g., Title Case, lowercase, \
                                     or UPPERCASE) for consistency."
                        .to_string(),
                    column: Some(header.clone()),
                    severity: Severity::Low,
                });
            }
        }
    }
}

// The recommendation tiers compare the already-rounded percentage, so a raw
// 50.04% reads as 50.0 and falls to the lower tier.
fn round_percentage(raw: f64) -> f64 {
    (raw * 10.0).round() / 10.0
}

fn missing_value_recommendation(percentage: f64, column: &str) -> String {
    if percentage > 50.0 {
        format!(
            "Consider removing the '{column}' column as it has too many missing values, \
             or investigate data collection issues."
        )
    } else if percentage > 20.0 {
        format!(
            "Use advanced imputation techniques like KNN or regression-based imputation \
             for '{column}'."
        )
    } else if percentage > 5.0 {
        format!(
            "Fill missing values with median (for numeric) or mode (for categorical) \
             values in '{column}'."
        )
    } else {
        format!(
            "Remove rows with missing values in '{column}' or use simple imputation \
             techniques."
        )
    }
}
