//! Dataset cleaning pipeline.
//!
//! Cleaning runs as an explicit sequence of stages over a copy of the
//! input dataset:
//!
//! 1. Deduplicate: drop every row that repeats an earlier row.
//! 2. ImputeMissing: fill missing fields with the column median or mode.
//! 3. StandardizeFormat: trim fields and title-case multi-word text.
//!
//! The order is a contract, not an accident: imputation statistics are
//! computed over the deduplicated rows so duplicates cannot skew them.
//! The original dataset is never mutated; [`DataCleaner::clean`] returns a
//! distinct object graph.

mod imputer;
mod sanitizers;

pub use imputer::StatisticalImputer;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::dataset::Dataset;

/// Stages of the cleaning pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleaningStage {
    /// Remove duplicate rows, keeping first occurrences.
    Deduplicate,
    /// Fill missing fields from per-column statistics.
    ImputeMissing,
    /// Trim whitespace and standardize text casing.
    StandardizeFormat,
}

impl CleaningStage {
    /// Stages in execution order. Imputation runs strictly after
    /// deduplication so fill statistics are computed over distinct rows.
    pub const SEQUENCE: [CleaningStage; 3] = [
        Self::Deduplicate,
        Self::ImputeMissing,
        Self::StandardizeFormat,
    ];

    /// Returns a human-readable name for the stage.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Deduplicate => "Removing Duplicates",
            Self::ImputeMissing => "Imputing Missing Values",
            Self::StandardizeFormat => "Standardizing Formatting",
        }
    }
}

/// Cleaning configuration. Defaults enable every stage.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    /// Whether to remove duplicate rows.
    pub remove_duplicates: bool,
    /// Whether to impute missing values.
    pub impute_missing: bool,
    /// Whether to standardize field formatting.
    pub standardize_format: bool,
    /// Share of non-missing values that must parse as numbers for a column
    /// to be imputed with the median rather than the mode.
    pub numeric_column_ratio: f64,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            remove_duplicates: true,
            impute_missing: true,
            standardize_format: true,
            numeric_column_ratio: 0.7,
        }
    }
}

/// Data cleaner producing a remediated copy of a dataset.
#[derive(Debug, Clone, Default)]
pub struct DataCleaner {
    config: CleanConfig,
}

impl DataCleaner {
    /// Create a cleaner with every stage enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable/disable duplicate row removal.
    #[must_use]
    pub fn remove_duplicates(mut self, enabled: bool) -> Self {
        self.config.remove_duplicates = enabled;
        self
    }

    /// Enable/disable missing-value imputation.
    #[must_use]
    pub fn impute_missing(mut self, enabled: bool) -> Self {
        self.config.impute_missing = enabled;
        self
    }

    /// Enable/disable formatting standardization.
    #[must_use]
    pub fn standardize_format(mut self, enabled: bool) -> Self {
        self.config.standardize_format = enabled;
        self
    }

    /// Set the numeric share above which a column is imputed with the median.
    #[must_use]
    pub fn numeric_column_ratio(mut self, ratio: f64) -> Self {
        self.config.numeric_column_ratio = ratio;
        self
    }

    /// Produce a cleaned copy of the dataset.
    ///
    /// Always succeeds; cleaning an empty dataset is a no-op copy.
    pub fn clean(&self, dataset: &Dataset) -> Dataset {
        self.clean_with_actions(dataset).0
    }

    /// Produce a cleaned copy plus a human-readable log of what was done.
    pub fn clean_with_actions(&self, dataset: &Dataset) -> (Dataset, Vec<String>) {
        let mut cleaned = dataset.clone();
        let mut actions = Vec::new();

        for stage in CleaningStage::SEQUENCE {
            if !self.stage_enabled(stage) {
                debug!("Skipping disabled stage: {}", stage.display_name());
                continue;
            }
            debug!("Cleaning stage: {}", stage.display_name());
            match stage {
                CleaningStage::Deduplicate => {
                    let removed = remove_duplicate_rows(&mut cleaned);
                    if removed > 0 {
                        actions.push(format!("Removed {removed} duplicate rows"));
                    } else {
                        actions.push("No duplicate rows found".to_string());
                    }
                }
                CleaningStage::ImputeMissing => {
                    StatisticalImputer::impute_dataset(
                        &mut cleaned,
                        self.config.numeric_column_ratio,
                        &mut actions,
                    );
                }
                CleaningStage::StandardizeFormat => {
                    let changed = sanitizers::standardize_formatting(&mut cleaned);
                    if changed > 0 {
                        actions.push(format!("Standardized formatting of {changed} fields"));
                    }
                }
            }
        }

        info!(
            "Cleaning complete: {} of {} rows remain",
            cleaned.num_rows(),
            dataset.num_rows()
        );
        (cleaned, actions)
    }

    fn stage_enabled(&self, stage: CleaningStage) -> bool {
        match stage {
            CleaningStage::Deduplicate => self.config.remove_duplicates,
            CleaningStage::ImputeMissing => self.config.impute_missing,
            CleaningStage::StandardizeFormat => self.config.standardize_format,
        }
    }
}

/// Drop every row whose full field content repeats an earlier row,
/// preserving the order of first occurrences. Returns the removal count.
fn remove_duplicate_rows(dataset: &mut Dataset) -> usize {
    let before = dataset.num_rows();
    let mut seen: HashSet<Vec<String>> = HashSet::new();
    dataset.retain_rows(|row| seen.insert(row.to_vec()));
    before - dataset.num_rows()
}
