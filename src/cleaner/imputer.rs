//! Statistical imputation for missing fields.
//!
//! Columns where at least the configured share of non-missing values parse
//! as numbers are filled with the median of the parseable subset; every
//! other column is filled with the mode of its non-missing values. Columns
//! with no non-missing values at all are left untouched.

use tracing::debug;

use crate::dataset::Dataset;
use crate::utils::{is_missing_value, median, mode, parse_numeric};

/// Median/mode imputation over a dataset.
pub struct StatisticalImputer;

impl StatisticalImputer {
    /// Fill every missing field in place, column by column, appending a
    /// description of each fill to `actions`.
    pub fn impute_dataset(
        dataset: &mut Dataset,
        numeric_column_ratio: f64,
        actions: &mut Vec<String>,
    ) {
        for index in 0..dataset.num_columns() {
            if let Some(action) = Self::impute_column(dataset, index, numeric_column_ratio) {
                actions.push(action);
            }
        }
    }

    fn impute_column(
        dataset: &mut Dataset,
        index: usize,
        numeric_column_ratio: f64,
    ) -> Option<String> {
        let values: Vec<String> = dataset
            .column(index)
            .filter(|value| !is_missing_value(value))
            .map(str::to_string)
            .collect();
        if values.is_empty() {
            return None;
        }

        let numeric: Vec<f64> = values.iter().filter_map(|v| parse_numeric(v)).collect();
        let numeric_column =
            numeric.len() as f64 >= values.len() as f64 * numeric_column_ratio;

        let (fill_value, method) = if numeric_column {
            // Median over the parseable subset, rendered with the default
            // float formatting ("30", not "30.0").
            (median(&numeric)?.to_string(), "median")
        } else {
            let refs: Vec<&str> = values.iter().map(String::as_str).collect();
            (mode(&refs)?, "mode")
        };

        let header = dataset.headers()[index].clone();
        let filled = Self::fill_missing(dataset, index, &fill_value);
        if filled == 0 {
            return None;
        }
        debug!("Filled {} fields in '{}' with {} {}", filled, header, method, fill_value);
        Some(format!(
            "Filled {filled} missing values in '{header}' with {method}: {fill_value}"
        ))
    }

    fn fill_missing(dataset: &mut Dataset, index: usize, fill_value: &str) -> usize {
        let mut filled = 0;
        for row in dataset.rows_mut() {
            if is_missing_value(&row[index]) {
                row[index] = fill_value.to_string();
                filled += 1;
            }
        }
        filled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_dataset(values: &[&str]) -> Dataset {
        Dataset::new(
            vec!["col".to_string()],
            values.iter().map(|v| vec![v.to_string()]).collect(),
        )
    }

    fn impute(dataset: &mut Dataset) -> Vec<String> {
        let mut actions = Vec::new();
        StatisticalImputer::impute_dataset(dataset, 0.7, &mut actions);
        actions
    }

    fn column(dataset: &Dataset) -> Vec<String> {
        dataset.column(0).map(str::to_string).collect()
    }

    // ========================================================================
    // Numeric column tests
    // ========================================================================

    #[test]
    fn test_numeric_column_filled_with_median() {
        let mut data = column_dataset(&["1", "3", "", "5"]);
        let actions = impute(&mut data);

        assert_eq!(column(&data), vec!["1", "3", "3", "5"]);
        assert!(actions[0].contains("median"));
    }

    #[test]
    fn test_median_of_even_count_renders_fraction() {
        let mut data = column_dataset(&["1", "2", ""]);
        impute(&mut data);
        assert_eq!(column(&data), vec!["1", "2", "1.5"]);
    }

    #[test]
    fn test_whole_median_renders_without_decimal() {
        let mut data = column_dataset(&["30", ""]);
        impute(&mut data);
        assert_eq!(column(&data), vec!["30", "30"]);
    }

    #[test]
    fn test_null_token_is_replaced() {
        let mut data = column_dataset(&["10", "20", "NULL", "30"]);
        impute(&mut data);
        assert_eq!(column(&data), vec!["10", "20", "20", "30"]);
    }

    // ========================================================================
    // Categorical column tests
    // ========================================================================

    #[test]
    fn test_text_column_filled_with_mode() {
        let mut data = column_dataset(&["red", "blue", "red", ""]);
        let actions = impute(&mut data);

        assert_eq!(column(&data), vec!["red", "blue", "red", "red"]);
        assert!(actions[0].contains("mode"));
    }

    #[test]
    fn test_mode_tie_takes_first_seen_value() {
        let mut data = column_dataset(&["blue", "red", ""]);
        impute(&mut data);
        assert_eq!(column(&data), vec!["blue", "red", "blue"]);
    }

    // ========================================================================
    // Classification boundary tests
    // ========================================================================

    #[test]
    fn test_exactly_seventy_percent_numeric_uses_median() {
        // 7 of 10 non-missing values are numeric: the inclusive boundary
        // classifies the column as numeric.
        let mut data = column_dataset(&[
            "1", "2", "3", "4", "5", "6", "7", "a", "b", "c", "",
        ]);
        impute(&mut data);
        assert_eq!(data.rows()[10][0], "4");
    }

    #[test]
    fn test_below_seventy_percent_numeric_uses_mode() {
        // 6 of 10 numeric falls short: mode imputation applies.
        let mut data = column_dataset(&[
            "1", "2", "3", "4", "5", "6", "a", "a", "b", "c", "",
        ]);
        impute(&mut data);
        assert_eq!(data.rows()[10][0], "a");
    }

    // ========================================================================
    // Skip conditions
    // ========================================================================

    #[test]
    fn test_all_missing_column_is_skipped() {
        let mut data = column_dataset(&["", "null", "  "]);
        let actions = impute(&mut data);

        assert_eq!(column(&data), vec!["", "null", "  "]);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_complete_column_reports_nothing() {
        let mut data = column_dataset(&["1", "2", "3"]);
        let actions = impute(&mut data);
        assert!(actions.is_empty());
    }
}
