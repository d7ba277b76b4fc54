//! Shared predicates and statistics helpers.
//!
//! This module contains the field-level predicates and the small statistics
//! toolbox (median, mode, quartile fences) used by both the quality
//! detectors and the cleaner, so the two sides can never disagree on what
//! "missing" or "numeric" means.

use std::collections::HashMap;

// =============================================================================
// Field Predicates
// =============================================================================

/// True if a field counts as missing: empty or whitespace-only after
/// trimming, or equal to the literal token "null" ignoring ASCII case.
pub fn is_missing_value(value: &str) -> bool {
    value.trim().is_empty() || value.eq_ignore_ascii_case("null")
}

/// Try to parse a field as a finite numeric value.
///
/// The field is trimmed first; anything that does not parse fully as an
/// `f64`, or parses to an infinity or NaN, yields `None`.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Check if a field parses as a finite numeric value.
pub fn is_numeric_string(value: &str) -> bool {
    parse_numeric(value).is_some()
}

// =============================================================================
// Statistics Helpers
// =============================================================================

/// Median of a set of numbers: the middle element for an odd count, the
/// average of the two middle elements for an even count.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    Some(if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    })
}

/// Mode of a set of strings: the most frequent value, ties broken by the
/// value whose first occurrence comes earliest in the sequence.
pub fn mode(values: &[&str]) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for &value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    // Walking the original sequence with a strict comparison makes the
    // first-seen value win among equal counts.
    let mut best: Option<(&str, usize)> = None;
    for &value in values {
        let count = counts[value];
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value.to_string())
}

/// Lower and upper outlier fences for a sorted sample.
///
/// Quartiles are taken positionally with no interpolation:
/// `Q1 = sorted[floor(0.25 * n)]`, `Q3 = sorted[floor(0.75 * n)]`. The
/// fences sit `multiplier * IQR` beyond Q1 and Q3.
pub fn quartile_bounds(sorted: &[f64], multiplier: f64) -> (f64, f64) {
    let n = sorted.len();
    let q1 = sorted[(n as f64 * 0.25) as usize];
    let q3 = sorted[(n as f64 * 0.75) as usize];
    let iqr = q3 - q1;
    (q1 - multiplier * iqr, q3 + multiplier * iqr)
}

// =============================================================================
// Tests
// =============================================================================
