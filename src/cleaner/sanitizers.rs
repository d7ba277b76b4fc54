//! Field formatting sanitizers.

use crate::dataset::Dataset;
use crate::utils::is_numeric_string;

/// Trim every field; title-case non-numeric values containing a space.
/// Returns the number of fields that changed.
pub(crate) fn standardize_formatting(dataset: &mut Dataset) -> usize {
    let mut changed = 0;
    for row in dataset.rows_mut() {
        for field in row.iter_mut() {
            let standardized = standardize_field(field);
            if *field != standardized {
                *field = standardized;
                changed += 1;
            }
        }
    }
    changed
}

fn standardize_field(value: &str) -> String {
    let trimmed = value.trim();
    if !is_numeric_string(trimmed) && trimmed.contains(' ') {
        title_case(trimmed)
    } else {
        trimmed.to_string()
    }
}

/// Lowercase the whole value, then capitalize the first letter of each
/// space-delimited word ("JOHN smith" -> "John Smith"). Runs of spaces are
/// preserved as-is.
pub(crate) fn title_case(value: &str) -> String {
    value
        .to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
