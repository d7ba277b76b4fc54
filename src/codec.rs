//! Naive CSV parsing and serialization.
//!
//! Fields are comma-split with no quoting or escaping support: a field
//! containing a comma will be mis-split, and double quotes are stripped
//! rather than interpreted. This is an accepted limitation of the format
//! the engine speaks; round-trips are exact only for fields without commas
//! or double quotes.
//!
//! Blank lines (empty or all-whitespace) are discarded wherever they appear
//! in the input, including between data rows, and data rows whose field
//! count differs from the header are silently dropped rather than repaired.

use tracing::debug;

use crate::dataset::Dataset;
use crate::error::{EngineError, Result};

/// Parse raw CSV text into a [`Dataset`].
///
/// The first non-blank line is the header. Every field is trimmed and
/// stripped of literal double quotes. Returns [`EngineError::EmptyInput`]
/// when the text contains no non-blank lines at all.
pub fn parse_csv(text: &str) -> Result<Dataset> {
    let mut lines = text.split('\n').filter(|line| !line.trim().is_empty());

    let header_line = lines.next().ok_or(EngineError::EmptyInput)?;
    let headers: Vec<String> = header_line.split(',').map(clean_field).collect();

    let mut rows = Vec::new();
    let mut dropped = 0usize;
    for line in lines {
        let fields: Vec<String> = line.split(',').map(clean_field).collect();
        if fields.len() == headers.len() {
            rows.push(fields);
        } else {
            dropped += 1;
        }
    }
    if dropped > 0 {
        debug!(
            "Dropped {} rows whose field count did not match the {} headers",
            dropped,
            headers.len()
        );
    }

    Ok(Dataset::from_parts(headers, rows))
}

/// Serialize a [`Dataset`] back to CSV text.
///
/// The header line is unquoted; every data field is wrapped in double
/// quotes. Embedded quotes and commas are not escaped.
pub fn serialize_csv(dataset: &Dataset) -> String {
    let header_line = dataset.headers().join(",");
    let body = dataset
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|field| format!("\"{field}\""))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("{header_line}\n{body}")
}

// Trim first, then strip quotes: '" a"' keeps its inner space.
fn clean_field(raw: &str) -> String {
    raw.trim().replace('"', "")
}
