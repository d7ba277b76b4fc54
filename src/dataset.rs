//! In-memory tabular dataset.
//!
//! A [`Dataset`] is an ordered list of column headers plus rows of raw
//! string fields. Every row has exactly one field per header, in header
//! order; an absent value is an empty string, never a missing slot. The
//! constructors enforce the width invariant so the analysis and cleaning
//! code can index rows without bounds anxiety.
//!
//! Datasets are plain values: the codec produces them, the analyzer reads
//! them, and the cleaner works on its own copy. Nothing in the engine
//! mutates a dataset it does not own.

use serde::{Deserialize, Serialize};

/// An in-memory table of ordered headers and rows of string fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Create a dataset from headers and rows, dropping any row whose
    /// field count does not match the header count.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows.into_iter().filter(|row| row.len() == width).collect();
        Self { headers, rows }
    }

    /// Construct from parts that are already width-checked (codec internal).
    pub(crate) fn from_parts(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == headers.len()));
        Self { headers, rows }
    }

    /// Column headers, in original order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows, in original order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }

    /// True if the dataset holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Iterate the fields of one column, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for the headers.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &str> {
        assert!(index < self.headers.len(), "column index out of range");
        self.rows.iter().map(move |row| row[index].as_str())
    }

    /// Keep only the rows for which `keep` returns true, preserving order.
    pub(crate) fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[String]) -> bool,
    {
        self.rows.retain(|row| keep(row));
    }

    /// Mutable access to the rows (cleaner internal).
    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<String>] {
        &mut self.rows
    }
}
