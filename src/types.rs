//! Issue and report value types produced by quality analysis.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How strongly an issue affects the quality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Score penalty weight for this severity.
    pub fn weight(&self) -> f64 {
        match self {
            Self::High => 30.0,
            Self::Medium => 15.0,
            Self::Low => 5.0,
        }
    }

    /// Get a human-readable display name for the severity.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Presentation level of an issue (how a host should render it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueLevel {
    Error,
    Warning,
    Info,
}

/// The kinds of data-quality defect the analyzer detects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    /// Empty, whitespace-only, or literal "null" fields in a column.
    MissingValues,
    /// Rows whose full field content repeats an earlier row.
    DuplicateRows,
    /// A column mixing numeric and textual values.
    MixedTypes,
    /// Numeric values outside the IQR fences of their column.
    Outliers,
    /// A column mixing upper- and lower-case text.
    InconsistentCase,
}

impl IssueKind {
    /// Presentation level for issues of this kind.
    pub fn level(&self) -> IssueLevel {
        match self {
            Self::MissingValues => IssueLevel::Error,
            Self::DuplicateRows | Self::MixedTypes => IssueLevel::Warning,
            Self::Outliers | Self::InconsistentCase => IssueLevel::Info,
        }
    }

    /// Get a human-readable display name for the kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::MissingValues => "Missing Values",
            Self::DuplicateRows => "Duplicate Rows",
            Self::MixedTypes => "Mixed Types",
            Self::Outliers => "Outliers",
            Self::InconsistentCase => "Inconsistent Case",
        }
    }
}

/// A single detected data-quality defect.
///
/// Issues are immutable value records: the analyzer collects them in
/// detector order (then column order within a detector) and never revises
/// them afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub title: String,
    pub description: String,
    /// Suggested remediation, phrased for the end user.
    pub recommendation: String,
    /// Affected column; `None` for dataset-wide issues such as duplicates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    pub severity: Severity,
}

impl Issue {
    /// Presentation level, derived from the kind.
    pub fn level(&self) -> IssueLevel {
        self.kind.level()
    }
}

/// The outcome of one analysis pass over a dataset.
///
/// Recomputed on every call; there is no caching contract across edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    /// Detected issues, in detector execution order.
    pub issues: Vec<Issue>,
    /// Overall quality score, 0 (worst) to 100 (clean).
    pub score: u8,
    /// Number of data rows that were analyzed.
    pub record_count: usize,
}

impl QualityReport {
    /// Check if any issues were found.
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Get issues for a specific column.
    pub fn column_issues(&self, column: &str) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|issue| issue.column.as_deref() == Some(column))
            .collect()
    }

    /// Serialize the report as pretty-printed JSON for host export.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(kind: IssueKind, severity: Severity, column: Option<&str>) -> Issue {
        Issue {
            kind,
            title: "t".to_string(),
            description: "d".to_string(),
            recommendation: "r".to_string(),
            column: column.map(str::to_string),
            severity,
        }
    }

    #[test]
    fn test_severity_weights() {
        assert_eq!(Severity::High.weight(), 30.0);
        assert_eq!(Severity::Medium.weight(), 15.0);
        assert_eq!(Severity::Low.weight(), 5.0);
    }

    #[test]
    fn test_issue_level_mapping() {
        assert_eq!(IssueKind::MissingValues.level(), IssueLevel::Error);
        assert_eq!(IssueKind::DuplicateRows.level(), IssueLevel::Warning);
        assert_eq!(IssueKind::MixedTypes.level(), IssueLevel::Warning);
        assert_eq!(IssueKind::Outliers.level(), IssueLevel::Info);
        assert_eq!(IssueKind::InconsistentCase.level(), IssueLevel::Info);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(IssueKind::MissingValues.display_name(), "Missing Values");
        assert_eq!(IssueKind::DuplicateRows.display_name(), "Duplicate Rows");
        assert_eq!(Severity::High.display_name(), "High");
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&IssueKind::MissingValues).unwrap();
        assert_eq!(json, "\"missing-values\"");
        let json = serde_json::to_string(&IssueKind::InconsistentCase).unwrap();
        assert_eq!(json, "\"inconsistent-case\"");
    }

    #[test]
    fn test_column_issues_filters_by_name() {
        let report = QualityReport {
            issues: vec![
                issue(IssueKind::MissingValues, Severity::Medium, Some("age")),
                issue(IssueKind::DuplicateRows, Severity::Medium, None),
                issue(IssueKind::MixedTypes, Severity::Medium, Some("age")),
            ],
            score: 50,
            record_count: 10,
        };
        assert_eq!(report.column_issues("age").len(), 2);
        assert!(report.column_issues("name").is_empty());
        assert!(report.has_issues());
    }

    #[test]
    fn test_report_json_roundtrip() {
        let report = QualityReport {
            issues: vec![issue(IssueKind::Outliers, Severity::Low, Some("price"))],
            score: 98,
            record_count: 1000,
        };
        let json = report.to_json().unwrap();
        assert!(json.contains("outliers"));
        assert!(json.contains("\"score\": 98"));

        let back: QualityReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }

    #[test]
    fn test_dataset_wide_issue_omits_column() {
        let json =
            serde_json::to_string(&issue(IssueKind::DuplicateRows, Severity::Medium, None))
                .unwrap();
        assert!(!json.contains("column"));
    }
}
