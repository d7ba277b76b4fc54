//! Quality score aggregation.

use crate::types::Issue;

/// Aggregate detected issues into an overall quality score.
///
/// Severity weights (high 30, medium 15, low 5) are summed and normalized
/// against the worst case of one high-severity issue per column, then
/// subtracted from 100, clamped to `[0, 100]`, and rounded to the nearest
/// integer. A dataset with no columns scores a clean 100: there is nothing
/// to penalize.
pub fn quality_score(issues: &[Issue], column_count: usize) -> u8 {
    if column_count == 0 {
        return 100;
    }
    let total_weight: f64 = issues.iter().map(|issue| issue.severity.weight()).sum();
    let max_possible = column_count as f64 * 30.0;
    let score = (100.0 - (total_weight / max_possible) * 100.0).clamp(0.0, 100.0);
    score.round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IssueKind, Severity};

    fn issue(severity: Severity) -> Issue {
        Issue {
            kind: IssueKind::MissingValues,
            title: "t".to_string(),
            description: "d".to_string(),
            recommendation: "r".to_string(),
            column: Some("c".to_string()),
            severity,
        }
    }

    #[test]
    fn test_no_issues_is_perfect() {
        assert_eq!(quality_score(&[], 5), 100);
    }

    #[test]
    fn test_zero_columns_is_perfect() {
        assert_eq!(quality_score(&[], 0), 100);
    }

    #[test]
    fn test_single_high_issue_single_column() {
        // 30 / 30 * 100 = 100 penalty
        assert_eq!(quality_score(&[issue(Severity::High)], 1), 0);
    }

    #[test]
    fn test_rounding_to_nearest() {
        // 100 - 5/30*100 = 83.33.. -> 83
        assert_eq!(quality_score(&[issue(Severity::Low)], 1), 83);
        // 100 - 15/60*100 = 75
        assert_eq!(quality_score(&[issue(Severity::Medium)], 2), 75);
    }

    #[test]
    fn test_clamped_at_zero() {
        let issues = vec![
            issue(Severity::High),
            issue(Severity::High),
            issue(Severity::High),
            issue(Severity::High),
        ];
        assert_eq!(quality_score(&issues, 1), 0);
    }

    #[test]
    fn test_high_issue_strictly_decreases_score() {
        for columns in 1..=6 {
            let mut issues = vec![issue(Severity::Medium)];
            let before = quality_score(&issues, columns);
            issues.push(issue(Severity::High));
            let after = quality_score(&issues, columns);
            assert!(after < before, "{columns} columns: {after} !< {before}");
        }
    }
}
