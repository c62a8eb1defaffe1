use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::issue::{Impact, Issue};

/// The result of scanning a single page. Built fresh per request and
/// returned once; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Weighted accessibility score, 0-100.
    pub score: u32,
    /// Total violation count across all issue types.
    #[serde(rename = "issuesCount")]
    pub issues_count: u32,
    pub issues: Vec<Issue>,
}

impl ScanReport {
    /// Returns a map of impact level to the number of issue types at that
    /// impact with at least one violation.
    pub fn impact_counts(&self) -> HashMap<Impact, usize> {
        let mut counts = HashMap::new();
        for issue in self.issues.iter().filter(|i| i.count > 0) {
            *counts.entry(issue.impact).or_insert(0) += 1;
        }
        counts
    }

    /// Returns the number of issue types with at least one violation.
    pub fn failing_types(&self) -> usize {
        self.issues.iter().filter(|i| i.count > 0).count()
    }
}

/// Score a fixed checklist: each issue type contributes count x weight in
/// deductions against a maximum of 10 points per type.
pub fn weighted_score(issues: &[Issue]) -> u32 {
    let max_score = (issues.len() as f64) * 10.0;
    if max_score == 0.0 {
        return 100;
    }

    let deductions: u32 = issues.iter().map(|i| i.count * i.impact.weight()).sum();
    let score = 100.0 - (deductions as f64 / max_score) * 100.0;
    score.max(0.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::issue::IssueLocation;

    fn checklist() -> Vec<Issue> {
        vec![
            Issue::new("Missing alt text on images", Impact::Serious),
            Issue::new("Empty links", Impact::Moderate),
            Issue::new("Missing form labels", Impact::Serious),
            Issue::new("Missing lang attribute", Impact::Moderate),
            Issue::new("Insufficient color contrast", Impact::Serious),
            Issue::new("Missing ARIA labels", Impact::Moderate),
            Issue::new("Improper heading structure", Impact::Moderate),
            Issue::new("Missing skip to content link", Impact::Moderate),
        ]
    }

    fn loc() -> IssueLocation {
        IssueLocation {
            element: "img".into(),
            code: "<img>".into(),
            line: 1,
        }
    }

    #[test]
    fn test_clean_checklist_scores_100() {
        assert_eq!(weighted_score(&checklist()), 100);
    }

    #[test]
    fn test_single_serious_violation_deducts_weight() {
        let mut issues = checklist();
        issues[0].record(loc());
        // One serious violation: 100 - 3/80 * 100 = 96.25 -> 96
        assert_eq!(weighted_score(&issues), 96);
    }

    #[test]
    fn test_score_floors_at_zero() {
        let mut issues = checklist();
        for _ in 0..100 {
            issues[0].record(loc());
        }
        assert_eq!(weighted_score(&issues), 0);
    }

    #[test]
    fn test_report_wire_shape() {
        let report = ScanReport {
            score: 100,
            issues_count: 0,
            issues: checklist(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["score"], 100);
        assert_eq!(json["issuesCount"], 0);
        assert_eq!(json["issues"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn test_failing_types_counts_only_nonzero() {
        let mut issues = checklist();
        issues[1].record(loc());
        issues[1].record(loc());
        let report = ScanReport {
            score: weighted_score(&issues),
            issues_count: 2,
            issues,
        };
        assert_eq!(report.failing_types(), 1);
    }
}
