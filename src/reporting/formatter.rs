use crate::models::{Issue, ScanReport};

pub fn format_issue_markdown(issue: &Issue) -> String {
    let mut out = format!(
        "### {}\n\n**Impact:** {}\n**Occurrences:** {}\n",
        issue.issue_type, issue.impact, issue.count,
    );
    for loc in &issue.locations {
        let line = if loc.line > 0 {
            format!("line {}", loc.line)
        } else {
            "line unknown".to_string()
        };
        out.push_str(&format!("\n- `{}` ({}): `{}`", loc.element, line, loc.code));
    }
    out.push('\n');
    out
}

pub fn format_report_markdown(url: &str, report: &ScanReport) -> String {
    let mut out = format!(
        "# Accessibility Report\n\n**Target:** {}\n**Date:** {}\n**Score:** {}/100\n**Issues:** {}\n\n## Summary\n\n| Issue | Impact | Count |\n|---|---|---|\n",
        url,
        chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        report.score,
        report.issues_count,
    );
    for issue in &report.issues {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            issue.issue_type, issue.impact, issue.count
        ));
    }
    out.push('\n');
    for issue in report.issues.iter().filter(|i| i.count > 0) {
        out.push_str(&format_issue_markdown(issue));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{weighted_score, Impact, IssueLocation};

    fn sample_report() -> ScanReport {
        let mut issue = Issue::new("Missing alt text on images", Impact::Serious);
        issue.record(IssueLocation {
            element: "img".into(),
            code: "<img src=\"a.png\">".into(),
            line: 12,
        });
        let issues = vec![issue, Issue::new("Empty links", Impact::Moderate)];
        ScanReport {
            score: weighted_score(&issues),
            issues_count: 1,
            issues,
        }
    }

    #[test]
    fn test_markdown_has_summary_table() {
        let md = format_report_markdown("https://example.com", &sample_report());
        assert!(md.contains("| Missing alt text on images | serious | 1 |"));
        assert!(md.contains("| Empty links | moderate | 0 |"));
    }

    #[test]
    fn test_markdown_details_only_for_failing_types() {
        let md = format_report_markdown("https://example.com", &sample_report());
        assert!(md.contains("### Missing alt text on images"));
        assert!(!md.contains("### Empty links"));
        assert!(md.contains("line 12"));
    }
}
