use serde::{Deserialize, Serialize};

/// Impact level of an accessibility issue, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Minor,
    Moderate,
    Serious,
    Critical,
}

impl Impact {
    /// Scoring weight: minor = 1, moderate = 2, serious = 3, critical = 4.
    pub fn weight(&self) -> u32 {
        match self {
            Impact::Minor => 1,
            Impact::Moderate => 2,
            Impact::Serious => 3,
            Impact::Critical => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::Minor => "minor",
            Impact::Moderate => "moderate",
            Impact::Serious => "serious",
            Impact::Critical => "critical",
        }
    }

    /// Parse an audit-engine impact string, defaulting unknown values to serious.
    pub fn from_engine_str(s: &str) -> Self {
        match s {
            "minor" => Impact::Minor,
            "moderate" => Impact::Moderate,
            "critical" => Impact::Critical,
            _ => Impact::Serious,
        }
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where in the scanned page a violation was observed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueLocation {
    /// Tag name (or selector for audit-engine findings).
    pub element: String,
    /// Serialized source snippet, truncated for transport.
    pub code: String,
    /// 1-based line number in the fetched source, -1 when unknown.
    pub line: i64,
}

/// One category of accessibility violation and every place it occurred.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub issue_type: String,
    pub count: u32,
    pub impact: Impact,
    pub locations: Vec<IssueLocation>,
}

impl Issue {
    pub fn new(issue_type: &str, impact: Impact) -> Self {
        Self {
            issue_type: issue_type.to_string(),
            count: 0,
            impact,
            locations: Vec::new(),
        }
    }

    /// Record one violating element.
    pub fn record(&mut self, location: IssueLocation) {
        self.count += 1;
        self.locations.push(location);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_weights_ordered() {
        assert!(Impact::Minor.weight() < Impact::Moderate.weight());
        assert!(Impact::Moderate.weight() < Impact::Serious.weight());
        assert!(Impact::Serious.weight() < Impact::Critical.weight());
    }

    #[test]
    fn test_impact_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Impact::Serious).unwrap(), "\"serious\"");
        let parsed: Impact = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(parsed, Impact::Critical);
    }

    #[test]
    fn test_impact_from_engine_str_unknown_is_serious() {
        assert_eq!(Impact::from_engine_str("minor"), Impact::Minor);
        assert_eq!(Impact::from_engine_str("unheard-of"), Impact::Serious);
    }

    #[test]
    fn test_issue_record_increments_count() {
        let mut issue = Issue::new("Missing alt text on images", Impact::Serious);
        issue.record(IssueLocation {
            element: "img".into(),
            code: "<img src=\"a.png\">".into(),
            line: 4,
        });
        assert_eq!(issue.count, 1);
        assert_eq!(issue.locations.len(), 1);
    }

    #[test]
    fn test_issue_serializes_type_field() {
        let issue = Issue::new("Empty links", Impact::Moderate);
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["type"], "Empty links");
        assert_eq!(json["impact"], "moderate");
    }
}
