pub mod issue;
pub mod report;

pub use issue::{Impact, Issue, IssueLocation};
pub use report::{weighted_score, ScanReport};
