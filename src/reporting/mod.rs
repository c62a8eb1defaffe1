pub mod formatter;

pub use formatter::{format_issue_markdown, format_report_markdown};
