//! Heuristic scan provider: fetches raw HTML and evaluates a fixed
//! checklist of eight DOM predicates. Every report carries all eight issue
//! types in a stable order, including those with zero violations.

use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use crate::color::{contrast_ratio, Rgb};
use crate::config::ScanConfig;
use crate::errors::A11yError;
use crate::models::{weighted_score, Impact, Issue, IssueLocation, ScanReport};
use crate::scan::ScanProvider;
use crate::utils::truncation::truncate_snippet;

/// Contrast ratio below which inline color pairs are flagged.
const MIN_CONTRAST_RATIO: f64 = 4.5;

pub struct HeuristicScanner {
    client: reqwest::Client,
    config: ScanConfig,
}

impl HeuristicScanner {
    pub fn new(client: reqwest::Client, config: ScanConfig) -> Self {
        Self { client, config }
    }

    async fn fetch(&self, url: &str) -> Result<String, A11yError> {
        let deadline = Duration::from_secs(self.config.fetch_timeout_secs);
        let body = tokio::time::timeout(deadline, async {
            let resp = self.client.get(url).send().await?;
            resp.text().await
        })
        .await
        .map_err(|_| A11yError::Timeout(format!("Fetching {} timed out", url)))?
        .map_err(|e| A11yError::Network(format!("Failed to fetch {}: {}", url, e)))?;

        if body.len() > self.config.max_html_bytes {
            return Err(A11yError::Network(format!(
                "Fetched page is {} bytes, over the {} byte limit",
                body.len(),
                self.config.max_html_bytes
            )));
        }
        Ok(body)
    }
}

#[async_trait]
impl ScanProvider for HeuristicScanner {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    async fn scan(&self, url: &str) -> Result<ScanReport, A11yError> {
        let html = self.fetch(url).await?;
        debug!(url, bytes = html.len(), "Fetched page for heuristic scan");

        let issues = run_checks(&html);
        let issues_count: u32 = issues.iter().map(|i| i.count).sum();
        let score = weighted_score(&issues);

        info!(url, score, issues_count, "Heuristic scan complete");
        Ok(ScanReport {
            score,
            issues_count,
            issues,
        })
    }
}

/// The fixed checklist, in report order.
fn empty_checklist() -> Vec<Issue> {
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

/// Evaluate all eight checks against raw HTML. Pure and synchronous; the
/// parsed DOM never crosses an await point.
pub fn run_checks(html: &str) -> Vec<Issue> {
    let doc = Html::parse_document(html);
    let mut issues = empty_checklist();

    check_image_alt(&doc, html, &mut issues[0]);
    check_empty_links(&doc, html, &mut issues[1]);
    check_form_labels(&doc, html, &mut issues[2]);
    check_lang_attribute(&doc, &mut issues[3]);
    check_inline_contrast(&doc, html, &mut issues[4]);
    check_aria_labels(&doc, html, &mut issues[5]);
    check_heading_structure(&doc, html, &mut issues[6]);
    check_skip_link(&doc, html, &mut issues[7]);

    issues
}

/// Every `<img>` must carry a non-empty alt attribute.
fn check_image_alt(doc: &Html, html: &str, issue: &mut Issue) {
    let img_sel = Selector::parse("img").expect("valid selector");
    for (idx, el) in doc.select(&img_sel).enumerate() {
        let missing = el.value().attr("alt").map_or(true, |a| a.is_empty());
        if missing {
            issue.record(location_for(html, &el, idx));
        }
    }
}

/// `<a>` with no visible text and no described image inside it.
fn check_empty_links(doc: &Html, html: &str, issue: &mut Issue) {
    let a_sel = Selector::parse("a").expect("valid selector");
    let img_alt_sel = Selector::parse("img[alt]").expect("valid selector");
    for (idx, el) in doc.select(&a_sel).enumerate() {
        let text: String = el.text().collect();
        if text.trim().is_empty() && el.select(&img_alt_sel).next().is_none() {
            issue.record(location_for(html, &el, idx));
        }
    }
}

/// Form fields with an id but no matching `<label for=...>`. Fields without
/// an id are not flagged (mirrors the product's original behavior).
fn check_form_labels(doc: &Html, html: &str, issue: &mut Issue) {
    let field_sel = Selector::parse("input, select, textarea").expect("valid selector");
    let label_sel = Selector::parse("label").expect("valid selector");

    let labeled_ids: Vec<&str> = doc
        .select(&label_sel)
        .filter_map(|l| l.value().attr("for"))
        .collect();

    for el in doc.select(&field_sel) {
        if let Some(id) = el.value().attr("id") {
            if !labeled_ids.contains(&id) {
                let occurrence = tag_occurrence(doc, &el);
                issue.record(location_for(html, &el, occurrence));
            }
        }
    }
}

/// The root element must declare a language.
fn check_lang_attribute(doc: &Html, issue: &mut Issue) {
    let html_sel = Selector::parse("html").expect("valid selector");
    if let Some(root) = doc.select(&html_sel).next() {
        if root.value().attr("lang").map_or(true, |l| l.is_empty()) {
            issue.record(IssueLocation {
                element: "html".to_string(),
                code: truncate_snippet(&opening_tag(&root)),
                line: 1,
            });
        }
    }
}

/// Inline style color pairs below the WCAG AA ratio. Only elements whose
/// style declares both `color` and `background-color` as 6-digit hex values
/// are checked; everything else is skipped.
fn check_inline_contrast(doc: &Html, html: &str, issue: &mut Issue) {
    let any_sel = Selector::parse("[style]").expect("valid selector");
    let color_re = Regex::new(r"(?i)(?:^|;)\s*color\s*:\s*([^;]+)").expect("valid regex");
    let bg_re = Regex::new(r"(?i)background-color\s*:\s*([^;]+)").expect("valid regex");

    for el in doc.select(&any_sel) {
        let style = match el.value().attr("style") {
            Some(s) => s,
            None => continue,
        };
        let fg = color_re
            .captures(style)
            .and_then(|c| Rgb::from_hex(c[1].trim()));
        let bg = bg_re
            .captures(style)
            .and_then(|c| Rgb::from_hex(c[1].trim()));

        if let (Some(fg), Some(bg)) = (fg, bg) {
            if contrast_ratio(fg, bg) < MIN_CONTRAST_RATIO {
                let occurrence = tag_occurrence(doc, &el);
                issue.record(location_for(html, &el, occurrence));
            }
        }
    }
}

/// Elements carrying a role must be labeled for assistive technology.
fn check_aria_labels(doc: &Html, html: &str, issue: &mut Issue) {
    let role_sel = Selector::parse("[role]").expect("valid selector");
    for el in doc.select(&role_sel) {
        let v = el.value();
        if v.attr("aria-label").is_none() && v.attr("aria-labelledby").is_none() {
            let occurrence = tag_occurrence(doc, &el);
            issue.record(location_for(html, &el, occurrence));
        }
    }
}

/// Flags heading levels that jump up by more than one from the previous
/// heading. Decreases are never flagged, and a page without headings yields
/// nothing; both behaviors are kept as the product originally shipped them.
fn check_heading_structure(doc: &Html, html: &str, issue: &mut Issue) {
    let heading_sel = Selector::parse("h1, h2, h3, h4, h5, h6").expect("valid selector");
    let mut last_level: u32 = 0;
    for el in doc.select(&heading_sel) {
        let level = el
            .value()
            .name()
            .trim_start_matches('h')
            .parse::<u32>()
            .unwrap_or(0);
        if level > last_level + 1 {
            let occurrence = tag_occurrence(doc, &el);
            issue.record(location_for(html, &el, occurrence));
        }
        last_level = level;
    }
}

/// A same-page anchor whose text mentions "Skip" must exist.
fn check_skip_link(doc: &Html, html: &str, issue: &mut Issue) {
    let anchor_sel = Selector::parse(r##"a[href^="#"]"##).expect("valid selector");
    let has_skip = doc
        .select(&anchor_sel)
        .any(|a| a.text().collect::<String>().contains("Skip"));
    if !has_skip {
        issue.record(IssueLocation {
            element: "body".to_string(),
            code: "<body> (Skip to content link should be at the beginning of the body)"
                .to_string(),
            line: line_of(html, "<body"),
        });
    }
}

/// Reconstruct an element's opening tag with its attributes in source order.
fn opening_tag(el: &ElementRef) -> String {
    let v = el.value();
    let attrs: String = v
        .attrs()
        .map(|(k, val)| format!(" {}=\"{}\"", k, val))
        .collect();
    format!("<{}{}>", v.name(), attrs)
}

/// Position of `el` among all elements sharing its tag, in document order.
fn tag_occurrence(doc: &Html, el: &ElementRef) -> usize {
    let sel = Selector::parse(el.value().name()).expect("valid selector");
    doc.select(&sel)
        .position(|candidate| candidate.id() == el.id())
        .unwrap_or(0)
}

fn location_for(html: &str, el: &ElementRef, occurrence: usize) -> IssueLocation {
    let tag = el.value().name();
    IssueLocation {
        element: tag.to_string(),
        code: truncate_snippet(&opening_tag(el)),
        line: estimate_line(html, tag, occurrence),
    }
}

/// Estimate the 1-based line of the n-th `<tag` occurrence in the raw
/// source, requiring a tag-name boundary so `<a` does not match `<abbr`.
/// Returns -1 when the occurrence cannot be located.
fn estimate_line(html: &str, tag: &str, occurrence: usize) -> i64 {
    let needle = format!("<{}", tag);
    let mut seen = 0;
    for (line_idx, line) in html.lines().enumerate() {
        let lower = line.to_lowercase();
        let mut from = 0;
        while let Some(pos) = lower[from..].find(&needle) {
            let end = from + pos + needle.len();
            let bounded = lower[end..]
                .chars()
                .next()
                .map_or(true, |c| !c.is_ascii_alphanumeric());
            if bounded {
                if seen == occurrence {
                    return (line_idx + 1) as i64;
                }
                seen += 1;
            }
            from = end;
        }
    }
    -1
}

/// Line of the first raw occurrence of `needle`, or -1.
fn line_of(html: &str, needle: &str) -> i64 {
    html.lines()
        .position(|l| l.contains(needle))
        .map(|i| (i + 1) as i64)
        .unwrap_or(-1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAN_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head><title>Fine page</title></head>
<body>
<a href="#main">Skip to content</a>
<h1>Welcome</h1>
<h2>Details</h2>
<img src="logo.png" alt="Company logo">
<a href="/about">About us</a>
<form>
<label for="email">Email</label>
<input id="email" type="email">
</form>
<div role="navigation" aria-label="Primary">nav</div>
<p style="color: #000000; background-color: #ffffff">readable</p>
<main id="main">content</main>
</body>
</html>"##;

    fn counts(html: &str) -> Vec<u32> {
        run_checks(html).iter().map(|i| i.count).collect()
    }

    #[test]
    fn test_clean_page_has_no_issues() {
        let issues = run_checks(CLEAN_PAGE);
        let total: u32 = issues.iter().map(|i| i.count).sum();
        assert_eq!(total, 0, "unexpected issues: {:?}", issues);
        assert_eq!(weighted_score(&issues), 100);
        assert_eq!(issues.len(), 8);
    }

    #[test]
    fn test_missing_alt_counts_per_occurrence() {
        let html = r##"<html lang="en"><body>
<a href="#m">Skip</a><h1>t</h1>
<img src="a.png">
<img src="b.png" alt="described">
<img src="c.png">
</body></html>"##;
        assert_eq!(counts(html)[0], 2);
    }

    #[test]
    fn test_empty_alt_is_flagged() {
        let html = r##"<html lang="en"><body><a href="#m">Skip</a><img src="a.png" alt=""></body></html>"##;
        assert_eq!(counts(html)[0], 1);
    }

    #[test]
    fn test_empty_link_flagged() {
        let html = r##"<html lang="en"><body><a href="#m">Skip</a><a href="/x"></a></body></html>"##;
        assert_eq!(counts(html)[1], 1);
    }

    #[test]
    fn test_link_with_described_image_not_flagged() {
        let html = r##"<html lang="en"><body><a href="#m">Skip</a><a href="/x"><img src="i.png" alt="Home"></a></body></html>"##;
        assert_eq!(counts(html)[1], 0);
    }

    #[test]
    fn test_unlabeled_field_flagged() {
        let html = r##"<html lang="en"><body><a href="#m">Skip</a>
<input id="name" type="text">
<select id="choice"></select>
</body></html>"##;
        assert_eq!(counts(html)[2], 2);
    }

    #[test]
    fn test_field_without_id_not_flagged() {
        let html = r##"<html lang="en"><body><a href="#m">Skip</a><input type="text"></body></html>"##;
        assert_eq!(counts(html)[2], 0);
    }

    #[test]
    fn test_missing_lang_reported_at_line_one() {
        let html = r##"<html><body><a href="#m">Skip</a></body></html>"##;
        let issues = run_checks(html);
        assert_eq!(issues[3].count, 1);
        assert_eq!(issues[3].locations[0].line, 1);
    }

    #[test]
    fn test_low_contrast_inline_style_flagged() {
        let html = r##"<html lang="en"><body><a href="#m">Skip</a>
<p style="color: #777777; background-color: #888888">murky</p>
</body></html>"##;
        assert_eq!(counts(html)[4], 1);
    }

    #[test]
    fn test_good_contrast_not_flagged() {
        let html = r##"<html lang="en"><body><a href="#m">Skip</a>
<p style="color: #000000; background-color: #ffffff">crisp</p>
</body></html>"##;
        assert_eq!(counts(html)[4], 0);
    }

    #[test]
    fn test_unparseable_colors_skipped() {
        let html = r##"<html lang="en"><body><a href="#m">Skip</a>
<p style="color: red; background-color: var(--bg)">named</p>
</body></html>"##;
        assert_eq!(counts(html)[4], 0);
    }

    #[test]
    fn test_role_without_label_flagged() {
        let html = r##"<html lang="en"><body><a href="#m">Skip</a>
<div role="dialog">bare</div>
<div role="navigation" aria-labelledby="navheading">ok</div>
</body></html>"##;
        assert_eq!(counts(html)[5], 1);
    }

    #[test]
    fn test_heading_skip_flagged_once() {
        let html = r##"<html lang="en"><body><a href="#m">Skip</a>
<h1>one</h1>
<h3>three</h3>
</body></html>"##;
        assert_eq!(counts(html)[6], 1);
    }

    #[test]
    fn test_sequential_headings_clean() {
        let html = r##"<html lang="en"><body><a href="#m">Skip</a>
<h1>one</h1><h2>two</h2><h3>three</h3>
</body></html>"##;
        assert_eq!(counts(html)[6], 0);
    }

    #[test]
    fn test_heading_decrease_never_flagged() {
        let html = r##"<html lang="en"><body><a href="#m">Skip</a>
<h1>one</h1><h2>two</h2><h3>three</h3><h1>back</h1>
</body></html>"##;
        assert_eq!(counts(html)[6], 0);
    }

    #[test]
    fn test_first_heading_above_h1_flagged() {
        // Walking starts from level 0, so an initial h2 is a jump of two.
        let html = r##"<html lang="en"><body><a href="#m">Skip</a><h2>start</h2></body></html>"##;
        assert_eq!(counts(html)[6], 1);
    }

    #[test]
    fn test_missing_skip_link_flagged_once() {
        let html = r##"<html lang="en"><body><h1>t</h1><a href="/about">About</a></body></html>"##;
        let issues = run_checks(html);
        assert_eq!(issues[7].count, 1);
        assert_eq!(issues[7].locations[0].element, "body");
    }

    #[test]
    fn test_external_skip_text_does_not_satisfy() {
        // The anchor must be a same-page fragment link.
        let html = r##"<html lang="en"><body><a href="/skip">Skip to content</a><h1>t</h1></body></html>"##;
        assert_eq!(counts(html)[7], 1);
    }

    #[test]
    fn test_line_estimation_finds_nth_image() {
        let html = "<html lang=\"en\">\n<body>\n<a href=\"#m\">Skip</a>\n<img src=\"a.png\" alt=\"a\">\n<img src=\"b.png\">\n</body>\n</html>";
        let issues = run_checks(html);
        assert_eq!(issues[0].count, 1);
        assert_eq!(issues[0].locations[0].line, 5);
    }

    #[test]
    fn test_estimate_line_tag_boundary() {
        // `<a` must not match `<abbr`.
        let html = "<abbr>x</abbr>\n<a href=\"/y\">y</a>";
        assert_eq!(estimate_line(html, "a", 0), 2);
    }

    #[test]
    fn test_one_serious_violation_scores_96() {
        let html = r##"<html lang="en"><body><a href="#m">Skip</a><h1>t</h1><img src="a.png"></body></html>"##;
        let issues = run_checks(html);
        assert_eq!(weighted_score(&issues), 96);
    }
}
