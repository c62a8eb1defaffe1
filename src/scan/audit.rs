//! Audit scan provider: drives a one-shot headless browser to the target
//! URL, injects the axe audit engine into the page, and maps its violations
//! into the report shape shared with the heuristic provider.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::config::BrowserConfig;
use crate::errors::A11yError;
use crate::models::{Impact, Issue, IssueLocation, ScanReport};
use crate::scan::browser::AuditProcess;
use crate::scan::{validate_target, ScanProvider};
use crate::utils::truncation::truncate_snippet;

pub struct AuditScanner {
    config: BrowserConfig,
}

impl AuditScanner {
    pub fn new(config: BrowserConfig) -> Self {
        Self { config }
    }

    /// Generate the one-shot driver script: launch, navigate, inject the
    /// engine, run it restricted to the configured rule tags, emit JSON on
    /// stdout, and close the browser on every path.
    fn driver_script(&self, url: &str) -> Result<String, A11yError> {
        let url_json = serde_json::to_string(url)?;
        let engine_json = serde_json::to_string(&self.config.axe_script_url)?;
        let tags_json = serde_json::to_string(&self.config.rule_tags)?;

        Ok(format!(
            r#"const pw = require('playwright');

(async () => {{
  const browser = await pw.chromium.launch({{headless: true, args: ['--no-sandbox', '--disable-dev-shm-usage']}});
  try {{
    const context = await browser.newContext({{ignoreHTTPSErrors: true}});
    const page = await context.newPage();
    await page.goto({url_json}, {{waitUntil: 'domcontentloaded', timeout: 30000}});
    await page.addScriptTag({{url: {engine_json}}});
    const results = await page.evaluate(async (tags) => {{
      return await axe.run(document, {{runOnly: {{type: 'tag', values: tags}}}});
    }}, {tags_json});
    const report = {{
      passes: results.passes.length,
      violations: results.violations.map(v => ({{
        id: v.id,
        impact: v.impact,
        help: v.help,
        nodes: v.nodes.map(n => ({{target: n.target.join(' '), html: n.html}})),
      }})),
    }};
    process.stdout.write(JSON.stringify(report));
  }} finally {{
    await browser.close();
  }}
}})().catch(e => {{
  process.stderr.write(String(e));
  process.exit(1);
}});"#
        ))
    }
}

#[async_trait]
impl ScanProvider for AuditScanner {
    fn name(&self) -> &'static str {
        "audit"
    }

    async fn scan(&self, url: &str) -> Result<ScanReport, A11yError> {
        validate_target(url)?;

        let script = self.driver_script(url)?;
        let mut process = AuditProcess::spawn(&self.config.node_command, &["-e", &script])?;
        let result = process
            .wait_output(Duration::from_secs(self.config.timeout_secs))
            .await;
        process.close().await;

        let stdout = result?;
        let engine: EngineOutput = serde_json::from_str(stdout.trim())
            .map_err(|e| A11yError::Audit(format!("Unparseable engine output: {}", e)))?;

        let report = build_report(engine);
        info!(
            url,
            score = report.score,
            issues_count = report.issues_count,
            "Audit scan complete"
        );
        Ok(report)
    }
}

#[derive(Debug, Deserialize)]
struct EngineOutput {
    passes: u32,
    violations: Vec<EngineViolation>,
}

#[derive(Debug, Deserialize)]
struct EngineViolation {
    #[allow(dead_code)]
    id: String,
    impact: Option<String>,
    help: String,
    nodes: Vec<EngineNode>,
}

#[derive(Debug, Deserialize)]
struct EngineNode {
    target: String,
    html: String,
}

/// One issue per violated rule; count is the number of affected elements.
/// Score is the passed-rule fraction: passes / (passes + violated rules).
fn build_report(engine: EngineOutput) -> ScanReport {
    let violated_rules = engine.violations.len() as u32;
    let checks = engine.passes + violated_rules;
    let score = if checks == 0 {
        100
    } else {
        ((engine.passes as f64 / checks as f64) * 100.0).round() as u32
    };

    let issues: Vec<Issue> = engine
        .violations
        .into_iter()
        .map(|v| {
            let impact = v
                .impact
                .as_deref()
                .map(Impact::from_engine_str)
                .unwrap_or(Impact::Serious);
            let locations = v
                .nodes
                .iter()
                .map(|n| IssueLocation {
                    element: n.target.clone(),
                    code: truncate_snippet(&n.html),
                    line: -1,
                })
                .collect();
            Issue {
                issue_type: v.help,
                count: v.nodes.len() as u32,
                impact,
                locations,
            }
        })
        .collect();

    let issues_count = issues.iter().map(|i| i.count).sum();
    ScanReport {
        score,
        issues_count,
        issues,
    }
}
