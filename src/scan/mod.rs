//! Scan providers: two interchangeable ways to produce a [`ScanReport`]
//! for a target URL, selected by configuration.

pub mod audit;
pub mod browser;
pub mod heuristics;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{A11yConfig, ProviderKind};
use crate::errors::A11yError;
use crate::models::ScanReport;

/// A source of accessibility scan reports. One provider is built at startup
/// and shared across requests; providers hold no per-request state.
#[async_trait]
pub trait ScanProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn scan(&self, url: &str) -> Result<ScanReport, A11yError>;
}

/// Reject anything that is not an absolute http/https URL.
pub fn validate_target(url: &str) -> Result<(), A11yError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(A11yError::InvalidTarget("URL is required".into()));
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(A11yError::InvalidTarget(format!(
            "URL must use http or https: {}",
            trimmed
        )));
    }
    Ok(())
}

/// Build the configured scan provider.
pub fn build_provider(config: &A11yConfig, client: reqwest::Client) -> Arc<dyn ScanProvider> {
    match config.scan.provider {
        ProviderKind::Heuristic => Arc::new(heuristics::HeuristicScanner::new(
            client,
            config.scan.clone(),
        )),
        ProviderKind::Audit => Arc::new(audit::AuditScanner::new(config.browser.clone())),
    }
}
