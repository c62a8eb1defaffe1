use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct A11yConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub browser: BrowserConfig,
    #[serde(default)]
    pub cost: CostConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Which scan provider answers `/api/accessibility-check`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Fetch raw HTML and run the fixed heuristic checklist.
    #[default]
    Heuristic,
    /// Drive a headless browser and run the axe audit engine in-page.
    Audit,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heuristic => "heuristic",
            Self::Audit => "audit",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanConfig {
    #[serde(default)]
    pub provider: ProviderKind,
    /// Timeout for fetching the target page, seconds.
    pub fetch_timeout_secs: u64,
    /// Cap on fetched HTML size; larger pages are rejected.
    pub max_html_bytes: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Heuristic,
            fetch_timeout_secs: 30,
            max_html_bytes: 5 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Command used to launch the headless-browser driver script.
    pub node_command: String,
    /// Hard deadline for the whole launch-navigate-audit cycle, seconds.
    pub timeout_secs: u64,
    /// URL of the audit-engine script injected into the page.
    pub axe_script_url: String,
    /// Rule tags the audit run is restricted to.
    pub rule_tags: Vec<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            node_command: "node".to_string(),
            timeout_secs: 60,
            axe_script_url: "https://cdnjs.cloudflare.com/ajax/libs/axe-core/4.10.2/axe.min.js"
                .to_string(),
            rule_tags: vec!["wcag2a".to_string(), "wcag2aa".to_string()],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CostConfig {
    /// Base URL of the exchange-rate API.
    pub exchange_api_base: String,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            exchange_api_base: "https://api.exchangerate-api.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}
