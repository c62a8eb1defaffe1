pub mod commands;
pub mod contrast;
pub mod estimate;
pub mod glossary;
pub mod scan;
pub mod serve;

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::config::{self, A11yConfig};
use crate::errors::A11yError;

pub use commands::{Cli, Commands};

/// Load the YAML config when a path is given, otherwise use defaults.
pub async fn load_config(path: Option<&str>) -> Result<A11yConfig, A11yError> {
    match path {
        Some(p) => config::parse_config(Path::new(p)).await,
        None => Ok(A11yConfig::default()),
    }
}

/// Parse a CLI string through the same wire names the API accepts
/// (e.g. "html-css-js", "expedited", "audit").
pub fn parse_wire<T: DeserializeOwned>(value: &str, what: &str) -> Result<T, A11yError> {
    serde_yaml::from_str(value)
        .map_err(|_| A11yError::Config(format!("Unknown {}: {}", what, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderKind;
    use crate::cost::{ServiceAddOn, TechStack, Timeline};

    #[test]
    fn test_parse_wire_enums() {
        let stack: TechStack = parse_wire("html-css-js", "tech stack").unwrap();
        assert_eq!(stack, TechStack::HtmlCssJs);
        let timeline: Timeline = parse_wire("urgent", "timeline").unwrap();
        assert_eq!(timeline, Timeline::Urgent);
        let service: ServiceAddOn = parse_wire("dev-session", "service").unwrap();
        assert_eq!(service, ServiceAddOn::DevSession);
        let provider: ProviderKind = parse_wire("audit", "provider").unwrap();
        assert_eq!(provider, ProviderKind::Audit);
    }

    #[test]
    fn test_parse_wire_rejects_unknown() {
        let result: Result<Timeline, _> = parse_wire("yesterday", "timeline");
        assert!(matches!(result, Err(A11yError::Config(_))));
    }

    #[tokio::test]
    async fn test_load_config_defaults_without_path() {
        let config = load_config(None).await.unwrap();
        assert_eq!(config.server.port, 8080);
    }
}
