use std::path::Path;

use super::types::A11yConfig;
use crate::errors::A11yError;

/// Load and validate a YAML configuration file. Missing keys fall back to
/// defaults; semantic problems (zero timeouts, empty rule tags) are rejected.
pub async fn parse_config(path: &Path) -> Result<A11yConfig, A11yError> {
    if !path.exists() {
        return Err(A11yError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(A11yError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config: A11yConfig = serde_yaml::from_str(&content)?;

    validate_semantics(&config)?;

    Ok(config)
}

fn validate_semantics(config: &A11yConfig) -> Result<(), A11yError> {
    if config.scan.fetch_timeout_secs == 0 {
        return Err(A11yError::Config("scan.fetch_timeout_secs must be nonzero".into()));
    }
    if config.scan.max_html_bytes == 0 {
        return Err(A11yError::Config("scan.max_html_bytes must be nonzero".into()));
    }
    if config.browser.timeout_secs == 0 {
        return Err(A11yError::Config("browser.timeout_secs must be nonzero".into()));
    }
    if config.browser.rule_tags.is_empty() {
        return Err(A11yError::Config("browser.rule_tags must not be empty".into()));
    }
    if config.browser.node_command.trim().is_empty() {
        return Err(A11yError::Config("browser.node_command must not be empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_missing_file() {
        let result = parse_config(Path::new("/nonexistent/a11yhelper.yaml")).await;
        assert!(matches!(result, Err(A11yError::Config(_))));
    }

    #[tokio::test]
    async fn test_empty_mapping_uses_defaults() {
        let file = write_config("{}");
        let config = parse_config(file.path()).await.unwrap();
        assert_eq!(config.scan.fetch_timeout_secs, 30);
    }

    #[tokio::test]
    async fn test_provider_override() {
        let file = write_config("scan:\n  provider: audit\nserver:\n  port: 9090\n");
        let config = parse_config(file.path()).await.unwrap();
        assert_eq!(config.scan.provider, crate::config::ProviderKind::Audit);
        assert_eq!(config.server.port, 9090);
    }

    #[tokio::test]
    async fn test_zero_timeout_rejected() {
        let file = write_config("scan:\n  fetch_timeout_secs: 0\n");
        let result = parse_config(file.path()).await;
        assert!(matches!(result, Err(A11yError::Config(_))));
    }

    #[tokio::test]
    async fn test_empty_rule_tags_rejected() {
        let file = write_config("browser:\n  rule_tags: []\n");
        let result = parse_config(file.path()).await;
        assert!(matches!(result, Err(A11yError::Config(_))));
    }

    #[tokio::test]
    async fn test_malformed_yaml_rejected() {
        let file = write_config("scan: [not, a, mapping");
        let result = parse_config(file.path()).await;
        assert!(result.is_err());
    }
}
