use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            base_url: "https://api.monobank.ua".to_string(),
        }
    }
}

fn default_anchor() -> u16 {
    // UAH; the Monobank feed quotes foreign currencies against it.
    980
}

fn default_cache_ttl_secs() -> u64 {
    1800
}

fn default_from_currency() -> String {
    "USD".to_string()
}

fn default_to_currency() -> String {
    "UAH".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Numeric ISO 4217 code of the anchor currency for cross rates.
    #[serde(default = "default_anchor")]
    pub anchor: u16,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_from_currency")]
    pub default_from: String,
    #[serde(default = "default_to_currency")]
    pub default_to: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            provider: ProviderConfig::default(),
            anchor: default_anchor(),
            cache_ttl_secs: default_cache_ttl_secs(),
            default_from: default_from_currency(),
            default_to: default_to_currency(),
        }
    }
}

impl AppConfig {
    /// Loads the config file from the default location, falling back to
    /// built-in defaults when no file exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "codito", "kursy")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
provider:
  base_url: "http://example.com/mono"
anchor: 978
cache_ttl_secs: 600
default_from: "EUR"
default_to: "PLN"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.provider.base_url, "http://example.com/mono");
        assert_eq!(config.anchor, 978);
        assert_eq!(config.cache_ttl_secs, 600);
        assert_eq!(config.default_from, "EUR");
        assert_eq!(config.default_to, "PLN");
    }

    #[test]
    fn test_config_defaults_apply_to_missing_fields() {
        let config: AppConfig = serde_yaml::from_str("anchor: 980").unwrap();
        assert_eq!(config.provider.base_url, "https://api.monobank.ua");
        assert_eq!(config.cache_ttl_secs, 1800);
        assert_eq!(config.default_from, "USD");
        assert_eq!(config.default_to, "UAH");
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_to: \"EUR\"").unwrap();

        let config = AppConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.default_to, "EUR");

        assert!(AppConfig::load_from_path("/nonexistent/config.yaml").is_err());
    }
}
