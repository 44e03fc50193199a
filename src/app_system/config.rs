use std::path::Path;
use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable naming a TOML config file.
pub const CONFIG_ENV: &str = "REFILL_CONFIG";

/// Application settings. Every key is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Mailbox capacity of each actor.
    pub mailbox_size: usize,
    /// Currency label printed on invoices.
    pub currency: String,
    /// Invoice file name without extension.
    pub invoice_file_stem: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            mailbox_size: 32,
            currency: "Php".to_string(),
            invoice_file_stem: "my-order".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        if config.mailbox_size == 0 {
            anyhow::bail!("mailbox_size must be at least 1");
        }
        Ok(config)
    }

    /// Loads the file named by `REFILL_CONFIG`, or the defaults when it is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_take_defaults() {
        let config = AppConfig::parse("currency = \"PHP\"\n").unwrap();
        assert_eq!(config.currency, "PHP");
        assert_eq!(config.mailbox_size, 32);
        assert_eq!(config.invoice_file_stem, "my-order");
        assert_eq!(AppConfig::parse("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(AppConfig::parse("mailbox_size = 0").is_err());
        assert!(AppConfig::parse("mailbox_size = \"many\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("refill-order-config-{}.toml", std::process::id()));
        std::fs::write(&path, "log_filter = \"debug\"\nmailbox_size = 8\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.mailbox_size, 8);
        assert!(AppConfig::load(&path).is_err());
    }
}
