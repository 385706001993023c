//! CLI configuration.

use anyhow::{Context, Result};
use cartwheel_pricing::prelude::*;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Warehouse origin the shipping calculator measures zones from.
    #[serde(default)]
    pub origin: OriginConfig,

    /// Store currency used when displaying rates.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            origin: OriginConfig::default(),
            currency: default_currency(),
        }
    }
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Warehouse origin address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OriginConfig {
    /// Origin country.
    #[serde(default)]
    pub country: String,

    /// Origin city.
    #[serde(default)]
    pub city: String,

    /// Origin street line.
    #[serde(default)]
    pub street: String,
}

impl OriginConfig {
    /// Build the origin address the calculator is anchored at.
    pub fn address(&self) -> Address {
        Address::new(self.country.clone(), self.city.clone(), self.street.clone())
    }
}

/// Generate a default cartwheel.toml config file.
pub fn generate_default_config() -> String {
    r#"# Cartwheel pricing configuration

# Store currency used when displaying rates.
currency = "USD"

# Warehouse the shipping calculator measures zones from.
[origin]
country = "USA"
city = "New York City"
street = "1 Warehouse Way"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_template_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.origin.country, "USA");
        assert_eq!(config.origin.city, "New York City");
        assert_eq!(config.currency, "USD");
    }

    #[test]
    fn test_empty_config_falls_back_to_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.currency, "USD");
        assert_eq!(config.origin.country, "");
        assert!(config.origin.address().one_line().starts_with(','));
    }
}
