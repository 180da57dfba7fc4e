//! Projector configuration with validation.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "QC_VIEW_";

/// How transaction values are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueFormat {
    /// Largest Wei denomination, e.g. `"3 Ether"`.
    #[default]
    Denominated,
    /// Plain decimal Wei.
    Decimal,
}

impl FromStr for ValueFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "denominated" => Ok(Self::Denominated),
            "decimal" => Ok(Self::Decimal),
            other => Err(ConfigError::InvalidValueFormat(other.to_string())),
        }
    }
}

/// View projector configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectorConfig {
    /// Rendering of `TransactionView::value`
    pub value_format: ValueFormat,
    /// Joins disassembly lines of contract-creation payloads
    pub disassembly_separator: String,
    /// Capture the textual block dump in `BlockView::raw`
    pub include_raw_dump: bool,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            value_format: ValueFormat::Denominated,
            disassembly_separator: "\n".to_string(),
            include_raw_dump: true,
        }
    }
}

impl ProjectorConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.disassembly_separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        Ok(())
    }

    /// Defaults overridden by `QC_VIEW_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each
    /// `QC_VIEW_*` key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let var = |name: &str| lookup(format!("{}{}", ENV_PREFIX, name).as_str());

        if let Some(format) = var("VALUE_FORMAT") {
            config.value_format = format.parse()?;
        }
        if let Some(separator) = var("DISASSEMBLY_SEPARATOR") {
            config.disassembly_separator = unescape(&separator);
        }
        if let Some(flag) = var("INCLUDE_RAW_DUMP") {
            config.include_raw_dump = parse_flag("INCLUDE_RAW_DUMP", &flag)?;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Environment values cannot easily carry control characters.
fn unescape(value: &str) -> String {
    value.replace("\\n", "\n").replace("\\t", "\t")
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key: format!("{}{}", ENV_PREFIX, key),
            value: value.to_string(),
        }),
    }
}
