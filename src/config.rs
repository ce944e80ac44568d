//! Policy configuration module
//!
//! Handles loading and validating the password policy from the service
//! configuration file.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Characters counted as "special" when the configuration does not say otherwise.
pub const DEFAULT_SPECIALS: &str = " äöüÄÖÜß,.-;:_!/%";

const CONFIG_PATH_ENV: &str = "PWD_POLICY_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./config.yaml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("min_length ({min}) is greater than max_length ({max})")]
    LengthBounds { min: usize, max: usize },
}

/// Password policy rules.
///
/// A threshold of `0` (or a flag set to `false`) disables the matching rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    pub min_length: usize,
    pub max_length: usize,
    pub min_lowers: usize,
    pub min_uppers: usize,
    pub min_digits: usize,
    pub min_specials: usize,
    pub specials: String,
    pub forbid_others: bool,
    pub forbid_username: bool,
    pub forbid_reuse: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_length: 0,
            max_length: 0,
            min_lowers: 0,
            min_uppers: 0,
            min_digits: 0,
            min_specials: 0,
            specials: DEFAULT_SPECIALS.to_string(),
            forbid_others: false,
            forbid_username: false,
            forbid_reuse: false,
        }
    }
}

impl PolicyConfig {
    /// Rejects policies no password could ever satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_length != 0 && self.max_length != 0 && self.min_length > self.max_length {
            return Err(ConfigError::LengthBounds {
                min: self.min_length,
                max: self.max_length,
            });
        }

        // Kept as-is: min_specials is never enforced without a special set.
        #[cfg(feature = "tracing")]
        {
            if self.min_specials != 0 && self.specials.is_empty() {
                tracing::warn!(
                    "min_specials is {} but no special characters are defined, the rule will never fail",
                    self.min_specials
                );
            }
        }

        Ok(())
    }
}

/// The `policy` section of the config file.
///
/// Unknown keys are rejected so a misspelled threshold cannot silently disable its rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "serde_yaml::Mapping")]
pub struct PolicySection {
    pub enable: bool,
    pub rules: PolicyConfig,
}

impl TryFrom<serde_yaml::Mapping> for PolicySection {
    type Error = serde_yaml::Error;

    fn try_from(mut mapping: serde_yaml::Mapping) -> Result<Self, Self::Error> {
        let enable = match mapping.remove("enable") {
            Some(value) => serde_yaml::from_value(value)?,
            None => false,
        };
        let rules = serde_yaml::from_value(serde_yaml::Value::Mapping(mapping))?;
        Ok(Self { enable, rules })
    }
}

/// Settings read from the config file. Sections other than `policy` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PolicySettings {
    #[serde(default)]
    pub policy: Option<PolicySection>,
}

impl PolicySettings {
    /// Parses and validates settings from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document means "nothing configured"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: PolicySettings = serde_yaml::from_str(yaml)?;
        if let Some(section) = &settings.policy {
            section.rules.validate()?;
        }
        Ok(settings)
    }

    /// Returns the policy to evaluate against, or `None` when no policy is enabled.
    pub fn active_policy(&self) -> Option<&PolicyConfig> {
        self.policy
            .as_ref()
            .filter(|section| section.enable)
            .map(|section| &section.rules)
    }
}

/// Returns the config file path.
///
/// Priority:
/// 1. Environment variable `PWD_POLICY_CONFIG`
/// 2. Default path `./config.yaml`
pub fn get_config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Loads the policy settings from the path returned by [`get_config_path`].
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is not valid YAML for the settings model (including negative thresholds)
/// - `min_length` exceeds `max_length`
pub fn load_settings() -> Result<PolicySettings, ConfigError> {
    let path = get_config_path();
    load_settings_from_path(&path)
}

/// Loads the policy settings from a specific file path.
pub fn load_settings_from_path<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<PolicySettings, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Policy config loading FAILED: FileNotFound {:?}", path);
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let settings = PolicySettings::from_yaml(&content)?;

    #[cfg(feature = "tracing")]
    tracing::info!(
        "Policy config loaded from {:?} (policy enabled: {})",
        path,
        settings.active_policy().is_some()
    );

    Ok(settings)
}
