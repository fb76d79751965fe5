//! Configuration module for vpnhelper
//!
//! Handles loading and merging configuration from multiple sources:
//! - Default values
//! - System configuration (/etc/vpnhelper/config.toml)
//! - User configuration (~/.config/vpnhelper/config.toml)
//! - Project configuration (./vpnhelper.toml)
//! - Environment variables
//!
//! Command-line flags are applied on top by the binary.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// AWS client settings
    pub aws: AwsConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// AWS client settings. Unset fields fall back to the SDK's own resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsConfig {
    /// Region, e.g. `us-east-1`
    pub region: Option<String>,

    /// Named profile from the shared AWS config files
    pub profile: Option<String>,

    /// Custom endpoint URL (LocalStack and similar)
    pub endpoint_url: Option<String>,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Plain,
    /// One JSON object per event
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(LogFormat::Plain),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("Invalid log format '{}'. Valid formats: plain, json", other),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when neither `RUST_LOG` nor `-v` is given
    pub level: Option<String>,

    /// Output format
    pub format: LogFormat,
}

impl Config {
    /// Load configuration from standard locations
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        let mut config = Config::default();

        for path in Self::get_config_paths(config_path) {
            if path.exists() {
                config = config.merge_from_file(&path)?;
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Get the list of configuration file paths to check
    fn get_config_paths(explicit_path: Option<&PathBuf>) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Explicit path takes priority
        if let Some(path) = explicit_path {
            paths.push(path.clone());
            return paths;
        }

        if let Ok(env_config) = std::env::var("VPNHELPER_CONFIG") {
            paths.push(PathBuf::from(env_config));
            return paths;
        }

        paths.push(PathBuf::from("/etc/vpnhelper/config.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("vpnhelper/config.toml"));
        }

        paths.push(PathBuf::from("vpnhelper.toml"));

        paths
    }

    /// Merge configuration from a file
    fn merge_from_file(&self, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let file_config: Config = match extension {
            "yml" | "yaml" => serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?,
            "json" => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?,
            _ => toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?,
        };

        Ok(self.merge(file_config))
    }

    /// Merge another config into this one; set values in `other` win
    fn merge(&self, other: Config) -> Config {
        Config {
            aws: AwsConfig {
                region: other.aws.region.or_else(|| self.aws.region.clone()),
                profile: other.aws.profile.or_else(|| self.aws.profile.clone()),
                endpoint_url: other
                    .aws
                    .endpoint_url
                    .or_else(|| self.aws.endpoint_url.clone()),
            },
            logging: LoggingConfig {
                level: other.logging.level.or_else(|| self.logging.level.clone()),
                format: if other.logging.format == LogFormat::default() {
                    self.logging.format
                } else {
                    other.logging.format
                },
            },
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(region) = std::env::var("VPNHELPER_REGION") {
            self.aws.region = Some(region);
        }

        if let Ok(profile) = std::env::var("VPNHELPER_PROFILE") {
            self.aws.profile = Some(profile);
        }

        if let Ok(endpoint) = std::env::var("VPNHELPER_ENDPOINT_URL") {
            self.aws.endpoint_url = Some(endpoint);
        }

        if let Ok(level) = std::env::var("VPNHELPER_LOG_LEVEL") {
            self.logging.level = Some(level);
        }

        if let Ok(format) = std::env::var("VPNHELPER_LOG_FORMAT") {
            self.logging.format = format
                .parse()
                .context("Invalid VPNHELPER_LOG_FORMAT")?;
        }

        Ok(())
    }

    /// Load configuration from a single file on top of the defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Config::default().merge_from_file(path.as_ref())
    }
}
