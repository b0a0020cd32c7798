//! YAML configuration file support for CareCost
//!
//! One file configures where the catalog comes from, how searches are
//! ordered by default and how the binaries log.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # CareCost configuration
//! version: "1.0"
//! name: "nyc-sample"
//!
//! catalog:
//!   procedures_path: "data/procedures.json"
//!   hospitals_path: "data/hospitals.json"
//!   strict: true
//!
//! search:
//!   default_sort: "price"
//!
//! logging:
//!   level: "info"
//!   json: false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use catalog::{CatalogConfig, SourceConfig};
use matcher::SortKey;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CareCostConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Catalog source and validation
    #[serde(default)]
    pub catalog: CatalogYamlConfig,

    /// Search defaults
    #[serde(default)]
    pub search: SearchYamlConfig,

    /// Logging for the binaries
    #[serde(default)]
    pub logging: LoggingYamlConfig,
}

impl CareCostConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: CareCostConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.catalog.validate()?;
        self.search.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Catalog loading settings for [`catalog::Catalog::load`].
    pub fn catalog_config(&self) -> CatalogConfig {
        self.catalog.to_catalog_config()
    }

    /// Sort order used when a search does not ask for one.
    pub fn default_sort(&self) -> SortKey {
        self.search.sort_key().unwrap_or_default()
    }
}

impl Default for CareCostConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            catalog: CatalogYamlConfig::default(),
            search: SearchYamlConfig::default(),
            logging: LoggingYamlConfig::default(),
        }
    }
}

/// Catalog YAML configuration
///
/// Both paths or neither; neither selects the bundled sample catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogYamlConfig {
    #[serde(default)]
    pub procedures_path: Option<PathBuf>,

    #[serde(default)]
    pub hospitals_path: Option<PathBuf>,

    /// Reject catalogs with consistency issues
    #[serde(default)]
    pub strict: bool,
}

impl CatalogYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.procedures_path.is_some() != self.hospitals_path.is_some() {
            return Err(ConfigLoadError::Validation(
                "catalog.procedures_path and catalog.hospitals_path must be set together"
                    .to_string(),
            ));
        }
        Ok(())
    }

    fn to_catalog_config(&self) -> CatalogConfig {
        let source = match (&self.procedures_path, &self.hospitals_path) {
            (Some(procedures), Some(hospitals)) => {
                SourceConfig::files(procedures.clone(), hospitals.clone())
            }
            _ => SourceConfig::bundled(),
        };
        CatalogConfig::new()
            .with_source(source)
            .with_strict(self.strict)
    }
}

/// Search YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchYamlConfig {
    #[serde(default = "default_sort")]
    pub default_sort: String,
}

impl SearchYamlConfig {
    fn sort_key(&self) -> Result<SortKey, matcher::SearchError> {
        self.default_sort.parse()
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.sort_key()
            .map(|_| ())
            .map_err(|e| ConfigLoadError::Validation(format!("search.default_sort: {e}")))
    }
}

impl Default for SearchYamlConfig {
    fn default() -> Self {
        Self {
            default_sort: default_sort(),
        }
    }
}

/// Logging YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingYamlConfig {
    /// `EnvFilter` directive, e.g. `info` or `carecost=debug,matcher=trace`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl LoggingYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.level.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggingYamlConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_sort() -> String {
    "price".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
