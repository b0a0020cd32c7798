use catalog::{CatalogConfig, SourceConfig};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ServerError, ServerResult};

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum request body size in KB
    #[serde(default = "default_max_body_size_kb")]
    pub max_body_size_kb: usize,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Metrics endpoint enabled
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,

    /// Procedures JSON file; the bundled sample catalog is used when both
    /// paths are unset
    #[serde(default)]
    pub procedures_path: Option<PathBuf>,

    /// Hospitals JSON file
    #[serde(default)]
    pub hospitals_path: Option<PathBuf>,

    /// Refuse to start on catalog consistency issues
    #[serde(default)]
    pub strict_catalog: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_size_kb: default_max_body_size_kb(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            metrics_enabled: default_true(),
            procedures_path: None,
            hospitals_path: None,
            strict_catalog: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from `.env`, an optional `server` config file and
    /// `CARECOST_SERVER__*` environment variables, in increasing priority.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let builder = config::Config::builder()
            .add_source(config::File::with_name("server").required(false))
            .add_source(config::Environment::with_prefix("CARECOST_SERVER").separator("__"));

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max body size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_kb * 1024
    }

    /// Catalog loading settings derived from the path and strictness fields.
    pub fn catalog_config(&self) -> ServerResult<CatalogConfig> {
        let source = match (&self.procedures_path, &self.hospitals_path) {
            (None, None) => SourceConfig::bundled(),
            (Some(procedures), Some(hospitals)) => {
                SourceConfig::files(procedures.clone(), hospitals.clone())
            }
            _ => {
                return Err(ServerError::Config(
                    "procedures_path and hospitals_path must be set together".into(),
                ))
            }
        };
        Ok(CatalogConfig::new()
            .with_source(source)
            .with_strict(self.strict_catalog))
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_body_size_kb() -> usize {
    64
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
