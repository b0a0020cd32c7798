use crate::config::ServerConfig;
use crate::error::ServerResult;
use catalog::Catalog;
use matcher::DefaultSearchEngine;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Search engine over the catalog loaded at startup
    pub engine: Arc<DefaultSearchEngine>,

    /// Prometheus render handle, present once a recorder is installed
    pub prometheus: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create new server state, loading the catalog described by `config`
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let catalog = Catalog::load(&config.catalog_config()?)?;
        Ok(Self::with_catalog(config, catalog))
    }

    /// Create server state around an already loaded catalog
    pub fn with_catalog(config: ServerConfig, catalog: Catalog) -> Self {
        Self {
            config: Arc::new(config),
            engine: Arc::new(DefaultSearchEngine::new(catalog)),
            prometheus: None,
        }
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        self.engine.catalog()
    }
}
