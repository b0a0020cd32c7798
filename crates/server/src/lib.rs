//! CareCost Server - HTTP REST API for procedure price search
//!
//! This crate exposes the CareCost search engine over HTTP:
//!
//! - **Search**: price a procedure at every hospital that lists it, with
//!   cash, plan or provider-wide insurance prices and distance tiers
//! - **Catalog lookups**: procedure suggestions, procedure and hospital details
//! - **Health & Metrics**: Liveness/readiness probes and Prometheus metrics
//!
//! # Features
//!
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging
//! - **Configuration**: Environment variable and file-based configuration
//! - **Error Handling**: JSON error bodies with stable error codes
//! - **Graceful Shutdown**: Proper signal handling for production deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe with catalog sizes
//! - `GET /metrics` - Prometheus metrics
//! - `POST /api/v1/search` - Search with a JSON body
//! - `GET /api/v1/search?procedure=&zipCode=&insurance=&plan=&sort=` - Search by query string
//! - `GET /api/v1/procedures?q=&limit=` - Procedure suggestions
//! - `GET /api/v1/procedures/{code}` - Procedure by CPT code
//! - `GET /api/v1/hospitals/{id}` - Hospital by id
//! - `GET /api/v1/insurance` - Providers and plan types

pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
