//! Shared handler state

use std::sync::Arc;
use std::time::Duration;

use freehold_core::OrderGenerator;
use freehold_domain::{Result, SiteConfig};

use crate::http::HttpClient;
use crate::order::{RandomSuffix, SystemClock};

/// Immutable state cloned into every handler
#[derive(Clone)]
pub struct SiteState {
    pub config: Arc<SiteConfig>,
    /// Client for the `/api/` proxy, bounded by the backend timeout
    pub backend: HttpClient,
    pub generator: Arc<OrderGenerator>,
}

impl SiteState {
    /// Build the state with the system clock and random reference suffixes.
    pub fn from_config(config: SiteConfig) -> Result<Self> {
        let generator =
            OrderGenerator::new(Arc::new(SystemClock), Arc::new(RandomSuffix))
                .with_config(config.order.clone());
        Self::with_generator(config, generator)
    }

    pub fn with_generator(config: SiteConfig, generator: OrderGenerator) -> Result<Self> {
        let backend = HttpClient::builder()
            .timeout(Duration::from_secs(config.backend.proxy_timeout_secs))
            .build()?;
        Ok(Self { config: Arc::new(config), backend, generator: Arc::new(generator) })
    }

    /// Backend base URL without a trailing slash
    pub fn backend_base_url(&self) -> &str {
        self.config.backend.base_url.trim_end_matches('/')
    }
}
