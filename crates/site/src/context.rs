//! Application context - dependency injection container

use std::sync::Arc;

use freehold_core::{ContactSubmitter, OrderGenerator};
use freehold_domain::{Result, SiteConfig};
use freehold_infra::{
    FileDownloadSink, HttpClient, HttpContactGateway, PrintSpoolExporter, RandomSuffix, SiteState,
    SystemClock,
};

/// Application context - holds all services and adapters
pub struct AppContext {
    pub config: Arc<SiteConfig>,
    pub site: SiteState,
    pub contact: ContactSubmitter,
    pub orders: OrderGenerator,
    pub downloads: FileDownloadSink,
    pub printer: PrintSpoolExporter,
}

impl AppContext {
    /// Build every service from configuration. No I/O happens until a
    /// service is used.
    pub fn new(config: SiteConfig) -> Result<Self> {
        let gateway = HttpContactGateway::from_config(HttpClient::new()?, &config.contact)?;
        let contact = ContactSubmitter::from_config(Arc::new(gateway), &config.contact);

        let orders = OrderGenerator::new(Arc::new(SystemClock), Arc::new(RandomSuffix))
            .with_config(config.order.clone());
        let downloads = FileDownloadSink::new(&config.order.download_dir);
        let printer = PrintSpoolExporter::new(&config.order.print_dir)
            .with_command(config.order.print_command.clone());

        let site = SiteState::from_config(config.clone())?;

        Ok(Self { config: Arc::new(config), site, contact, orders, downloads, printer })
    }
}
