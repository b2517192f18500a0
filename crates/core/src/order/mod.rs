//! Commercial order generation and export

pub mod errors;
pub mod export;
pub mod generator;
pub mod ports;
pub mod render;
pub mod state;

pub use errors::{ExportError, OrderError};
pub use export::{download_text, print_document, DownloadReceipt};
pub use generator::OrderGenerator;
pub use state::OrderState;
