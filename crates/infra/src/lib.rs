//! # Freehold Infrastructure
//!
//! Infrastructure implementations of core ports and the website service.
//!
//! This crate contains:
//! - The reqwest contact gateway and shared HTTP client
//! - Order export adapters (file downloads, print spool, clock, suffixes)
//! - Configuration loading and logging setup
//! - The axum website service with the CRM backend proxy
//!
//! ## Architecture
//! - Implements traits defined in `freehold-core`
//! - Contains all "impure" code (network, filesystem, processes)

pub mod config;
pub mod contact;
pub mod errors;
pub mod http;
pub mod observability;
pub mod order;
pub mod server;

// Re-export commonly used items
pub use contact::HttpContactGateway;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use order::{FileDownloadSink, PrintSpoolExporter, RandomSuffix, SystemClock};
pub use server::{router, serve, SiteState};
