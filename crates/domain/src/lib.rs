//! # Freehold Domain
//!
//! Business domain types and models for the Freehold website.
//!
//! This crate contains:
//! - Contact enquiry and commercial order types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Fixed page copy and markers
//! - Pure text helpers (slugs, HTML escaping, currency formatting)
//!
//! ## Architecture
//! - No dependencies on other Freehold crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
