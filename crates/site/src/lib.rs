//! Freehold website service
//!
//! Wires the infrastructure adapters into the core services. The binary in
//! `main.rs` serves the site or runs one-off order and contact tasks.

pub mod cli;
pub mod context;

pub use context::AppContext;
