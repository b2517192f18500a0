//! Contact enquiry submission

pub mod errors;
pub mod ports;
pub mod service;

pub use errors::ContactError;
pub use service::{ContactSubmitter, SubmissionOutcome};
