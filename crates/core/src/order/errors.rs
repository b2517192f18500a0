//! Order generation and export errors

use freehold_domain::constants::{ORDER_NOT_GENERATED_MESSAGE, ORDER_WINDOW_BLOCKED_MESSAGE};
use freehold_domain::{FreeholdError, OrderField};
use thiserror::Error;

/// Generation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("missing required order fields: {}", labels(.0))]
    MissingFields(Vec<OrderField>),
}

impl OrderError {
    /// Status text for the page
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingFields(fields) => {
                format!("Please complete the required order fields: {}.", labels(fields))
            }
        }
    }
}

fn labels(fields: &[OrderField]) -> String {
    fields.iter().map(|f| f.label()).collect::<Vec<_>>().join(", ")
}

/// Export failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// Export was requested before any summary was generated
    #[error("no order summary has been generated")]
    NotGenerated,

    /// The print window could not be opened
    #[error("print window unavailable: {0}")]
    WindowBlocked(String),

    /// The file could not be handed to the user
    #[error("download failed: {0}")]
    Delivery(String),
}

impl ExportError {
    /// Status text for the page
    pub fn user_message(&self) -> String {
        match self {
            Self::NotGenerated => ORDER_NOT_GENERATED_MESSAGE.to_string(),
            Self::WindowBlocked(_) => ORDER_WINDOW_BLOCKED_MESSAGE.to_string(),
            Self::Delivery(reason) => format!("The order summary could not be saved: {reason}"),
        }
    }
}

impl From<OrderError> for FreeholdError {
    fn from(err: OrderError) -> Self {
        Self::InvalidInput(err.user_message())
    }
}

impl From<ExportError> for FreeholdError {
    fn from(err: ExportError) -> Self {
        Self::Export(err.to_string())
    }
}
