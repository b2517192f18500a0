//! Contact submission errors

use freehold_domain::constants::CONTACT_FAILURE_MESSAGE;
use freehold_domain::FreeholdError;
use thiserror::Error;

/// Failure reported by a [`super::ports::ContactGateway`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// The endpoint answered with a non-success status
    #[error("contact endpoint rejected the enquiry (status {status})")]
    Rejected {
        status: u16,
        /// `detail` from the JSON error body, when the body had one
        detail: Option<String>,
    },

    /// The request never produced a response
    #[error("contact request failed: {0}")]
    Transport(String),
}

impl ContactError {
    /// Status text for the page: the server's detail when present, else the
    /// generic failure copy.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { detail: Some(detail), .. } if !detail.trim().is_empty() => {
                detail.trim().to_string()
            }
            _ => CONTACT_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl From<ContactError> for FreeholdError {
    fn from(err: ContactError) -> Self {
        Self::Network(err.to_string())
    }
}
