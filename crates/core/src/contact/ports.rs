//! Port interfaces for contact submission
//!
//! These traits define the boundaries between the submission flow, the page
//! that hosts the form, and the HTTP call to the CRM.

use async_trait::async_trait;
use freehold_domain::{ContactForm, ContactPayload, FormStatus};

use super::errors::ContactError;

/// Trait for delivering an enquiry to the CRM endpoint
#[async_trait]
pub trait ContactGateway: Send + Sync {
    /// Send the payload once. Any non-success response is an error.
    async fn submit(&self, payload: &ContactPayload) -> Result<(), ContactError>;
}

/// Trait for the page hosting the contact form
pub trait ContactFormView {
    /// Current field values
    fn values(&self) -> ContactForm;

    /// Replace the status line under the form
    fn show_status(&mut self, status: FormStatus);

    /// Enable or disable the submit control
    fn set_submit_enabled(&mut self, enabled: bool);

    /// Clear every field
    fn reset(&mut self);
}
