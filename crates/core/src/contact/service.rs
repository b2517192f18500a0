//! Contact submission service - core business logic

use std::sync::Arc;

use freehold_domain::constants::{
    CONTACT_PREFERRED_METHOD, CONTACT_SENDING_MESSAGE, CONTACT_SOURCE, CONTACT_SUCCESS_MESSAGE,
    CONTACT_VALIDATION_MESSAGE,
};
use freehold_domain::{ContactConfig, ContactEnquiry, ContactField, ContactPayload, FormStatus};
use serde::Serialize;
use tracing::{info, warn};

use super::ports::{ContactFormView, ContactGateway};

/// Result of one press of the submit control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// Required fields were blank; nothing was sent
    Invalid { missing: Vec<ContactField> },
    /// The CRM accepted the enquiry and the form was cleared
    Sent,
    /// Sending failed; the form keeps its values
    Failed { message: String },
}

/// Contact submission service
pub struct ContactSubmitter {
    gateway: Arc<dyn ContactGateway>,
    source: String,
    preferred_contact_method: String,
}

impl ContactSubmitter {
    /// Create a submitter using the default source tag and contact method
    pub fn new(gateway: Arc<dyn ContactGateway>) -> Self {
        Self {
            gateway,
            source: CONTACT_SOURCE.to_string(),
            preferred_contact_method: CONTACT_PREFERRED_METHOD.to_string(),
        }
    }

    pub fn from_config(gateway: Arc<dyn ContactGateway>, config: &ContactConfig) -> Self {
        Self {
            gateway,
            source: config.source.clone(),
            preferred_contact_method: config.preferred_contact_method.clone(),
        }
    }

    /// Validate the form, send it once, and report the result on the page.
    ///
    /// The submit control stays disabled while the request is in flight and
    /// is enabled again whatever the outcome.
    pub async fn submit<V>(&self, view: &mut V) -> SubmissionOutcome
    where
        V: ContactFormView + ?Sized,
    {
        let enquiry = match ContactEnquiry::from_form(&view.values()) {
            Ok(enquiry) => enquiry,
            Err(missing) => {
                view.show_status(FormStatus::error(CONTACT_VALIDATION_MESSAGE));
                return SubmissionOutcome::Invalid { missing };
            }
        };

        let payload =
            ContactPayload::from_enquiry(&enquiry, &self.source, &self.preferred_contact_method);

        view.set_submit_enabled(false);
        view.show_status(FormStatus::pending(CONTACT_SENDING_MESSAGE));

        let outcome = match self.gateway.submit(&payload).await {
            Ok(()) => {
                info!(source = %self.source, "contact enquiry sent");
                view.show_status(FormStatus::success(CONTACT_SUCCESS_MESSAGE));
                view.reset();
                SubmissionOutcome::Sent
            }
            Err(err) => {
                warn!(error = %err, "contact enquiry failed");
                let message = err.user_message();
                view.show_status(FormStatus::error(message.clone()));
                SubmissionOutcome::Failed { message }
            }
        };

        view.set_submit_enabled(true);
        outcome
    }
}
